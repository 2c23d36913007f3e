//! Structured style values
//!
//! Validated forms of the raw value strings the parser stores. Only a
//! small set of value types is supported so far.

/// A validated style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A resolved color
    Color(Color),
    /// A length with its unit
    Length(f32, LengthUnit),
    /// A percentage
    Percentage(f32),
    /// A keyword from a property's allowed set
    Keyword(String),
}

/// Length units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// Pixels
    Px,
    /// Em units (relative to font-size)
    Em,
    /// Rem units (relative to root font-size)
    Rem,
    /// Viewport width percentage
    Vw,
    /// Viewport height percentage
    Vh,
}

impl LengthUnit {
    /// Parse a unit string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "px" => Some(LengthUnit::Px),
            "em" => Some(LengthUnit::Em),
            "rem" => Some(LengthUnit::Rem),
            "vw" => Some(LengthUnit::Vw),
            "vh" => Some(LengthUnit::Vh),
            _ => None,
        }
    }
}

/// Color value (RGBA)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string (without #)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        // Multi-byte input can share a byte length with a valid hex
        // form; reject it before slicing.
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Color::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Get a named color
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Some(Color::rgb(0, 0, 0)),
            "white" => Some(Color::rgb(255, 255, 255)),
            "red" => Some(Color::rgb(255, 0, 0)),
            "green" => Some(Color::rgb(0, 128, 0)),
            "blue" => Some(Color::rgb(0, 0, 255)),
            "yellow" => Some(Color::rgb(255, 255, 0)),
            "cyan" | "aqua" => Some(Color::rgb(0, 255, 255)),
            "magenta" | "fuchsia" => Some(Color::rgb(255, 0, 255)),
            "gray" | "grey" => Some(Color::rgb(128, 128, 128)),
            "silver" => Some(Color::rgb(192, 192, 192)),
            "maroon" => Some(Color::rgb(128, 0, 0)),
            "olive" => Some(Color::rgb(128, 128, 0)),
            "lime" => Some(Color::rgb(0, 255, 0)),
            "navy" => Some(Color::rgb(0, 0, 128)),
            "teal" => Some(Color::rgb(0, 128, 128)),
            "purple" => Some(Color::rgb(128, 0, 128)),
            "orange" => Some(Color::rgb(255, 165, 0)),
            "transparent" => Some(Color::rgba(0, 0, 0, 0)),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::rgb(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_3() {
        let color = Color::from_hex("fff").unwrap();
        assert_eq!(color, Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_hex_color_6() {
        let color = Color::from_hex("ff0000").unwrap();
        assert_eq!(color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_hex_color_invalid() {
        assert!(Color::from_hex("ff00").is_none());
        assert!(Color::from_hex("zzz").is_none());
    }

    #[test]
    fn test_hex_color_multibyte() {
        // "éa" and "éaéa" are 3 and 6 bytes; neither is a color and
        // neither may panic.
        assert!(Color::from_hex("éa").is_none());
        assert!(Color::from_hex("éaéa").is_none());
    }

    #[test]
    fn test_named_color() {
        assert_eq!(Color::from_name("red"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_name("RED"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_name("transparent"), Some(Color::rgba(0, 0, 0, 0)));
        assert_eq!(Color::from_name("blurple"), None);
    }

    #[test]
    fn test_length_unit_parse() {
        assert_eq!(LengthUnit::from_str("px"), Some(LengthUnit::Px));
        assert_eq!(LengthUnit::from_str("EM"), Some(LengthUnit::Em));
        assert_eq!(LengthUnit::from_str("rem"), Some(LengthUnit::Rem));
        assert_eq!(LengthUnit::from_str("parsec"), None);
    }
}
