//! Per-property validator registry
//!
//! Maps property names to validator functions that turn the raw value
//! string from a parsed [`StyleMap`] into a [`StyleValue`]. The registry
//! is an explicit value passed into lookups, not process-wide state, and
//! callers may register their own handlers.

use rustc_hash::FxHashMap;
use thiserror::Error;

use nissaba_css::StyleMap;

use crate::value::{Color, LengthUnit, StyleValue};

/// Errors from a single style lookup. Local to that lookup; never fatal
/// to a parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StyleError {
    /// No validator registered for this property name.
    #[error("unknown style '{0}'")]
    UnknownStyle(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid length '{0}'")]
    InvalidLength(String),

    #[error("invalid keyword '{0}'")]
    InvalidKeyword(String),
}

/// A per-property validator.
pub type StyleFn = fn(&str) -> Result<StyleValue, StyleError>;

/// Registry of property validators.
#[derive(Debug, Default, Clone)]
pub struct StyleRegistry {
    handlers: FxHashMap<String, StyleFn>,
}

impl StyleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with validators for the supported properties. Most
    /// properties are not covered yet.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for name in ["color", "background-color", "border-color"] {
            registry.register(name, parse_color);
        }
        for name in ["width", "height", "margin", "padding", "font-size"] {
            registry.register(name, parse_length);
        }
        registry.register("display", parse_display);
        registry.register("position", parse_position);
        registry
    }

    /// Register (or replace) the validator for a property name.
    pub fn register(&mut self, name: impl Into<String>, handler: StyleFn) {
        self.handlers.insert(name.into(), handler);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Validate the value a rule declares for `name`.
    ///
    /// Dispatches to the registered validator, handing it the raw value
    /// text (the empty string when the rule does not declare the
    /// property). Fails with [`StyleError::UnknownStyle`] when no
    /// validator is registered.
    pub fn lookup(&self, name: &str, styles: &StyleMap) -> Result<StyleValue, StyleError> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| StyleError::UnknownStyle(name.to_string()))?;
        let raw = styles.get(name).map(String::as_str).unwrap_or("");
        log::trace!("validating {}: {:?}", name, raw);
        handler(raw)
    }
}

/// Hex (`#rgb`, `#rrggbb`) or named color.
pub fn parse_color(raw: &str) -> Result<StyleValue, StyleError> {
    let raw = raw.trim();
    let color = if let Some(hex) = raw.strip_prefix('#') {
        Color::from_hex(hex)
    } else {
        Color::from_name(raw)
    };
    color
        .map(StyleValue::Color)
        .ok_or_else(|| StyleError::InvalidColor(raw.to_string()))
}

/// A number with a unit (`10px`, `1.5em`), a percentage, or a bare `0`.
pub fn parse_length(raw: &str) -> Result<StyleValue, StyleError> {
    let raw = raw.trim();
    let invalid = || StyleError::InvalidLength(raw.to_string());

    if let Some(number) = raw.strip_suffix('%') {
        let value: f32 = number.trim().parse().map_err(|_| invalid())?;
        return Ok(StyleValue::Percentage(value));
    }

    let unit_at = raw
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(unit_at);
    let value: f32 = number.trim().parse().map_err(|_| invalid())?;

    if unit.is_empty() {
        // Only zero may omit its unit.
        if value == 0.0 {
            return Ok(StyleValue::Length(0.0, LengthUnit::Px));
        }
        return Err(invalid());
    }

    LengthUnit::from_str(unit)
        .map(|u| StyleValue::Length(value, u))
        .ok_or_else(invalid)
}

fn keyword_in(raw: &str, allowed: &[&str]) -> Result<StyleValue, StyleError> {
    let raw = raw.trim().to_ascii_lowercase();
    if allowed.contains(&raw.as_str()) {
        Ok(StyleValue::Keyword(raw))
    } else {
        Err(StyleError::InvalidKeyword(raw))
    }
}

fn parse_display(raw: &str) -> Result<StyleValue, StyleError> {
    keyword_in(raw, &["block", "inline", "inline-block", "none", "flex"])
}

fn parse_position(raw: &str) -> Result<StyleValue, StyleError> {
    keyword_in(raw, &["static", "relative", "absolute", "fixed", "sticky"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nissaba_css::Stylesheet;

    fn styles(input: &str) -> StyleMap {
        let css = Stylesheet::parse(input).unwrap();
        css.rules.into_values().next().unwrap()
    }

    #[test]
    fn test_lookup_color() {
        let registry = StyleRegistry::with_defaults();
        let styles = styles("a { color: #ff0000; }");
        let value = registry.lookup("color", &styles).unwrap();
        assert_eq!(value, StyleValue::Color(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_lookup_named_color() {
        let registry = StyleRegistry::with_defaults();
        let styles = styles("a { background-color: teal; }");
        let value = registry.lookup("background-color", &styles).unwrap();
        assert_eq!(value, StyleValue::Color(Color::rgb(0, 128, 128)));
    }

    #[test]
    fn test_lookup_length() {
        let registry = StyleRegistry::with_defaults();
        let styles = styles("a { width: 10px; }");
        let value = registry.lookup("width", &styles).unwrap();
        assert_eq!(value, StyleValue::Length(10.0, LengthUnit::Px));
    }

    #[test]
    fn test_lookup_unknown_style() {
        let registry = StyleRegistry::with_defaults();
        let styles = styles("a { zoom: 2; }");
        let err = registry.lookup("zoom", &styles).unwrap_err();
        assert_eq!(err, StyleError::UnknownStyle("zoom".to_string()));
    }

    #[test]
    fn test_lookup_missing_property_hits_validator() {
        // The raw value defaults to "" when the rule lacks the property,
        // so the validator decides what that means.
        let registry = StyleRegistry::with_defaults();
        let styles = styles("a { width: 10px; }");
        let err = registry.lookup("color", &styles).unwrap_err();
        assert_eq!(err, StyleError::InvalidColor(String::new()));
    }

    #[test]
    fn test_lookup_multibyte_color_is_an_error() {
        // A multi-byte sequence after `#` must come back as an invalid
        // color, never a panic out of the hex slicing.
        let registry = StyleRegistry::with_defaults();
        let styles = styles("a { color: #éa; }");
        let err = registry.lookup("color", &styles).unwrap_err();
        assert_eq!(err, StyleError::InvalidColor("#éa".to_string()));
    }

    #[test]
    fn test_register_custom_handler() {
        let mut registry = StyleRegistry::new();
        registry.register("cursor", |raw| {
            Ok(StyleValue::Keyword(raw.trim().to_string()))
        });
        assert!(registry.contains("cursor"));
        let styles = styles("a { cursor: pointer; }");
        let value = registry.lookup("cursor", &styles).unwrap();
        assert_eq!(value, StyleValue::Keyword("pointer".to_string()));
    }

    #[test]
    fn test_parse_length_forms() {
        assert_eq!(
            parse_length("1.5em").unwrap(),
            StyleValue::Length(1.5, LengthUnit::Em)
        );
        assert_eq!(parse_length("50%").unwrap(), StyleValue::Percentage(50.0));
        assert_eq!(
            parse_length("0").unwrap(),
            StyleValue::Length(0.0, LengthUnit::Px)
        );
        assert!(parse_length("10").is_err());
        assert!(parse_length("10pc").is_err());
        assert!(parse_length("wide").is_err());
    }

    #[test]
    fn test_keyword_properties() {
        let registry = StyleRegistry::with_defaults();
        let display_styles = styles("a { display: none; }");
        assert_eq!(
            registry.lookup("display", &display_styles).unwrap(),
            StyleValue::Keyword("none".to_string())
        );

        let position_styles = styles("a { position: everywhere; }");
        assert_eq!(
            registry.lookup("position", &position_styles).unwrap_err(),
            StyleError::InvalidKeyword("everywhere".to_string())
        );
    }
}
