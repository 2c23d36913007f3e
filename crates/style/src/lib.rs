//! Nissaba Style Lookup
//!
//! Turns raw property values from a parsed [`nissaba_css::Stylesheet`]
//! into validated, structured style values through a per-property
//! validator registry.
//!
//! ```
//! use nissaba_css::Stylesheet;
//! use nissaba_style::{StyleRegistry, StyleValue};
//!
//! let css = Stylesheet::parse("p { display: block; }").unwrap();
//! let registry = StyleRegistry::with_defaults();
//! let value = registry.lookup("display", css.get("p").unwrap()).unwrap();
//! assert_eq!(value, StyleValue::Keyword("block".to_string()));
//! ```

pub mod registry;
pub mod value;

pub use registry::{parse_color, parse_length, StyleError, StyleFn, StyleRegistry};
pub use value::{Color, LengthUnit, StyleValue};
