//! Nissaba CSS Parser
//!
//! A CSS-subset parser: tokenizer, block parser and extraction helpers.
//! Raw stylesheet text becomes a [`Stylesheet`] mapping each selector to
//! its declared property/value pairs, with duplicate selectors merged and
//! malformed syntax rejected with line-accurate errors.
//!
//! ```
//! use nissaba_css::Stylesheet;
//!
//! let css = Stylesheet::parse(".box { border: 1px solid black; }").unwrap();
//! assert_eq!(css.get(".box").unwrap()["border"], "1px solid black");
//! ```
//!
//! The parser covers plain `selector { property: value; }` blocks only.
//! At-rules, media queries, combinators and comma-separated selector
//! lists are out of scope, as are cascade and specificity resolution.

pub mod error;
pub mod extract;
pub mod parser;
pub mod tokenizer;

pub use error::{ParseError, SyntaxErrorKind};
pub use extract::{block_count, comments, licenses, names, rules, strip_comments};
pub use parser::{parse_tokens, Rule, RuleKind, StyleMap, Stylesheet};
pub use tokenizer::{tokenize, Token, TokenCategory, Tokenizer};
