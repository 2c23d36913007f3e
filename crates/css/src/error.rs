//! CSS parsing error types

use thiserror::Error;

use crate::parser::Stylesheet;

/// The kinds of syntax error the block parser can report.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A value token appeared where no predecessor state permits one.
    #[error("invalid syntax")]
    InvalidSyntax,

    /// A `{` with no completed selector in front of it.
    #[error("block is missing rule identifier")]
    MissingRuleIdentifier,

    /// A `;` before both a property name and a value were seen.
    #[error("expected style before semicolon")]
    ExpectedStyle,

    /// A `}` while no block was open.
    #[error("rule block ends without a beginning")]
    UnexpectedBlockEnd,
}

/// A fatal syntax error, reported with the 1-based source line of the
/// offending token.
///
/// The parser aborts on the first error; whatever rules were committed
/// before the failure point are kept in [`ParseError::partial`] for
/// diagnostics. A returned error always means "stylesheet not fully
/// parsed" and the partial map must not be used for correctness-sensitive
/// work.
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// 1-based source line of the offending token.
    pub line: usize,
    /// Rules committed before the failure point.
    pub partial: Stylesheet,
}

impl ParseError {
    pub(crate) fn new(kind: SyntaxErrorKind, line: usize, partial: Stylesheet) -> Self {
        Self { kind, line, partial }
    }
}
