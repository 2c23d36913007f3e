//! CSS Tokenizer
//!
//! Splits raw stylesheet text into an ordered sequence of classified
//! tokens with 1-based source lines. Whitespace between tokens never
//! produces a token. Tokenization is context-sensitive in exactly one
//! way: right after a `:` the identifier-boundary rule relaxes so a
//! property value such as `1px solid black` comes out as a single token
//! with its internal spaces intact.

use std::iter::Peekable;
use std::str::Chars;

/// Coarse syntactic category of a token.
///
/// There is no category for property names or selector names; the block
/// parser infers the semantic role of a `Value` token from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// `{`
    BlockStart,
    /// `}`
    BlockEnd,
    /// `:`
    StyleSeparator,
    /// `;`
    StatementEnd,
    /// `.` or `#`, prefixed onto the following value by the parser
    SelectorPrefix,
    /// Anything else: identifiers, numbers, selector names, property names
    Value,
}

impl TokenCategory {
    /// Classify a token's literal text.
    ///
    /// Purely lexical: exact single-character matches for the structural
    /// punctuation and the two selector-prefix characters, `Value` for
    /// everything else. Never fails.
    pub fn classify(text: &str) -> Self {
        match text {
            "{" => Self::BlockStart,
            "}" => Self::BlockEnd,
            ":" => Self::StyleSeparator,
            ";" => Self::StatementEnd,
            "." | "#" => Self::SelectorPrefix,
            _ => Self::Value,
        }
    }
}

/// A lexical token. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The literal text of the token.
    pub text: String,
    /// Category derived from the text.
    pub category: TokenCategory,
    /// 1-based line of the token's first character.
    pub line: usize,
}

impl Token {
    fn new(text: String, line: usize) -> Self {
        let category = TokenCategory::classify(&text);
        Self { text, category, line }
    }
}

/// CSS tokenizer over a borrowed input string.
///
/// Restartable by recreation, not resumable. End of input is signalled by
/// `None` from [`Tokenizer::next_token`], never by an error. The
/// tokenizer has no notion of string literals, quoting, escaping, or
/// comments; strip comments first if the input may contain them (see
/// [`crate::extract::strip_comments`]).
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    // True right after a `:` token: the next identifier may contain
    // spaces and is terminated only by newline, tab, `:` or `;`.
    relaxed: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            relaxed: false,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Identifier under the ordinary boundary rule: terminates on
    /// whitespace, `.`, `#`, `:`, `;`, `{` or `}`, so selectors and
    /// property names never contain internal spaces.
    fn consume_ident(&mut self) -> String {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_whitespace() || matches!(c, '.' | '#' | ':' | ';' | '{' | '}') {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }

    /// Identifier under the relaxed rule in force after a `:`. Leading
    /// whitespace has already been skipped; internal spaces are kept.
    fn consume_relaxed_ident(&mut self) -> String {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if matches!(c, '\n' | '\t' | '\r' | ':' | ';') {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let c = *self.chars.peek()?;
        let line = self.line;

        let token = if self.relaxed && !matches!(c, ':' | ';') {
            Token::new(self.consume_relaxed_ident(), line)
        } else if matches!(c, '{' | '}' | ':' | ';' | '.' | '#') {
            self.advance();
            Token::new(c.to_string(), line)
        } else {
            Token::new(self.consume_ident(), line)
        };

        self.relaxed = token.category == TokenCategory::StyleSeparator;
        Some(token)
    }

    /// Tokenize all remaining input.
    pub fn tokenize_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

/// Tokenize a complete stylesheet string. Never fails; empty input
/// yields an empty sequence.
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).tokenize_all()
}
