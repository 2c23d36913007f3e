//! CSS Block Parser
//!
//! A single forward pass over the token sequence, driven by an explicit
//! state machine, producing a mapping from selector to declared styles.
//! Blocks that re-declare a selector are merged; the current block's
//! declarations win and earlier state only fills gaps.

use std::borrow::Borrow;
use std::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{ParseError, SyntaxErrorKind};
use crate::tokenizer::{tokenize, Token, TokenCategory};

/// The declared styles of one rule: property name to raw value text.
pub type StyleMap = FxHashMap<String, String>;

/// What a selector refers to, derived from its leading character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `.name`
    Class,
    /// `#name`
    Id,
    /// Anything else, e.g. `div`
    Tag,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Id => "id",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CSS rule selector, e.g. `.foo`, `#bar` or `div`.
///
/// A plain value type; equality is string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule(String);

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the selector as a class, id or tag rule.
    pub fn kind(&self) -> RuleKind {
        if self.0.starts_with('.') {
            RuleKind::Class
        } else if self.0.starts_with('#') {
            RuleKind::Id
        } else {
            RuleKind::Tag
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Rule {
    fn from(selector: &str) -> Self {
        Self(selector.to_string())
    }
}

// Lets the rule map be queried with a plain `&str`.
impl Borrow<str> for Rule {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A parsed stylesheet: every rule that appeared in at least one block,
/// mapped to its merged declarations.
///
/// A plain value; callers may mutate it freely.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stylesheet {
    pub rules: FxHashMap<Rule, StyleMap>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip comments, tokenize and parse a complete stylesheet.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let stripped = crate::extract::strip_comments(input);
        let tokens = tokenize(&stripped);
        log::debug!("parsing {} tokens", tokens.len());
        parse_tokens(&tokens)
    }

    /// Look up the styles declared for a selector.
    pub fn get(&self, selector: &str) -> Option<&StyleMap> {
        self.rules.get(selector)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All declarations across all rules as `"property: value"` strings,
    /// in no particular order. For reporting and debugging.
    pub fn flatten(&self) -> Vec<String> {
        self.rules
            .values()
            .flat_map(|styles| styles.iter())
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect()
    }
}

/// Parser states. Each state encodes which role the next `Value` token
/// plays, so the transition table never has to inspect raw previous-token
/// categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Stream start or after a closed block.
    AwaitingSelector,
    /// Last token was a bare value; the registers disambiguate whether it
    /// was a selector fragment, a property name or a property value.
    ValueSeen,
    /// A `.` or `#` awaits the name it prefixes.
    PrefixSeen,
    /// After `{` or `;`: the next value is a property name.
    AwaitingProperty,
    /// After `:`: the next value is a property value.
    AwaitingValue,
}

/// Parse a token sequence into a [`Stylesheet`].
///
/// Single forward pass, no backtracking. The first syntax error aborts
/// the pass; the error carries the offending token's line and whatever
/// rules were committed before it.
pub fn parse_tokens(tokens: &[Token]) -> Result<Stylesheet, ParseError> {
    let mut css = Stylesheet::new();

    // Registers for the block being assembled. The selector list is
    // deliberately not reset when a block closes: a value token after a
    // `}` continues the accumulated list.
    let mut rule: SmallVec<[String; 4]> = SmallVec::new();
    let mut styles = StyleMap::default();
    let mut style = String::new();
    let mut value = String::new();
    let mut prefix = String::new();
    let mut is_block = false;

    let mut state = State::AwaitingSelector;

    for token in tokens {
        match token.category {
            TokenCategory::Value => {
                match state {
                    State::AwaitingSelector | State::ValueSeen => rule.push(token.text.clone()),
                    State::PrefixSeen => rule.push(format!("{}{}", prefix, token.text)),
                    State::AwaitingProperty => style = token.text.clone(),
                    State::AwaitingValue => value = token.text.clone(),
                }
                state = State::ValueSeen;
            }
            TokenCategory::SelectorPrefix => {
                prefix = token.text.clone();
                state = State::PrefixSeen;
            }
            TokenCategory::StyleSeparator => {
                state = State::AwaitingValue;
            }
            TokenCategory::BlockStart => {
                if state != State::ValueSeen {
                    return Err(ParseError::new(
                        SyntaxErrorKind::MissingRuleIdentifier,
                        token.line,
                        css,
                    ));
                }
                is_block = true;
                state = State::AwaitingProperty;
            }
            TokenCategory::StatementEnd => {
                if state != State::ValueSeen || style.is_empty() || value.is_empty() {
                    return Err(ParseError::new(SyntaxErrorKind::ExpectedStyle, token.line, css));
                }
                styles.insert(style.clone(), value.clone());
                state = State::AwaitingProperty;
            }
            TokenCategory::BlockEnd => {
                if !is_block {
                    return Err(ParseError::new(
                        SyntaxErrorKind::UnexpectedBlockEnd,
                        token.line,
                        css,
                    ));
                }
                for selector in &rule {
                    // Merge fills gaps from the rule's earlier entry; the
                    // current block's declarations always win.
                    if let Some(existing) = css.rules.get(selector.as_str()) {
                        for (name, val) in existing {
                            if !styles.contains_key(name) {
                                styles.insert(name.clone(), val.clone());
                            }
                        }
                    }
                    css.rules.insert(Rule::new(selector.clone()), styles.clone());
                }
                log::trace!("closed block for {} selector(s)", rule.len());
                styles.clear();
                style.clear();
                value.clear();
                is_block = false;
                state = State::AwaitingSelector;
            }
        }
    }

    Ok(css)
}
