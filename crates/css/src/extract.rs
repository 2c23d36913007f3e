//! Extraction utilities
//!
//! Read-only helpers over the raw text or the token sequence. None of
//! these fail; absence of matches yields an empty result.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::Rule;
use crate::tokenizer::{Token, TokenCategory};

static COMMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*[^*]*\*+([^/*][^*]*\*+)*/").expect("comment pattern")
});

static LICENSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*![^*]*\*+([^/*][^*]*\*+)*/").expect("license pattern")
});

/// All `/* ... */` comment spans in the raw text, in order.
pub fn comments(input: &str) -> Vec<String> {
    COMMENTS
        .find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// All `/*! ... */` license banners in the raw text, in order.
pub fn licenses(input: &str) -> Vec<String> {
    LICENSES
        .find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Remove every comment span, keeping the newlines each span contained
/// so line numbers in later diagnostics stay accurate.
///
/// The tokenizer itself has no comment handling; this is the mandatory
/// pre-pass applied by [`crate::Stylesheet::parse`].
pub fn strip_comments(input: &str) -> String {
    COMMENTS
        .replace_all(input, |caps: &regex::Captures<'_>| {
            caps[0].chars().filter(|&c| c == '\n').collect::<String>()
        })
        .into_owned()
}

/// All rules declared in the token sequence, one entry per block in
/// source order. Duplicates are preserved; this intentionally does not
/// deduplicate or merge.
pub fn rules(tokens: &[Token]) -> Vec<Rule> {
    let mut out = Vec::new();
    let mut fragments: Vec<String> = Vec::new();
    let mut prefix = String::new();
    let mut prev: Option<TokenCategory> = None;

    for token in tokens {
        match token.category {
            TokenCategory::Value => match prev {
                None | Some(TokenCategory::BlockEnd) | Some(TokenCategory::Value) => {
                    fragments.push(token.text.clone());
                }
                Some(TokenCategory::SelectorPrefix) => {
                    fragments.push(format!("{}{}", prefix, token.text));
                }
                _ => {}
            },
            TokenCategory::SelectorPrefix => {
                prefix = token.text.clone();
            }
            TokenCategory::BlockStart => {
                out.push(Rule::new(fragments.join(" ")));
                fragments.clear();
            }
            _ => {}
        }
        prev = Some(token.category);
    }

    out
}

/// Number of `{` tokens in the sequence.
pub fn block_count(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .filter(|t| t.category == TokenCategory::BlockStart)
        .count()
}

/// All class, id and tag identifiers in the token sequence, including
/// duplicates.
///
/// A `.`/`#` token joins with the token after it; a bare value right
/// after a `}` is reported as a tag identifier.
pub fn names(tokens: &[Token]) -> Vec<String> {
    let mut out = Vec::new();

    for pair in tokens.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);
        if prev.category == TokenCategory::SelectorPrefix {
            out.push(format!("{}{}", prev.text, current.text));
        } else if prev.category == TokenCategory::BlockEnd
            && current.category != TokenCategory::SelectorPrefix
        {
            out.push(current.text.clone());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_comments() {
        let found = comments("/* hello */ a{b:c;}");
        assert_eq!(found, ["/* hello */"]);
    }

    #[test]
    fn test_multiple_comments() {
        let found = comments("/* one */ a{} /* two\n   lines */");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], "/* one */");
        assert_eq!(found[1], "/* two\n   lines */");
    }

    #[test]
    fn test_no_comments() {
        assert!(comments("a { b: c; }").is_empty());
    }

    #[test]
    fn test_licenses() {
        let input = "/*! MIT License */\n/* not a license */";
        assert_eq!(licenses(input), ["/*! MIT License */"]);
        // The plain comment scraper picks up both.
        assert_eq!(comments(input).len(), 2);
    }

    #[test]
    fn test_strip_comments_preserves_lines() {
        let stripped = strip_comments("a {\n/* two\nlines */\nx: 1;\n}");
        assert_eq!(stripped, "a {\n\n\nx: 1;\n}");
    }

    #[test]
    fn test_rules_listing() {
        let tokens = tokenize(".foo { a: b; } #bar div { c: d; }");
        let found = rules(&tokens);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].as_str(), ".foo");
        assert_eq!(found[1].as_str(), "#bar div");
    }

    #[test]
    fn test_rules_listing_keeps_duplicates() {
        let tokens = tokenize("a { x: 1; } a { y: 2; }");
        let found = rules(&tokens);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], found[1]);
    }

    #[test]
    fn test_block_count() {
        assert_eq!(block_count(&tokenize("a{}b{}c{}")), 3);
        assert_eq!(block_count(&tokenize("")), 0);
    }

    #[test]
    fn test_names() {
        let tokens = tokenize(".foo { a: b; } div { c: d; } #foo { e: f; }");
        assert_eq!(names(&tokens), [".foo", "div", "#foo"]);
    }

    #[test]
    fn test_names_keeps_duplicates() {
        let tokens = tokenize(".x { } .x { }");
        assert_eq!(names(&tokens), [".x", ".x"]);
    }
}
