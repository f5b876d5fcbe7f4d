//! Word tokenization over non-word boundaries.

use regex::Regex;
use std::sync::OnceLock;

fn non_word_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").expect("static regex is valid"))
}

/// Split `content` into word tokens on runs of non-word characters.
/// Empty tokens (leading/trailing separators) are dropped. Case is
/// preserved; the original distinguishes `"Hello"` from `"hello"`.
pub fn tokenize(content: &str) -> Vec<String> {
    non_word_boundary()
        .split(content)
        .filter(|tok| !tok.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        let toks = tokenize("Hello, world! This-is a_test.");
        assert_eq!(toks, vec!["Hello", "world", "This", "is", "a_test"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ...  ").is_empty());
    }

    #[test]
    fn underscores_are_word_characters() {
        assert_eq!(tokenize("foo_bar baz"), vec!["foo_bar", "baz"]);
    }

    #[test]
    fn preserves_case() {
        assert_eq!(tokenize("ABC Def"), vec!["ABC", "Def"]);
    }
}
