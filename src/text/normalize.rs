// Token normalization: lower-case, drop everything that is neither a word
// character nor whitespace, split on whitespace.

use std::sync::LazyLock;

use regex::Regex;

// Unicode-aware: `\w` covers letters, marks, digits and the underscore.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Lower-case `text` and strip every character that is not a word character
/// or whitespace. Whitespace is kept as-is so sentence layout survives.
pub fn normalize(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Normalize `text` and split it into tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(normalize("Hello, World! It's 9am."), "hello world its 9am");
    }

    #[test]
    fn keeps_underscores_and_non_ascii_letters() {
        assert_eq!(normalize("snake_case Café."), "snake_case café");
        assert_eq!(normalize("Привет, мир!"), "привет мир");
    }

    #[test]
    fn keeps_whitespace_layout() {
        assert_eq!(normalize("a,\tb.\n"), "a\tb\n");
    }

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        assert_eq!(
            tokenize("  One\ttwo\n\nTHREE -- four  "),
            vec!["one", "two", "three", "four"]
        );
    }

    #[test]
    fn punctuation_only_yields_no_tokens() {
        assert!(tokenize("... !!! ???").is_empty());
    }
}
