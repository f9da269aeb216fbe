//! Subject extraction for fallback titles.

use once_cell::sync::Lazy;
use regex::Regex;

/// Code-related nouns, scanned in order; the first one present in the
/// description wins.
static CODE_NOUNS: &[&str] = &[
    "function",
    "method",
    "class",
    "variable",
    "component",
    "module",
    "file",
    "code",
    "logic",
    "implementation",
    "feature",
    "api",
    "endpoint",
    "route",
    "model",
    "controller",
    "service",
];

static NOUN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    CODE_NOUNS
        .iter()
        .map(|noun| Regex::new(&format!(r"(?i)(\w+\s+)?{noun}(\s+\w+)?")).unwrap())
        .collect()
});

/// Pull the main noun phrase out of a description: the first known code
/// noun plus one adjacent word on each side when present. Falls back to the
/// first three words.
pub fn extract_subject(description: &str) -> String {
    let lower = description.to_lowercase();

    for (noun, pattern) in CODE_NOUNS.iter().zip(NOUN_PATTERNS.iter()) {
        if lower.contains(noun) {
            if let Some(found) = pattern.find(description) {
                return found.as_str().trim().to_string();
            }
        }
    }

    description
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_noun_with_adjacent_words() {
        assert_eq!(
            extract_subject("the login function returns null"),
            "login function returns"
        );
    }

    #[test]
    fn noun_at_start_keeps_following_word() {
        assert_eq!(extract_subject("function body is empty"), "function body");
    }

    #[test]
    fn scan_order_prefers_earlier_nouns() {
        // "function" precedes "service" in the noun list.
        assert_eq!(
            extract_subject("payment service helper function"),
            "helper function"
        );
    }

    #[test]
    fn falls_back_to_first_three_words() {
        assert_eq!(
            extract_subject("something rather vague happening here"),
            "something rather vague"
        );
    }

    #[test]
    fn short_descriptions_fall_back_whole() {
        assert_eq!(extract_subject("needs work"), "needs work");
        assert_eq!(extract_subject(""), "");
    }
}
