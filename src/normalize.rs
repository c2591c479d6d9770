//! Text normalization for keyword matching.
//!
//! Prepares raw extracted text so the knowledge base matcher can test
//! substring containment without being tripped up by punctuation, casing
//! or irregular whitespace.

use regex::Regex;

/// Normalize raw text for matching.
///
/// Every character outside letters (accented included), digits and
/// whitespace becomes a space; whitespace runs collapse to a single
/// space; the result is trimmed and lowercased. Total function: never
/// fails, deterministic for a given input.
pub fn normalize(text: &str) -> String {
    // \p{L} keeps accented Portuguese vowels/consonants intact
    let strip = Regex::new(r"[^\p{L}\p{N}\s]").expect("Invalid regex pattern");

    let stripped = strip.replace_all(text, " ");
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("necrose, apoptose!"), "necrose apoptose");
    }

    #[test]
    fn test_normalize_preserves_accents() {
        assert_eq!(normalize("Hipóxia: Lesão Celular"), "hipóxia lesão celular");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a   b\n\tc  "), "a b c");
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("NECROSE Coagulativa"), "necrose coagulativa");
    }

    #[test]
    fn test_normalize_keeps_digits() {
        assert_eq!(normalize("paciente de 45 anos"), "paciente de 45 anos");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!...;"), "");
    }
}
