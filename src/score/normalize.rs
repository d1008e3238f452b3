//! Answer normalization applied before comparison.
//!
//! Matches what the web client expects: grading ignores surrounding
//! whitespace, letter case, and common punctuation, so "The cat sat."
//! and "the cat sat" grade as identical.

/// The punctuation characters stripped during normalization.
///
/// This exact set is part of the scoring contract — widening or narrowing
/// it changes reported accuracy. Quotes, square brackets, and question
/// marks are deliberately not in the set and survive normalization.
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Normalize an answer for comparison: trim, lowercase, strip the fixed
/// punctuation set. Lossy and one-directional; idempotent.
pub fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_lowercase() {
        assert_eq!(normalize("  Hello World  "), "hello world");
    }

    #[test]
    fn test_strips_punctuation_set() {
        assert_eq!(normalize("The cat sat."), "the cat sat");
        assert_eq!(normalize("a.b,c/d#e!f$g%h^i&j*k"), "abcdefghijk");
        assert_eq!(normalize(";:{}=-_`~()"), "");
    }

    #[test]
    fn test_keeps_characters_outside_the_set() {
        // Quotes, brackets, and question marks are not stripped.
        assert_eq!(normalize("what time is it?"), "what time is it?");
        assert_eq!(normalize("\"quoted\" [word]"), "\"quoted\" [word]");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  The cat sat.  ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_empty_after_normalization() {
        assert_eq!(normalize("  ...  "), "");
        assert_eq!(normalize(""), "");
    }
}
