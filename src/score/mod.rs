//! Answer similarity scoring.
//!
//! Grades a submitted answer (typed or speech-transcribed) against a
//! reference string. Both inputs are normalized (trim, lowercase, strip a
//! fixed punctuation set), then compared with a Levenshtein edit-distance
//! ratio:
//!
//! ```text
//! similarity = (max_len - edit_distance) / max_len
//! ```
//!
//! The result is always in [0.0, 1.0]: edit distance never exceeds the
//! longer length. Pure and stateless — safe to call from concurrent
//! request handlers without coordination.

pub mod diff;
pub mod levenshtein;
pub mod normalize;

pub use self::diff::word_diff;
pub use self::normalize::normalize;

/// Compute the similarity ratio between a candidate and a reference answer.
///
/// Returns 1.0 for strings that are equal after normalization (including
/// both empty), 0.0 when exactly one side is empty after normalization,
/// and the edit-distance ratio otherwise.
pub fn similarity(candidate: &str, reference: &str) -> f64 {
    let a = normalize(candidate);
    let b = normalize(reference);

    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let dist = levenshtein::distance(&a, &b);
    (max_len - dist) as f64 / max_len as f64
}

/// Grade a candidate against a reference and report a whole-number
/// accuracy percentage, `round(similarity * 100)`.
pub fn accuracy(candidate: &str, reference: &str) -> u8 {
    (similarity(candidate, reference) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert!((similarity("hello", "hello") - 1.0).abs() < f64::EPSILON);
        assert!((similarity("  Mixed Case.  ", "  Mixed Case.  ") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        assert!((similarity("Hello!", "hello") - 1.0).abs() < f64::EPSILON);
        assert!((similarity("The cat sat.", "the cat sat") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_inputs() {
        assert!((similarity("", "") - 1.0).abs() < f64::EPSILON);
        assert!(similarity("abc", "").abs() < f64::EPSILON);
        assert!(similarity("", "abc").abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_after_normalization() {
        // "..." normalizes to empty against a non-empty reference.
        assert!(similarity("...", "abc").abs() < f64::EPSILON);
        // Both empty after normalization compare equal.
        assert!((similarity("...", "!!!") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_kitten_sitting_ratio() {
        // Distance 3, longer length 7.
        let expected = 4.0 / 7.0;
        assert!((similarity("kitten", "sitting") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("kitten", "sitting"), ("dog", "cat"), ("Hello!", "world")];
        for (a, b) in pairs {
            assert!((similarity(a, b) - similarity(b, a)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_range() {
        for (a, b) in [("dog", "cat"), ("a", "abcdef"), ("hello world", "goodbye")] {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "similarity({a}, {b}) = {s}");
        }
    }

    #[test]
    fn test_accuracy_rounding() {
        assert_eq!(accuracy("The cat sat.", "the cat sat"), 100);
        // dog vs cat: distance 3 over length 3.
        assert_eq!(accuracy("dog", "cat"), 0);
        // kitten vs sitting: 4/7 ≈ 0.5714 → 57.
        assert_eq!(accuracy("kitten", "sitting"), 57);
    }
}
