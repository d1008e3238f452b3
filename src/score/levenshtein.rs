//! Levenshtein edit distance algorithm.
//!
//! Used by the answer scorer to measure how far a submitted answer is
//! from the reference after normalization.

/// Compute the Levenshtein edit distance between two strings.
///
/// Returns the minimum number of single-character edits (insertions,
/// deletions, substitutions, unit cost each) required to transform `a`
/// into `b`. Operates on `char`s, not bytes.
///
/// The distance must be exact — the similarity ratio reported to clients
/// is derived from it directly — so there are no length-based shortcuts
/// beyond the trivial empty cases.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Use two rows instead of the full matrix for O(min(m,n)) space.
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];

    for (j, slot) in prev.iter_mut().enumerate() {
        *slot = j;
    }

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(distance("hello", "hello"), 0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn test_single_edit() {
        assert_eq!(distance("kitten", "sitten"), 1); // substitution
        assert_eq!(distance("cat", "cats"), 1); // insertion
        assert_eq!(distance("cats", "cat"), 1); // deletion
    }

    #[test]
    fn test_classic() {
        assert_eq!(distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(distance("sunday", "saturday"), distance("saturday", "sunday"));
    }

    #[test]
    fn test_fully_different() {
        assert_eq!(distance("dog", "cat"), 3);
    }

    #[test]
    fn test_multibyte_chars() {
        // One substitution, regardless of UTF-8 byte widths.
        assert_eq!(distance("café", "cafe"), 1);
    }
}
