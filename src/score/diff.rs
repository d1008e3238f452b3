//! Word-level diff feedback using the `similar` crate.
//!
//! Produces a compact inline diff of the submitted answer against the
//! reference so the front-end can show the learner which words were off.

use similar::{Algorithm, ChangeTag, TextDiff};

/// Render a word-level diff between `candidate` and `reference`.
///
/// Deleted words (present in the candidate, absent from the reference)
/// are wrapped in `[-...-]`, inserted words in `[+...+]`. Returns `None`
/// when the two texts are word-identical.
pub fn word_diff(candidate: &str, reference: &str) -> Option<String> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Patience)
        .diff_words(candidate, reference);

    if diff.ratio() >= 1.0 {
        return None;
    }

    let mut out = String::new();
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => out.push_str(change.value()),
            ChangeTag::Delete => {
                out.push_str("[-");
                out.push_str(change.value());
                out.push_str("-]");
            }
            ChangeTag::Insert => {
                out.push_str("[+");
                out.push_str(change.value());
                out.push_str("+]");
            }
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_yields_none() {
        assert_eq!(word_diff("the cat sat", "the cat sat"), None);
    }

    #[test]
    fn test_marks_changed_words() {
        let diff = word_diff("the dog sat", "the cat sat").expect("diff");
        assert!(diff.contains("[-dog-]"));
        assert!(diff.contains("[+cat+]"));
        assert!(diff.contains("the"));
    }

    #[test]
    fn test_marks_missing_words() {
        let diff = word_diff("the sat", "the cat sat").expect("diff");
        assert!(diff.contains("[+cat"));
    }
}
