//! Prompt templates for practice-content generation.
//!
//! The templates ask for exactly ten items, one per line, with no
//! surrounding prose — the completion parser depends on that shape.

use super::{Format, Level};

/// Build the generation prompt for a format/level pair.
pub fn build(format: Format, level: Level) -> String {
    let complexity = level.complexity_word();

    match format {
        Format::Letter => {
            if level == Level::Hard {
                "Generate 10 unique advanced combinations of English letters (e.g., \"BZX\", \"QRM\"). \
                 Each combination should be on a new line. Do not include any additional text or explanations."
                    .to_owned()
            } else {
                format!(
                    "Generate 10 unique {complexity} English letters. Each letter should be on a new line. \
                     Do not include any additional text or explanations."
                )
            }
        }
        Format::Word => format!(
            "Generate 10 unique {complexity} English words. Each word should be on a new line. \
             Do not include any additional text or explanations."
        ),
        Format::Sentence => format!(
            "Generate 10 unique {complexity} English sentences. Each sentence should be \
             grammatically correct and on a new line. The sentences should vary in structure \
             and vocabulary. Do not include any additional text or explanations."
        ),
    }
}
