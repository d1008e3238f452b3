//! Static fallback content served when the generative API is unavailable.
//!
//! Ten items per format/level cell, matching what the generated content
//! would look like, so the client keeps working offline or when the API
//! quota runs out.

use super::{Format, Level};

const LETTERS_BASIC: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
const LETTERS_MEDIUM: [&str; 10] = ["K", "L", "M", "N", "O", "P", "Q", "R", "S", "T"];
const LETTERS_HARD: [&str; 10] = [
    "BZX", "QRM", "WKP", "YVF", "HJN", "DLT", "CGS", "NXZ", "PMQ", "VWY",
];

const WORDS_BASIC: [&str; 10] = [
    "cat", "dog", "house", "book", "tree", "fish", "bird", "car", "sun", "moon",
];
const WORDS_MEDIUM: [&str; 10] = [
    "elephant",
    "computer",
    "mountain",
    "library",
    "ocean",
    "butterfly",
    "telephone",
    "umbrella",
    "calendar",
    "diamond",
];
const WORDS_HARD: [&str; 10] = [
    "extraordinary",
    "sophisticated",
    "phenomenon",
    "magnificent",
    "revolutionary",
    "philosophical",
    "unprecedented",
    "enthusiastic",
    "determination",
    "consciousness",
];

const SENTENCES_BASIC: [&str; 10] = [
    "The cat sits on the mat.",
    "I like to read books.",
    "The sun is bright today.",
    "She walks to school.",
    "They play in the park.",
    "He drinks water.",
    "The bird flies high.",
    "We eat breakfast together.",
    "The dog runs fast.",
    "The flowers are beautiful.",
];
const SENTENCES_MEDIUM: [&str; 10] = [
    "The curious student asked many interesting questions during the lecture.",
    "She carefully examined the ancient artifact in the museum.",
    "The chef prepared a delicious meal using fresh ingredients.",
    "The mountain climbers reached the summit before sunset.",
    "The musician practiced diligently for the upcoming concert.",
    "The scientist conducted experiments in the laboratory.",
    "The artist painted a stunning landscape of the valley.",
    "The detective solved the mysterious case last week.",
    "The gardener planted colorful flowers in the garden.",
    "The writer published her first novel this year.",
];
const SENTENCES_HARD: [&str; 10] = [
    "Despite the challenging circumstances, she persevered and achieved her goals through dedication and hard work.",
    "The revolutionary technological advancement transformed the way people communicate across the globe.",
    "The professor's comprehensive analysis of the complex phenomenon led to groundbreaking discoveries.",
    "The intricate relationship between environmental factors and economic development requires careful consideration.",
    "The symphony orchestra delivered a magnificent performance that captivated the audience throughout the evening.",
    "The archaeological expedition uncovered remarkable artifacts that shed light on ancient civilizations.",
    "The innovative solution proposed by the team addressed multiple aspects of the persistent problem.",
    "The documentary film explored the profound impact of climate change on indigenous communities.",
    "The philosophical debate about consciousness continues to intrigue scholars across different disciplines.",
    "The unprecedented collaboration between scientists worldwide accelerated the development of crucial research.",
];

/// Fallback items for a format/level pair.
pub fn items(format: Format, level: Level) -> Vec<String> {
    let table: &[&str; 10] = match (format, level) {
        (Format::Letter, Level::Basic) => &LETTERS_BASIC,
        (Format::Letter, Level::Medium) => &LETTERS_MEDIUM,
        (Format::Letter, Level::Hard) => &LETTERS_HARD,
        (Format::Word, Level::Basic) => &WORDS_BASIC,
        (Format::Word, Level::Medium) => &WORDS_MEDIUM,
        (Format::Word, Level::Hard) => &WORDS_HARD,
        (Format::Sentence, Level::Basic) => &SENTENCES_BASIC,
        (Format::Sentence, Level::Medium) => &SENTENCES_MEDIUM,
        (Format::Sentence, Level::Hard) => &SENTENCES_HARD,
    };
    table.iter().map(|s| (*s).to_owned()).collect()
}
