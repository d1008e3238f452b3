//! Practice-content generation.
//!
//! Builds a prompt for the requested format/level, sends it to the Gemini
//! API, and parses the completion into a clean batch of practice items.
//! The audio route degrades to static fallback tables when generation
//! fails; the plain route surfaces the failure to its caller.

pub mod fallback;
pub mod gemini;
pub mod prompt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{CoachError, CoachResult};
use self::gemini::GeminiClient;

/// Number of practice items per generated batch.
pub const BATCH_SIZE: usize = 10;

/// Practice difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Basic,
    Medium,
    Hard,
}

impl Level {
    /// Parse the wire string (`BASIC` / `MEDIUM` / `HARD`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "BASIC" => Some(Self::Basic),
            "MEDIUM" => Some(Self::Medium),
            "HARD" => Some(Self::Hard),
            _ => None,
        }
    }

    /// The complexity adjective used in prompt templates.
    pub const fn complexity_word(self) -> &'static str {
        match self {
            Self::Basic => "simple",
            Self::Medium => "intermediate",
            Self::Hard => "advanced",
        }
    }
}

/// Practice item format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Format {
    Letter,
    Word,
    Sentence,
}

impl Format {
    /// Parse the wire string (`LETTER` / `WORD` / `SENTENCE`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "LETTER" => Some(Self::Letter),
            "WORD" => Some(Self::Word),
            "SENTENCE" => Some(Self::Sentence),
            _ => None,
        }
    }
}

/// A single practice item as returned to the client.
///
/// `id` and `audio_url` are present only on the audio route; the plain
/// generation route returns bare `{text, difficulty, format}` objects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<uuid::Uuid>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    pub difficulty: Level,
    pub format: Format,
}

/// Generates practice-content batches via the Gemini API.
pub struct ContentGenerator {
    gemini: Option<GeminiClient>,
}

impl ContentGenerator {
    /// Build a generator from configuration. Without an API key the
    /// generator is constructed but every generation attempt fails with
    /// [`CoachError::MissingApiKey`] before touching the network.
    pub fn new(config: &Config) -> CoachResult<Self> {
        let gemini = match &config.gemini_api_key {
            Some(key) => Some(GeminiClient::new(key.clone(), config.gemini_model.clone())?),
            None => None,
        };
        Ok(Self { gemini })
    }

    /// Whether a generative backend is configured.
    pub const fn is_ready(&self) -> bool {
        self.gemini.is_some()
    }

    /// Generate a batch of practice texts for the given format and level.
    pub async fn generate(&self, format: Format, level: Level) -> CoachResult<Vec<String>> {
        let gemini = self.gemini.as_ref().ok_or(CoachError::MissingApiKey)?;

        let prompt = prompt::build(format, level);
        let completion = gemini.generate(&prompt).await?;
        let items = parse_completion(&completion);

        if items.is_empty() {
            return Err(CoachError::EmptyCompletion);
        }

        debug!(?format, ?level, count = items.len(), "generated batch");
        Ok(items)
    }

    /// Generate a batch, falling back to the static tables on any failure.
    pub async fn generate_or_fallback(&self, format: Format, level: Level) -> Vec<String> {
        match self.generate(format, level).await {
            Ok(items) => items,
            Err(e) => {
                warn!(?format, ?level, error = %e, "generation failed, serving fallback content");
                fallback::items(format, level)
            }
        }
    }
}

/// Parse a completion into at most [`BATCH_SIZE`] practice items.
///
/// One item per line; blank lines are dropped. Models occasionally number
/// or bullet the list despite the prompt, so leading markers like `1.`,
/// `2)`, `-`, `*` are stripped.
pub fn parse_completion(completion: &str) -> Vec<String> {
    let marker = regex::Regex::new(r"^\s*(?:\d+[.)]\s+|[-*]\s+)").ok();

    completion
        .lines()
        .map(|line| {
            let line = match &marker {
                Some(re) => re.replace(line, ""),
                None => std::borrow::Cow::Borrowed(line),
            };
            line.trim().to_owned()
        })
        .filter(|line| !line.is_empty())
        .take(BATCH_SIZE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("BASIC"), Some(Level::Basic));
        assert_eq!(Level::parse("MEDIUM"), Some(Level::Medium));
        assert_eq!(Level::parse("HARD"), Some(Level::Hard));
        assert_eq!(Level::parse("basic"), None);
        assert_eq!(Level::parse(""), None);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(Format::parse("LETTER"), Some(Format::Letter));
        assert_eq!(Format::parse("WORD"), Some(Format::Word));
        assert_eq!(Format::parse("SENTENCE"), Some(Format::Sentence));
        assert_eq!(Format::parse("PARAGRAPH"), None);
    }

    #[test]
    fn test_wire_serialization() {
        assert_eq!(serde_json::to_value(Level::Basic).expect("serialize"), "BASIC");
        assert_eq!(serde_json::to_value(Format::Sentence).expect("serialize"), "SENTENCE");
    }

    #[test]
    fn test_question_serialization_without_audio() {
        let q = Question {
            id: None,
            text: "cat".to_owned(),
            audio_url: None,
            difficulty: Level::Basic,
            format: Format::Word,
        };
        let json = serde_json::to_value(&q).expect("serialize");
        assert_eq!(json["text"], "cat");
        assert_eq!(json["difficulty"], "BASIC");
        assert_eq!(json["format"], "WORD");
        assert!(json.get("id").is_none());
        assert!(json.get("audioUrl").is_none());
    }

    #[test]
    fn test_question_serialization_with_audio() {
        let q = Question {
            id: Some(uuid::Uuid::new_v4()),
            text: "cat".to_owned(),
            audio_url: Some("data:audio/mp3;base64,".to_owned()),
            difficulty: Level::Medium,
            format: Format::Letter,
        };
        let json = serde_json::to_value(&q).expect("serialize");
        assert!(json.get("id").is_some());
        assert_eq!(json["audioUrl"], "data:audio/mp3;base64,");
    }

    #[test]
    fn test_parse_completion_plain_lines() {
        let items = parse_completion("cat\ndog\n\nhouse\n");
        assert_eq!(items, vec!["cat", "dog", "house"]);
    }

    #[test]
    fn test_parse_completion_strips_list_markers() {
        let items = parse_completion("1. cat\n2) dog\n- house\n* tree");
        assert_eq!(items, vec!["cat", "dog", "house", "tree"]);
    }

    #[test]
    fn test_parse_completion_caps_at_batch_size() {
        let completion = (1..=15).map(|i| format!("word{i}\n")).collect::<String>();
        assert_eq!(parse_completion(&completion).len(), BATCH_SIZE);
    }

    #[test]
    fn test_parse_completion_keeps_interior_punctuation() {
        let items = parse_completion("The cat sat.\n");
        assert_eq!(items, vec!["The cat sat."]);
    }
}
