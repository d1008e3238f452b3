//! API request/response types.

use serde::{Deserialize, Serialize};

/// `POST /api/compareAnswer` request body.
///
/// Fields are optional so missing keys reach the handler and get the
/// contract's 400 response instead of a framework rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
}

/// `POST /api/compareAnswer` success response.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    /// Whole-number accuracy percentage, `round(similarity * 100)`.
    pub accuracy: u8,
    /// Word-level diff of the submitted answer against the reference;
    /// omitted on a perfect match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// `POST /api/generateQuestions[WithAudio]` request body.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// `GET /api/status` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    /// Whether a generative backend is configured.
    pub generator_ready: bool,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_owned(),
        }
    }
}
