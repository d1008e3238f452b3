//! Error types for the lingo-coach crate.

/// Coach-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    /// No Gemini API key configured — generation cannot even be attempted.
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    /// The generative API returned a non-success status.
    #[error("Gemini API error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    /// The generative API answered 200 but with no usable candidate text.
    #[error("Gemini API returned an empty completion")]
    EmptyCompletion,

    /// Audio synthesis subprocess failed.
    #[error("speech synthesis failed: {reason}")]
    Synthesis { reason: String },

    /// HTTP transport error talking to the generative API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (synthesis scratch files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for lingo-coach operations.
pub type CoachResult<T> = Result<T, CoachError>;
