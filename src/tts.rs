//! Text-to-speech glue via an external synthesis command.
//!
//! Synthesis is best-effort: the practice content is still usable without
//! audio, so every failure path degrades to an empty data URL instead of
//! failing the request.
//!
//! The configured command is invoked as `<command> <text> <output-path>`
//! and is expected to write an MP3 to the output path. The output path is
//! a [`tempfile::NamedTempFile`] that is removed when the handle drops.

use std::time::Duration;

use base64::Engine as _;
use tracing::{debug, warn};

use crate::error::{CoachError, CoachResult};

/// Data URL returned when synthesis is unavailable or fails.
pub const EMPTY_AUDIO_URL: &str = "data:audio/mp3;base64,";

/// Synthesis subprocess timeout.
const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(30);

/// External text-to-speech engine.
pub struct TtsEngine {
    command: Option<String>,
}

impl TtsEngine {
    /// Create an engine around an optional synthesis command.
    pub const fn new(command: Option<String>) -> Self {
        Self { command }
    }

    /// Synthesize `text` to an MP3 data URL.
    ///
    /// Never fails: unconfigured, erroring, or timed-out synthesis all
    /// degrade to [`EMPTY_AUDIO_URL`].
    pub async fn synthesize(&self, text: &str) -> String {
        let Some(command) = &self.command else {
            return EMPTY_AUDIO_URL.to_owned();
        };

        match run_synthesis(command, text).await {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "audio synthesis failed, returning empty audio URL");
                EMPTY_AUDIO_URL.to_owned()
            }
        }
    }
}

/// Run the synthesis command and base64-encode its MP3 output.
async fn run_synthesis(command: &str, text: &str) -> CoachResult<String> {
    let output_file = tempfile::Builder::new().suffix(".mp3").tempfile()?;
    let output_path = output_file.path().to_path_buf();

    debug!(%command, "spawning synthesis command");

    let status = tokio::time::timeout(
        SYNTHESIS_TIMEOUT,
        tokio::process::Command::new(command)
            .arg(text)
            .arg(&output_path)
            .status(),
    )
    .await
    .map_err(|_| CoachError::Synthesis {
        reason: format!("timed out after {}s", SYNTHESIS_TIMEOUT.as_secs()),
    })??;

    if !status.success() {
        return Err(CoachError::Synthesis {
            reason: format!("command exited with {status}"),
        });
    }

    let bytes = tokio::fs::read(&output_path).await?;
    if bytes.is_empty() {
        return Err(CoachError::Synthesis {
            reason: "command produced no audio data".to_owned(),
        });
    }

    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("{EMPTY_AUDIO_URL}{encoded}"))
}
