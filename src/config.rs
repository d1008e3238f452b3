//! Server configuration, read from the environment.

/// Default listen port, matching the web client's dev proxy.
const DEFAULT_PORT: u16 = 3000;

/// Default Gemini model used for content generation.
const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

/// Runtime configuration for the lingo-coach server.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to listen on.
    pub port: u16,
    /// Gemini API key; generation is disabled when absent.
    pub gemini_api_key: Option<String>,
    /// Gemini model name.
    pub gemini_model: String,
    /// External text-to-speech command; audio URLs are empty when absent.
    pub tts_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_owned(),
            tts_command: None,
        }
    }
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// `PORT`, `GEMINI_API_KEY`, `GEMINI_MODEL`, and `TTS_COMMAND` are
    /// consulted; empty values count as unset. A malformed `PORT` falls
    /// back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            gemini_api_key: env_var("GEMINI_API_KEY"),
            gemini_model: env_var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            tts_command: env_var("TTS_COMMAND"),
        }
    }
}

/// Read an environment variable, treating empty strings as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.gemini_model, "gemini-1.5-pro-latest");
        assert!(config.gemini_api_key.is_none());
        assert!(config.tts_command.is_none());
    }
}
