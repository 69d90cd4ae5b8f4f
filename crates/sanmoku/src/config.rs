//! Session configuration.

use crate::messages::Language;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one console session.
///
/// ```toml
/// clear_screen = false
/// language = "ja"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Clear the terminal before each board render.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Language for prompts and announcements.
    #[serde(default)]
    language: Language,
}

fn default_clear_screen() -> bool {
    true
}

impl SessionConfig {
    /// Creates a configuration.
    pub fn new(clear_screen: bool, language: Language) -> Self {
        Self {
            clear_screen,
            language,
        }
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of file or default values.
    pub fn with_overrides(mut self, no_clear: bool, language: Option<Language>) -> Self {
        if no_clear {
            self.clear_screen = false;
        }
        if let Some(language) = language {
            self.language = language;
        }
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(default_clear_screen(), Language::default())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert!(*config.clear_screen());
        assert_eq!(*config.language(), Language::En);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config: SessionConfig = toml::from_str("language = \"ja\"").expect("valid toml");
        assert!(*config.clear_screen());
        assert_eq!(*config.language(), Language::Ja);

        let config: SessionConfig = toml::from_str("").expect("valid toml");
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = SessionConfig::default().with_overrides(true, Some(Language::Ja));
        assert_eq!(config, SessionConfig::new(false, Language::Ja));

        let config = SessionConfig::new(false, Language::Ja).with_overrides(false, None);
        assert_eq!(config, SessionConfig::new(false, Language::Ja));
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(toml::from_str::<SessionConfig>("language = \"fr\"").is_err());
    }
}
