//! CLI configuration with TOML file support.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use seedphrase_types::WordCount;
use seedphrase_utils::LogFormat;
use seedphrase_wordlists::Language;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("invalid config: {0}")]
    Parse(String),
}

/// Settings for the `seedphrase` binary.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; flags and
/// `SEEDPHRASE_*` environment variables override individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Word list for generated and validated phrases.
    #[serde(default)]
    pub language: Language,

    /// Length of generated phrases: 12, 15, 18, 21 or 24.
    #[serde(default = "default_word_count")]
    pub word_count: WordCount,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_word_count() -> WordCount {
    WordCount::TwentyFour
}

fn default_log_level() -> String {
    "warn".into()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("CliConfig is always serializable to TOML")
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            word_count: default_word_count(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
