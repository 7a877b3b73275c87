//! Error types for Confetti

use crate::config::ValueKind;
use thiserror::Error;

/// The main error type for Confetti operations
#[derive(Debug, Error)]
pub enum ConfettiError {
    /// A configuration setter received a value of the wrong primitive kind.
    /// The targeted field is left unchanged.
    #[error("Input for '{field}' must be of type '{expected}', got '{got}'")]
    ConfigTypeMismatch {
        field: &'static str,
        expected: ValueKind,
        got: String,
    },

    #[error("Scenario error: {0}")]
    ScenarioError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Confetti operations
pub type Result<T> = std::result::Result<T, ConfettiError>;

impl From<toml::de::Error> for ConfettiError {
    fn from(err: toml::de::Error) -> Self {
        ConfettiError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfettiError {
    fn from(err: toml::ser::Error) -> Self {
        ConfettiError::TomlSerError(err.to_string())
    }
}
