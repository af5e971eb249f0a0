//! Error types for flag parsing and configuration loading.

use thiserror::Error;

/// Errors returned by [`FlagSet::parse`](crate::FlagSet::parse).
///
/// Every input currently has a defined fallback (skip, leftover, or empty
/// value), so no variant is ever produced. The type keeps the parse
/// signature fallible so callers keep checking it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Reserved for input the parser cannot tokenize.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Errors that can occur while loading a [`FlagSetConfig`](crate::FlagSetConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
