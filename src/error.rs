//! Errors raised by the outer surfaces (configuration, export, output).
//!
//! The projection engine itself has no failing paths.

use crate::config::ConfigError;

/// Crate-level error for the CLI and export paths.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more configuration problems.
    #[error("{}", join_config_errors(.0))]
    Config(Vec<ConfigError>),
    /// File system failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV writer failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// JSON serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(vec![e])
    }
}

fn join_config_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Error>;
