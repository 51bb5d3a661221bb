//! Error types for the moodlex binary and service
//!
//! Scoring itself never fails. Errors only come from loading configuration, reading batch
//! input, (de)serializing it, and running the server.

use crate::sentiment::batch::BatchRequestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoodlexError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid batch: {0}")]
    Batch(#[from] BatchRequestError),

    #[error("unsupported output format '{0}'")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, MoodlexError>;
