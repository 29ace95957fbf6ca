//! Error types for locflat

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlattenError {
    // Input errors
    #[error("Could not open input {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path} as JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input does not contain a 'features' array: {reason}")]
    Schema { reason: String },

    // Output errors
    #[error("Could not open {path} for writing")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FlattenError>;
