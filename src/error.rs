//! Domain error types for the demo binary.

#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for DemoError.
pub type Result<T> = std::result::Result<T, DemoError>;
