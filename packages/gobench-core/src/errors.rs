//! Error types for gobench-core
//!
//! Provides unified error handling across the crate.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for gobench-core operations
#[derive(Debug, Error)]
pub enum GobenchError {
    /// IO error on a specific file or directory
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Go source could not be parsed into declarations
    #[error("Parse error in {} at line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// YAML sidecar could not be decoded
    #[error("YAML error in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Directory traversal error
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Document serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GobenchError {
    /// Create an IO error bound to a path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        GobenchError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a parse error bound to a path and 1-based line
    pub fn parse(path: impl AsRef<Path>, line: usize, message: impl Into<String>) -> Self {
        GobenchError::Parse {
            path: path.as_ref().to_path_buf(),
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for gobench operations
pub type Result<T> = std::result::Result<T, GobenchError>;
