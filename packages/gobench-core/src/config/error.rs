//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file name setting is empty or points outside the group directory
    #[error("Invalid file name for '{field}': {value:?}. {hint}")]
    InvalidFileName {
        field: String,
        value: String,
        hint: String,
    },

    /// Source extension is empty
    #[error("Source extension must not be empty")]
    EmptyExtension,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown closure mode name
    #[error("Unknown closure mode '{0}'. Valid modes: one-hop, transitive")]
    UnknownClosure(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
