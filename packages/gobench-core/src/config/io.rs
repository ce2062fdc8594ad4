//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema. Loading itself lives on `GeneratorConfig`.

use serde::{Deserialize, Serialize};

use super::ClosureDepth;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<FileNames>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub closure: Option<ClosureDepth>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
}

/// Sidecar and source file naming overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileNames {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_extension: Option<String>,
}
