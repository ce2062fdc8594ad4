//! Sidecar loading

use std::path::Path;

use crate::errors::{GobenchError, Result};
use crate::features::metadata::domain::GroupMeta;

pub struct MetaLoader;

impl MetaLoader {
    /// Read and decode a sidecar; a blank file decodes to defaults
    pub fn load(path: &Path) -> Result<GroupMeta> {
        let content = std::fs::read_to_string(path).map_err(|e| GobenchError::io(path, e))?;
        Self::parse_str(&content).map_err(|source| GobenchError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse_str(content: &str) -> std::result::Result<GroupMeta, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(GroupMeta::default());
        }
        serde_yaml::from_str(content)
    }
}
