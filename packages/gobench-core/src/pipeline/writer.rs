//! Document writing

use std::path::PathBuf;

use tracing::{debug, info};

use super::document::BenchmarkGroup;
use crate::config::GeneratorConfig;
use crate::errors::{GobenchError, Result};

/// Serializes groups to `<group dir>/<output file>`
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    file_name: String,
    pretty: bool,
}

/// Totals of a write pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub documents: usize,
    pub bytes: usize,
}

impl DocumentWriter {
    pub fn new(file_name: impl Into<String>, pretty: bool) -> Self {
        Self {
            file_name: file_name.into(),
            pretty,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.output_file.clone(), config.pretty)
    }

    pub fn to_json(&self, group: &BenchmarkGroup) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(group)?
        } else {
            serde_json::to_string(group)?
        };
        Ok(json)
    }

    pub fn path_for(&self, group: &BenchmarkGroup) -> PathBuf {
        group.dir.join(&self.file_name)
    }

    /// Write one document, returning the byte count
    pub fn write(&self, group: &BenchmarkGroup) -> Result<usize> {
        let json = self.to_json(group)?;
        let path = self.path_for(group);
        std::fs::write(&path, &json).map_err(|e| GobenchError::io(&path, e))?;
        debug!(path = %path.display(), bytes = json.len(), "Wrote benchmark document");
        Ok(json.len())
    }

    /// Write every document; stops at the first failure
    pub fn write_all(&self, groups: &[BenchmarkGroup]) -> Result<WriteSummary> {
        let mut summary = WriteSummary::default();
        for group in groups {
            summary.bytes += self.write(group)?;
            summary.documents += 1;
        }
        info!(
            documents = summary.documents,
            bytes = summary.bytes,
            "Wrote benchmark documents"
        );
        Ok(summary)
    }
}
