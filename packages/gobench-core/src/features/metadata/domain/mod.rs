//! Metadata sidecar model

use serde::{Deserialize, Serialize};

/// Human-written description of a benchmark group; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupMeta {
    pub name: String,
    pub headline: String,
    pub description: String,
    pub tags: Vec<String>,
    pub contributors: Vec<String>,

    /// Per-benchmark overrides
    pub meta: Vec<ImplementationMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplementationMeta {
    /// Benchmark name, e.g. `Uint Counter`
    pub implementation: String,
    pub description: String,
}

impl GroupMeta {
    /// Description override for a benchmark; the last matching entry wins
    pub fn description_for(&self, benchmark: &str) -> Option<&str> {
        self.meta
            .iter()
            .rev()
            .find(|m| m.implementation == benchmark)
            .map(|m| m.description.as_str())
    }

    /// Group name, falling back to the directory name
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.name.is_empty() {
            fallback
        } else {
            &self.name
        }
    }
}
