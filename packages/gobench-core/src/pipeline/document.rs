//! Output document model (`_bench.json`)
//!
//! Field names are the PascalCase keys read by the publishing step.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::features::aggregation::Variation;
use crate::features::measurement::SystemInfo;

/// One group directory's comparison set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BenchmarkGroup {
    /// Source directory; the document is written next to it
    #[serde(skip)]
    pub dir: PathBuf,

    pub name: String,
    pub headline: String,
    pub description: String,
    pub tags: Vec<String>,
    pub contributors: Vec<String>,
    pub system: SystemInfo,

    /// Sorted by name
    pub benchmarks: Vec<Benchmark>,

    /// Every source file without package clauses and imports
    pub code: String,

    /// Constant declarations of every source file
    pub constants: String,
}

/// One implementation approach and its measured variations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Benchmark {
    pub name: String,
    pub description: String,

    /// Benchmark functions with the types, methods and helpers they use;
    /// the excerpt shown for the implementation
    pub benchmark_code: String,

    /// Benchmark functions only
    pub code: String,

    pub variations: Vec<Variation>,
}

impl BenchmarkGroup {
    pub fn variation_count(&self) -> usize {
        self.benchmarks.iter().map(|b| b.variations.len()).sum()
    }

    pub fn benchmark(&self, name: &str) -> Option<&Benchmark> {
        self.benchmarks.iter().find(|b| b.name == name)
    }
}
