//! Batch result types

use serde::Serialize;

use super::document::BenchmarkGroup;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Group produced with defaults (e.g. unreadable metadata)
    Warning,
    /// Group skipped
    Error,
}

/// A per-group problem recorded instead of aborting the batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Group directory name
    pub group: String,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(group: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(group: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Counts for one processed group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupStats {
    /// Accepted measurement lines
    pub measurement_lines: usize,
    /// Lines that looked like measurements but could not be read
    pub skipped_lines: usize,
    pub raw_variations: usize,
    pub variations: usize,
    pub benchmarks: usize,
    pub source_files: usize,
}

impl std::ops::AddAssign for GroupStats {
    fn add_assign(&mut self, other: Self) {
        self.measurement_lines += other.measurement_lines;
        self.skipped_lines += other.skipped_lines;
        self.raw_variations += other.raw_variations;
        self.variations += other.variations;
        self.benchmarks += other.benchmarks;
        self.source_files += other.source_files;
    }
}

/// One assembled group with its recoverable problems
#[derive(Debug, Clone)]
pub struct GroupOutcome {
    pub group: BenchmarkGroup,
    pub warnings: Vec<String>,
    pub stats: GroupStats,
}

/// Result of processing a benchmark root
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Produced documents, in directory order
    pub groups: Vec<BenchmarkGroup>,
    pub diagnostics: Vec<Diagnostic>,
    /// Totals over produced groups
    pub stats: GroupStats,
}

impl BatchReport {
    /// Groups skipped because of an error
    pub fn skipped(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }
}
