//! Naming domain models

/// Identity recovered from a raw benchmark identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecomposedName {
    /// Identifier part between `Benchmark` and the first underscore
    pub stem: String,
    /// Display name; may be empty
    pub benchmark_name: String,
    pub variation_label: String,
    /// Always at least 1
    pub concurrency: u32,
}
