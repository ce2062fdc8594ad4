/*
 * gobench-core - Go benchmark dataset generator
 *
 * Feature-First Hexagonal Architecture:
 * - features/measurement : `go test -bench` report parsing
 * - features/naming      : benchmark identifier decomposition
 * - features/aggregation : per-field medians over repeated runs
 * - features/slicing     : declaration graph and source excerpts
 * - features/metadata    : `_meta.yml` sidecar
 * - pipeline/            : group assembly, batch processing, document writing
 */

pub mod config;
pub mod errors;
pub mod features;
pub mod pipeline;

pub use config::{ClosureDepth, ConfigError, GeneratorConfig};
pub use errors::{GobenchError, Result};
pub use features::aggregation::{aggregate, Variation};
pub use features::measurement::{MeasurementRecord, ReportParser, SystemInfo};
pub use features::naming::IdentifierDecomposer;
pub use features::slicing::{ExcerptTarget, GoSourceParser, SourceSet};
pub use pipeline::{
    BatchReport, Benchmark, BenchmarkGroup, Diagnostic, DocumentWriter, GroupAssembler, Severity,
};
