//! Pipeline orchestration
//!
//! Group directories → [`BenchmarkGroup`] documents → `_bench.json` files.

pub mod document;
pub mod group_assembler;
pub mod result;
pub mod writer;

pub use document::{Benchmark, BenchmarkGroup};
pub use group_assembler::GroupAssembler;
pub use result::{BatchReport, Diagnostic, GroupOutcome, GroupStats, Severity};
pub use writer::{DocumentWriter, WriteSummary};
