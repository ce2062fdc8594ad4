//! Source excerpt extraction
//!
//! Go sources of a group → declaration graph → per-benchmark excerpts:
//! the benchmark functions alone, and the benchmarks with the types, methods
//! and helpers they reference.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::SourceSet;
pub use domain::{DeclKind, Declaration, ExcerptTarget, ParsedFile};
pub use infrastructure::{DeclarationGraph, ExcerptSlicer, GoSourceParser};
pub use ports::SourceParser;
