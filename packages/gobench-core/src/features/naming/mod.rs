//! Benchmark identifier decomposition
//!
//! `BenchmarkAtomicUintCounter_increment-8` → benchmark name `Uint Counter`,
//! variation label `increment`, concurrency `8`.

pub mod domain;
pub mod infrastructure;

pub use domain::DecomposedName;
pub use infrastructure::{split_camel_case, suffix_tokens, IdentifierDecomposer};
