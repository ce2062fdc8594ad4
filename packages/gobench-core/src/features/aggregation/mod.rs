//! Statistical aggregation of repeated runs
//!
//! Runs sharing (benchmark name, variation label, N, concurrency) collapse
//! into one [`Variation`] holding per-field medians.

pub mod domain;
pub mod infrastructure;

pub use domain::{ops_per_sec, Variation, VariationKey};
pub use infrastructure::{aggregate, median_f64, median_u64};
