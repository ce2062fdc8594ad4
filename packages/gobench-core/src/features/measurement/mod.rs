//! Measurement parsing
//!
//! `go test -bench` report text → [`SystemInfo`] + [`MeasurementRecord`]s
//! grouped by raw identifier.

pub mod domain;
pub mod infrastructure;

pub use domain::{MeasuredFields, MeasurementRecord, MeasurementSet, SystemInfo};
pub use infrastructure::{LineError, MeasurementLexer, ReportParser};
