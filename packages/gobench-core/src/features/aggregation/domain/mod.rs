//! Aggregation domain models

use serde::{Deserialize, Serialize};

use crate::features::measurement::MeasurementRecord;
use crate::features::naming::IdentifierDecomposer;

/// Derived throughput in operations per second
///
/// A zero (or negative) ns/op yields 0.0 instead of infinity.
pub fn ops_per_sec(ns_per_op: f64) -> f64 {
    if ns_per_op > 0.0 {
        1e9 / ns_per_op
    } else {
        0.0
    }
}

/// A measurement record with its decomposed identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    #[serde(flatten)]
    pub record: MeasurementRecord,

    #[serde(skip)]
    pub benchmark_name: String,

    /// Identifier stem used to find the benchmark's source
    #[serde(skip)]
    pub stem: String,

    #[serde(rename = "Name")]
    pub label: String,

    #[serde(rename = "CPUCount")]
    pub concurrency: u32,

    #[serde(rename = "OpsPerSec")]
    pub ops_per_sec: f64,
}

impl Variation {
    pub fn from_record(record: MeasurementRecord) -> Self {
        let name = IdentifierDecomposer::decompose(&record.name);
        let ops_per_sec = ops_per_sec(record.ns_per_op);
        Self {
            record,
            benchmark_name: name.benchmark_name,
            stem: name.stem,
            label: name.variation_label,
            concurrency: name.concurrency,
            ops_per_sec,
        }
    }

    pub fn key(&self) -> VariationKey {
        VariationKey {
            benchmark_name: self.benchmark_name.clone(),
            label: self.label.clone(),
            n: self.record.n,
            concurrency: self.concurrency,
        }
    }
}

/// Identity of one Variation after aggregation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariationKey {
    pub benchmark_name: String,
    pub label: String,
    pub n: u64,
    pub concurrency: u32,
}
