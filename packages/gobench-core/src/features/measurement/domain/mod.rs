//! Measurement domain models
//!
//! Records parsed from `go test -bench` output plus the header block that
//! describes the machine they ran on.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bit set of the optional fields present on a measurement line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasuredFields(u8);

impl MeasuredFields {
    pub const NS_PER_OP: MeasuredFields = MeasuredFields(1);
    pub const MB_PER_S: MeasuredFields = MeasuredFields(2);
    pub const ALLOCED_BYTES_PER_OP: MeasuredFields = MeasuredFields(4);
    pub const ALLOCS_PER_OP: MeasuredFields = MeasuredFields(8);

    pub fn empty() -> Self {
        MeasuredFields(0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: MeasuredFields) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: MeasuredFields) {
        self.0 |= other.0;
    }
}

/// One measurement line
///
/// Immutable once parsed; aggregation builds new records instead of editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeasurementRecord {
    /// Raw identifier, e.g. `BenchmarkIntCounter_increment-8`
    #[serde(skip)]
    pub name: String,

    /// Iteration count
    #[serde(rename = "N")]
    pub n: u64,

    pub ns_per_op: f64,
    pub alloced_bytes_per_op: u64,
    pub allocs_per_op: u64,

    #[serde(rename = "MBPerS")]
    pub mb_per_s: f64,

    pub measured: MeasuredFields,

    /// Ordinal among accepted measurement lines of the report
    pub ord: usize,
}

impl MeasurementRecord {
    pub fn new(name: impl Into<String>, n: u64, ns_per_op: f64) -> Self {
        Self {
            name: name.into(),
            n,
            ns_per_op,
            alloced_bytes_per_op: 0,
            allocs_per_op: 0,
            mb_per_s: 0.0,
            measured: MeasuredFields::NS_PER_OP,
            ord: 0,
        }
    }
}

/// Toolchain and hardware description from the report header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(rename = "GoOS")]
    pub os: String,
    #[serde(rename = "GoArch")]
    pub arch: String,
    #[serde(rename = "Pkg")]
    pub pkg: String,
    #[serde(rename = "CPU")]
    pub cpu: String,
}

impl SystemInfo {
    /// Apply a recognized `key: value` header; unknown keys are ignored
    pub fn apply_header(&mut self, key: &str, value: &str) -> bool {
        let slot = match key {
            "goos" => &mut self.os,
            "goarch" => &mut self.arch,
            "pkg" => &mut self.pkg,
            "cpu" => &mut self.cpu,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// Everything parsed from one report
///
/// Records are grouped by raw identifier; identifiers keep first-seen order
/// and records under one identifier keep input order.
#[derive(Debug, Clone, Default)]
pub struct MeasurementSet {
    pub system: SystemInfo,
    entries: Vec<(String, Vec<MeasurementRecord>)>,
    index: HashMap<String, usize>,
    /// Benchmark lines rejected by the line grammar
    pub skipped_lines: usize,
}

impl MeasurementSet {
    pub fn new(system: SystemInfo) -> Self {
        Self {
            system,
            ..Self::default()
        }
    }

    pub fn push(&mut self, record: MeasurementRecord) {
        match self.index.get(&record.name) {
            Some(&slot) => self.entries[slot].1.push(record),
            None => {
                self.index.insert(record.name.clone(), self.entries.len());
                self.entries.push((record.name.clone(), vec![record]));
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&[MeasurementRecord]> {
        self.index
            .get(identifier)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Identifiers with their records, first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MeasurementRecord])> {
        self.entries
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn identifier_count(&self) -> usize {
        self.entries.len()
    }

    pub fn record_count(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
