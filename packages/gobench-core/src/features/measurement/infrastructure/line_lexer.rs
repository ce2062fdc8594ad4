//! Line grammar for benchmark reports
//!
//! ```text
//! header      := key ":" value
//! measurement := identifier N (value unit)*
//! unit        := "ns/op" | "MB/s" | "B/op" | "allocs/op" | <ignored>
//! ```

use crate::features::measurement::domain::{MeasuredFields, MeasurementRecord};

/// Why a `Benchmark...` line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    NotABenchmark,
    MissingIterations,
    InvalidIterations(String),
    MissingNsPerOp,
}

/// Split a header line into trimmed key and value
pub fn header(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// Tokenizer over one measurement line
pub struct MeasurementLexer<'a> {
    fields: std::str::SplitWhitespace<'a>,
}

impl<'a> MeasurementLexer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            fields: line.split_whitespace(),
        }
    }

    /// Parse the whole line into a record with the given ordinal
    pub fn record(mut self, ord: usize) -> Result<MeasurementRecord, LineError> {
        let name = match self.fields.next() {
            Some(name) if name.starts_with("Benchmark") => name,
            _ => return Err(LineError::NotABenchmark),
        };

        let n = match self.fields.next() {
            None => return Err(LineError::MissingIterations),
            Some(raw) => match raw.parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => return Err(LineError::InvalidIterations(raw.to_string())),
            },
        };

        let mut record = MeasurementRecord {
            name: name.to_string(),
            n,
            ns_per_op: 0.0,
            alloced_bytes_per_op: 0,
            allocs_per_op: 0,
            mb_per_s: 0.0,
            measured: MeasuredFields::empty(),
            ord,
        };

        while let Some((value, unit)) = self.next_pair() {
            match unit {
                "ns/op" => {
                    if let Some(v) = non_negative_float(value) {
                        record.ns_per_op = v;
                        record.measured.insert(MeasuredFields::NS_PER_OP);
                    }
                }
                "MB/s" => {
                    if let Some(v) = non_negative_float(value) {
                        record.mb_per_s = v;
                        record.measured.insert(MeasuredFields::MB_PER_S);
                    }
                }
                "B/op" => {
                    if let Ok(v) = value.parse::<u64>() {
                        record.alloced_bytes_per_op = v;
                        record.measured.insert(MeasuredFields::ALLOCED_BYTES_PER_OP);
                    }
                }
                "allocs/op" => {
                    if let Ok(v) = value.parse::<u64>() {
                        record.allocs_per_op = v;
                        record.measured.insert(MeasuredFields::ALLOCS_PER_OP);
                    }
                }
                _ => {}
            }
        }

        if !record.measured.contains(MeasuredFields::NS_PER_OP) {
            return Err(LineError::MissingNsPerOp);
        }

        Ok(record)
    }

    fn next_pair(&mut self) -> Option<(&'a str, &'a str)> {
        let value = self.fields.next()?;
        let unit = self.fields.next()?;
        Some((value, unit))
    }
}

fn non_negative_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
