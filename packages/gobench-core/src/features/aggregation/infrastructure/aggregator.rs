use std::collections::HashMap;

use super::median::{median_f64, median_u64};
use crate::features::aggregation::domain::{ops_per_sec, Variation, VariationKey};
use crate::features::measurement::MeasurementRecord;

/// Collapse repeated runs into one Variation per key
///
/// Keys keep first-seen order. Each numeric field gets its own median;
/// identity fields come from the first run of the key. Throughput is
/// recomputed from the median ns/op.
pub fn aggregate(variations: Vec<Variation>) -> Vec<Variation> {
    let mut order: Vec<VariationKey> = Vec::new();
    let mut grouped: HashMap<VariationKey, Vec<Variation>> = HashMap::new();

    for variation in variations {
        let key = variation.key();
        match grouped.get_mut(&key) {
            Some(runs) => runs.push(variation),
            None => {
                order.push(key.clone());
                grouped.insert(key, vec![variation]);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|key| grouped.remove(&key))
        .filter_map(collapse)
        .collect()
}

fn collapse(runs: Vec<Variation>) -> Option<Variation> {
    let mut ns: Vec<f64> = runs.iter().map(|v| v.record.ns_per_op).collect();
    let mut mb: Vec<f64> = runs.iter().map(|v| v.record.mb_per_s).collect();
    let mut bytes: Vec<u64> = runs.iter().map(|v| v.record.alloced_bytes_per_op).collect();
    let mut allocs: Vec<u64> = runs.iter().map(|v| v.record.allocs_per_op).collect();

    let ns_per_op = median_f64(&mut ns)?;
    let mb_per_s = median_f64(&mut mb)?;
    let alloced_bytes_per_op = median_u64(&mut bytes)?;
    let allocs_per_op = median_u64(&mut allocs)?;

    let first = runs.into_iter().next()?;
    let record = MeasurementRecord {
        ns_per_op,
        mb_per_s,
        alloced_bytes_per_op,
        allocs_per_op,
        ..first.record
    };

    Some(Variation {
        ops_per_sec: ops_per_sec(record.ns_per_op),
        record,
        ..first
    })
}
