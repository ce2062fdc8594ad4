//! Property-based tests for aggregation and identifier handling
//!
//! Median order independence, the throughput invariant, and total
//! (never panicking) decomposition and report parsing.

#[path = "../common/mod.rs"]
mod common;
use common::measurement_line;

use gobench_core::features::aggregation::{aggregate, median_f64, median_u64, Variation};
use gobench_core::{IdentifierDecomposer, MeasurementRecord, ReportParser};
use proptest::prelude::*;

fn samples() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec(0.0f64..1e9, 1..25)
        .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
}

proptest! {
    #[test]
    fn prop_median_ignores_order((original, shuffled) in samples()) {
        let mut a = original.clone();
        let mut b = shuffled;
        prop_assert_eq!(median_f64(&mut a), median_f64(&mut b));
    }

    #[test]
    fn prop_median_within_bounds(values in prop::collection::vec(0u64..=u64::MAX, 1..25)) {
        let min = *values.iter().min().unwrap();
        let max = *values.iter().max().unwrap();
        let mut sorted = values.clone();
        let median = median_u64(&mut sorted).unwrap();
        prop_assert!(min <= median && median <= max);
    }

    #[test]
    fn prop_throughput_matches_median(runs in prop::collection::vec(0.001f64..1e9, 1..10)) {
        let variations: Vec<Variation> = runs
            .iter()
            .map(|&ns| Variation::from_record(MeasurementRecord::new("BenchmarkIntCounter_inc", 100, ns)))
            .collect();

        let out = aggregate(variations);
        prop_assert_eq!(out.len(), 1);
        let v = &out[0];
        let product = v.ops_per_sec * v.record.ns_per_op;
        prop_assert!((product - 1e9).abs() <= 1e-6 * 1e9);
    }

    #[test]
    fn prop_decompose_is_total(identifier in "\\PC{0,40}") {
        let name = IdentifierDecomposer::decompose(&identifier);
        prop_assert!(name.concurrency >= 1);
        prop_assert!(!name.variation_label.contains('_'));
    }

    #[test]
    fn prop_concurrency_suffix_round_trips(
        stem in "[A-Z][a-z]{1,6}[A-Z][a-z]{1,6}",
        label in "[a-z]{1,8}",
        level in 1u32..256,
    ) {
        let name = IdentifierDecomposer::decompose(&format!("Benchmark{stem}_{label}-{level}"));
        prop_assert_eq!(name.stem, stem);
        prop_assert_eq!(name.variation_label, label);
        prop_assert_eq!(name.concurrency, level);
    }

    #[test]
    fn prop_report_parser_never_panics(lines in prop::collection::vec("\\PC{0,60}", 0..20)) {
        let set = ReportParser::parse_str(&lines.join("\n"));
        prop_assert!(set.record_count() <= lines.len());
    }

    #[test]
    fn prop_well_formed_lines_are_all_kept(
        ns in prop::collection::vec(0.5f64..1e6, 1..15),
    ) {
        let lines: Vec<String> = ns
            .iter()
            .map(|&v| measurement_line("BenchmarkSliceStack_push", 1000, v))
            .collect();
        let set = ReportParser::parse_str(&lines.join("\n"));
        prop_assert_eq!(set.record_count(), ns.len());
        prop_assert_eq!(set.skipped_lines, 0);
    }
}

#[test]
fn test_zero_ns_per_op_is_guarded() {
    let out = aggregate(vec![Variation::from_record(MeasurementRecord::new(
        "BenchmarkIntCounter_inc",
        100,
        0.0,
    ))]);
    assert_eq!(out[0].ops_per_sec, 0.0);
}
