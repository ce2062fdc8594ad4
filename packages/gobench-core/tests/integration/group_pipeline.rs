// End-to-end tests for group assembly and document writing

#[path = "../common/mod.rs"]
mod common;
use common::{
    assert_throughput_invariant, fixture_group, fixture_report, fixture_stack, measurement_line,
};

use gobench_core::{DocumentWriter, GeneratorConfig, GobenchError, GroupAssembler, Severity};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const META: &str = "name: Stacks\nheadline: Slice-backed stacks\ntags: [containers]\ncontributors: [bob]\nmeta:\n  - implementation: Stack\n    description: append and reslice\n";

fn stack_report() -> String {
    fixture_report(&[
        measurement_line("BenchmarkSliceStack_push", 1000, 100.0),
        measurement_line("BenchmarkSliceStack_push", 1000, 120.0),
        measurement_line("BenchmarkSliceStack_push", 1000, 110.0),
        measurement_line("BenchmarkSliceStack_pop-4", 1000, 40.0),
        "BenchmarkSliceStack_broken\tmany\t1 ns/op".to_string(),
    ])
}

#[test]
fn test_skip_on_failure() {
    let tmp = TempDir::new().unwrap();
    let report = stack_report();
    let stack = fixture_stack();
    let sources = [("stack_test.go", stack.as_str())];
    fixture_group(tmp.path(), "alpha", Some(report.as_str()), &sources, Some(META));
    fixture_group(tmp.path(), "beta", None, &sources, Some(META));
    fixture_group(tmp.path(), "gamma", Some(report.as_str()), &sources, Some(META));

    let result = GroupAssembler::new(GeneratorConfig::default())
        .process_root(tmp.path())
        .unwrap();

    assert_eq!(result.groups.len(), 2);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].group, "beta");
    assert_eq!(result.diagnostics[0].severity, Severity::Error);
    assert!(result.diagnostics[0].message.contains("_bench.out"));
}

#[test]
fn test_unparsable_source_skips_group() {
    let tmp = TempDir::new().unwrap();
    let report = stack_report();
    fixture_group(
        tmp.path(),
        "broken",
        Some(report.as_str()),
        &[("bad_test.go", "package p\n\nfunc (\n")],
        Some(META),
    );

    let result = GroupAssembler::new(GeneratorConfig::default())
        .process_root(tmp.path())
        .unwrap();
    assert!(result.groups.is_empty());
    assert_eq!(result.skipped(), 1);
}

#[test]
fn test_document_contents() {
    let tmp = TempDir::new().unwrap();
    let dir = fixture_group(
        tmp.path(),
        "stacks",
        Some(stack_report().as_str()),
        &[("stack_test.go", fixture_stack().as_str())],
        Some(META),
    );

    let outcome = GroupAssembler::new(GeneratorConfig::default())
        .assemble(&dir)
        .unwrap();
    let group = outcome.group;

    assert_eq!(group.name, "Stacks");
    assert_eq!(group.tags, vec!["containers"]);
    assert_eq!(group.contributors, vec!["bob"]);
    assert_eq!(group.system.os, "linux");
    assert_eq!(group.system.cpu, "Fixture CPU @ 3.00GHz");
    assert_eq!(outcome.stats.skipped_lines, 1);

    let bench = group.benchmark("Stack").unwrap();
    assert_eq!(bench.description, "append and reslice");
    let labels: Vec<(&str, u32)> = bench
        .variations
        .iter()
        .map(|v| (v.label.as_str(), v.concurrency))
        .collect();
    assert_eq!(labels, vec![("push", 1), ("pop", 4)]);
    assert_eq!(bench.variations[0].record.ns_per_op, 110.0);
    assert_eq!(bench.variations[0].ops_per_sec, 1e9 / 110.0);
    assert_throughput_invariant(&group);

    assert!(bench.benchmark_code.contains("type SliceStack struct"));
    assert!(bench.code.starts_with("func BenchmarkSliceStack_push("));
    assert!(!bench.code.contains("type SliceStack struct"));
    assert!(!group.code.contains("package stack"));
    assert!(group.constants.is_empty());
}

#[test]
fn test_benchmarks_sorted_by_name() {
    let tmp = TempDir::new().unwrap();
    let report = fixture_report(&[
        measurement_line("BenchmarkZetaQueue_run", 10, 1.0),
        measurement_line("BenchmarkAlphaRing_run", 10, 1.0),
        measurement_line("BenchmarkMidHeap_run", 10, 1.0),
    ]);
    let dir = fixture_group(tmp.path(), "mixed", Some(report.as_str()), &[], None);

    let outcome = GroupAssembler::new(GeneratorConfig::default())
        .assemble(&dir)
        .unwrap();
    let names: Vec<&str> = outcome
        .group
        .benchmarks
        .iter()
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(names, vec!["Heap", "Queue", "Ring"]);
    assert_eq!(outcome.group.name, "mixed");
    assert_eq!(outcome.warnings.len(), 1);
}

#[test]
fn test_written_documents_round_trip() {
    let tmp = TempDir::new().unwrap();
    fixture_group(
        tmp.path(),
        "stacks",
        Some(stack_report().as_str()),
        &[("stack_test.go", fixture_stack().as_str())],
        Some(META),
    );

    let config = GeneratorConfig::default();
    let report = GroupAssembler::new(config.clone())
        .process_root(tmp.path())
        .unwrap();
    let summary = DocumentWriter::from_config(&config)
        .write_all(&report.groups)
        .unwrap();
    assert_eq!(summary.documents, 1);

    let json = fs::read_to_string(tmp.path().join("stacks").join("_bench.json")).unwrap();
    assert_eq!(json.len(), summary.bytes);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["Name"], "Stacks");
    assert_eq!(value["System"]["GoArch"], "amd64");
    assert_eq!(value["Benchmarks"][0]["Variations"][1]["CPUCount"], 4);
    assert_eq!(value["Benchmarks"][0]["Variations"][1]["Name"], "pop");
}

#[test]
fn test_parallel_matches_sequential() {
    let tmp = TempDir::new().unwrap();
    let report = stack_report();
    let stack = fixture_stack();
    let sources = [("stack_test.go", stack.as_str())];
    for name in ["a", "b", "c", "d"] {
        fixture_group(tmp.path(), name, Some(report.as_str()), &sources, None);
    }

    let sequential = GroupAssembler::new(GeneratorConfig::default())
        .process_root(tmp.path())
        .unwrap();
    let parallel = GroupAssembler::new(GeneratorConfig::default().parallel(true))
        .process_root(tmp.path())
        .unwrap();

    assert_eq!(sequential.groups, parallel.groups);
    assert_eq!(sequential.diagnostics, parallel.diagnostics);
}

#[test]
fn test_unreadable_root_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let result = GroupAssembler::new(GeneratorConfig::default())
        .process_root(&tmp.path().join("missing"));
    assert!(matches!(result, Err(GobenchError::Walk(_))));
}
