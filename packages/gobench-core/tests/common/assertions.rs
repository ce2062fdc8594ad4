//! Custom assertions for benchmark documents and excerpts

use gobench_core::BenchmarkGroup;

/// Assert that an excerpt never mentions `forbidden`
pub fn assert_excludes(excerpt: &str, forbidden: &str) {
    assert!(
        !excerpt.contains(forbidden),
        "Excerpt unexpectedly contains {forbidden:?}:\n{excerpt}"
    );
}

/// Assert that every needle occurs, in the given order
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut last = 0;
    for needle in needles {
        let pos = haystack
            .find(needle)
            .unwrap_or_else(|| panic!("Missing {needle:?} in:\n{haystack}"));
        assert!(
            pos >= last,
            "{needle:?} appears out of order in:\n{haystack}"
        );
        last = pos;
    }
}

/// Assert ops/sec * ns/op ≈ 1e9 for every variation (0 when ns/op is 0)
pub fn assert_throughput_invariant(group: &BenchmarkGroup) {
    for bench in &group.benchmarks {
        for v in &bench.variations {
            if v.record.ns_per_op == 0.0 {
                assert_eq!(v.ops_per_sec, 0.0, "{}: unguarded zero ns/op", bench.name);
            } else {
                let product = v.ops_per_sec * v.record.ns_per_op;
                assert!(
                    (product - 1e9).abs() <= 1e9 * 1e-9,
                    "{}: ops/sec * ns/op = {product}",
                    bench.name
                );
            }
        }
    }
}
