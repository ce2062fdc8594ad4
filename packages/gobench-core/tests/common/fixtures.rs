//! Test fixture generators

use std::fs;
use std::path::{Path, PathBuf};

pub const LINUX_HEADER: &str = "goos: linux\ngoarch: amd64\npkg: example.com/bench\ncpu: Fixture CPU @ 3.00GHz\n";

/// One `go test -bench` measurement line
pub fn measurement_line(identifier: &str, n: u64, ns_per_op: f64) -> String {
    format!("{identifier}\t{n}\t{ns_per_op} ns/op")
}

/// A report with the Linux header, the given lines and a trailer
pub fn fixture_report(lines: &[String]) -> String {
    format!("{LINUX_HEADER}{}\nPASS\nok  \texample.com/bench\t1.234s\n", lines.join("\n"))
}

/// Two sorters with a same-named method, one benchmark each
pub fn fixture_sorters() -> String {
    r#"package sorting

import "testing"

// QuickSorter sorts in place.
type QuickSorter struct{ data []int }

func (q *QuickSorter) sort() { quickSort(q.data, 0, len(q.data)-1) }

func quickSort(a []int, lo, hi int) {}

type BubbleSorter struct{ data []int }

func (s *BubbleSorter) sort() {
	for i := range s.data {
		_ = i
	}
}

func fill(n int) []int { return make([]int, n) }

func BenchmarkQuickSorter_sort(b *testing.B) {
	s := &QuickSorter{data: fill(100)}
	for i := 0; i < b.N; i++ {
		s.sort()
	}
}

func BenchmarkBubbleSorter_sort(b *testing.B) {
	s := &BubbleSorter{data: fill(100)}
	for i := 0; i < b.N; i++ {
		s.sort()
	}
}
"#
    .to_string()
}

/// Benchmarks declared before the type and methods they use
pub fn fixture_stack() -> String {
    r#"package stack

import "testing"

func BenchmarkSliceStack_push(b *testing.B) {
	s := &SliceStack{}
	for i := 0; i < b.N; i++ {
		s.Push(i)
	}
}

func BenchmarkSliceStack_pop(b *testing.B) {
	s := newStack()
	for i := 0; i < b.N; i++ {
		s.Push(i)
		s.Pop()
	}
}

type SliceStack struct{ items []int }

func (s *SliceStack) Push(v int) { s.items = append(s.items, v) }

func (s *SliceStack) Pop() int {
	v := s.items[len(s.items)-1]
	s.items = s.items[:len(s.items)-1]
	return v
}

func newStack() *SliceStack { return &SliceStack{} }

func unused() {}
"#
    .to_string()
}

/// Create `<root>/<name>` with a report, sources and an optional sidecar
pub fn fixture_group(
    root: &Path,
    name: &str,
    report: Option<&str>,
    sources: &[(&str, &str)],
    meta: Option<&str>,
) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    if let Some(report) = report {
        fs::write(dir.join("_bench.out"), report).unwrap();
    }
    for (file, content) in sources {
        fs::write(dir.join(file), content).unwrap();
    }
    if let Some(meta) = meta {
        fs::write(dir.join("_meta.yml"), meta).unwrap();
    }
    dir
}
