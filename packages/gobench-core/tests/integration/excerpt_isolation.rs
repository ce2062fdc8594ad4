// Excerpt selection over shared Go files
// Isolation between competing implementations and stable output order

#[path = "../common/mod.rs"]
mod common;
use common::{assert_excludes, assert_in_order, fixture_sorters, fixture_stack};

use gobench_core::config::ClosureDepth;
use gobench_core::features::slicing::{ExcerptTarget, GoSourceParser, SourceParser, SourceSet};
use pretty_assertions::assert_eq;
use std::path::Path;

fn source_set(code: &str) -> SourceSet {
    let file = GoSourceParser::new()
        .parse(code, Path::new("fixture_test.go"))
        .unwrap();
    SourceSet::from_files(vec![file])
}

#[test]
fn test_implementation_excerpt_isolates_competitors() {
    let set = source_set(&fixture_sorters());

    let (quick, quick_bench) =
        set.excerpts(&ExcerptTarget::new(["QuickSorter"]), ClosureDepth::OneHop);
    assert!(quick.contains("type QuickSorter struct"));
    assert!(quick.contains("func (q *QuickSorter) sort()"));
    assert!(quick.contains("func fill("));
    assert_excludes(&quick, "Bubble");
    assert_excludes(&quick_bench, "Bubble");

    let (bubble, _) = set.excerpts(&ExcerptTarget::new(["BubbleSorter"]), ClosureDepth::OneHop);
    assert!(bubble.contains("func (s *BubbleSorter) sort()"));
    assert_excludes(&bubble, "Quick");
}

#[test]
fn test_one_hop_does_not_follow_method_bodies() {
    let set = source_set(&fixture_sorters());
    let target = ExcerptTarget::new(["QuickSorter"]);

    let (one_hop, _) = set.excerpts(&target, ClosureDepth::OneHop);
    assert_excludes(&one_hop, "func quickSort(");

    let (transitive, _) = set.excerpts(&target, ClosureDepth::Transitive);
    assert!(transitive.contains("func quickSort("));
    assert_excludes(&transitive, "Bubble");
}

#[test]
fn test_doc_comment_travels_with_type() {
    let set = source_set(&fixture_sorters());
    let (quick, _) = set.excerpts(&ExcerptTarget::new(["QuickSorter"]), ClosureDepth::OneHop);
    assert!(quick.starts_with("// QuickSorter sorts in place.\ntype QuickSorter struct"));
}

#[test]
fn test_type_then_methods_then_helpers_then_benchmarks() {
    let set = source_set(&fixture_stack());
    let (code, bench) = set.excerpts(&ExcerptTarget::new(["SliceStack"]), ClosureDepth::OneHop);

    assert_in_order(
        &code,
        &[
            "type SliceStack struct",
            "func (s *SliceStack) Push(",
            "func (s *SliceStack) Pop()",
            "func newStack()",
            "func BenchmarkSliceStack_push(",
            "func BenchmarkSliceStack_pop(",
        ],
    );
    assert_excludes(&code, "func unused()");
    assert!(code.ends_with("}\n\n"));
    assert!(!code.ends_with("\n\n\n"));

    assert_in_order(
        &bench,
        &["func BenchmarkSliceStack_push(", "func BenchmarkSliceStack_pop("],
    );
    assert_excludes(&bench, "type SliceStack");
}

#[test]
fn test_excerpts_are_deterministic() {
    let first = source_set(&fixture_stack());
    let second = source_set(&fixture_stack());
    let target = ExcerptTarget::new(["SliceStack"]);
    for depth in [ClosureDepth::OneHop, ClosureDepth::Transitive] {
        assert_eq!(first.excerpts(&target, depth), second.excerpts(&target, depth));
    }
}

#[test]
fn test_package_and_imports_never_appear() {
    let set = source_set(&fixture_stack());
    let (code, _) = set.excerpts(&ExcerptTarget::new(["SliceStack"]), ClosureDepth::Transitive);
    assert_excludes(&code, "package stack");
    assert_excludes(&code, "import");
    assert_excludes(&set.code(), "import \"testing\"");
    assert!(set.code().starts_with("func BenchmarkSliceStack_push("));
}

const GROUPED_TYPES: &str = r#"package queue

import "testing"

type (
	FastQueue struct{ items []int }
	SlowQueue struct{ items []int }
)

func (q *FastQueue) push(v int) { q.items = append(q.items, v) }

func (SlowQueue) drainSlowly() {}

func BenchmarkFastQueue_push(b *testing.B) {
	q := &FastQueue{}
	for i := 0; i < b.N; i++ {
		q.push(i)
	}
}
"#;

#[test]
fn test_grouped_types_only_pull_methods_of_named_type() {
    let set = source_set(GROUPED_TYPES);
    let target = ExcerptTarget::new(["FastQueue"]);

    for depth in [ClosureDepth::OneHop, ClosureDepth::Transitive] {
        let (code, _) = set.excerpts(&target, depth);
        assert_in_order(
            &code,
            &[
                "type (",
                "func (q *FastQueue) push(",
                "func BenchmarkFastQueue_push(",
            ],
        );
        assert_excludes(&code, "drainSlowly");
    }
}
