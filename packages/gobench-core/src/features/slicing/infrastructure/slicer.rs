//! Excerpt selection over a [`DeclarationGraph`]

use std::collections::{BTreeSet, VecDeque};

use tracing::debug;

use super::graph::{DeclEdge, DeclarationGraph};
use super::render::render_excerpt;
use crate::config::ClosureDepth;
use crate::features::slicing::domain::{DeclKind, ExcerptTarget, ParsedFile};

/// Selects the declarations one benchmark needs
///
/// Output order is always by declaration index, so identical inputs render
/// byte-identical excerpts.
pub struct ExcerptSlicer<'g> {
    graph: &'g DeclarationGraph,
    depth: ClosureDepth,
}

impl<'g> ExcerptSlicer<'g> {
    pub fn new(graph: &'g DeclarationGraph) -> Self {
        Self {
            graph,
            depth: ClosureDepth::default(),
        }
    }

    pub fn with_depth(mut self, depth: ClosureDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Free functions named `Benchmark<stem>` or `Benchmark<stem>_*`
    pub fn benchmark_indices(&self, target: &ExcerptTarget) -> BTreeSet<usize> {
        self.graph
            .declarations()
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_function() && target.matches(d.name()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Matched benchmark functions only
    pub fn benchmark_excerpt(&self, target: &ExcerptTarget) -> String {
        self.render(&self.benchmark_indices(target))
    }

    /// Types with their methods, then free functions, then the benchmarks
    ///
    /// A method is included only when its receiver type is named by a
    /// selected declaration.
    pub fn implementation_excerpt(&self, target: &ExcerptTarget) -> String {
        let benches = self.benchmark_indices(target);
        let (reached, type_names) = match self.depth {
            ClosureDepth::OneHop => self.one_hop(&benches),
            ClosureDepth::Transitive => self.transitive(&benches),
        };

        let mut context = BTreeSet::new();
        let mut helpers = BTreeSet::new();
        for index in reached {
            let Some(decl) = self.graph.get(index) else {
                continue;
            };
            match decl.kind {
                DeclKind::Type | DeclKind::Method { .. } => {
                    context.insert(index);
                }
                DeclKind::Function => {
                    helpers.insert(index);
                }
                DeclKind::Const | DeclKind::Var => {}
            }
        }
        for name in &type_names {
            context.extend(self.graph.methods_of_type(name));
        }

        debug!(
            stems = ?target.stems(),
            benchmarks = benches.len(),
            types = type_names.len(),
            context = context.len(),
            helpers = helpers.len(),
            "Selected excerpt declarations"
        );

        let texts: Vec<&str> = [context, helpers, benches]
            .iter()
            .flatten()
            .filter_map(|&i| self.graph.get(i))
            .map(|d| d.text.as_str())
            .collect();
        render_excerpt(texts)
    }

    fn one_hop(&self, benches: &BTreeSet<usize>) -> (BTreeSet<usize>, BTreeSet<&'g str>) {
        let graph = self.graph;
        let reached = benches
            .iter()
            .flat_map(|&b| graph.neighbors(b, DeclEdge::References))
            .collect();
        let type_names = benches
            .iter()
            .flat_map(|&b| graph.referenced_types(b))
            .collect();
        (reached, type_names)
    }

    /// Fixed point over references, following into methods of named types
    fn transitive(&self, benches: &BTreeSet<usize>) -> (BTreeSet<usize>, BTreeSet<&'g str>) {
        let graph = self.graph;
        let mut reached = BTreeSet::new();
        let mut type_names = BTreeSet::new();
        let mut queue: VecDeque<usize> = benches.iter().copied().collect();

        while let Some(index) = queue.pop_front() {
            let mut next = graph.neighbors(index, DeclEdge::References);
            for name in graph.referenced_types(index) {
                if type_names.insert(name) {
                    next.extend(graph.methods_of_type(name));
                }
            }
            for n in next {
                if !benches.contains(&n) && reached.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        (reached, type_names)
    }

    fn render(&self, indices: &BTreeSet<usize>) -> String {
        render_excerpt(
            indices
                .iter()
                .filter_map(|&i| self.graph.get(i))
                .map(|d| d.text.as_str()),
        )
    }
}

/// Constant declarations of one file, rendered like an excerpt
pub fn constant_block(file: &ParsedFile) -> String {
    render_excerpt(
        file.declarations
            .iter()
            .filter(|d| d.is_const())
            .map(|d| d.text.as_str()),
    )
}
