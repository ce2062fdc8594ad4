//! Declaration graph with petgraph
//!
//! Nodes are the declarations of every source file of a group, indexed in
//! file-walk order. Edges:
//! - `References`: declaration → type or free function it names
//! - `BindsMethod`: type → method declared on it

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tracing::debug;

use crate::features::slicing::domain::{is_benchmark_function, Declaration, ParsedFile};

/// Edge kind of the declaration graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclEdge {
    References,
    BindsMethod,
}

/// Declarations of one group and their reference edges
pub struct DeclarationGraph {
    /// Node weight = position in `decls`
    graph: DiGraph<usize, DeclEdge>,

    decls: Vec<Declaration>,

    nodes: Vec<NodeIndex>,

    /// Type name → declaring type
    types: HashMap<String, usize>,

    /// Free function name → declaration (benchmarks excluded)
    functions: HashMap<String, usize>,
}

impl DeclarationGraph {
    /// Build the graph over files in walk order
    pub fn build(files: &[ParsedFile]) -> Self {
        let decls: Vec<Declaration> = files
            .iter()
            .flat_map(|file| file.declarations.iter().cloned())
            .collect();

        let mut graph = DiGraph::with_capacity(decls.len(), decls.len());
        let nodes: Vec<NodeIndex> = (0..decls.len()).map(|i| graph.add_node(i)).collect();

        let mut types = HashMap::new();
        let mut functions = HashMap::new();
        for (i, decl) in decls.iter().enumerate() {
            if decl.is_type() {
                for name in &decl.names {
                    types.entry(name.clone()).or_insert(i);
                }
            } else if decl.is_function() && !is_benchmark_function(decl.name()) {
                functions.entry(decl.name().to_string()).or_insert(i);
            }
        }

        for (i, decl) in decls.iter().enumerate() {
            if let Some(&owner) = decl.receiver().and_then(|r| types.get(r)) {
                graph.add_edge(nodes[owner], nodes[i], DeclEdge::BindsMethod);
            }

            if decl.is_const() {
                continue;
            }
            // BTreeSet iteration keeps edge insertion order stable
            for reference in &decl.references {
                let target = types.get(reference).or_else(|| functions.get(reference));
                if let Some(&target) = target {
                    if target != i {
                        graph.add_edge(nodes[i], nodes[target], DeclEdge::References);
                    }
                }
            }
        }

        debug!(
            declarations = decls.len(),
            types = types.len(),
            functions = functions.len(),
            edges = graph.edge_count(),
            "Built declaration graph"
        );

        Self {
            graph,
            decls,
            nodes,
            types,
            functions,
        }
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.decls
    }

    pub fn get(&self, index: usize) -> Option<&Declaration> {
        self.decls.get(index)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn type_index(&self, name: &str) -> Option<usize> {
        self.types.get(name).copied()
    }

    pub fn function_index(&self, name: &str) -> Option<usize> {
        self.functions.get(name).copied()
    }

    /// Outgoing neighbors of `index` along edges of `kind`
    pub fn neighbors(&self, index: usize, kind: DeclEdge) -> BTreeSet<usize> {
        let Some(&node) = self.nodes.get(index) else {
            return BTreeSet::new();
        };
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .filter(|edge| *edge.weight() == kind)
            .map(|edge| self.graph[edge.target()])
            .collect()
    }

    /// Methods declared on the type at `index`
    ///
    /// A grouped `type ( ... )` is one node, so this spans every type of the
    /// group; see [`Self::methods_of_type`].
    pub fn methods_of(&self, index: usize) -> BTreeSet<usize> {
        self.neighbors(index, DeclEdge::BindsMethod)
    }

    /// Methods whose receiver is exactly the type `name`
    pub fn methods_of_type(&self, name: &str) -> BTreeSet<usize> {
        let Some(index) = self.type_index(name) else {
            return BTreeSet::new();
        };
        self.methods_of(index)
            .into_iter()
            .filter(|&m| self.decls[m].receiver() == Some(name))
            .collect()
    }

    /// Names referenced by the declaration at `index` that resolve to types
    pub fn referenced_types(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.decls
            .get(index)
            .into_iter()
            .flat_map(|decl| decl.references.iter())
            .filter(|name| self.types.contains_key(name.as_str()))
            .map(String::as_str)
    }
}
