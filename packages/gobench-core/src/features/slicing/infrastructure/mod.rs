//! Slicing infrastructure: Go parsing, declaration graph, excerpt rendering

mod go_parser;
mod graph;
mod render;
mod slicer;

pub use go_parser::{is_declaration, node_kinds, GoSourceParser};
pub use graph::{DeclEdge, DeclarationGraph};
pub use render::{normalize_source, render_excerpt};
pub use slicer::{constant_block, ExcerptSlicer};
