//! Go source → top-level declarations (tree-sitter-go)

use std::collections::BTreeSet;
use std::ops::Range;
use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::errors::{GobenchError, Result};
use crate::features::slicing::domain::{DeclKind, Declaration, ParsedFile};
use crate::features::slicing::ports::SourceParser;

/// Go node kinds for quick lookup
pub mod node_kinds {
    pub const PACKAGE_CLAUSE: &str = "package_clause";
    pub const IMPORT_DECLARATION: &str = "import_declaration";
    pub const FUNCTION_DECLARATION: &str = "function_declaration";
    pub const METHOD_DECLARATION: &str = "method_declaration";
    pub const TYPE_DECLARATION: &str = "type_declaration";
    pub const TYPE_SPEC: &str = "type_spec";
    pub const TYPE_ALIAS: &str = "type_alias";
    pub const CONST_DECLARATION: &str = "const_declaration";
    pub const CONST_SPEC: &str = "const_spec";
    pub const VAR_DECLARATION: &str = "var_declaration";
    pub const VAR_SPEC: &str = "var_spec";
    pub const VAR_SPEC_LIST: &str = "var_spec_list";
    pub const PARAMETER_DECLARATION: &str = "parameter_declaration";
    pub const COMMENT: &str = "comment";
    pub const IDENTIFIER: &str = "identifier";
    pub const TYPE_IDENTIFIER: &str = "type_identifier";
    pub const QUALIFIED_TYPE: &str = "qualified_type";
    pub const POINTER_TYPE: &str = "pointer_type";
    pub const GENERIC_TYPE: &str = "generic_type";
    pub const PARENTHESIZED_TYPE: &str = "parenthesized_type";
}

/// Check if a top-level node kind becomes a [`Declaration`]
pub fn is_declaration(kind: &str) -> bool {
    matches!(
        kind,
        node_kinds::FUNCTION_DECLARATION
            | node_kinds::METHOD_DECLARATION
            | node_kinds::TYPE_DECLARATION
            | node_kinds::CONST_DECLARATION
            | node_kinds::VAR_DECLARATION
    )
}

/// Go parser backed by tree-sitter-go
///
/// A fresh tree-sitter parser is created per file, so one instance can be
/// shared across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoSourceParser;

impl GoSourceParser {
    pub fn new() -> Self {
        Self
    }

    fn syntax_tree(source: &str, path: &Path) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .map_err(|e| GobenchError::parse(path, 0, format!("Failed to set language: {}", e)))?;

        parser
            .parse(source, None)
            .ok_or_else(|| GobenchError::parse(path, 0, "Failed to parse content"))
    }
}

impl SourceParser for GoSourceParser {
    fn parse(&self, source: &str, path: &Path) -> Result<ParsedFile> {
        let tree = Self::syntax_tree(source, path)?;
        let root = tree.root_node();

        if let Some(bad) = first_error(root) {
            let message = if bad.is_missing() {
                format!("missing {}", bad.kind())
            } else {
                "syntax error".to_string()
            };
            return Err(GobenchError::parse(
                path,
                bad.start_position().row + 1,
                message,
            ));
        }

        let bytes = source.as_bytes();
        let mut spans: Vec<DeclSpan> = Vec::new();
        let mut excluded: Vec<Range<usize>> = Vec::new();
        let mut comments: Option<CommentRun> = None;
        let mut trailing_row: Option<usize> = None;

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            let kind = child.kind();
            let start_row = child.start_position().row;

            if kind == node_kinds::COMMENT {
                // `x := 1 // note` stays with its declaration
                if trailing_row == Some(start_row) {
                    if let Some(span) = spans.last_mut() {
                        span.end = child.end_byte();
                    }
                    continue;
                }
                trailing_row = None;
                comments = Some(match comments {
                    Some(run) if run.end_row + 1 == start_row => CommentRun {
                        start: run.start,
                        end_row: child.end_position().row,
                    },
                    _ => CommentRun {
                        start: child.start_byte(),
                        end_row: child.end_position().row,
                    },
                });
                continue;
            }

            if kind == node_kinds::PACKAGE_CLAUSE || kind == node_kinds::IMPORT_DECLARATION {
                excluded.push(child.byte_range());
                comments = None;
                trailing_row = None;
                continue;
            }

            if !is_declaration(kind) {
                comments = None;
                trailing_row = None;
                continue;
            }

            let start = match comments.take() {
                Some(run) if run.end_row + 1 == start_row => run.start,
                _ => child.start_byte(),
            };
            spans.push(DeclSpan {
                node: child,
                start,
                end: child.end_byte(),
            });
            trailing_row = Some(child.end_position().row);
        }

        let declarations = spans
            .iter()
            .map(|span| build_declaration(span, source, bytes))
            .collect();

        Ok(ParsedFile {
            path: path.to_path_buf(),
            declarations,
            body: without_ranges(source, &excluded),
        })
    }

    fn language_name(&self) -> &'static str {
        "go"
    }
}

struct DeclSpan<'tree> {
    node: Node<'tree>,
    start: usize,
    end: usize,
}

#[derive(Clone, Copy)]
struct CommentRun {
    start: usize,
    end_row: usize,
}

fn build_declaration(span: &DeclSpan<'_>, source: &str, bytes: &[u8]) -> Declaration {
    let node = span.node;
    let (kind, names) = match node.kind() {
        node_kinds::FUNCTION_DECLARATION => (DeclKind::Function, field_text(node, "name", bytes)),
        node_kinds::METHOD_DECLARATION => {
            let receiver = node
                .child_by_field_name("receiver")
                .and_then(|r| receiver_type(r, bytes))
                .unwrap_or_default();
            (DeclKind::Method { receiver }, field_text(node, "name", bytes))
        }
        node_kinds::TYPE_DECLARATION => (DeclKind::Type, type_names(node, bytes)),
        node_kinds::CONST_DECLARATION => {
            let mut names = Vec::new();
            spec_names(node, node_kinds::CONST_SPEC, bytes, &mut names);
            (DeclKind::Const, names)
        }
        _ => {
            let mut names = Vec::new();
            spec_names(node, node_kinds::VAR_SPEC, bytes, &mut names);
            (DeclKind::Var, names)
        }
    };

    let mut references = BTreeSet::new();
    collect_identifiers(node, bytes, &mut references);
    for name in &names {
        references.remove(name);
    }

    Declaration {
        kind,
        names,
        text: source.get(span.start..span.end).unwrap_or_default().to_string(),
        references,
        line: node.start_position().row + 1,
    }
}

fn field_text(node: Node<'_>, field: &str, bytes: &[u8]) -> Vec<String> {
    node.child_by_field_name(field)
        .and_then(|n| n.utf8_text(bytes).ok())
        .map(|text| vec![text.to_string()])
        .unwrap_or_default()
}

fn type_names(node: Node<'_>, bytes: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() == node_kinds::TYPE_SPEC || c.kind() == node_kinds::TYPE_ALIAS)
        .flat_map(|spec| field_text(spec, "name", bytes))
        .collect()
}

fn spec_names(node: Node<'_>, spec_kind: &str, bytes: &[u8], names: &mut Vec<String>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == spec_kind {
            let mut name_cursor = child.walk();
            for name in child.children_by_field_name("name", &mut name_cursor) {
                if let Ok(text) = name.utf8_text(bytes) {
                    names.push(text.to_string());
                }
            }
        } else if child.kind() == node_kinds::VAR_SPEC_LIST {
            spec_names(child, spec_kind, bytes, names);
        }
    }
}

/// Base type name of a method receiver: `(s *Stack[T])` → `Stack`
fn receiver_type(receiver: Node<'_>, bytes: &[u8]) -> Option<String> {
    let mut cursor = receiver.walk();
    let param = receiver
        .named_children(&mut cursor)
        .find(|c| c.kind() == node_kinds::PARAMETER_DECLARATION)?;
    base_type_name(param.child_by_field_name("type")?, bytes)
}

fn base_type_name(node: Node<'_>, bytes: &[u8]) -> Option<String> {
    match node.kind() {
        node_kinds::TYPE_IDENTIFIER => node.utf8_text(bytes).ok().map(str::to_string),
        node_kinds::GENERIC_TYPE => base_type_name(node.child_by_field_name("type")?, bytes),
        node_kinds::POINTER_TYPE | node_kinds::PARENTHESIZED_TYPE => {
            base_type_name(node.named_child(0)?, bytes)
        }
        _ => None,
    }
}

/// Identifiers that may name a package-level declaration
///
/// Field and package identifiers have their own node kinds; the type name of
/// `pkg.T` is skipped since it lives in another package.
fn collect_identifiers(node: Node<'_>, bytes: &[u8], out: &mut BTreeSet<String>) {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        let kind = current.kind();
        if kind == node_kinds::IDENTIFIER
            || (kind == node_kinds::TYPE_IDENTIFIER && !is_qualified_name(current))
        {
            if let Ok(text) = current.utf8_text(bytes) {
                out.insert(text.to_string());
            }
        }

        let mut cursor = current.walk();
        stack.extend(current.named_children(&mut cursor));
    }
}

fn is_qualified_name(node: Node<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| parent.kind() == node_kinds::QUALIFIED_TYPE)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn without_ranges(source: &str, excluded: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut pos = 0;
    for range in excluded {
        out.push_str(source.get(pos..range.start).unwrap_or_default());
        pos = range.end;
    }
    out.push_str(source.get(pos..).unwrap_or_default());
    out
}
