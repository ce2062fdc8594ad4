//! Declaration models
//!
//! One [`Declaration`] per top-level Go declaration (package clause and
//! imports excluded), carrying its verbatim text and the identifiers it uses.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Top-level declaration kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// `type` declaration; a grouped `type ( ... )` names several types
    Type,
    /// Function with a receiver, bound to the receiver's base type name
    Method { receiver: String },
    /// Free function
    Function,
    /// `const` declaration
    Const,
    /// `var` declaration
    Var,
}

/// A top-level declaration of one source file
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub kind: DeclKind,

    /// Declared names (types, consts and vars may declare several)
    pub names: Vec<String>,

    /// Verbatim source, including doc comments directly above
    pub text: String,

    /// Identifiers referenced by the declaration, minus its own names
    pub references: BTreeSet<String>,

    /// 1-based line of the declaration keyword
    pub line: usize,
}

impl Declaration {
    /// Primary name (first declared name, or empty for `var _ = ...`)
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    pub fn is_type(&self) -> bool {
        matches!(self.kind, DeclKind::Type)
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, DeclKind::Function)
    }

    pub fn is_const(&self) -> bool {
        matches!(self.kind, DeclKind::Const)
    }

    pub fn receiver(&self) -> Option<&str> {
        match &self.kind {
            DeclKind::Method { receiver } => Some(receiver),
            _ => None,
        }
    }
}

/// Declarations of one source file, in file order
#[derive(Debug, Clone, Default)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub declarations: Vec<Declaration>,

    /// File text with the package clause and imports removed
    pub body: String,
}

/// Names a benchmark excerpt is requested for
///
/// A function belongs to the target when its name is `Benchmark<stem>` or
/// starts with `Benchmark<stem>_` for one of the stems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcerptTarget {
    stems: Vec<String>,
}

impl ExcerptTarget {
    pub fn new<I, S>(stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut target = Self::default();
        for stem in stems {
            target.push(stem);
        }
        target
    }

    /// Add a stem, ignoring duplicates
    ///
    /// A `-N` CPU suffix left on a stem by an identifier without `_` is
    /// dropped; Go function names never contain `-`.
    pub fn push(&mut self, stem: impl Into<String>) {
        let stem = stem.into();
        let stem = without_cpu_suffix(&stem);
        if !self.stems.iter().any(|s| s == stem) {
            self.stems.push(stem.to_string());
        }
    }

    pub fn stems(&self) -> &[String] {
        &self.stems
    }

    pub fn matches(&self, function_name: &str) -> bool {
        let Some(rest) = function_name.strip_prefix(BENCHMARK_PREFIX) else {
            return false;
        };
        self.stems.iter().any(|stem| match rest.strip_prefix(stem.as_str()) {
            Some(tail) => tail.is_empty() || tail.starts_with('_'),
            None => false,
        })
    }
}

fn without_cpu_suffix(stem: &str) -> &str {
    match stem.rsplit_once('-') {
        Some((head, tail)) if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) => {
            head
        }
        _ => stem,
    }
}

pub const BENCHMARK_PREFIX: &str = "Benchmark";

/// Whether a function is a Go benchmark entry point
pub fn is_benchmark_function(name: &str) -> bool {
    name.starts_with(BENCHMARK_PREFIX)
}
