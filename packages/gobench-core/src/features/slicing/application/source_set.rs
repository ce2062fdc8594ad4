//! Source set use case
//!
//! Parses every source file of a group directory once and answers excerpt
//! queries against the shared declaration graph.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::ClosureDepth;
use crate::errors::{GobenchError, Result};
use crate::features::slicing::domain::{ExcerptTarget, ParsedFile};
use crate::features::slicing::infrastructure::{
    constant_block, normalize_source, render_excerpt, DeclarationGraph, ExcerptSlicer,
};
use crate::features::slicing::ports::SourceParser;

/// Parsed sources of one group directory
pub struct SourceSet {
    files: Vec<ParsedFile>,
    graph: DeclarationGraph,
}

impl SourceSet {
    /// Parse all files with `extension` below `dir`, in file-name order
    ///
    /// Any unreadable or unparsable file fails the whole set.
    pub fn load<P>(parser: &P, dir: &Path, extension: &str) -> Result<Self>
    where
        P: SourceParser + ?Sized,
    {
        let paths = discover_sources(dir, extension)?;
        let mut files = Vec::with_capacity(paths.len());
        for path in &paths {
            let source = std::fs::read_to_string(path).map_err(|e| GobenchError::io(path, e))?;
            files.push(parser.parse(&source, path)?);
        }

        debug!(
            dir = %dir.display(),
            language = parser.language_name(),
            files = files.len(),
            "Parsed group sources"
        );
        Ok(Self::from_files(files))
    }

    pub fn from_files(files: Vec<ParsedFile>) -> Self {
        let graph = DeclarationGraph::build(&files);
        Self { files, graph }
    }

    pub fn files(&self) -> &[ParsedFile] {
        &self.files
    }

    pub fn graph(&self) -> &DeclarationGraph {
        &self.graph
    }

    /// Whole group source without package clauses and imports
    pub fn code(&self) -> String {
        let rendered: Vec<String> = self
            .files
            .iter()
            .map(|file| render_excerpt([file.body.as_str()]))
            .collect();
        normalize_source(&rendered.concat())
    }

    /// Constant declarations of every file, concatenated
    pub fn constants(&self) -> String {
        self.files.iter().map(constant_block).collect()
    }

    /// (implementation excerpt, benchmark-only excerpt)
    pub fn excerpts(&self, target: &ExcerptTarget, depth: ClosureDepth) -> (String, String) {
        let slicer = ExcerptSlicer::new(&self.graph).with_depth(depth);
        (
            slicer.implementation_excerpt(target),
            slicer.benchmark_excerpt(target),
        )
    }
}

fn discover_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == extension)
        {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}
