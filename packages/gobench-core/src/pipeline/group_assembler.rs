//! Group assembly
//!
//! Per group directory: report → variations → aggregated benchmarks, sources
//! → excerpts, sidecar → descriptions. Errors of one group become
//! diagnostics; only enumerating the root can fail the batch.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use super::document::{Benchmark, BenchmarkGroup};
use super::result::{BatchReport, Diagnostic, GroupOutcome, GroupStats};
use crate::config::GeneratorConfig;
use crate::errors::Result;
use crate::features::aggregation::{aggregate, Variation};
use crate::features::measurement::ReportParser;
use crate::features::metadata::{GroupMeta, MetaLoader};
use crate::features::slicing::{ExcerptTarget, GoSourceParser, SourceParser, SourceSet};

/// Builds [`BenchmarkGroup`]s from group directories
pub struct GroupAssembler<P: SourceParser = GoSourceParser> {
    config: GeneratorConfig,
    parser: P,
}

impl GroupAssembler<GoSourceParser> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_parser(config, GoSourceParser::new())
    }
}

impl<P: SourceParser> GroupAssembler<P> {
    pub fn with_parser(config: GeneratorConfig, parser: P) -> Self {
        Self { config, parser }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Process every group directory below `root`
    ///
    /// Fails only when `root` itself cannot be enumerated.
    pub fn process_root(&self, root: &Path) -> Result<BatchReport> {
        let dirs = discover_groups(root)?;
        info!(root = %root.display(), groups = dirs.len(), "Processing benchmark groups");

        let outcomes = self.run_groups(&dirs);

        let mut report = BatchReport::default();
        for (dir, outcome) in dirs.iter().zip(outcomes) {
            let name = dir_name(dir);
            match outcome {
                Ok(outcome) => {
                    for message in outcome.warnings {
                        report.diagnostics.push(Diagnostic::warning(&name, message));
                    }
                    report.stats += outcome.stats;
                    report.groups.push(outcome.group);
                }
                Err(e) => {
                    error!(group = %dir.display(), error = %e, "Skipping benchmark group");
                    report.diagnostics.push(Diagnostic::error(&name, e.to_string()));
                }
            }
        }

        info!(
            produced = report.groups.len(),
            skipped = report.skipped(),
            benchmarks = report.stats.benchmarks,
            variations = report.stats.variations,
            "Processed benchmark root"
        );
        Ok(report)
    }

    #[cfg(feature = "parallel")]
    fn run_groups(&self, dirs: &[PathBuf]) -> Vec<Result<GroupOutcome>> {
        use rayon::prelude::*;

        if self.config.parallel {
            // collect() on an indexed parallel iterator keeps input order
            return dirs.par_iter().map(|dir| self.assemble(dir)).collect();
        }
        dirs.iter().map(|dir| self.assemble(dir)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn run_groups(&self, dirs: &[PathBuf]) -> Vec<Result<GroupOutcome>> {
        dirs.iter().map(|dir| self.assemble(dir)).collect()
    }

    /// Build the document of one group directory
    pub fn assemble(&self, dir: &Path) -> Result<GroupOutcome> {
        let measurements = ReportParser::parse_file(&dir.join(&self.config.report_file))?;
        let sources = SourceSet::load(&self.parser, dir, self.config.extension())?;

        let mut warnings = Vec::new();
        let meta = self.load_meta(dir, &mut warnings);

        let mut stats = GroupStats {
            measurement_lines: measurements.record_count(),
            skipped_lines: measurements.skipped_lines,
            source_files: sources.files().len(),
            ..Default::default()
        };

        let mut by_name: BTreeMap<String, (ExcerptTarget, Vec<Variation>)> = BTreeMap::new();
        for (_, records) in measurements.iter() {
            for record in records {
                let variation = Variation::from_record(record.clone());
                let entry = by_name
                    .entry(variation.benchmark_name.clone())
                    .or_default();
                entry.0.push(variation.stem.clone());
                entry.1.push(variation);
                stats.raw_variations += 1;
            }
        }

        let mut benchmarks = Vec::with_capacity(by_name.len());
        for (name, (target, runs)) in by_name {
            let variations = aggregate(runs);
            let (benchmark_code, code) = sources.excerpts(&target, self.config.closure);
            if code.is_empty() {
                debug!(benchmark = %name, stems = ?target.stems(), "No benchmark functions found");
            }
            stats.variations += variations.len();

            benchmarks.push(Benchmark {
                description: meta.description_for(&name).unwrap_or_default().to_string(),
                name,
                benchmark_code,
                code,
                variations,
            });
        }
        stats.benchmarks = benchmarks.len();

        let dir_name = dir_name(dir);
        let group = BenchmarkGroup {
            dir: dir.to_path_buf(),
            name: meta.name_or(&dir_name).to_string(),
            headline: meta.headline.clone(),
            description: meta.description.clone(),
            tags: meta.tags.clone(),
            contributors: meta.contributors.clone(),
            system: measurements.system,
            benchmarks,
            code: sources.code(),
            constants: sources.constants(),
        };

        info!(
            group = %group.name,
            lines = stats.measurement_lines,
            skipped_lines = stats.skipped_lines,
            raw_variations = stats.raw_variations,
            variations = stats.variations,
            benchmarks = stats.benchmarks,
            "Assembled benchmark group"
        );

        Ok(GroupOutcome {
            group,
            warnings,
            stats,
        })
    }

    fn load_meta(&self, dir: &Path, warnings: &mut Vec<String>) -> GroupMeta {
        let path = dir.join(&self.config.meta_file);
        match MetaLoader::load(&path) {
            Ok(meta) => meta,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Metadata unavailable, using defaults");
                warnings.push(e.to_string());
                GroupMeta::default()
            }
        }
    }
}

/// Immediate subdirectories of `root` in file-name order, hidden ones skipped
fn discover_groups(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() && !entry.file_name().to_string_lossy().starts_with('.') {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
