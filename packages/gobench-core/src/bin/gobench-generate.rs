//! gobench-generate CLI
//!
//! Turns every group directory below the benchmark root into a
//! `_bench.json` document.
//!
//! # Usage
//!
//! ```bash
//! # Process ../benchmarks with defaults
//! cargo run --bin gobench-generate --release
//!
//! # Follow helper calls transitively, check without writing
//! cargo run --bin gobench-generate -- -b benchmarks --transitive --dry-run
//! ```

use std::path::PathBuf;

use clap::Parser;
use gobench_core::{ClosureDepth, DocumentWriter, GeneratorConfig, GroupAssembler};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gobench-generate")]
#[command(about = "Generate benchmark documents from Go benchmark output and sources", long_about = None)]
struct Cli {
    /// Benchmark root; every subdirectory is one group
    #[arg(short, long, default_value = "../benchmarks")]
    benchmarks: PathBuf,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Include helpers of helpers in implementation excerpts
    #[arg(long)]
    transitive: bool,

    /// Process groups on the rayon pool
    #[arg(long)]
    parallel: bool,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,

    /// Process groups without writing documents
    #[arg(long)]
    dry_run: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn generator_config(&self) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_yaml(path)?,
            None => GeneratorConfig::default(),
        };
        if self.transitive {
            config = config.closure(ClosureDepth::Transitive);
        }
        if self.parallel {
            config = config.parallel(true);
        }
        if self.compact {
            config = config.pretty(false);
        }
        config.validate()?;
        Ok(config)
    }
}

/// `RUST_LOG` when set and valid, otherwise every target at info (or debug)
fn log_filter(rust_log: Option<&str>, debug: bool) -> EnvFilter {
    let level = if debug { "debug" } else { "info" };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), cli.debug))
        .with_writer(std::io::stderr)
        .init();

    let config = cli.generator_config()?;
    let assembler = GroupAssembler::new(config);
    let report = assembler.process_root(&cli.benchmarks)?;

    if report.skipped() > 0 {
        warn!(skipped = report.skipped(), "Some groups were skipped");
    }

    if cli.dry_run {
        info!(documents = report.groups.len(), "Dry run, nothing written");
        return Ok(());
    }

    DocumentWriter::from_config(assembler.config()).write_all(&report.groups)?;
    Ok(())
}
