//! Generator configuration
//!
//! Fixed sidecar file names, source selection and processing switches.
//! Defaults match the layout produced by the benchmark runner:
//!
//! ```text
//! benchmarks/
//!   counter/
//!     _bench.out      <- raw `go test -bench` output (all runs)
//!     _meta.yml       <- optional metadata sidecar
//!     *_test.go       <- benchmark sources
//!     _bench.json     <- generated document
//! ```

pub mod error;
pub mod io;

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use error::{ConfigError, ConfigResult};
use io::{ConfigExportV1, FileNames};

/// How far excerpt selection follows references out of benchmark functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosureDepth {
    /// Only declarations referenced directly by the benchmark bodies
    #[default]
    OneHop,
    /// Fixed point over references of every included declaration
    Transitive,
}

impl FromStr for ClosureDepth {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-hop" | "onehop" => Ok(ClosureDepth::OneHop),
            "transitive" => Ok(ClosureDepth::Transitive),
            other => Err(ConfigError::UnknownClosure(other.to_string())),
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Report file inside each group directory
    pub report_file: String,
    /// Optional metadata sidecar inside each group directory
    pub meta_file: String,
    /// Output document written next to the sources
    pub output_file: String,
    /// Extension (without dot) of source files scanned for declarations
    pub source_extension: String,
    pub closure: ClosureDepth,
    /// Pretty-print output documents
    pub pretty: bool,
    /// Process groups on the rayon pool (output order is unchanged)
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            report_file: "_bench.out".to_string(),
            meta_file: "_meta.yml".to_string(),
            output_file: "_bench.json".to_string(),
            source_extension: "go".to_string(),
            closure: ClosureDepth::OneHop,
            pretty: true,
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report_file(mut self, name: impl Into<String>) -> Self {
        self.report_file = name.into();
        self
    }

    pub fn meta_file(mut self, name: impl Into<String>) -> Self {
        self.meta_file = name.into();
        self
    }

    pub fn output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = name.into();
        self
    }

    pub fn source_extension(mut self, ext: impl Into<String>) -> Self {
        self.source_extension = ext.into();
        self
    }

    pub fn closure(mut self, closure: ClosureDepth) -> Self {
        self.closure = closure;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check file names stay inside the group directory
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("report_file", &self.report_file),
            ("meta_file", &self.meta_file),
            ("output_file", &self.output_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidFileName {
                    field: field.to_string(),
                    value: value.clone(),
                    hint: "File names must not be empty.".to_string(),
                });
            }
            if value.contains('/') || value.contains('\\') || value == ".." || value == "." {
                return Err(ConfigError::InvalidFileName {
                    field: field.to_string(),
                    value: value.clone(),
                    hint: "Use a plain file name; it is resolved inside each group directory."
                        .to_string(),
                });
            }
        }

        if self.source_extension.trim_start_matches('.').is_empty() {
            return Err(ConfigError::EmptyExtension);
        }

        Ok(())
    }

    /// Source extension without a leading dot
    pub fn extension(&self) -> &str {
        self.source_extension.trim_start_matches('.')
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        if export.version != 1 {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: vec![1],
            });
        }

        let mut config = Self::default();

        if let Some(files) = export.files {
            if let Some(report) = files.report {
                config.report_file = report;
            }
            if let Some(meta) = files.meta {
                config.meta_file = meta;
            }
            if let Some(output) = files.output {
                config.output_file = output;
            }
            if let Some(ext) = files.source_extension {
                config.source_extension = ext;
            }
        }
        if let Some(closure) = export.closure {
            config.closure = closure;
        }
        if let Some(pretty) = export.pretty {
            config.pretty = pretty;
        }
        if let Some(parallel) = export.parallel {
            config.parallel = parallel;
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML (v1 schema, every field explicit)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: 1,
            files: Some(FileNames {
                report: Some(self.report_file.clone()),
                meta: Some(self.meta_file.clone()),
                output: Some(self.output_file.clone()),
                source_extension: Some(self.source_extension.clone()),
            }),
            closure: Some(self.closure),
            pretty: Some(self.pretty),
            parallel: Some(self.parallel),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}
