//! Source parser port
//!
//! The declaration graph only needs declarations; any grammar that can
//! produce them plugs in here.

use std::path::Path;

use crate::errors::Result;
use crate::features::slicing::domain::ParsedFile;

/// Parser trait - source text to top-level declarations
pub trait SourceParser: Send + Sync {
    /// Parse one file; syntax errors fail the whole file
    fn parse(&self, source: &str, path: &Path) -> Result<ParsedFile>;

    /// Language name, for logs
    fn language_name(&self) -> &'static str;
}
