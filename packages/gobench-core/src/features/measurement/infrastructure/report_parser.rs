//! Benchmark report parser
//!
//! Reads the header block and every measurement line of a report. Output of
//! several runs may be concatenated in one file; only the leading header
//! block populates [`SystemInfo`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::line_lexer::{header, LineError, MeasurementLexer};
use crate::errors::{GobenchError, Result};
use crate::features::measurement::domain::{MeasurementSet, SystemInfo};

pub struct ReportParser;

impl ReportParser {
    /// Parse a report file
    ///
    /// Unreadable input is an error; malformed or non-UTF-8 lines are not.
    pub fn parse_file(path: &Path) -> Result<MeasurementSet> {
        let file = File::open(path).map_err(|e| GobenchError::io(path, e))?;
        Self::parse_reader(BufReader::new(file)).map_err(|e| GobenchError::io(path, e))
    }

    pub fn parse_reader<R: BufRead>(mut reader: R) -> std::io::Result<MeasurementSet> {
        let mut parser = LineState::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            match std::str::from_utf8(&buf) {
                Ok(line) => parser.feed(line.trim_end_matches(['\n', '\r'])),
                Err(e) => {
                    debug!(error = %e, "skipping non-UTF-8 report line");
                    parser.set.skipped_lines += 1;
                }
            }
        }
        Ok(parser.finish())
    }

    pub fn parse_str(text: &str) -> MeasurementSet {
        let mut parser = LineState::default();
        for line in text.lines() {
            parser.feed(line);
        }
        parser.finish()
    }
}

#[derive(Default)]
struct LineState {
    system: SystemInfo,
    set: MeasurementSet,
    header_done: bool,
    ord: usize,
}

impl LineState {
    fn feed(&mut self, line: &str) {
        if !self.header_done {
            if let Some((key, value)) = header(line) {
                self.system.apply_header(key, value);
                return;
            }
            self.header_done = true;
        }

        match MeasurementLexer::new(line).record(self.ord) {
            Ok(record) => {
                self.ord += 1;
                self.set.push(record);
            }
            Err(LineError::NotABenchmark) => {}
            Err(reason) => {
                debug!(line = %line, reason = ?reason, "skipping malformed measurement line");
                self.set.skipped_lines += 1;
            }
        }
    }

    fn finish(mut self) -> MeasurementSet {
        self.set.system = self.system;
        self.set
    }
}
