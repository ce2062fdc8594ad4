mod line_lexer;
mod report_parser;

pub use line_lexer::{header, LineError, MeasurementLexer};
pub use report_parser::ReportParser;
