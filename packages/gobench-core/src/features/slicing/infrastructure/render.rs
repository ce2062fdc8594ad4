//! Excerpt rendering

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A newline followed by two or more blank (or whitespace-only) lines
    static ref BLANK_RUN: Regex = Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap();
}

/// Collapse blank-line runs to a single blank line and trim
pub fn normalize_source(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").trim().to_string()
}

/// Join declaration texts into an excerpt ending in one blank line
///
/// An excerpt without any declarations renders as the empty string.
pub fn render_excerpt<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = parts.into_iter().collect::<Vec<_>>().join("\n\n");
    let mut out = normalize_source(&joined);
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out
}
