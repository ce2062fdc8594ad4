use super::camel_case::split_camel_case;
use crate::features::naming::domain::DecomposedName;

const BENCHMARK_PREFIX: &str = "Benchmark";

/// Tokens of a variation suffix; `_` and `-` separate like spaces
pub fn suffix_tokens(suffix: &str) -> Vec<&str> {
    suffix
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Identifier grammar:
///
/// ```text
/// identifier := "Benchmark" name_part ["_" suffix]
/// name_part  := Word+            (first word groups implementations)
/// suffix     := token ([_- ] token)* [[_- ] concurrency]
/// ```
///
/// Never fails; unusual identifiers degrade to empty names or labels.
pub struct IdentifierDecomposer;

impl IdentifierDecomposer {
    pub fn decompose(identifier: &str) -> DecomposedName {
        let stripped = identifier
            .strip_prefix(BENCHMARK_PREFIX)
            .unwrap_or(identifier);
        let (name_part, suffix) = stripped.split_once('_').unwrap_or((stripped, ""));

        let benchmark_name = split_camel_case(name_part)
            .into_iter()
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ");

        let mut tokens = suffix_tokens(suffix);
        let concurrency = match tokens.last().and_then(|t| t.parse::<u32>().ok()) {
            Some(level) if level > 0 => {
                tokens.pop();
                level
            }
            _ => 1,
        };

        DecomposedName {
            stem: name_part.to_string(),
            benchmark_name,
            variation_label: tokens.join(" "),
            concurrency,
        }
    }
}
