// src/result/parse.rs

use std::collections::HashMap;

/// Fold the tool's output lines into a diagnostics map.
///
/// Each line is split on its first `:`; lines without one are progress
/// chatter and are skipped. Later duplicates overwrite earlier ones. Keys and
/// values are kept exactly as printed.
pub fn parse_lines<I, S>(lines: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut diagnostics = HashMap::new();
    for line in lines {
        if let Some((key, value)) = line.as_ref().split_once(':') {
            diagnostics.insert(key.to_string(), value.to_string());
        }
    }
    diagnostics
}
