// src/result/map.rs

use std::collections::HashMap;
use std::fmt;

pub const STATUS_KEY: &str = "status";

/// Outcome of one tool run: the tool's `key:value` diagnostics plus a
/// synthesized `status` entry (`"true"` or `"false"`).
///
/// `status` is the only source of truth for success. A run that could not be
/// launched and a run that exited non-zero both report `"false"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMap {
    entries: HashMap<String, String>,
}

impl ResultMap {
    /// Result of a run that reached the tool's exit. Diagnostics are kept
    /// regardless of `success`; a `status` key printed by the tool is
    /// overwritten.
    pub fn completed(mut diagnostics: HashMap<String, String>, success: bool) -> Self {
        diagnostics.insert(STATUS_KEY.to_string(), success.to_string());
        Self {
            entries: diagnostics,
        }
    }

    /// `{status: "false"}` with no diagnostics.
    pub fn degraded() -> Self {
        Self::completed(HashMap::new(), false)
    }

    pub fn status(&self) -> &str {
        self.entries
            .get(STATUS_KEY)
            .map(String::as_str)
            .unwrap_or("false")
    }

    pub fn is_success(&self) -> bool {
        self.status() == "true"
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.entries
    }
}

impl fmt::Display for ResultMap {
    /// One `key:value` line per entry, sorted by key.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:{}", key, self.entries[key])?;
        }
        Ok(())
    }
}
