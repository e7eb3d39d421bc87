// src/result/mod.rs

//! Diagnostic line parsing and the result map returned to callers.

pub mod map;
pub mod parse;

pub use map::{ResultMap, STATUS_KEY};
pub use parse::parse_lines;
