// src/command/mod.rs

//! Command description and argument rendering.
//!
//! - [`spec`] holds the immutable [`CommandSpec`] and its builder.
//! - [`render`] validates a spec and flattens it into process arguments.

pub mod render;
pub mod spec;

pub use render::render;
pub use spec::{BitDepth, ColorSchema, CommandSpec, CommandSpecBuilder};
