// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs the external tool with `tokio::process::Command` and
//! hands back its merged output and exit code.
//!
//! - [`backend`] provides the `ProcessBackend` / `ChildHandle` traits and the
//!   production `TokioBackend`, which tests replace with a fake.
//! - [`runner`] drives one child through spawn, drain and wait, racing the
//!   wait against cancellation and an optional timeout.
//! - [`cancel`] holds the shared `CancelToken`.

pub mod backend;
pub mod cancel;
pub mod runner;

pub use backend::{BoxFuture, ChildHandle, ProcessBackend, TokioBackend};
pub use cancel::CancelToken;
pub use runner::{ExecOutput, ProcessRunner};
