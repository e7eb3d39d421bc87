// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Only [`WaveformError::MissingRequiredField`] (and the config/CLI variants)
//! ever reach a caller of [`crate::waveform::AudioWaveform::run`]. Launch,
//! interruption and timeout failures are folded into a `status = "false"`
//! result by the facade.

use std::io;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaveformError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Failed to launch or read from '{program}': {source}")]
    LaunchFailure {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Process execution interrupted")]
    ExecutionInterrupted,

    #[error("Process did not finish within {0:?}")]
    TimedOut(Duration),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaveformError {
    /// Build a [`WaveformError::LaunchFailure`] for the given program.
    pub fn launch(program: impl Into<String>, source: io::Error) -> Self {
        WaveformError::LaunchFailure {
            program: program.into(),
            source,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, WaveformError>;
