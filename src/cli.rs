// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::command::{BitDepth, ColorSchema, CommandSpec};
use crate::config::{parse_duration, JobConfig};

/// Command-line arguments for `awf-wrap`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "awf-wrap",
    version,
    about = "Run audiowaveform jobs and report their diagnostics.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a config file (TOML) with `[tool]` and `[job.<name>]` sections.
    ///
    /// If omitted, `Awf.toml` is used when it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the audiowaveform executable.
    ///
    /// Overrides `[tool].path` and `AUDIOWAVEFORM_PATH`.
    #[arg(long, value_name = "PATH")]
    pub binary: Option<PathBuf>,

    /// Kill a run that takes longer than this (e.g. `30s`, `2m`).
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `AWF_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the argument list of each job without running anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Input audio file. Together with `--output`, runs a single job instead
    /// of the jobs from the config file.
    #[arg(short = 'i', long, value_name = "FILE", requires = "output")]
    pub input: Option<PathBuf>,

    /// Output file (`.dat`, `.json`, `.png`, ...).
    #[arg(short = 'o', long, value_name = "FILE", requires = "input")]
    pub output: Option<PathBuf>,

    /// Bit depth of waveform data (8 or 16).
    #[arg(short = 'b', long, value_name = "BITS", value_parser = parse_bits)]
    pub bits: Option<BitDepth>,

    /// Color scheme for rendered images (audacity, audition).
    #[arg(long, value_name = "SCHEME", value_parser = parse_colors)]
    pub colors: Option<ColorSchema>,

    /// Amplitude scale for rendered images (`auto` or a number).
    #[arg(long, value_name = "SCALE", allow_hyphen_values = true)]
    pub amplitude_scale: Option<String>,

    /// Image width in pixels.
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Image height in pixels.
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// Start offset in seconds.
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Zoom level in samples per pixel; may be repeated.
    #[arg(short = 'z', long = "zoom", value_name = "LEVEL")]
    pub zoom: Vec<u32>,

    /// Do not render axis labels.
    #[arg(long)]
    pub no_axis_labels: bool,

    /// Render one waveform per channel.
    #[arg(long)]
    pub split_channels: bool,
}

impl CliArgs {
    /// The ad-hoc job described by the job flags, if `--input`/`--output`
    /// were given.
    pub fn job_spec(&self) -> Option<CommandSpec> {
        let (input, output) = match (&self.input, &self.output) {
            (Some(i), Some(o)) => (i.clone(), o.clone()),
            _ => return None,
        };

        Some(self.job_config(input, output).to_spec())
    }

    fn job_config(&self, input: PathBuf, output: PathBuf) -> JobConfig {
        JobConfig {
            input,
            output,
            bits: self.bits,
            colors: self.colors,
            amplitude_scale: self.amplitude_scale.clone(),
            width: self.width,
            height: self.height,
            start: self.start,
            zoom: self.zoom.clone(),
            hide_axis_labels: self.no_axis_labels,
            split_channels: self.split_channels,
        }
    }
}

fn parse_bits(s: &str) -> Result<BitDepth, String> {
    s.parse()
}

fn parse_colors(s: &str) -> Result<ColorSchema, String> {
    s.parse()
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
