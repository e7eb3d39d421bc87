// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::command::{BitDepth, ColorSchema, CommandSpec};
use crate::config::duration::parse_duration;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [tool]
/// path = "/usr/local/bin/audiowaveform"
/// timeout = "30s"
///
/// [job.summary]
/// input = "sample.mp3"
/// output = "sample.json"
/// bits = 8
/// zoom = [256, 2048]
/// ```
///
/// Every section is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub tool: ToolSection,

    /// Jobs from `[job.<name>]`, keyed by name.
    #[serde(default)]
    pub job: BTreeMap<String, JobConfig>,
}

/// Configuration that has passed validation.
///
/// Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub tool: ToolSection,
    pub job: BTreeMap<String, JobConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(tool: ToolSection, job: BTreeMap<String, JobConfig>) -> Self {
        Self { tool, job }
    }

    /// Parsed `[tool].timeout`, if set.
    pub fn timeout(&self) -> Option<Duration> {
        self.tool
            .timeout
            .as_deref()
            .and_then(|s| parse_duration(s).ok())
    }
}

/// `[tool]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolSection {
    /// Path to the `audiowaveform` executable.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Kill a run that takes longer than this, e.g. `"30s"` or `"2m"`.
    #[serde(default)]
    pub timeout: Option<String>,
}

/// `[job.<name>]` section: one invocation of the tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobConfig {
    pub input: PathBuf,
    pub output: PathBuf,

    #[serde(default)]
    pub bits: Option<BitDepth>,

    #[serde(default)]
    pub colors: Option<ColorSchema>,

    #[serde(default)]
    pub amplitude_scale: Option<String>,

    #[serde(default)]
    pub width: Option<i64>,

    #[serde(default)]
    pub height: Option<i64>,

    #[serde(default)]
    pub start: Option<f64>,

    #[serde(default)]
    pub zoom: Vec<u32>,

    #[serde(default)]
    pub hide_axis_labels: bool,

    #[serde(default)]
    pub split_channels: bool,
}

impl JobConfig {
    pub fn to_spec(&self) -> CommandSpec {
        let mut builder = CommandSpec::builder()
            .input(&self.input)
            .output(&self.output)
            .zoom_levels(self.zoom.iter().copied());

        if let Some(bits) = self.bits {
            builder = builder.bits(bits);
        }
        if let Some(colors) = self.colors {
            builder = builder.colors(colors);
        }
        if let Some(ref scale) = self.amplitude_scale {
            builder = builder.amplitude_scale(scale.clone());
        }
        if let Some(width) = self.width {
            builder = builder.width(width);
        }
        if let Some(height) = self.height {
            builder = builder.height(height);
        }
        if let Some(start) = self.start {
            builder = builder.start(start);
        }
        if self.hide_axis_labels {
            builder = builder.hide_axis_labels();
        }
        if self.split_channels {
            builder = builder.split_channels();
        }

        builder.build()
    }
}
