// src/command/spec.rs

//! Typed description of a single `audiowaveform` invocation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

/// Sample resolution of the generated waveform data (`-b`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum BitDepth {
    Eight,
    Sixteen,
}

impl BitDepth {
    /// Numeric value passed to the tool.
    pub fn as_u8(self) -> u8 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            other => Err(format!("invalid bit depth: {other} (expected 8 or 16)")),
        }
    }
}

impl FromStr for BitDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid bit depth: {s} (expected 8 or 16)"))?;
        BitDepth::try_from(value)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Built-in palette used when rendering an image (`--colors`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchema {
    Audacity,
    Audition,
}

impl ColorSchema {
    pub fn token(self) -> &'static str {
        match self {
            ColorSchema::Audacity => "audacity",
            ColorSchema::Audition => "audition",
        }
    }
}

impl FromStr for ColorSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "audacity" => Ok(ColorSchema::Audacity),
            "audition" => Ok(ColorSchema::Audition),
            other => Err(format!(
                "invalid color schema: {other} (expected \"audacity\" or \"audition\")"
            )),
        }
    }
}

impl fmt::Display for ColorSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Immutable parameter set for one run of the tool.
///
/// Construct it with [`CommandSpec::builder`]. Building never fails; the
/// required `input`/`output` fields are checked when the spec is rendered
/// (see [`crate::command::render`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandSpec {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    bits: Option<BitDepth>,
    colors: Option<ColorSchema>,
    amplitude_scale: Option<String>,
    width: Option<i64>,
    height: Option<i64>,
    start: Option<f64>,
    zoom: Vec<u32>,
    hide_axis_labels: bool,
    split_channels: bool,
}

impl CommandSpec {
    pub fn builder() -> CommandSpecBuilder {
        CommandSpecBuilder::default()
    }

    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// Destination file. Its extension decides whether the tool writes
    /// waveform data or an image; this crate does not check it.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn bits(&self) -> Option<BitDepth> {
        self.bits
    }

    pub fn colors(&self) -> Option<ColorSchema> {
        self.colors
    }

    pub fn amplitude_scale(&self) -> Option<&str> {
        self.amplitude_scale.as_deref()
    }

    pub fn width(&self) -> Option<i64> {
        self.width
    }

    pub fn height(&self) -> Option<i64> {
        self.height
    }

    pub fn start(&self) -> Option<f64> {
        self.start
    }

    pub fn zoom(&self) -> &[u32] {
        &self.zoom
    }

    pub fn hide_axis_labels(&self) -> bool {
        self.hide_axis_labels
    }

    pub fn split_channels(&self) -> bool {
        self.split_channels
    }
}

/// Fluent builder for [`CommandSpec`].
#[derive(Debug, Clone, Default)]
pub struct CommandSpecBuilder {
    spec: CommandSpec,
}

impl CommandSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.spec.input = Some(path.into());
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.spec.output = Some(path.into());
        self
    }

    pub fn bits(mut self, bits: BitDepth) -> Self {
        self.spec.bits = Some(bits);
        self
    }

    pub fn colors(mut self, colors: ColorSchema) -> Self {
        self.spec.colors = Some(colors);
        self
    }

    /// Passed to the tool verbatim, e.g. `"auto"` or `"1.5"`.
    pub fn amplitude_scale(mut self, scale: impl Into<String>) -> Self {
        self.spec.amplitude_scale = Some(scale.into());
        self
    }

    pub fn width(mut self, width: i64) -> Self {
        self.spec.width = Some(width);
        self
    }

    pub fn height(mut self, height: i64) -> Self {
        self.spec.height = Some(height);
        self
    }

    /// Start offset in seconds.
    pub fn start(mut self, seconds: f64) -> Self {
        self.spec.start = Some(seconds);
        self
    }

    /// Append one zoom level; each one becomes its own `-z` flag.
    pub fn add_zoom(mut self, samples_per_pixel: u32) -> Self {
        self.spec.zoom.push(samples_per_pixel);
        self
    }

    pub fn zoom_levels(mut self, levels: impl IntoIterator<Item = u32>) -> Self {
        self.spec.zoom.extend(levels);
        self
    }

    pub fn hide_axis_labels(mut self) -> Self {
        self.spec.hide_axis_labels = true;
        self
    }

    pub fn split_channels(mut self) -> Self {
        self.spec.split_channels = true;
        self
    }

    pub fn build(self) -> CommandSpec {
        self.spec
    }
}
