// src/command/render.rs

//! Turn a [`CommandSpec`] into the argument list handed to the tool.
//!
//! Token order is fixed:
//!
//! ```text
//! -i <input> -o <output> [-b bits] [--colors schema] [--amplitude-scale s]
//! [-w width] [-h height] [-s start] [-z level]... [--no-axis-labels]
//! [--split-channels]
//! ```

use std::path::Path;

use crate::command::spec::CommandSpec;
use crate::errors::{Result, WaveformError};

pub const INPUT_FLAG: &str = "-i";
pub const OUTPUT_FLAG: &str = "-o";
pub const BITS_FLAG: &str = "-b";
pub const COLORS_FLAG: &str = "--colors";
pub const AMPLITUDE_SCALE_FLAG: &str = "--amplitude-scale";
pub const WIDTH_FLAG: &str = "-w";
pub const HEIGHT_FLAG: &str = "-h";
pub const START_FLAG: &str = "-s";
pub const ZOOM_FLAG: &str = "-z";
pub const NO_AXIS_LABELS_FLAG: &str = "--no-axis-labels";
pub const SPLIT_CHANNELS_FLAG: &str = "--split-channels";

/// Render `spec` into discrete process arguments.
///
/// Fails with [`WaveformError::MissingRequiredField`] before appending
/// anything if `input` or `output` is absent or empty. Numeric fields are
/// not range-checked; the tool rejects values it cannot handle.
pub fn render(spec: &CommandSpec) -> Result<Vec<String>> {
    let input = required(spec.input(), "input")?;
    let output = required(spec.output(), "output")?;

    let mut args = Vec::with_capacity(4 + 2 * spec.zoom().len());

    push_pair(&mut args, INPUT_FLAG, path_arg(input));
    push_pair(&mut args, OUTPUT_FLAG, path_arg(output));

    if let Some(bits) = spec.bits() {
        push_pair(&mut args, BITS_FLAG, bits.to_string());
    }
    if let Some(colors) = spec.colors() {
        push_pair(&mut args, COLORS_FLAG, colors.token().to_string());
    }
    if let Some(scale) = spec.amplitude_scale() {
        push_pair(&mut args, AMPLITUDE_SCALE_FLAG, scale.to_string());
    }
    if let Some(width) = spec.width() {
        push_pair(&mut args, WIDTH_FLAG, width.to_string());
    }
    if let Some(height) = spec.height() {
        push_pair(&mut args, HEIGHT_FLAG, height.to_string());
    }
    if let Some(start) = spec.start() {
        push_pair(&mut args, START_FLAG, start.to_string());
    }
    for level in spec.zoom() {
        push_pair(&mut args, ZOOM_FLAG, level.to_string());
    }
    if spec.hide_axis_labels() {
        args.push(NO_AXIS_LABELS_FLAG.to_string());
    }
    if spec.split_channels() {
        args.push(SPLIT_CHANNELS_FLAG.to_string());
    }

    Ok(args)
}

fn required<'a>(path: Option<&'a Path>, field: &'static str) -> Result<&'a Path> {
    match path {
        Some(p) if !p.as_os_str().is_empty() => Ok(p),
        _ => Err(WaveformError::MissingRequiredField(field)),
    }
}

fn push_pair(args: &mut Vec<String>, flag: &str, value: String) {
    args.push(flag.to_string());
    args.push(value);
}

/// Absolute form of `path`; the file does not have to exist.
///
/// Falls back to the path as given if the working directory is unavailable.
pub fn path_arg(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}
