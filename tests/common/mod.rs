#![allow(dead_code)]

use awf_wrap::command::{BitDepth, ColorSchema, CommandSpec};

pub use awf_wrap_test_utils::init_tracing;

pub const INPUT: &str = "awf-example-input.mp3";
pub const OUTPUT: &str = "awf-example-output.json";

/// Spec with every optional field set once.
pub fn full_spec() -> CommandSpec {
    CommandSpec::builder()
        .input(INPUT)
        .output(OUTPUT)
        .bits(BitDepth::Sixteen)
        .colors(ColorSchema::Audition)
        .amplitude_scale("auto")
        .height(100)
        .width(200)
        .start(50.0)
        .add_zoom(256)
        .hide_axis_labels()
        .split_channels()
        .build()
}

/// Absolute form of a relative test path, as the renderer emits it.
pub fn abs(path: &str) -> String {
    std::path::absolute(path)
        .unwrap()
        .to_string_lossy()
        .into_owned()
}
