// tests/config_loading.rs

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::NamedTempFile;

use awf_wrap::command::{render, BitDepth, ColorSchema};
use awf_wrap::config::{load_and_validate, parse_duration};
use awf_wrap::errors::WaveformError;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn loads_tool_and_jobs() {
    let file = config_file(
        r#"
[tool]
path = "/usr/local/bin/audiowaveform"
timeout = "30s"

[job.summary]
input = "sample.mp3"
output = "sample.json"
bits = 8
zoom = [256, 2048]

[job.picture]
input = "sample.mp3"
output = "sample.png"
colors = "audition"
amplitude_scale = "auto"
width = 1920
height = 1080
start = 0
hide_axis_labels = true
split_channels = true
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(
        cfg.tool.path,
        Some(PathBuf::from("/usr/local/bin/audiowaveform"))
    );
    assert_eq!(cfg.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(cfg.job.len(), 2);

    let summary = cfg.job["summary"].to_spec();
    assert_eq!(summary.bits(), Some(BitDepth::Eight));
    assert_eq!(summary.zoom(), &[256u32, 2048]);
    assert_eq!(render(&summary).unwrap().len(), 10);

    let picture = cfg.job["picture"].to_spec();
    assert_eq!(picture.colors(), Some(ColorSchema::Audition));
    assert_eq!(picture.amplitude_scale(), Some("auto"));
    assert_eq!(picture.start(), Some(0.0));
    assert!(picture.hide_axis_labels());
    assert!(picture.split_channels());
    assert_eq!(render(&picture).unwrap().len(), 16);
}

#[test]
fn empty_config_is_valid() {
    let file = config_file("");
    let cfg = load_and_validate(file.path()).unwrap();

    assert!(cfg.job.is_empty());
    assert_eq!(cfg.tool.path, None);
    assert_eq!(cfg.timeout(), None);
}

#[test]
fn invalid_bit_depth_is_a_toml_error() {
    let file = config_file(
        r#"
[job.a]
input = "a.mp3"
output = "a.dat"
bits = 24
"#,
    );

    match load_and_validate(file.path()) {
        Err(WaveformError::TomlError(e)) => {
            assert!(e.to_string().contains("invalid bit depth"));
        }
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn missing_output_is_a_toml_error() {
    let file = config_file(
        r#"
[job.a]
input = "a.mp3"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(WaveformError::TomlError(_))
    ));
}

#[test]
fn empty_job_path_returns_config_error() {
    let file = config_file(
        r#"
[job.a]
input = ""
output = "a.dat"
"#,
    );

    match load_and_validate(file.path()) {
        Err(WaveformError::ConfigError(msg)) => {
            assert!(msg.contains("job 'a'"));
            assert!(msg.contains("input"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn bad_timeout_returns_config_error() {
    let file = config_file(
        r#"
[tool]
timeout = "soon"
"#,
    );

    match load_and_validate(file.path()) {
        Err(WaveformError::ConfigError(msg)) => assert!(msg.contains("[tool].timeout")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_and_validate("/definitely/not/here/Awf.toml"),
        Err(WaveformError::IoError(_))
    ));
}

#[test]
fn durations_parse_with_units() {
    assert_eq!(parse_duration("250ms"), Ok(Duration::from_millis(250)));
    assert_eq!(parse_duration("3s"), Ok(Duration::from_secs(3)));
    assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
    assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(3600)));
    assert!(parse_duration("10").is_err());
    assert!(parse_duration("5d").is_err());
}

#[test]
fn oversized_durations_are_rejected() {
    assert!(parse_duration("307445734561825861m").is_err());
    assert!(parse_duration("5124095576030432h").is_err());
    assert_eq!(
        parse_duration("307445734561825860m"),
        Ok(Duration::from_secs(307_445_734_561_825_860 * 60))
    );
}

#[test]
fn oversized_timeout_returns_config_error() {
    let file = config_file(
        r#"
[tool]
timeout = "307445734561825861m"
"#,
    );

    match load_and_validate(file.path()) {
        Err(WaveformError::ConfigError(msg)) => assert!(msg.contains("[tool].timeout")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}
