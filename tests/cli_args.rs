// tests/cli_args.rs

use std::time::Duration;

use clap::Parser;

use awf_wrap::cli::CliArgs;
use awf_wrap::command::{render, BitDepth, ColorSchema};
use awf_wrap::config::JobConfig;

#[test]
fn job_flags_build_a_spec() {
    let args = CliArgs::try_parse_from([
        "awf-wrap",
        "-i",
        "sample.mp3",
        "-o",
        "sample.png",
        "-b",
        "16",
        "--colors",
        "audition",
        "--amplitude-scale",
        "auto",
        "--width",
        "200",
        "--height",
        "100",
        "-s",
        "50",
        "-z",
        "256",
        "--no-axis-labels",
        "--split-channels",
        "--timeout",
        "45s",
    ])
    .unwrap();

    assert_eq!(args.timeout, Some(Duration::from_secs(45)));

    let spec = args.job_spec().unwrap();
    assert_eq!(spec.bits(), Some(BitDepth::Sixteen));
    assert_eq!(spec.colors(), Some(ColorSchema::Audition));
    assert_eq!(render(&spec).unwrap().len(), 20);
}

#[test]
fn job_flags_match_the_equivalent_config_job() {
    let args = CliArgs::try_parse_from([
        "awf-wrap",
        "-i",
        "sample.mp3",
        "-o",
        "sample.png",
        "-b",
        "8",
        "--colors",
        "audacity",
        "--width",
        "-1",
        "-s",
        "2.5",
        "-z",
        "64",
        "-z",
        "128",
        "--no-axis-labels",
    ])
    .unwrap();

    let job = JobConfig {
        input: "sample.mp3".into(),
        output: "sample.png".into(),
        bits: Some(BitDepth::Eight),
        colors: Some(ColorSchema::Audacity),
        width: Some(-1),
        start: Some(2.5),
        zoom: vec![64, 128],
        hide_axis_labels: true,
        ..JobConfig::default()
    };

    assert_eq!(args.job_spec(), Some(job.to_spec()));
}

#[test]
fn zoom_flag_is_repeatable() {
    let args = CliArgs::try_parse_from([
        "awf-wrap", "-i", "a.mp3", "-o", "a.dat", "-z", "64", "--zoom", "128",
    ])
    .unwrap();

    assert_eq!(args.zoom, vec![64, 128]);
}

#[test]
fn no_job_flags_means_no_ad_hoc_job() {
    let args = CliArgs::try_parse_from(["awf-wrap", "--config", "Awf.toml", "--dry-run"]).unwrap();

    assert!(args.dry_run);
    assert!(args.job_spec().is_none());
}

#[test]
fn input_requires_output() {
    assert!(CliArgs::try_parse_from(["awf-wrap", "-i", "a.mp3"]).is_err());
}

#[test]
fn invalid_bits_are_rejected() {
    assert!(CliArgs::try_parse_from(["awf-wrap", "-i", "a.mp3", "-o", "a.dat", "-b", "12"]).is_err());
}
