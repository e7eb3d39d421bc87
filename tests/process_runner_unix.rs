// tests/process_runner_unix.rs
//
// Drives the real tokio backend with `sh -c` standing in for the tool.

#![cfg(unix)]

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use awf_wrap::command::CommandSpec;
use awf_wrap::errors::WaveformError;
use awf_wrap::exec::{CancelToken, ProcessRunner, TokioBackend};
use awf_wrap::result::parse_lines;
use awf_wrap::waveform::AudioWaveform;

type TestResult = Result<(), Box<dyn Error>>;

fn sh(script: &str) -> Vec<String> {
    vec!["-c".to_string(), script.to_string()]
}

#[tokio::test]
async fn merges_stderr_and_relays_exit_code() -> TestResult {
    init_tracing();
    let runner = ProcessRunner::new(Arc::new(TokioBackend));

    let output = runner
        .execute(
            Path::new("sh"),
            &sh("echo frames:1024; echo 'warning:clipped' >&2; exit 3"),
            &CancelToken::new(),
        )
        .await?;

    assert_eq!(output.exit_code, 3);
    assert!(!output.success());
    assert_eq!(output.lines, vec!["frames:1024", "warning:clipped"]);
    Ok(())
}

#[tokio::test]
async fn merged_output_keeps_write_order_across_streams() -> TestResult {
    init_tracing();
    let runner = ProcessRunner::default().with_timeout(Some(Duration::from_secs(30)));

    let output = runner
        .execute(
            Path::new("sh"),
            &sh("i=0; while [ $i -lt 2000 ]; do echo out:$i; echo err:$i >&2; i=$((i+1)); done; \
                 echo k:first; echo k:second >&2"),
            &CancelToken::new(),
        )
        .await?;

    let mut expected = Vec::with_capacity(4002);
    for i in 0..2000 {
        expected.push(format!("out:{i}"));
        expected.push(format!("err:{i}"));
    }
    expected.push("k:first".to_string());
    expected.push("k:second".to_string());

    assert_eq!(output.exit_code, 0);
    assert_eq!(output.lines, expected);
    assert_eq!(
        parse_lines(&output.lines).get("k").map(String::as_str),
        Some("second")
    );
    Ok(())
}

#[tokio::test]
async fn keeps_blank_lines_and_strips_terminators() -> TestResult {
    init_tracing();
    let runner = ProcessRunner::default();

    let output = runner
        .execute(
            Path::new("sh"),
            &sh("printf 'a\\n\\nb\\r\\nc'"),
            &CancelToken::new(),
        )
        .await?;

    assert_eq!(output.exit_code, 0);
    assert_eq!(output.lines, vec!["a", "", "b", "c"]);
    Ok(())
}

#[tokio::test]
async fn arguments_are_not_shell_interpreted() -> TestResult {
    init_tracing();
    let runner = ProcessRunner::default();
    let args = vec![
        "-c".to_string(),
        "printf 'arg:%s\\n' \"$1\"".to_string(),
        "sh".to_string(),
        "$HOME; echo injected:yes".to_string(),
    ];

    let output = runner
        .execute(Path::new("sh"), &args, &CancelToken::new())
        .await?;

    assert_eq!(output.lines, vec!["arg:$HOME; echo injected:yes"]);
    Ok(())
}

#[tokio::test]
async fn large_output_does_not_deadlock() -> TestResult {
    init_tracing();
    let runner = ProcessRunner::default().with_timeout(Some(Duration::from_secs(30)));

    let output = runner
        .execute(
            Path::new("sh"),
            &sh("i=0; while [ $i -lt 20000 ]; do echo line:$i; echo err:$i >&2; i=$((i+1)); done"),
            &CancelToken::new(),
        )
        .await?;

    assert_eq!(output.exit_code, 0);
    assert_eq!(output.lines.len(), 40_000);
    Ok(())
}

#[tokio::test]
async fn invalid_path_is_a_launch_failure() {
    init_tracing();
    let runner = ProcessRunner::default();

    let result = runner
        .execute(
            Path::new("/definitely/not/here/audiowaveform"),
            &[],
            &CancelToken::new(),
        )
        .await;

    match result {
        Err(WaveformError::LaunchFailure { program, .. }) => {
            assert_eq!(program, "/definitely/not/here/audiowaveform");
        }
        other => panic!("Expected LaunchFailure, got: {:?}", other),
    }
}

#[tokio::test]
async fn facade_with_invalid_path_reports_false_without_error() -> TestResult {
    init_tracing();
    let waveform = AudioWaveform::new("/definitely/not/here/audiowaveform");
    let spec = CommandSpec::builder()
        .input("sample.mp3")
        .output("out.json")
        .build();

    let result = waveform.run(&spec).await?;

    assert_eq!(result.status(), "false");
    assert_eq!(result.len(), 1);
    Ok(())
}

#[tokio::test]
async fn timeout_kills_a_real_child() -> TestResult {
    init_tracing();
    let runner = ProcessRunner::default().with_timeout(Some(Duration::from_millis(100)));
    let started = Instant::now();

    let result = runner
        .execute(Path::new("sh"), &sh("exec sleep 30"), &CancelToken::new())
        .await;

    assert!(matches!(result, Err(WaveformError::TimedOut(_))));
    assert!(started.elapsed() < Duration::from_secs(10));
    Ok(())
}

#[tokio::test]
async fn cancellation_kills_a_real_child() -> TestResult {
    init_tracing();
    let runner = ProcessRunner::default();
    let cancel = CancelToken::new();
    let started = Instant::now();

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            cancel.cancel();
        });
    }

    let result = runner
        .execute(Path::new("sh"), &sh("exec sleep 30"), &cancel)
        .await;

    assert!(matches!(result, Err(WaveformError::ExecutionInterrupted)));
    assert!(cancel.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(10));
    Ok(())
}
