// src/lib.rs

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod observe;
pub mod result;
pub mod waveform;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::{debug, error, info};

use crate::cli::CliArgs;
use crate::command::CommandSpec;
use crate::config::{default_config_path, load_and_validate, ConfigFile};
use crate::exec::CancelToken;
use crate::waveform::AudioWaveform;

pub use crate::command::{render, BitDepth, ColorSchema, CommandSpecBuilder};
pub use crate::errors::WaveformError;
pub use crate::result::ResultMap;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - job selection (CLI flags or `[job.<name>]` sections)
/// - the `AudioWaveform` facade
/// - Ctrl-C handling
///
/// Returns `Ok(true)` when every job reported `status = "true"`.
pub async fn run(args: CliArgs) -> Result<bool> {
    let cfg = load_config(&args)?;

    let jobs = select_jobs(&args, cfg.as_ref());
    if jobs.is_empty() {
        return Err(anyhow!(
            "nothing to run: pass --input/--output or define [job.<name>] sections in the config"
        ));
    }

    let program = resolve_program(&args, cfg.as_ref());
    let timeout = args.timeout.or_else(|| cfg.as_ref().and_then(|c| c.timeout()));
    let waveform = AudioWaveform::new(program).with_timeout(timeout);

    if args.dry_run {
        print_dry_run(&waveform, &jobs)?;
        return Ok(true);
    }

    // Ctrl-C → kill in-flight children; their results degrade to status=false.
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            cancel.cancel();
        });
    }

    info!(jobs = jobs.len(), program = %waveform.program().display(), "running jobs");

    let mut all_ok = true;
    let mut first_error = None;
    for (name, result) in run_jobs(&waveform, jobs, &cancel).await {
        match result {
            Ok(result) => {
                all_ok &= result.is_success();
                print_result(&name, &result);
            }
            Err(e) => {
                all_ok = false;
                println!("[{name}] error: {e}");
                if first_error.is_none() {
                    first_error = Some((name, e));
                }
            }
        }
    }

    if cancel.is_cancelled() {
        info!("run was interrupted");
    }

    if let Some((name, e)) = first_error {
        return Err(anyhow::Error::new(e).context(format!("job '{name}' failed")));
    }

    Ok(all_ok)
}

/// Run every job concurrently and wait for all of them.
///
/// Results come back in job order. A job that fails hard (or whose task
/// panics) yields an `Err` in its own slot; the others still run to the end.
pub async fn run_jobs(
    waveform: &AudioWaveform,
    jobs: Vec<(String, CommandSpec)>,
    cancel: &CancelToken,
) -> Vec<(String, errors::Result<ResultMap>)> {
    let mut handles = Vec::with_capacity(jobs.len());
    for (name, spec) in jobs {
        let waveform = waveform.clone();
        let cancel = cancel.clone();
        let handle = tokio::spawn(async move { waveform.run_with_cancel(&spec, &cancel).await });
        handles.push((name, handle));
    }

    let mut results = Vec::with_capacity(handles.len());
    for (name, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(WaveformError::Other(anyhow!("job task failed: {e}"))),
        };
        if let Err(ref e) = result {
            error!(job = %name, error = %e, "job failed");
        }
        results.push((name, result));
    }
    results
}

/// `--config` is loaded strictly; the default `Awf.toml` only if present.
fn load_config(args: &CliArgs) -> Result<Option<ConfigFile>> {
    match args.config {
        Some(ref path) => Ok(Some(load_and_validate(path)?)),
        None => {
            let path = default_config_path();
            if path.is_file() {
                debug!(path = %path.display(), "using default config file");
                Ok(Some(load_and_validate(&path)?))
            } else {
                Ok(None)
            }
        }
    }
}

/// CLI job flags win over config jobs.
fn select_jobs(args: &CliArgs, cfg: Option<&ConfigFile>) -> Vec<(String, CommandSpec)> {
    if let Some(spec) = args.job_spec() {
        return vec![("cli".to_string(), spec)];
    }

    cfg.map(|c| {
        c.job
            .iter()
            .map(|(name, job)| (name.clone(), job.to_spec()))
            .collect()
    })
    .unwrap_or_default()
}

/// `--binary`, then `[tool].path`, then `AUDIOWAVEFORM_PATH`, then
/// `audiowaveform` on `PATH`.
fn resolve_program(args: &CliArgs, cfg: Option<&ConfigFile>) -> PathBuf {
    if let Some(ref binary) = args.binary {
        return binary.clone();
    }
    if let Some(path) = cfg.and_then(|c| c.tool.path.clone()) {
        return path;
    }
    AudioWaveform::from_env().program().to_path_buf()
}

fn print_dry_run(waveform: &AudioWaveform, jobs: &[(String, CommandSpec)]) -> Result<()> {
    println!("awf-wrap dry-run");
    println!("  program = {}", waveform.program().display());
    println!();

    println!("jobs ({}):", jobs.len());
    for (name, spec) in jobs {
        let args = waveform.arguments(spec)?;
        println!("  - {name}");
        println!("      args: {}", args.join(" "));
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}

fn print_result(name: &str, result: &ResultMap) {
    for line in result.to_string().lines() {
        println!("[{name}] {line}");
    }
}
