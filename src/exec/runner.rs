// src/exec/runner.rs

//! Run the tool once and collect its merged output and exit code.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::errors::{Result, WaveformError};
use crate::exec::backend::{ChildHandle, ProcessBackend, TokioBackend};
use crate::exec::cancel::CancelToken;

/// Everything the tool printed, plus how it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    pub lines: Vec<String>,
    pub exit_code: i32,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

enum Finished {
    Exited(std::io::Result<ExecOutput>),
    Cancelled,
    TimedOut(Duration),
}

/// Spawns the tool through a [`ProcessBackend`] and drives it to completion.
///
/// Holds no per-run state, so one runner can serve any number of concurrent
/// [`execute`](Self::execute) calls.
#[derive(Clone)]
pub struct ProcessRunner {
    backend: Arc<dyn ProcessBackend>,
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new(backend: Arc<dyn ProcessBackend>) -> Self {
        Self {
            backend,
            timeout: None,
        }
    }

    /// Kill the child and fail with [`WaveformError::TimedOut`] if it runs
    /// longer than `timeout`. `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Launch `program` with `args`, drain its merged output, then wait for
    /// it to exit.
    ///
    /// - Spawn, read and wait errors become [`WaveformError::LaunchFailure`].
    /// - If `cancel` fires first, the child is killed and the call fails with
    ///   [`WaveformError::ExecutionInterrupted`]. The token is left cancelled.
    /// - If the timeout elapses first, the child is killed and the call fails
    ///   with [`WaveformError::TimedOut`].
    pub async fn execute(
        &self,
        program: &Path,
        args: &[String],
        cancel: &CancelToken,
    ) -> Result<ExecOutput> {
        let program_name = program.display().to_string();

        if cancel.is_cancelled() {
            debug!(program = %program_name, "cancelled before spawn; not starting process");
            return Err(WaveformError::ExecutionInterrupted);
        }

        debug!(program = %program_name, ?args, "starting process");

        let mut child = self
            .backend
            .spawn(program, args)
            .map_err(|e| WaveformError::launch(&program_name, e))?;

        let finished = tokio::select! {
            res = drain_and_wait(&mut *child, &program_name) => Finished::Exited(res),
            _ = cancel.cancelled() => Finished::Cancelled,
            after = deadline(self.timeout) => Finished::TimedOut(after),
        };

        match finished {
            Finished::Exited(res) => {
                let output = res.map_err(|e| WaveformError::launch(&program_name, e))?;
                debug!(
                    program = %program_name,
                    exit_code = output.exit_code,
                    lines = output.lines.len(),
                    "process exited"
                );
                Ok(output)
            }
            Finished::Cancelled => {
                debug!(program = %program_name, "cancellation requested; killing process");
                kill_child(&mut *child, &program_name).await;
                Err(WaveformError::ExecutionInterrupted)
            }
            Finished::TimedOut(after) => {
                debug!(program = %program_name, ?after, "timeout elapsed; killing process");
                kill_child(&mut *child, &program_name).await;
                Err(WaveformError::TimedOut(after))
            }
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(Arc::new(TokioBackend))
    }
}

/// Output is drained before waiting; waiting first can deadlock once the
/// child blocks on a full pipe.
async fn drain_and_wait(
    child: &mut dyn ChildHandle,
    program: &str,
) -> std::io::Result<ExecOutput> {
    let lines = child.read_lines().await?;
    for line in &lines {
        debug!(program = %program, "output: {}", line);
    }
    let exit_code = child.wait().await?;
    Ok(ExecOutput { lines, exit_code })
}

async fn deadline(timeout: Option<Duration>) -> Duration {
    match timeout {
        Some(after) => {
            sleep(after).await;
            after
        }
        None => std::future::pending().await,
    }
}

async fn kill_child(child: &mut dyn ChildHandle, program: &str) {
    if let Err(e) = child.kill().await {
        warn!(
            program = %program,
            error = %e,
            "failed to kill child process"
        );
    }
}
