// src/waveform.rs

//! The facade: render a [`CommandSpec`], run the tool, and report a
//! [`ResultMap`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::command::{render, CommandSpec};
use crate::errors::{Result, WaveformError};
use crate::exec::{CancelToken, ProcessBackend, ProcessRunner, TokioBackend};
use crate::observe::{RunEvent, RunObserver, TracingObserver};
use crate::result::{parse_lines, ResultMap};

/// Environment variable consulted by [`AudioWaveform::from_env`].
pub const BINARY_ENV_VAR: &str = "AUDIOWAVEFORM_PATH";

/// Program name used when no path is configured; resolved through `PATH`.
pub const DEFAULT_BINARY: &str = "audiowaveform";

/// Wrapper around the `audiowaveform` executable.
///
/// Cheap to clone and safe to share: every [`run`](Self::run) owns its own
/// child process, pipes and result map.
#[derive(Clone)]
pub struct AudioWaveform {
    program: PathBuf,
    runner: ProcessRunner,
    observer: Arc<dyn RunObserver>,
}

impl AudioWaveform {
    /// Use the executable at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            runner: ProcessRunner::new(Arc::new(TokioBackend)),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Read the executable path from `AUDIOWAVEFORM_PATH` once, falling back
    /// to `audiowaveform` on `PATH`.
    pub fn from_env() -> Self {
        let program = std::env::var_os(BINARY_ENV_VAR)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BINARY));
        Self::new(program)
    }

    pub fn with_backend(mut self, backend: Arc<dyn ProcessBackend>) -> Self {
        let timeout = self.runner.timeout();
        self.runner = ProcessRunner::new(backend).with_timeout(timeout);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn RunObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.runner = self.runner.with_timeout(timeout);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The argument list `run` would pass for `spec`.
    pub fn arguments(&self, spec: &CommandSpec) -> Result<Vec<String>> {
        render(spec)
    }

    /// Run the tool for `spec` without external cancellation.
    pub async fn run(&self, spec: &CommandSpec) -> Result<ResultMap> {
        self.run_with_cancel(spec, &CancelToken::new()).await
    }

    /// Run the tool for `spec`.
    ///
    /// Returns `Err` only when `spec` cannot be rendered
    /// ([`WaveformError::MissingRequiredField`]); no process is started in
    /// that case. Every other failure is recorded through the observer and
    /// reported as `status = "false"`:
    ///
    /// - non-zero exit: the tool's diagnostics are kept;
    /// - launch failure, interruption, timeout: no diagnostics.
    ///
    /// An interrupted run leaves `cancel` cancelled.
    pub async fn run_with_cancel(
        &self,
        spec: &CommandSpec,
        cancel: &CancelToken,
    ) -> Result<ResultMap> {
        let args = render(spec)?;

        self.observer.record(&RunEvent::Started {
            program: self.program.display().to_string(),
            args: args.clone(),
        });

        match self.runner.execute(&self.program, &args, cancel).await {
            Ok(output) => {
                let diagnostics = parse_lines(&output.lines);
                self.observer.record(&RunEvent::Finished {
                    exit_code: output.exit_code,
                    diagnostics: diagnostics.len(),
                });
                Ok(ResultMap::completed(diagnostics, output.success()))
            }
            Err(WaveformError::ExecutionInterrupted) => {
                self.observer.record(&RunEvent::Interrupted);
                Ok(ResultMap::degraded())
            }
            Err(WaveformError::TimedOut(after)) => {
                self.observer.record(&RunEvent::TimedOut { after });
                Ok(ResultMap::degraded())
            }
            Err(err) => {
                self.observer.record(&RunEvent::LaunchFailed {
                    program: self.program.display().to_string(),
                    error: err.to_string(),
                });
                Ok(ResultMap::degraded())
            }
        }
    }
}

impl Default for AudioWaveform {
    fn default() -> Self {
        Self::from_env()
    }
}
