// src/observe.rs

//! Run lifecycle events and the sink that receives them.
//!
//! The facade reports what happened to each run through an injected
//! [`RunObserver`]. Production code uses [`TracingObserver`]; tests can
//! collect events in memory and assert on them.

use std::time::Duration;

use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// Arguments rendered; the process is about to be launched.
    Started { program: String, args: Vec<String> },
    /// The tool exited on its own.
    Finished { exit_code: i32, diagnostics: usize },
    /// The tool could not be started, or its output could not be read.
    LaunchFailed { program: String, error: String },
    /// The run was cancelled and the child killed.
    Interrupted,
    /// The run exceeded its timeout and the child was killed.
    TimedOut { after: Duration },
}

pub trait RunObserver: Send + Sync {
    fn record(&self, event: &RunEvent);
}

/// Observer that turns events into `tracing` records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn record(&self, event: &RunEvent) {
        match event {
            RunEvent::Started { program, args } => {
                info!(program = %program, args = args.len(), "start executing audiowaveform command");
            }
            RunEvent::Finished {
                exit_code,
                diagnostics,
            } => {
                if *exit_code == 0 {
                    info!(diagnostics, "finished audiowaveform command execution");
                } else {
                    warn!(exit_code, diagnostics, "process did not end successfully");
                }
            }
            RunEvent::LaunchFailed { program, error } => {
                error!(program = %program, error = %error, "error executing audiowaveform command");
            }
            RunEvent::Interrupted => {
                warn!("audiowaveform execution interrupted before or during the run");
            }
            RunEvent::TimedOut { after } => {
                warn!(?after, "audiowaveform execution timed out");
            }
        }
    }
}
