// src/exec/backend.rs

//! Pluggable process backend.
//!
//! The runner talks to a `ProcessBackend` instead of `tokio::process`
//! directly, so tests can replay canned output without spawning anything.
//!
//! - [`TokioBackend`] is the production backend. It spawns the program with
//!   discrete arguments (no shell) and points stdout and stderr at the same
//!   pipe, so the child's output arrives as one ordered stream.
//! - Tests provide their own backend whose [`ChildHandle`]s return scripted
//!   lines and exit codes.

use std::future::Future;
use std::io::{self, BufRead, BufReader, PipeReader};
use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::{Child, Command};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Starts child processes.
pub trait ProcessBackend: Send + Sync {
    /// Launch `program` with `args`, with stdout and stderr captured.
    ///
    /// An `Err` means the process never started.
    fn spawn(&self, program: &Path, args: &[String]) -> io::Result<Box<dyn ChildHandle>>;
}

/// A running child process.
pub trait ChildHandle: Send {
    /// Read the merged stdout/stderr stream until it closes.
    ///
    /// Line terminators are stripped and blank lines are kept as `""`.
    fn read_lines(&mut self) -> BoxFuture<'_, io::Result<Vec<String>>>;

    /// Wait for the process to exit. An exit without a code (e.g. killed by
    /// a signal) reports `-1`.
    fn wait(&mut self) -> BoxFuture<'_, io::Result<i32>>;

    /// Forcibly stop the process and reap it.
    fn kill(&mut self) -> BoxFuture<'_, io::Result<()>>;
}

/// Real backend built on `tokio::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioBackend;

impl ProcessBackend for TokioBackend {
    fn spawn(&self, program: &Path, args: &[String]) -> io::Result<Box<dyn ChildHandle>> {
        // One pipe behind both fds: writes to either land in the order the
        // child made them.
        let (reader, writer) = io::pipe()?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer)
            .kill_on_drop(true);

        let child = cmd.spawn()?;

        // `cmd` still holds the parent's write ends; the reader only sees
        // EOF once they are closed.
        drop(cmd);

        Ok(Box::new(TokioChild {
            child,
            output: Some(reader),
        }))
    }
}

struct TokioChild {
    child: Child,
    output: Option<PipeReader>,
}

impl ChildHandle for TokioChild {
    fn read_lines(&mut self) -> BoxFuture<'_, io::Result<Vec<String>>> {
        let output = self.output.take();

        Box::pin(async move {
            let Some(output) = output else {
                return Ok(Vec::new());
            };
            tokio::task::spawn_blocking(move || read_merged_lines(output))
                .await
                .map_err(io::Error::other)?
        })
    }

    fn wait(&mut self) -> BoxFuture<'_, io::Result<i32>> {
        Box::pin(async move {
            let status = self.child.wait().await?;
            Ok(status.code().unwrap_or(-1))
        })
    }

    fn kill(&mut self) -> BoxFuture<'_, io::Result<()>> {
        Box::pin(self.child.kill())
    }
}

/// Read `reader` to EOF, one entry per line.
///
/// `\n` and a preceding `\r` are stripped; invalid UTF-8 is replaced.
fn read_merged_lines(reader: PipeReader) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(reader);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}
