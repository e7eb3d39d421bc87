use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use awf_wrap::exec::{BoxFuture, ChildHandle, ProcessBackend};

/// What a fake child does once spawned.
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    /// Print `lines` on the merged stream, then exit with `exit_code`.
    Exit { lines: Vec<String>, exit_code: i32 },
    /// Fail to start at all.
    SpawnError(io::ErrorKind),
    /// Start, print nothing, and never exit until killed.
    Hang,
}

/// A fake backend that:
/// - records every program/argument list it was asked to spawn
/// - replays a scripted outcome instead of starting a real process
/// - remembers whether any of its children was killed.
#[derive(Clone)]
pub struct FakeBackend {
    outcome: FakeOutcome,
    spawned: Arc<Mutex<Vec<(PathBuf, Vec<String>)>>>,
    killed: Arc<AtomicBool>,
}

impl FakeBackend {
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            spawned: Arc::new(Mutex::new(Vec::new())),
            killed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn exiting(exit_code: i32, lines: &[&str]) -> Self {
        Self::new(FakeOutcome::Exit {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            exit_code,
        })
    }

    pub fn failing_spawn() -> Self {
        Self::new(FakeOutcome::SpawnError(io::ErrorKind::NotFound))
    }

    pub fn hanging() -> Self {
        Self::new(FakeOutcome::Hang)
    }

    pub fn spawned(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.spawned.lock().unwrap().clone()
    }

    pub fn was_killed(&self) -> bool {
        self.killed.load(Ordering::SeqCst)
    }
}

impl ProcessBackend for FakeBackend {
    fn spawn(&self, program: &Path, args: &[String]) -> io::Result<Box<dyn ChildHandle>> {
        if let FakeOutcome::SpawnError(kind) = self.outcome {
            return Err(io::Error::new(kind, "fake spawn failure"));
        }

        self.spawned
            .lock()
            .unwrap()
            .push((program.to_path_buf(), args.to_vec()));

        Ok(Box::new(FakeChild {
            outcome: self.outcome.clone(),
            killed: Arc::clone(&self.killed),
        }))
    }
}

struct FakeChild {
    outcome: FakeOutcome,
    killed: Arc<AtomicBool>,
}

impl ChildHandle for FakeChild {
    fn read_lines(&mut self) -> BoxFuture<'_, io::Result<Vec<String>>> {
        match self.outcome {
            FakeOutcome::Exit { ref lines, .. } => {
                let lines = lines.clone();
                Box::pin(async move { Ok(lines) })
            }
            _ => Box::pin(std::future::pending()),
        }
    }

    fn wait(&mut self) -> BoxFuture<'_, io::Result<i32>> {
        match self.outcome {
            FakeOutcome::Exit { exit_code, .. } => Box::pin(async move { Ok(exit_code) }),
            _ => Box::pin(std::future::pending()),
        }
    }

    fn kill(&mut self) -> BoxFuture<'_, io::Result<()>> {
        self.killed.store(true, Ordering::SeqCst);
        Box::pin(async { Ok(()) })
    }
}
