use std::sync::Mutex;

use awf_wrap::observe::{RunEvent, RunObserver};

/// Observer that keeps every event in memory for later assertions.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<RunEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RunEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl RunObserver for RecordingObserver {
    fn record(&self, event: &RunEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
