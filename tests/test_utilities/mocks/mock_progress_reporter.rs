use std::sync::{Arc, Mutex};

use basepick::prelude::*;

/// Everything a use case reported, grouped by channel
#[derive(Default)]
struct Captured {
    messages: Vec<String>,
    errors: Vec<String>,
    completions: Vec<String>,
}

/// Mock ProgressReporter that captures reported output for assertions
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    captured: Arc<Mutex<Captured>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain and per-image progress lines, in report order
    pub fn messages(&self) -> Vec<String> {
        self.captured.lock().unwrap().messages.clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.captured.lock().unwrap().errors.clone()
    }

    pub fn completions(&self) -> Vec<String> {
        self.captured.lock().unwrap().completions.clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.captured
            .lock()
            .unwrap()
            .messages
            .push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let label = message.unwrap_or("");
        self.captured
            .lock()
            .unwrap()
            .messages
            .push(format!("[{current}/{total}] {label}"));
    }

    fn report_error(&self, message: &str) {
        self.captured
            .lock()
            .unwrap()
            .errors
            .push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.captured
            .lock()
            .unwrap()
            .completions
            .push(message.to_string());
    }
}
