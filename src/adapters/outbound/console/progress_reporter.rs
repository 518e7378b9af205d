use std::cell::RefCell;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::ports::outbound::ProgressReporter;

/// ConsoleProgressReporter adapter for live scan feedback on stderr.
///
/// Writes to stderr so report output piped from stdout stays clean. A scan
/// walks several repositories with different tag counts, so the bar is
/// rebuilt whenever the reported total changes.
pub struct ConsoleProgressReporter {
    bar: RefCell<Option<ProgressBar>>,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: RefCell::new(None),
        }
    }

    fn bar_for_total(&self, total: usize) -> ProgressBar {
        let mut slot = self.bar.borrow_mut();
        if let Some(bar) = slot.as_ref() {
            if bar.length() == Some(total as u64) {
                return bar.clone();
            }
            bar.finish_and_clear();
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}")
                .expect("progress template is valid")
                .progress_chars("=>-"),
        );
        *slot = Some(bar.clone());
        bar
    }

    fn clear_bar(&self) {
        if let Some(bar) = self.bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{message}");
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let bar = self.bar_for_total(total);
        bar.set_position(current as u64);
        if let Some(message) = message {
            bar.set_message(message.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!();
        eprintln!("{}", message.green());
    }
}
