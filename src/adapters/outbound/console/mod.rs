/// Console adapters for terminal progress output
mod progress_reporter;

pub use progress_reporter::ConsoleProgressReporter;
