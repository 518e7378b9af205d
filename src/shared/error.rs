use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every scheduled image was analyzed (or skipped as current)
    Success = 0,
    /// One or more images failed to analyze; the rest completed
    ScanFailures = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, store I/O error, network error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ScanFailures => write!(f, "Scan Failures (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for image scanning and ranking.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Command failed: {command}\nDetails: {details}\n\n💡 Hint: Verify that '{tool}' is installed and on PATH")]
    CommandFailed {
        tool: String,
        command: String,
        details: String,
    },

    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimeout { command: String, seconds: u64 },

    #[error("Failed to parse {tool} output for {image}\nDetails: {details}\n\n💡 Hint: The installed {tool} version may emit an incompatible JSON schema")]
    MalformedToolOutput {
        tool: String,
        image: String,
        details: String,
    },

    #[error("Registry request failed: {url}\nDetails: {details}\n\n💡 Hint: Check network access to the registry and that the repository exists")]
    RegistryRequest { url: String, details: String },

    #[error("Failed to read image store: {path}\nDetails: {details}\n\n💡 Hint: Verify that the file exists and you have read permissions")]
    StoreReadError { path: PathBuf, details: String },

    #[error("Failed to write image store: {path}\nDetails: {details}\n\n💡 Hint: Verify that the directory exists and you have write permissions")]
    StoreWriteError { path: PathBuf, details: String },

    #[error("Failed to write report: {path}\nDetails: {details}\n\n💡 Hint: Verify that the directory exists and you have write permissions")]
    ReportWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
