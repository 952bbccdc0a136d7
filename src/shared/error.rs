use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Per-coordinate failures never change the exit code; only failures that
/// abort the whole run do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Run completed (individual downloads may still have failed)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Fatal error (artifact search failure, invalid output directory, bad config, etc.)
    ApplicationError = 3,
    /// Run stopped early by an interrupt (Ctrl-C)
    Interrupted = 130,
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::Interrupted => write!(f, "Interrupted (130)"),
        }
    }
}

/// Application-specific errors for the harvest pipeline.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Request to {url} failed with status {status}\n\n💡 Hint: The remote service rejected the request or is unavailable")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Request to {url} failed\nDetails: {details}\n\n💡 Hint: Please check your internet connection")]
    Transport { url: String, details: String },

    #[error("Failed to decode {what}\nDetails: {details}\n\n💡 Hint: The response was not in the expected JSON format")]
    Decode { what: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid output directory: {path}\nReason: {reason}\n\n💡 Hint: The output directory must already exist")]
    InvalidOutputDirectory { path: PathBuf, reason: String },

    #[error("Search for {query} did not terminate after {max_pages} page(s)\n\n💡 Hint: Raise --max-pages if the result set is genuinely this large")]
    PaginationLimitExceeded { query: String, max_pages: usize },

    /// Validation error for coordinates and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl HarvestError {
    /// Whether retrying the same request could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            HarvestError::Transport { .. } => true,
            HarvestError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
