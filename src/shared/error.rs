use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and scheduled jobs to tell a clean run apart
/// from one that found outdated software or failed outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - everything checked, or outdated software found without `--fail-on-outdated`
    Success = 0,
    /// Outdated software was found and `--fail-on-outdated` was set
    OutdatedSoftwareDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (inventory unreadable, catalog unavailable, file I/O error, etc.)
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
            ExitCode::OutdatedSoftwareDetected => write!(f, "Outdated Software Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors raised by the collaborators around the
/// classification core (inventory, catalog, output).
///
/// The classification core itself never produces these: an item that cannot
/// be matched is reported as `Unknown`, not as an error.
#[derive(Debug, Error)]
pub enum UpdateCheckError {
    #[error("Inventory file not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse inventory file: {path}\nDetails: {details}\n\n💡 Hint: The inventory must be a JSON export with \"OperatingSystem\" and \"Software\" entries")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Failed to parse release catalog from {source_name}\nDetails: {details}\n\n💡 Hint: The catalog must be a vergrabber.json document")]
    CatalogParseError {
        source_name: String,
        details: String,
    },

    #[error("Failed to fetch release catalog from {url}\nDetails: {details}\n\n💡 Hint: Check your network connection, or pass a local copy with --catalog")]
    CatalogFetchError { url: String, details: String },

    #[error("Release catalog from {source_name} is not usable: {reason}\n\n💡 Hint: Delete the cached catalog or pass a fresh copy with --catalog")]
    CatalogOutdated {
        source_name: String,
        reason: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
