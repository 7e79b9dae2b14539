use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a project that was never installed
/// apart from a broken project or a bad invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the graph was built (possibly degenerate for a project without composer.json)
    Success = 0,
    /// Dependencies are declared but composer.lock is missing
    MissingLockData = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (parse error, file I/O error, installer failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an error raised by the analysis.
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<GraphError>() {
            Some(GraphError::MissingLockData { .. }) => ExitCode::MissingLockData,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::MissingLockData => write!(f, "Missing Lock Data (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while building a dependency graph.
///
/// Parse errors, the missing-lock condition and contract violations are
/// separate variants so callers can pick the right remediation.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Project path not found: {path}\n\n💡 Hint: Please specify an existing project directory")]
    ProjectNotFound { path: PathBuf },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read composer.json: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have read permissions")]
    ManifestReadError { path: PathBuf, details: String },

    #[error("Failed to parse composer.json\nDetails: {details}\n\n💡 Hint: Please verify that composer.json contains valid JSON")]
    ManifestParseError { details: String },

    #[error("Failed to read composer.lock: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have read permissions")]
    LockfileReadError { path: PathBuf, details: String },

    #[error("Failed to parse composer.lock\nDetails: {details}\n\n💡 Hint: Please verify that composer.lock contains valid JSON")]
    LockfileParseError { details: String },

    #[error("Missing lock file: composer.json requires {} but no composer.lock exists\n\n💡 Hint: Run `composer install` first, or pass --install", packages.join(", "))]
    MissingLockData { packages: Vec<String> },

    #[error("The package '{name}' already exists in the graph")]
    DuplicatePackage { name: String },

    #[error("Installer command failed: {command}\nDetails: {details}\n\n💡 Hint: Please verify that composer is installed and on your PATH, or set --composer-bin")]
    InstallerFailed { command: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
