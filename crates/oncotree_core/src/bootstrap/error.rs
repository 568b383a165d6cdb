//! Bootstrap error types.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Unsupported operating system '{0}': only Linux and macOS are supported")]
    UnsupportedPlatform(String),

    #[error("{name} not found on the search path ({search_path:?}); install Python 3 and retry")]
    InterpreterNotFound { name: String, search_path: OsString },

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to create virtual environment at {path}: {message}")]
    CreateVenv { path: PathBuf, message: String },

    #[error("Virtual environment at {0} has no interpreter of its own")]
    BrokenVenv(PathBuf),

    #[error("Dependency installation failed with exit code {exit_code}; see {log}")]
    InstallDeps { exit_code: i32, log: PathBuf },

    #[error("Failed to run {program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl BootstrapError {
    /// Process exit code for this failure.
    ///
    /// Precondition failures exit with 1; tool failures keep the tool's
    /// own code when it is a usable non-zero status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InstallDeps { exit_code, .. } if *exit_code > 0 => *exit_code,
            _ => 1,
        }
    }
}

/// Result type for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;
