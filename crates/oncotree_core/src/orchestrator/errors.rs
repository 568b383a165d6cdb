//! Error types for the orchestrator pipeline.
//!
//! Errors carry context that chains through layers:
//! Run → Step → Operation → Detail

use std::io;

use thiserror::Error;

use crate::bootstrap::BootstrapError;

/// Top-level pipeline error with run context.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A step failed during validation or execution.
    #[error("Run '{run_name}' failed at step '{step_name}': {source}")]
    StepFailed {
        run_name: String,
        step_name: String,
        #[source]
        source: StepError,
    },
}

impl PipelineError {
    /// Create a step failed error.
    pub fn step_failed(
        run_name: impl Into<String>,
        step_name: impl Into<String>,
        source: StepError,
    ) -> Self {
        Self::StepFailed {
            run_name: run_name.into(),
            step_name: step_name.into(),
            source,
        }
    }

    /// Name of the step that failed.
    pub fn step_name(&self) -> &str {
        match self {
            Self::StepFailed { step_name, .. } => step_name,
        }
    }

    /// The underlying step error.
    pub fn step_error(&self) -> &StepError {
        match self {
            Self::StepFailed { source, .. } => source,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        self.step_error().exit_code()
    }
}

/// Error from a pipeline step with operation context.
#[derive(Error, Debug)]
pub enum StepError {
    /// A bootstrap operation failed.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// Output validation failed.
    #[error("Output validation failed: {0}")]
    InvalidOutput(String),

    /// An external command failed.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    /// File I/O error.
    #[error("I/O error in {operation}: {source}")]
    IoError {
        operation: String,
        #[source]
        source: io::Error,
    },

    /// A required file was not found.
    #[error("Required file not found: {path}")]
    FileNotFound { path: String },

    /// A previous step did not record what this step needs.
    #[error("Precondition not met: {0}")]
    PreconditionFailed(String),
}

impl StepError {
    /// Create an invalid output error.
    pub fn invalid_output(message: impl Into<String>) -> Self {
        Self::InvalidOutput(message.into())
    }

    /// Create a command failed error.
    pub fn command_failed(
        tool: impl Into<String>,
        exit_code: i32,
        message: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            tool: tool.into(),
            exit_code,
            message: message.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io_error(operation: impl Into<String>, source: io::Error) -> Self {
        Self::IoError {
            operation: operation.into(),
            source,
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a precondition failed error.
    pub fn precondition_failed(message: impl Into<String>) -> Self {
        Self::PreconditionFailed(message.into())
    }

    /// Process exit code for this failure.
    ///
    /// A failed external command propagates its own code unchanged;
    /// everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Bootstrap(e) => e.exit_code(),
            Self::CommandFailed { exit_code, .. } if *exit_code > 0 => *exit_code,
            _ => 1,
        }
    }
}

/// Result type for step operations.
pub type StepResult<T> = Result<T, StepError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_error_displays_context() {
        let err = StepError::command_failed("oncotree-fhir.py", 2, "converter exited");
        let msg = err.to_string();
        assert!(msg.contains("oncotree-fhir.py"));
        assert!(msg.contains("exit code 2"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn pipeline_error_chains_context() {
        let step_err = StepError::file_not_found("requirements.txt");
        let pipeline_err = PipelineError::step_failed("bootstrap", "Install dependencies", step_err);

        let msg = pipeline_err.to_string();
        assert!(msg.contains("bootstrap"));
        assert!(msg.contains("Install dependencies"));
        assert_eq!(pipeline_err.step_name(), "Install dependencies");
        assert_eq!(pipeline_err.exit_code(), 1);
    }

    #[test]
    fn io_errors_name_the_operation() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = StepError::io_error("create pip-log.txt", source);
        assert!(err.to_string().contains("create pip-log.txt"));
        assert!(err.to_string().contains("denied"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn bootstrap_errors_keep_their_exit_codes() {
        let err: StepError = BootstrapError::UnsupportedPlatform("sunos".into()).into();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("sunos"));
    }
}
