//! Core types for the orchestrator pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use crate::bootstrap::{ActivatedEnv, BootstrapPaths, ConverterCommand, HostEnv, Platform};
use crate::config::Settings;
use crate::logging::RunLogger;

/// Read-only context passed to pipeline steps.
///
/// Contains the injected host environment, settings and the run logger.
/// Mutable state goes in `RunState`.
#[derive(Debug)]
pub struct Context {
    /// Captured host environment.
    pub host: HostEnv,
    /// Bootstrap settings.
    pub settings: Settings,
    /// Resolved filesystem layout.
    pub paths: BootstrapPaths,
    /// Run name/identifier.
    pub run_name: String,
    /// Run logger.
    pub logger: Arc<RunLogger>,
}

impl Context {
    /// Create a new context for a run.
    pub fn new(host: HostEnv, settings: Settings, logger: Arc<RunLogger>) -> Self {
        let paths = BootstrapPaths::new(&host, &settings);
        Self {
            host,
            settings,
            paths,
            run_name: logger.run_name().to_string(),
            logger,
        }
    }
}

/// Mutable state that accumulates results from pipeline steps.
///
/// Owns the activation handle, so the venv stays activated exactly as
/// long as the state lives.
#[derive(Debug, Default)]
pub struct RunState {
    /// Detected platform (Platform check step).
    pub platform: Option<Platform>,
    /// Interpreter used to create the venv (Interpreter discovery step).
    pub interpreter: Option<PathBuf>,
    /// Directories created during this run.
    pub created: Vec<PathBuf>,
    /// Active venv (Activate step).
    pub activation: Option<ActivatedEnv>,
    /// Converter command line (Run converter step).
    pub command: Option<ConverterCommand>,
    /// Converter exit code (Run converter step).
    pub converter_exit: Option<i32>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active venv, if the Activate step has run.
    pub fn activation(&self) -> Option<&ActivatedEnv> {
        self.activation.as_ref()
    }
}

/// Outcome of step execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step did its work.
    Success,
    /// Nothing to do (e.g., directory already exists).
    Skipped(String),
}
