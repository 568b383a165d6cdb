//! Pipeline orchestrator for the bootstrap run.
//!
//! A run is a fixed sequence of steps that validate, execute, and record
//! their results. The first failing step stops the run.
//!
//! # Architecture
//!
//! ```text
//! Pipeline
//!     ├── Step: Platform check
//!     ├── Step: Interpreter discovery
//!     ├── Step: Ensure output directory
//!     ├── Step: Ensure virtual environment directory
//!     ├── Step: Create virtual environment
//!     ├── Step: Activate virtual environment
//!     ├── Step: Install dependencies
//!     └── Step: Run converter
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use oncotree_core::bootstrap::HostEnv;
//! use oncotree_core::config::Settings;
//! use oncotree_core::logging::{LogConfig, RunLogger};
//! use oncotree_core::orchestrator::{run_bootstrap, Context};
//!
//! let host = HostEnv::from_process().unwrap();
//! let logger = Arc::new(RunLogger::new("bootstrap", LogConfig::default(), None));
//! let ctx = Context::new(host, Settings::default(), logger);
//!
//! let code = match run_bootstrap(&ctx) {
//!     Ok(report) => report.exit_code,
//!     Err(e) => e.exit_code(),
//! };
//! std::process::exit(code);
//! ```

mod errors;
mod pipeline;
mod step;
pub mod steps;
mod types;

pub use errors::{PipelineError, PipelineResult, StepError, StepResult};
pub use pipeline::{Pipeline, PipelineRunResult};
pub use step::PipelineStep;
pub use steps::{
    ActivateStep, ConvertStep, CreateVenvStep, DirTarget, EnsureDirStep, InstallStep,
    InterpreterStep, PlatformCheckStep,
};
pub use types::{Context, RunState, StepOutcome};

use std::path::PathBuf;

/// Create the bootstrap pipeline with all steps in order.
///
/// Both precondition checks come before the first directory is created.
pub fn create_bootstrap_pipeline() -> Pipeline {
    Pipeline::new()
        .with_step(PlatformCheckStep::new())
        .with_step(InterpreterStep::new())
        .with_step(EnsureDirStep::output())
        .with_step(EnsureDirStep::venv_root())
        .with_step(CreateVenvStep::new())
        .with_step(ActivateStep::new())
        .with_step(InstallStep::new())
        .with_step(ConvertStep::new())
}

/// Summary of a successful bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    /// Which steps ran and which were skipped.
    pub run: PipelineRunResult,
    /// Directories created by this run.
    pub created: Vec<PathBuf>,
    /// The converter command line that was executed.
    pub command_line: String,
    /// Exit code to terminate with (the converter's).
    pub exit_code: i32,
}

/// Run the full bootstrap against `ctx`.
///
/// The venv activation lives only for the duration of this call.
pub fn run_bootstrap(ctx: &Context) -> PipelineResult<BootstrapReport> {
    let pipeline = create_bootstrap_pipeline();
    let mut state = RunState::new();

    tracing::info!(
        "Bootstrapping {} in {}",
        ctx.paths.venv_dir.display(),
        ctx.host.cwd.display()
    );

    let run = pipeline.run(ctx, &mut state)?;

    Ok(BootstrapReport {
        run,
        created: std::mem::take(&mut state.created),
        command_line: state
            .command
            .as_ref()
            .map(|c| c.display())
            .unwrap_or_default(),
        exit_code: state.converter_exit.unwrap_or(0),
    })
}
