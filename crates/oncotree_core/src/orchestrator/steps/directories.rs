//! Directory ensure steps - output dir and venv parent.

use std::path::Path;

use crate::bootstrap::{ensure_dir, BootstrapPaths};
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, RunState, StepOutcome};

/// Which directory an `EnsureDirStep` creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirTarget {
    /// Converter output directory.
    Output,
    /// Parent of all virtual environments.
    VenvRoot,
}

impl DirTarget {
    fn path(self, paths: &BootstrapPaths) -> &Path {
        match self {
            DirTarget::Output => &paths.output_dir,
            DirTarget::VenvRoot => &paths.venv_root,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DirTarget::Output => "output directory",
            DirTarget::VenvRoot => "virtual environment directory",
        }
    }
}

/// Creates a directory if it is missing; skipped otherwise.
pub struct EnsureDirStep {
    target: DirTarget,
    name: String,
}

impl EnsureDirStep {
    pub fn new(target: DirTarget) -> Self {
        Self {
            target,
            name: format!("Ensure {}", target.label()),
        }
    }

    /// Step for the converter output directory.
    pub fn output() -> Self {
        Self::new(DirTarget::Output)
    }

    /// Step for the venv parent directory.
    pub fn venv_root() -> Self {
        Self::new(DirTarget::VenvRoot)
    }
}

impl PipelineStep for EnsureDirStep {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate_input(&self, _ctx: &Context, _state: &RunState) -> StepResult<()> {
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<StepOutcome> {
        let path = self.target.path(&ctx.paths);

        if !ensure_dir(path)? {
            return Ok(StepOutcome::Skipped(format!(
                "{} exists",
                path.display()
            )));
        }

        ctx.logger.info(&format!(
            "Created {} {}",
            self.target.label(),
            path.display()
        ));
        state.created.push(path.to_path_buf());
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, ctx: &Context, _state: &RunState) -> StepResult<()> {
        let path = self.target.path(&ctx.paths);
        if !path.is_dir() {
            return Err(StepError::invalid_output(format!(
                "{} was not created",
                path.display()
            )));
        }
        Ok(())
    }
}
