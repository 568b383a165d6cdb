//! Virtualenv creation step.

use crate::bootstrap::{create_venv, venv_ready};
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, RunState, StepOutcome};

/// Creates the virtualenv with the discovered interpreter, if missing.
///
/// A venv directory without its interpreter or pip (an interrupted
/// creation) is completed in place.
pub struct CreateVenvStep;

impl CreateVenvStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CreateVenvStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for CreateVenvStep {
    fn name(&self) -> &str {
        "Create virtual environment"
    }

    fn validate_input(&self, ctx: &Context, state: &RunState) -> StepResult<()> {
        if state.interpreter.is_none() {
            return Err(StepError::precondition_failed("No interpreter discovered"));
        }
        if !ctx.paths.venv_root.is_dir() {
            return Err(StepError::precondition_failed(format!(
                "{} does not exist",
                ctx.paths.venv_root.display()
            )));
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<StepOutcome> {
        let venv_dir = &ctx.paths.venv_dir;
        if venv_ready(&ctx.paths) {
            return Ok(StepOutcome::Skipped(format!(
                "Virtual environment {} exists",
                venv_dir.display()
            )));
        }

        let interpreter = state
            .interpreter
            .as_ref()
            .ok_or_else(|| StepError::precondition_failed("No interpreter discovered"))?;

        let incomplete = venv_dir.exists();
        if incomplete {
            ctx.logger.warn(&format!(
                "Virtual environment {} is incomplete, recreating",
                venv_dir.display()
            ));
        }

        ctx.logger.command(&format!(
            "{} -m venv {}",
            interpreter.display(),
            venv_dir.display()
        ));
        create_venv(interpreter, venv_dir)?;

        ctx.logger.info(&format!(
            "Created virtual environment {}",
            venv_dir.display()
        ));
        if !incomplete {
            state.created.push(venv_dir.clone());
        }
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, ctx: &Context, _state: &RunState) -> StepResult<()> {
        if !venv_ready(&ctx.paths) {
            return Err(StepError::invalid_output(format!(
                "{} has no interpreter or pip after creation",
                ctx.paths.venv_dir.display()
            )));
        }
        Ok(())
    }
}
