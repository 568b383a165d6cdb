//! Activation step - acquires the scoped venv handle.

use crate::bootstrap::ActivatedEnv;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, RunState, StepOutcome};

/// Activates the venv for the remaining steps.
///
/// The handle lives in `RunState` and is dropped with it.
pub struct ActivateStep;

impl ActivateStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ActivateStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for ActivateStep {
    fn name(&self) -> &str {
        "Activate virtual environment"
    }

    fn validate_input(&self, ctx: &Context, _state: &RunState) -> StepResult<()> {
        if !ctx.paths.venv_dir.is_dir() {
            return Err(StepError::precondition_failed(format!(
                "Virtual environment {} does not exist",
                ctx.paths.venv_dir.display()
            )));
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<StepOutcome> {
        let activation = ActivatedEnv::activate(&ctx.paths, &ctx.host)?;
        ctx.logger
            .info(&format!("Activated {}", activation.venv_dir().display()));
        state.activation = Some(activation);
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &RunState) -> StepResult<()> {
        if state.activation.is_none() {
            return Err(StepError::invalid_output("Activation not recorded"));
        }
        Ok(())
    }
}
