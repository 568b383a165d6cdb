//! Interpreter discovery step.

use crate::bootstrap::discover_interpreter;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, RunState, StepOutcome};

/// Finds the Python interpreter used to create the venv.
///
/// Runs before any directory is created so a missing interpreter leaves
/// the filesystem untouched.
pub struct InterpreterStep;

impl InterpreterStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InterpreterStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for InterpreterStep {
    fn name(&self) -> &str {
        "Interpreter discovery"
    }

    fn validate_input(&self, _ctx: &Context, state: &RunState) -> StepResult<()> {
        if state.platform.is_none() {
            return Err(StepError::precondition_failed("Platform has not been checked"));
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<StepOutcome> {
        let interpreter = discover_interpreter(&ctx.settings.python.interpreter, &ctx.host)?;
        ctx.logger
            .info(&format!("Using {}", interpreter.display()));
        state.interpreter = Some(interpreter);
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &RunState) -> StepResult<()> {
        match &state.interpreter {
            Some(path) if path.exists() => Ok(()),
            Some(path) => Err(StepError::file_not_found(path.display().to_string())),
            None => Err(StepError::invalid_output("Interpreter not recorded")),
        }
    }
}
