//! Converter step - builds, prints and runs the converter command.

use crate::bootstrap::ConverterCommand;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, RunState, StepOutcome};

/// Runs the converter in the activated venv.
///
/// The converter's exit code is recorded; a non-zero code fails the step
/// with that same code.
pub struct ConvertStep;

impl ConvertStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConvertStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for ConvertStep {
    fn name(&self) -> &str {
        "Run converter"
    }

    fn validate_input(&self, _ctx: &Context, state: &RunState) -> StepResult<()> {
        if state.activation.is_none() {
            return Err(StepError::precondition_failed(
                "Virtual environment is not activated",
            ));
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<StepOutcome> {
        let command =
            ConverterCommand::from_settings(&ctx.settings.python, &ctx.settings.converter);
        ctx.logger.command(&command.display());

        let activation = state
            .activation()
            .ok_or_else(|| StepError::precondition_failed("Virtual environment is not activated"))?;
        let exit_code = command.run(activation)?;

        state.command = Some(command);
        state.converter_exit = Some(exit_code);

        if exit_code != 0 {
            return Err(StepError::command_failed(
                &ctx.settings.converter.script,
                exit_code,
                "converter reported failure",
            ));
        }
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &RunState) -> StepResult<()> {
        if state.converter_exit.is_none() {
            return Err(StepError::invalid_output("Converter exit code not recorded"));
        }
        Ok(())
    }
}
