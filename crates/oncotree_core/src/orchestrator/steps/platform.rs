//! Platform check step - fails fast on unsupported hosts.

use crate::bootstrap::Platform;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, RunState, StepOutcome};

/// Verifies the host is Linux or macOS before anything else runs.
pub struct PlatformCheckStep;

impl PlatformCheckStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlatformCheckStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for PlatformCheckStep {
    fn name(&self) -> &str {
        "Platform check"
    }

    fn validate_input(&self, _ctx: &Context, _state: &RunState) -> StepResult<()> {
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<StepOutcome> {
        let platform = Platform::from_identifier(&ctx.host.os)?;
        ctx.logger.info(&format!("Running on {}", platform));
        state.platform = Some(platform);
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &RunState) -> StepResult<()> {
        if state.platform.is_none() {
            return Err(StepError::invalid_output("Platform not recorded"));
        }
        Ok(())
    }
}
