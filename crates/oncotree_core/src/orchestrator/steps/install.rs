//! Dependency installation step.

use std::fs::File;

use crate::bootstrap::{install_dependencies, read_tail, BootstrapError};
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, RunState, StepOutcome};

/// Installs the dependency manifest into the activated venv.
///
/// Runs every time; pip itself skips already-satisfied requirements.
pub struct InstallStep;

impl InstallStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InstallStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for InstallStep {
    fn name(&self) -> &str {
        "Install dependencies"
    }

    fn validate_input(&self, ctx: &Context, state: &RunState) -> StepResult<()> {
        if state.activation.is_none() {
            return Err(StepError::precondition_failed(
                "Virtual environment is not activated",
            ));
        }
        if !ctx.paths.requirements.is_file() {
            return Err(StepError::file_not_found(
                ctx.paths.requirements.display().to_string(),
            ));
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<StepOutcome> {
        let activation = state
            .activation()
            .ok_or_else(|| StepError::precondition_failed("Virtual environment is not activated"))?;
        let python = activation.python().to_path_buf();

        ctx.logger.command(&format!(
            "{} -m pip install -r {} > {}",
            ctx.settings.python.venv_python,
            ctx.settings.paths.requirements,
            ctx.settings.paths.pip_log
        ));

        // Truncated on every run
        let log = File::create(&ctx.paths.pip_log).map_err(|e| {
            StepError::io_error(format!("create {}", ctx.settings.paths.pip_log), e)
        })?;

        match install_dependencies(
            activation,
            &python,
            &ctx.paths.requirements,
            log,
            &ctx.paths.pip_log,
        ) {
            Ok(()) => {
                ctx.logger.success("Dependencies installed");
                Ok(StepOutcome::Success)
            }
            Err(e @ BootstrapError::InstallDeps { .. }) => {
                for line in read_tail(&ctx.paths.pip_log, ctx.settings.logging.error_tail) {
                    ctx.logger.output_line(&line);
                }
                ctx.logger.show_tail(&ctx.settings.paths.pip_log);
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn validate_output(&self, ctx: &Context, _state: &RunState) -> StepResult<()> {
        if !ctx.paths.pip_log.exists() {
            return Err(StepError::invalid_output(format!(
                "{} was not written",
                ctx.paths.pip_log.display()
            )));
        }
        Ok(())
    }
}
