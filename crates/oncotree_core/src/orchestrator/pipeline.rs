//! Pipeline runner that executes steps in sequence.

use super::errors::{PipelineError, PipelineResult};
use super::step::PipelineStep;
use super::types::{Context, RunState, StepOutcome};

/// Pipeline that runs a sequence of steps.
///
/// The pipeline executes steps in order, running validation before
/// and after each step, and stops at the first failure.
pub struct Pipeline {
    /// Steps to execute in order.
    steps: Vec<Box<dyn PipelineStep>>,
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step to the pipeline.
    pub fn add_step<S: PipelineStep + 'static>(&mut self, step: S) -> &mut Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Add a step (builder pattern).
    pub fn with_step<S: PipelineStep + 'static>(mut self, step: S) -> Self {
        self.add_step(step);
        self
    }

    /// Run the pipeline with the given context and state.
    ///
    /// Executes each step in order:
    /// 1. Run `validate_input`
    /// 2. Run `execute`
    /// 3. Run `validate_output` (if execute returned Success)
    pub fn run(&self, ctx: &Context, state: &mut RunState) -> PipelineResult<PipelineRunResult> {
        let mut result = PipelineRunResult {
            steps_completed: Vec::new(),
            steps_skipped: Vec::new(),
        };

        for step in &self.steps {
            let step_name = step.name();
            ctx.logger.phase(step.description());

            ctx.logger.debug(&format!("Validating input for '{}'", step_name));
            if let Err(e) = step.validate_input(ctx, state) {
                ctx.logger.error(&format!("Input validation failed: {}", e));
                return Err(PipelineError::step_failed(&ctx.run_name, step_name, e));
            }

            ctx.logger.debug(&format!("Executing '{}'", step_name));
            let outcome = step.execute(ctx, state).map_err(|e| {
                ctx.logger.error(&e.to_string());
                PipelineError::step_failed(&ctx.run_name, step_name, e)
            })?;

            match outcome {
                StepOutcome::Success => {
                    ctx.logger
                        .debug(&format!("Validating output for '{}'", step_name));
                    if let Err(e) = step.validate_output(ctx, state) {
                        ctx.logger.error(&format!("Output validation failed: {}", e));
                        return Err(PipelineError::step_failed(&ctx.run_name, step_name, e));
                    }

                    tracing::debug!("{} completed", step_name);
                    result.steps_completed.push(step_name.to_string());
                }
                StepOutcome::Skipped(reason) => {
                    ctx.logger.info(&format!("{}, skipping", reason));
                    result.steps_skipped.push(step_name.to_string());
                }
            }
        }

        Ok(result)
    }

    /// Get the number of steps in the pipeline.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Get step names in order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineRunResult {
    /// Steps that completed successfully.
    pub steps_completed: Vec<String>,
    /// Steps that were skipped.
    pub steps_skipped: Vec<String>,
}

impl PipelineRunResult {
    /// Check if all steps completed (none skipped).
    pub fn all_completed(&self) -> bool {
        self.steps_skipped.is_empty()
    }

    /// Total number of steps that ran.
    pub fn total_steps(&self) -> usize {
        self.steps_completed.len() + self.steps_skipped.len()
    }

    /// Whether the named step was skipped.
    pub fn was_skipped(&self, step_name: &str) -> bool {
        self.steps_skipped.iter().any(|s| s == step_name)
    }
}
