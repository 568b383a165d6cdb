//! Pipeline step trait definition.
//!
//! All pipeline steps implement this trait, providing a consistent
//! interface for validation and execution.

use super::errors::StepResult;
use super::types::{Context, RunState, StepOutcome};

/// Trait for pipeline steps.
///
/// The pipeline runner calls these methods in order:
///
/// 1. `validate_input` - Check preconditions before execution
/// 2. `execute` - Perform the step's work
/// 3. `validate_output` - Verify the step produced valid output
///
/// # Example
///
/// ```ignore
/// struct ActivateStep;
///
/// impl PipelineStep for ActivateStep {
///     fn name(&self) -> &str { "Activate" }
///
///     fn validate_input(&self, ctx: &Context, _state: &RunState) -> StepResult<()> {
///         if !ctx.paths.venv_dir.exists() {
///             return Err(StepError::precondition_failed("venv missing"));
///         }
///         Ok(())
///     }
///
///     fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<StepOutcome> {
///         state.activation = Some(ActivatedEnv::activate(&ctx.paths, &ctx.host)?);
///         Ok(StepOutcome::Success)
///     }
///
///     fn validate_output(&self, _ctx: &Context, state: &RunState) -> StepResult<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait PipelineStep: Send + Sync {
    /// Get the step name (for logging and error context).
    fn name(&self) -> &str;

    /// Validate inputs before execution.
    ///
    /// Should check that all required preconditions are met (files exist,
    /// previous steps recorded their results, etc.).
    fn validate_input(&self, ctx: &Context, state: &RunState) -> StepResult<()>;

    /// Execute the step's main work.
    ///
    /// Should perform the step's processing and record results in `state`.
    /// Returns `StepOutcome::Skipped` when the work was already done.
    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<StepOutcome>;

    /// Validate outputs after execution.
    ///
    /// Called after `execute` returns `Success`.
    fn validate_output(&self, ctx: &Context, state: &RunState) -> StepResult<()>;

    /// Human-readable description of what this step does.
    fn description(&self) -> &str {
        self.name()
    }
}
