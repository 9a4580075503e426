//! Per-resource installer steps and the sequential orchestration loop.
//!
//! Every installer follows the same template: no-op when its declared list is
//! empty, verify (or bootstrap) its external tool, consult the convergence
//! planner where the underlying manager is not idempotent on its own, then
//! invoke the executor with the resource-specific command line.
pub mod apt;
pub mod dnf;
pub mod flatpak;
pub mod scripts;

use anyhow::{Context as _, Result};

use crate::exec::Executor;
use crate::logging::Logger;
use crate::manifest::Manifest;

/// Shared context for installer execution.
pub struct Context<'a> {
    /// The declared-state manifest, loaded once and never mutated.
    pub manifest: &'a Manifest,
    /// Logger for terminal output.
    pub log: &'a Logger,
    /// Command executor (for testing or real system calls).
    pub executor: &'a dyn Executor,
    /// Whether to preview commands without executing them.
    pub dry_run: bool,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("manifest", &self.manifest)
            .field("log", &self.log)
            .field("executor", &"<dyn Executor>")
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

/// Result of a single installer step.
#[derive(Debug, Clone)]
pub enum StepResult {
    /// Step completed successfully.
    Done,
    /// Step had nothing to do (already converged).
    Skipped(String),
    /// Step ran in dry-run mode.
    DryRun,
}

/// A named installer step.
pub trait Step {
    /// Human-readable step name.
    fn name(&self) -> &str;

    /// Whether this step has any declared work.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the step.
    ///
    /// # Errors
    ///
    /// Returns an error when a required tool is absent or an external command
    /// fails; the orchestrator aborts the remaining pipeline on the first
    /// error.
    fn run(&self, ctx: &Context) -> Result<StepResult>;
}

/// Execute steps in order, short-circuiting on the first failure.
///
/// Steps with nothing declared are skipped without invoking any external
/// tool. Ordering is the caller's responsibility: repositories and remotes
/// are assembled before packages and apps, which precede post-install
/// scripts.
///
/// # Errors
///
/// Returns the first step error, annotated with the step name; later steps
/// do not run.
pub fn run_steps(steps: &[Box<dyn Step>], ctx: &Context) -> Result<()> {
    for step in steps {
        if !step.should_run(ctx) {
            ctx.log
                .debug(&format!("skipping step: {} (nothing declared)", step.name()));
            continue;
        }

        ctx.log.stage(step.name());
        match step
            .run(ctx)
            .with_context(|| format!("{} failed", step.name()))?
        {
            StepResult::Done | StepResult::DryRun => {}
            StepResult::Skipped(reason) => ctx.log.info(&format!("skipped: {reason}")),
        }
    }
    Ok(())
}
