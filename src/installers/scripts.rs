//! Post-install shell scripts, run after all package steps.

use anyhow::{Context as _, Result};

use super::{Context, Step, StepResult};

/// Run declared post-install scripts in order, stopping at the first failure.
pub struct RunPostInstallScripts;

impl Step for RunPostInstallScripts {
    fn name(&self) -> &str {
        "Run post-install scripts"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.manifest.post_install.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<StepResult> {
        for script in &ctx.manifest.post_install {
            if ctx.dry_run {
                ctx.log.dry_run(&format!("sh -c '{script}'"));
                continue;
            }

            ctx.log.info(&format!("running script: {script}"));
            ctx.executor
                .run("sh", &["-c", script])
                .with_context(|| format!("script failed: {script}"))?;
        }

        Ok(if ctx.dry_run {
            StepResult::DryRun
        } else {
            StepResult::Done
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::super::test_helpers::{MockExecutor, make_context};
    use super::*;
    use crate::logging::Logger;
    use crate::manifest::Manifest;

    fn manifest_with_scripts(scripts: &[&str]) -> Manifest {
        Manifest {
            post_install: scripts.iter().map(|s| (*s).to_string()).collect(),
            ..Manifest::default()
        }
    }

    #[test]
    fn not_applicable_when_list_empty() {
        let manifest = Manifest::default();
        let log = Logger::new(false);
        let executor = MockExecutor::default();
        let ctx = make_context(&manifest, &log, &executor);
        assert!(!RunPostInstallScripts.should_run(&ctx));
    }

    #[test]
    fn runs_scripts_in_declared_order() {
        let manifest = manifest_with_scripts(&["echo one", "echo two"]);
        let log = Logger::new(false);
        let executor = MockExecutor::with_responses(vec![
            (true, String::new()),
            (true, String::new()),
        ]);
        let ctx = make_context(&manifest, &log, &executor);

        RunPostInstallScripts.run(&ctx).unwrap();

        let calls = executor.recorded_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "sh");
        assert_eq!(calls[0].1, vec!["-c", "echo one"]);
        assert_eq!(calls[1].1, vec!["-c", "echo two"]);
    }

    #[test]
    fn stops_at_first_failing_script() {
        let manifest = manifest_with_scripts(&["echo ok", "exit 1", "echo never"]);
        let log = Logger::new(false);
        let executor = MockExecutor::with_responses(vec![
            (true, String::new()),
            (false, String::new()),
        ]);
        let ctx = make_context(&manifest, &log, &executor);

        let err = RunPostInstallScripts.run(&ctx).unwrap_err();
        assert!(err.to_string().contains("script failed: exit 1"));
        assert_eq!(executor.recorded_calls().len(), 2, "third script must not run");
    }

    #[test]
    fn dry_run_invokes_nothing() {
        let manifest = manifest_with_scripts(&["echo one"]);
        let log = Logger::new(false);
        let executor = MockExecutor::default();
        let mut ctx = make_context(&manifest, &log, &executor);
        ctx.dry_run = true;

        let result = RunPostInstallScripts.run(&ctx).unwrap();
        assert!(matches!(result, StepResult::DryRun));
        assert!(executor.recorded_calls().is_empty());
    }
}
