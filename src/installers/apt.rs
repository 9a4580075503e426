//! APT package installation (Debian family).

use anyhow::{Context as _, Result};

use crate::error::InstallError;

use super::{Context, Step, StepResult};

/// Install declared APT packages.
pub struct InstallAptPackages;

impl Step for InstallAptPackages {
    fn name(&self) -> &str {
        "Install APT packages"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.manifest.apt.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<StepResult> {
        let packages: Vec<&str> = ctx.manifest.apt.iter().map(String::as_str).collect();

        if ctx.dry_run {
            ctx.log.dry_run("sudo apt-get update");
            ctx.log.dry_run(&format!(
                "sudo apt-get install -y {}",
                packages.join(" ")
            ));
            return Ok(StepResult::DryRun);
        }

        install_packages(ctx, &packages)?;
        Ok(StepResult::Done)
    }
}

/// Refresh the package index and install packages through `sudo apt-get`.
///
/// Also used to bootstrap flatpak itself. The install runs with stdin
/// attached so apt-get can prompt when it needs to.
///
/// # Errors
///
/// Returns [`InstallError::ToolNotFound`] when apt-get is not on PATH, or an
/// error when the index refresh or the install itself fails.
pub(crate) fn install_packages(ctx: &Context, packages: &[&str]) -> Result<()> {
    if packages.is_empty() {
        return Ok(());
    }
    if !ctx.executor.which("apt-get") {
        return Err(InstallError::ToolNotFound("apt-get".to_string()).into());
    }

    ctx.log.info("updating APT package index");
    ctx.executor
        .run("sudo", &["apt-get", "update"])
        .context("failed to update the APT package index")?;

    ctx.log
        .info(&format!("installing APT packages: {}", packages.join(", ")));
    let mut args = vec!["apt-get", "install", "-y"];
    args.extend_from_slice(packages);
    ctx.executor.run_interactive("sudo", &args)?;
    Ok(())
}
