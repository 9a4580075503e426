//! Flatpak remotes and application installation.
//!
//! Flatpak is the one tool this crate bootstraps itself: when it is missing
//! and a supported system package manager exists, it gets installed through
//! that manager before any remote or app work happens.

use std::collections::HashSet;

use anyhow::{Context as _, Result};

use crate::error::InstallError;
use crate::plan::plan;

use super::{Context, Step, StepResult, apt, dnf};

/// Make sure the `flatpak` binary is available, installing it via dnf or
/// apt-get when it is not.
///
/// # Errors
///
/// Returns [`InstallError::NoFlatpakBackend`] when flatpak is missing and
/// neither dnf nor apt-get is on PATH, or the bootstrap install error.
fn ensure_flatpak(ctx: &Context) -> Result<()> {
    if ctx.executor.which("flatpak") {
        return Ok(());
    }

    ctx.log.info("flatpak not found, attempting to install it");
    if ctx.executor.which("dnf") {
        if ctx.dry_run {
            ctx.log.dry_run("sudo dnf install --skip-unavailable flatpak");
            return Ok(());
        }
        ctx.log.info("installing flatpak via DNF");
        dnf::install_packages(ctx, &["flatpak"]).context("failed to install flatpak")
    } else if ctx.executor.which("apt-get") {
        if ctx.dry_run {
            ctx.log.dry_run("sudo apt-get install -y flatpak");
            return Ok(());
        }
        ctx.log.info("installing flatpak via APT");
        apt::install_packages(ctx, &["flatpak"]).context("failed to install flatpak")
    } else {
        Err(InstallError::NoFlatpakBackend.into())
    }
}

/// The bare application id of a declared app, stripping any `remote/` prefix.
pub(crate) fn app_id(declared: &str) -> &str {
    declared.rsplit('/').next().unwrap_or(declared)
}

/// Application ids currently installed, from `flatpak list`.
///
/// A failed probe degrades to an empty set with a warning; the subsequent
/// `--or-update` install is idempotent, so over-installing is safe.
fn installed_apps(ctx: &Context) -> HashSet<String> {
    match ctx
        .executor
        .capture("flatpak", &["list", "--app", "--columns=application"])
    {
        Ok(result) if result.success => result
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect(),
        _ => {
            ctx.log
                .warn("could not query installed flatpak apps; assuming none are installed");
            HashSet::new()
        }
    }
}

/// Register declared Flatpak remotes (or the flathub default).
pub struct SetupFlatpakRemotes;

impl Step for SetupFlatpakRemotes {
    fn name(&self) -> &str {
        "Set up Flatpak remotes"
    }

    // Always applicable: with no remotes declared, flathub is registered so
    // app installs have a source.
    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<StepResult> {
        ensure_flatpak(ctx)?;

        for remote in ctx.manifest.flatpak_remotes_or_default() {
            if ctx.dry_run {
                ctx.log.dry_run(&format!(
                    "flatpak remote-add --if-not-exists {} {}",
                    remote.name, remote.url
                ));
                continue;
            }

            ctx.log
                .info(&format!("adding flatpak remote: {} ({})", remote.name, remote.url));
            ctx.executor
                .run(
                    "flatpak",
                    &["remote-add", "--if-not-exists", &remote.name, &remote.url],
                )
                .with_context(|| format!("failed to add flatpak remote {}", remote.name))?;
        }

        Ok(if ctx.dry_run {
            StepResult::DryRun
        } else {
            StepResult::Done
        })
    }
}

/// Install declared Flatpak applications in one batched transaction.
pub struct InstallFlatpakApps;

impl Step for InstallFlatpakApps {
    fn name(&self) -> &str {
        "Install Flatpak apps"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.manifest.flatpak.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<StepResult> {
        ensure_flatpak(ctx)?;

        let installed = installed_apps(ctx);
        for app in &ctx.manifest.flatpak {
            if installed.contains(app_id(app)) {
                ctx.log.info(&format!(
                    "flatpak app {} is already installed, skipping",
                    app_id(app)
                ));
            }
        }

        let pending = plan(&ctx.manifest.flatpak, |app| {
            installed.contains(app_id(app))
        });
        if pending.is_empty() {
            return Ok(StepResult::Skipped(
                "all requested flatpak apps are already installed".to_string(),
            ));
        }

        let ids: Vec<&str> = pending.iter().map(|app| app.as_str()).collect();
        if ctx.dry_run {
            ctx.log
                .dry_run(&format!("flatpak install -y --or-update {}", ids.join(" ")));
            return Ok(StepResult::DryRun);
        }

        ctx.log
            .info(&format!("installing flatpak apps: {}", ids.join(", ")));
        let mut args = vec!["install", "-y", "--or-update"];
        args.extend_from_slice(&ids);
        ctx.executor
            .run("flatpak", &args)
            .context("failed to install flatpak apps")?;
        Ok(StepResult::Done)
    }
}
