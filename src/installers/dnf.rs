//! DNF package installation and third-party repository setup (Fedora family).

use anyhow::{Context as _, Result};

use crate::error::InstallError;
use crate::plan::plan;

use super::{Context, Step, StepResult};

/// Install declared DNF packages.
pub struct InstallDnfPackages;

impl Step for InstallDnfPackages {
    fn name(&self) -> &str {
        "Install DNF packages"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.manifest.dnf.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<StepResult> {
        let packages: Vec<&str> = ctx.manifest.dnf.iter().map(String::as_str).collect();

        if ctx.dry_run {
            ctx.log.dry_run(&format!(
                "sudo dnf install --skip-unavailable {}",
                packages.join(" ")
            ));
            return Ok(StepResult::DryRun);
        }

        install_packages(ctx, &packages)?;
        Ok(StepResult::Done)
    }
}

/// Install packages through `sudo dnf install`.
///
/// Also used to bootstrap flatpak itself and the `dnf-plugins-core` plugin
/// package. Stdin is attached so dnf can prompt for GPG key imports.
///
/// # Errors
///
/// Returns [`InstallError::ToolNotFound`] when dnf is not on PATH, or an
/// [`ExecError`](crate::error::ExecError) when the install fails.
pub(crate) fn install_packages(ctx: &Context, packages: &[&str]) -> Result<()> {
    if packages.is_empty() {
        return Ok(());
    }
    if !ctx.executor.which("dnf") {
        return Err(InstallError::ToolNotFound("dnf".to_string()).into());
    }

    ctx.log
        .info(&format!("installing DNF packages: {}", packages.join(", ")));

    let mut args = vec!["dnf", "install", "--skip-unavailable"];
    args.extend_from_slice(packages);
    ctx.executor.run_interactive("sudo", &args)?;
    Ok(())
}

/// Register declared third-party repositories with dnf.
pub struct SetupDnfRepositories;

impl Step for SetupDnfRepositories {
    fn name(&self) -> &str {
        "Set up DNF repositories"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.manifest.repositories.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<StepResult> {
        ensure_plugins_core(ctx)?;

        let listing = enabled_repos(ctx);
        for repo in &ctx.manifest.repositories {
            if repo_registered(repo, &listing) {
                ctx.log
                    .info(&format!("repository {repo} already enabled, skipping"));
            }
        }

        let pending = plan(&ctx.manifest.repositories, |repo| {
            repo_registered(repo, &listing)
        });
        if pending.is_empty() {
            return Ok(StepResult::Skipped(
                "all repositories already enabled".to_string(),
            ));
        }

        for repo in pending {
            let from_repofile = format!("--from-repofile={repo}");
            if ctx.dry_run {
                ctx.log.dry_run(&format!(
                    "sudo dnf config-manager addrepo {from_repofile} --overwrite"
                ));
                continue;
            }

            ctx.log.info(&format!("adding repository: {repo}"));
            ctx.executor
                .run(
                    "sudo",
                    &["dnf", "config-manager", "addrepo", &from_repofile, "--overwrite"],
                )
                .with_context(|| format!("failed to add repository {repo}"))?;
        }

        Ok(if ctx.dry_run {
            StepResult::DryRun
        } else {
            StepResult::Done
        })
    }
}

/// The `config-manager` subcommand lives in dnf-plugins-core; install it when
/// `rpm -q` says it is missing. Exactly one install attempt is made.
fn ensure_plugins_core(ctx: &Context) -> Result<()> {
    let installed = matches!(
        ctx.executor.capture("rpm", &["-q", "dnf-plugins-core"]),
        Ok(result) if result.success
    );
    if installed {
        ctx.log.debug("dnf-plugins-core already installed");
        return Ok(());
    }

    ctx.log.info("dnf-plugins-core not found, installing");
    if ctx.dry_run {
        ctx.log
            .dry_run("sudo dnf install --skip-unavailable dnf-plugins-core");
        return Ok(());
    }

    install_packages(ctx, &["dnf-plugins-core"]).context("failed to install dnf-plugins-core")
}

/// Enabled repository listing from `dnf repolist --enabled`.
///
/// Probe failures degrade to an empty listing with a warning, so every
/// declared repository is treated as missing and the add commands (themselves
/// idempotent via `--overwrite`) run anyway.
fn enabled_repos(ctx: &Context) -> String {
    match ctx.executor.capture("dnf", &["repolist", "--enabled"]) {
        Ok(result) if result.success => result.stdout,
        _ => {
            ctx.log
                .warn("could not query enabled repositories; assuming none are registered");
            String::new()
        }
    }
}

/// Whether a repository descriptor already appears in the repolist output.
///
/// Matches the full descriptor or, for `.repo` file descriptors, the file's
/// basename, since repolist reports repo ids rather than source URLs.
pub(crate) fn repo_registered(descriptor: &str, listing: &str) -> bool {
    listing.contains(descriptor) || listing.contains(repo_short_name(descriptor))
}

fn repo_short_name(descriptor: &str) -> &str {
    if descriptor.ends_with(".repo") {
        descriptor.rsplit('/').next().unwrap_or(descriptor)
    } else {
        descriptor
    }
}
