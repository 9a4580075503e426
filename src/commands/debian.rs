//! The `debian` subcommand: APT packages, Flatpak, scripts.
//!
//! Third-party repository setup is a Fedora-only feature; the Debian
//! pipeline has no repositories step.

use anyhow::Result;

use crate::cli::{DebianOpts, GlobalOpts, Scope};
use crate::exec::SystemExecutor;
use crate::installers::{self, Context, Step, apt, flatpak, scripts};
use crate::logging::Logger;

/// Run the Debian provisioning pipeline.
///
/// # Errors
///
/// Returns an error when the manifest cannot be loaded or a step fails.
pub fn run(global: &GlobalOpts, opts: &DebianOpts, log: &Logger) -> Result<()> {
    let manifest = super::load_manifest(global, log)?;
    let executor = SystemExecutor;
    let ctx = Context {
        manifest: &manifest,
        log,
        executor: &executor,
        dry_run: global.dry_run,
    };
    installers::run_steps(&steps_for(opts.scope()), &ctx)
}

/// Assemble the Debian step pipeline for a scope.
#[must_use]
pub fn steps_for(scope: Scope) -> Vec<Box<dyn Step>> {
    let mut steps: Vec<Box<dyn Step>> = Vec::new();
    if matches!(scope, Scope::All | Scope::ReposOnly | Scope::AppsOnly) {
        steps.push(Box::new(flatpak::SetupFlatpakRemotes));
    }
    if matches!(scope, Scope::All | Scope::PackagesOnly) {
        steps.push(Box::new(apt::InstallAptPackages));
    }
    if matches!(scope, Scope::All | Scope::AppsOnly) {
        steps.push(Box::new(flatpak::InstallFlatpakApps));
    }
    if scope == Scope::All {
        steps.push(Box::new(scripts::RunPostInstallScripts));
    }
    steps
}
