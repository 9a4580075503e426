//! The `fedora` subcommand: DNF repositories and packages, Flatpak, scripts.

use anyhow::Result;

use crate::cli::{FedoraOpts, GlobalOpts, Scope};
use crate::exec::SystemExecutor;
use crate::installers::{self, Context, Step, dnf, flatpak, scripts};
use crate::logging::Logger;

/// Run the Fedora provisioning pipeline.
///
/// # Errors
///
/// Returns an error when the manifest cannot be loaded or a step fails.
pub fn run(global: &GlobalOpts, opts: &FedoraOpts, log: &Logger) -> Result<()> {
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

/// Assemble the Fedora step pipeline for a scope.
///
/// The full pipeline orders sources before consumers: repositories and
/// remotes first, then packages and apps, scripts last.
#[must_use]
pub fn steps_for(scope: Scope) -> Vec<Box<dyn Step>> {
    let mut steps: Vec<Box<dyn Step>> = Vec::new();
    if matches!(scope, Scope::All | Scope::ReposOnly) {
        steps.push(Box::new(dnf::SetupDnfRepositories));
    }
    if matches!(scope, Scope::All | Scope::ReposOnly | Scope::AppsOnly) {
        steps.push(Box::new(flatpak::SetupFlatpakRemotes));
    }
    if matches!(scope, Scope::All | Scope::PackagesOnly) {
        steps.push(Box::new(dnf::InstallDnfPackages));
    }
    if matches!(scope, Scope::All | Scope::AppsOnly) {
        steps.push(Box::new(flatpak::InstallFlatpakApps));
    }
    if scope == Scope::All {
        steps.push(Box::new(scripts::RunPostInstallScripts));
    }
    steps
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn names(scope: Scope) -> Vec<String> {
        steps_for(scope)
            .iter()
            .map(|step| step.name().to_string())
            .collect()
    }

    #[test]
    fn full_scope_orders_sources_before_consumers() {
        assert_eq!(
            names(Scope::All),
            vec![
                "Set up DNF repositories",
                "Set up Flatpak remotes",
                "Install DNF packages",
                "Install Flatpak apps",
                "Run post-install scripts",
            ]
        );
    }

    #[test]
    fn packages_scope_installs_dnf_only() {
        assert_eq!(names(Scope::PackagesOnly), vec!["Install DNF packages"]);
    }

    #[test]
    fn apps_scope_covers_remotes_and_apps() {
        assert_eq!(
            names(Scope::AppsOnly),
            vec!["Set up Flatpak remotes", "Install Flatpak apps"]
        );
    }

    #[test]
    fn repos_scope_covers_repositories_and_remotes() {
        assert_eq!(
            names(Scope::ReposOnly),
            vec!["Set up DNF repositories", "Set up Flatpak remotes"]
        );
    }
}
