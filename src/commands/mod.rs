//! Subcommand entry points: one module per distribution family.
//!
//! Each family assembles its step pipeline from the requested [`Scope`] and
//! hands it to the orchestration loop with a real [`SystemExecutor`].

pub mod debian;
pub mod fedora;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::logging::Logger;
use crate::manifest::Manifest;

/// Version string embedded at build time, falling back to the crate version
/// when no git metadata was available.
fn version() -> &'static str {
    option_env!("SYSUP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Load the manifest named by `--config` and log what it declares.
fn load_manifest(global: &GlobalOpts, log: &Logger) -> Result<Manifest> {
    log.debug(&format!("sysup {}", version()));
    log.stage("Loading manifest");

    let manifest = Manifest::load(&global.config).context("failed to load config")?;
    log.info(&format!(
        "{}: {} dnf, {} apt, {} flatpak, {} remotes, {} repositories, {} scripts",
        global.config.display(),
        manifest.dnf.len(),
        manifest.apt.len(),
        manifest.flatpak.len(),
        manifest.flatpak_remotes.len(),
        manifest.repositories.len(),
        manifest.post_install.len(),
    ));
    if global.dry_run {
        log.info("dry run: no commands will be executed");
    }
    Ok(manifest)
}
