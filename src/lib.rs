//! Declarative OS provisioning engine.
//!
//! Re-creates a desired software state on a freshly installed Fedora- or
//! Debian-family machine from a YAML manifest: system packages (dnf/apt),
//! Flatpak remotes and applications, third-party repositories, and
//! post-install shell scripts.
//!
//! The public API is organised into five layers:
//!
//! - **[`manifest`]** — parse and validate the declared-state YAML document
//! - **[`plan`]** — pure convergence planning (skip already-satisfied items)
//! - **[`exec`]** — subprocess execution behind an injectable [`exec::Executor`]
//! - **[`installers`]** — per-resource installer steps and the sequential
//!   orchestration loop
//! - **[`commands`]** — top-level subcommand orchestration (`fedora`, `debian`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod exec;
pub mod installers;
pub mod logging;
pub mod manifest;
pub mod plan;
