use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the provisioning engine.
#[derive(Parser, Debug)]
#[command(
    name = "sysup",
    about = "Declarative provisioning of Fedora and Debian machines from a YAML manifest",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Path to the manifest file
    #[arg(short, long, global = true, default_value = "config.yaml")]
    pub config: std::path::PathBuf,

    /// Preview the commands that would run without executing them
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Provision a Fedora-family machine (DNF, Flatpak)
    Fedora(FedoraOpts),
    /// Provision a Debian/Ubuntu machine (APT, Flatpak)
    Debian(DebianOpts),
}

/// Which resource kinds a run is restricted to.
///
/// Derived from the per-family restriction flags; at most one flag may be
/// set (clap enforces the conflict), and no flag means the full pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Full pipeline: repositories, remotes, packages, apps, scripts.
    #[default]
    All,
    /// System packages only (dnf or apt).
    PackagesOnly,
    /// Flatpak remotes and apps only.
    AppsOnly,
    /// Repository and remote setup only.
    ReposOnly,
}

/// Options for the `fedora` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct FedoraOpts {
    /// Only install DNF packages
    #[arg(long, group = "scope")]
    pub dnf: bool,

    /// Only install Flatpak apps
    #[arg(long, group = "scope")]
    pub flatpak: bool,

    /// Only set up repositories and Flatpak remotes
    #[arg(long, group = "scope")]
    pub repos: bool,
}

impl FedoraOpts {
    /// Fold the restriction flags into a [`Scope`].
    #[must_use]
    pub fn scope(&self) -> Scope {
        if self.dnf {
            Scope::PackagesOnly
        } else if self.flatpak {
            Scope::AppsOnly
        } else if self.repos {
            Scope::ReposOnly
        } else {
            Scope::All
        }
    }
}

/// Options for the `debian` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct DebianOpts {
    /// Only install APT packages
    #[arg(long, group = "scope")]
    pub apt: bool,

    /// Only install Flatpak apps
    #[arg(long, group = "scope")]
    pub flatpak: bool,
}

impl DebianOpts {
    /// Fold the restriction flags into a [`Scope`].
    #[must_use]
    pub fn scope(&self) -> Scope {
        if self.apt {
            Scope::PackagesOnly
        } else if self.flatpak {
            Scope::AppsOnly
        } else {
            Scope::All
        }
    }
}
