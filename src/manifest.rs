//! Declared-state manifest: the YAML document describing what the machine
//! should have installed.
//!
//! Missing keys are empty lists, unknown keys are ignored, and an empty file
//! is a valid empty manifest. The manifest is loaded once per invocation and
//! never mutated.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default Flatpak remote used when the manifest declares none.
pub const DEFAULT_REMOTE_NAME: &str = "flathub";
/// URL of the default Flatpak remote.
pub const DEFAULT_REMOTE_URL: &str = "https://flathub.org/repo/flathub.flatpakrepo";

/// A named Flatpak source repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlatpakRemote {
    pub name: String,
    pub url: String,
}

/// The declared software state for one machine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// System packages installed via dnf (Fedora family).
    #[serde(default)]
    pub dnf: Vec<String>,
    /// System packages installed via apt-get (Debian family).
    #[serde(default)]
    pub apt: Vec<String>,
    /// Flatpak application IDs, optionally in `remote/app.id` form.
    #[serde(default)]
    pub flatpak: Vec<String>,
    /// Flatpak remotes to register before installing apps.
    #[serde(default)]
    pub flatpak_remotes: Vec<FlatpakRemote>,
    /// Third-party repository descriptors (URLs or `.repo` file paths).
    #[serde(default)]
    pub repositories: Vec<String>,
    /// Shell commands run after everything else, in declared order.
    #[serde(default)]
    pub post_install: Vec<String>,
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Yaml`] if it is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        // serde_yaml parses an empty document as null, which does not
        // deserialize into a struct.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Yaml {
            path: path.display().to_string(),
            source,
        })
    }

    /// The declared Flatpak remotes, or the flathub default when none are
    /// declared.
    #[must_use]
    pub fn flatpak_remotes_or_default(&self) -> Vec<FlatpakRemote> {
        if self.flatpak_remotes.is_empty() {
            vec![FlatpakRemote {
                name: DEFAULT_REMOTE_NAME.to_string(),
                url: DEFAULT_REMOTE_URL.to_string(),
            }]
        } else {
            self.flatpak_remotes.clone()
        }
    }
}
