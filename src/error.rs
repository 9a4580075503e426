//! Domain-specific error types for the provisioning engine.
//!
//! Internal modules return typed errors ([`ConfigError`], [`InstallError`],
//! [`ExecError`]) while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! Probe failures (installed-set queries that cannot be answered) are not
//! errors: they degrade to "nothing known to be installed" with a logged
//! warning, and the underlying package manager is the final arbiter of
//! idempotency.

use thiserror::Error;

/// Errors that arise from loading the manifest file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading the manifest.
    #[error("cannot read manifest {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest contains malformed YAML.
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        /// Path to the malformed file.
        path: String,
        /// Underlying parse error.
        source: serde_yaml::Error,
    },
}

/// Errors that arise while running an installer step.
#[derive(Error, Debug)]
pub enum InstallError {
    /// A required external tool is not on PATH.
    #[error("{0} command not found")]
    ToolNotFound(String),

    /// Flatpak is missing and no package manager is available to install it.
    #[error("flatpak not found and no supported package manager (dnf, apt-get) found")]
    NoFlatpakBackend,
}

/// Errors from launching or waiting on an external command.
#[derive(Error, Debug)]
pub enum ExecError {
    /// The program could not be launched at all.
    #[error("failed to execute {program}: {source}")]
    Launch {
        /// Program that failed to launch.
        program: String,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The program ran but exited non-zero (or was killed by a signal).
    #[error("{command} failed (exit {})", code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    ExitStatus {
        /// The full command line, for diagnostics.
        command: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn config_error_io_display() {
        let e = ConfigError::Io {
            path: "config.yaml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("cannot read manifest config.yaml"));
    }

    #[test]
    fn config_error_io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: "config.yaml".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn install_error_tool_not_found_display() {
        let e = InstallError::ToolNotFound("dnf".to_string());
        assert_eq!(e.to_string(), "dnf command not found");
    }

    #[test]
    fn install_error_no_backend_display() {
        let e = InstallError::NoFlatpakBackend;
        assert!(e.to_string().contains("no supported package manager"));
    }

    #[test]
    fn exec_error_exit_status_display() {
        let e = ExecError::ExitStatus {
            command: "sudo dnf install".to_string(),
            code: Some(1),
        };
        assert_eq!(e.to_string(), "sudo dnf install failed (exit 1)");
    }

    #[test]
    fn exec_error_signal_display() {
        let e = ExecError::ExitStatus {
            command: "sh -c".to_string(),
            code: None,
        };
        assert_eq!(e.to_string(), "sh -c failed (exit signal)");
    }

    #[test]
    fn exec_error_launch_display() {
        let e = ExecError::Launch {
            program: "flatpak".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(e.to_string().contains("failed to execute flatpak"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<ConfigError>();
        assert_send_sync::<InstallError>();
        assert_send_sync::<ExecError>();
    }

    #[test]
    fn errors_convert_to_anyhow() {
        let _e: anyhow::Error = InstallError::ToolNotFound("apt-get".to_string()).into();
        let _e: anyhow::Error = ExecError::ExitStatus {
            command: "x".to_string(),
            code: Some(2),
        }
        .into();
    }
}
