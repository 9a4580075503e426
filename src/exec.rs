//! Subprocess execution behind an injectable [`Executor`] capability.
//!
//! Installers never spawn processes directly: they go through an `Executor`
//! so tests can substitute a mock instead of invoking real package managers.

use std::process::{Command, Output, Stdio};

use crate::error::ExecError;

/// Result of a captured command execution.
#[derive(Debug)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Command runner capability.
///
/// Mutating invocations ([`run`](Self::run), [`run_interactive`](Self::run_interactive))
/// stream the child's stdout/stderr to the parent's own streams so the user
/// sees the real-time output of the wrapped package manager. Passive probes
/// use [`capture`](Self::capture), which never attaches stdin and reports a
/// non-zero exit in the result rather than as an error.
pub trait Executor: Send + Sync {
    /// Run a command with inherited stdout/stderr and no stdin.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError`] if the program cannot be launched or exits
    /// non-zero.
    fn run(&self, program: &str, args: &[&str]) -> Result<(), ExecError>;

    /// Run a command with inherited stdout/stderr **and** stdin.
    ///
    /// For installers that may prompt the user (package installs).
    ///
    /// # Errors
    ///
    /// Returns [`ExecError`] if the program cannot be launched or exits
    /// non-zero.
    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<(), ExecError>;

    /// Run a command with captured output.
    ///
    /// A non-zero exit is reported through [`ExecResult::success`], not as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Launch`] only if the program cannot be started.
    fn capture(&self, program: &str, args: &[&str]) -> Result<ExecResult, ExecError>;

    /// Check if a program is available on PATH. No side effect.
    fn which(&self, program: &str) -> bool;
}

/// Production executor that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    fn run_streamed(program: &str, args: &[&str], stdin: Stdio) -> Result<(), ExecError> {
        let status = Command::new(program)
            .args(args)
            .stdin(stdin)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ExecError::Launch {
                program: program.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecError::ExitStatus {
                command: command_line(program, args),
                code: status.code(),
            })
        }
    }
}

impl Executor for SystemExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), ExecError> {
        Self::run_streamed(program, args, Stdio::null())
    }

    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<(), ExecError> {
        Self::run_streamed(program, args, Stdio::inherit())
    }

    fn capture(&self, program: &str, args: &[&str]) -> Result<ExecResult, ExecError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ExecError::Launch {
                program: program.to_string(),
                source,
            })?;
        Ok(ExecResult::from(output))
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Render a command line for error messages.
fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}
