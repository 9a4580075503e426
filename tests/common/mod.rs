// Shared helpers for integration tests.
//
// Provides a scripted executor so each test can drive the full provisioning
// pipeline against a fake system instead of real package managers, plus a
// temp-file-backed manifest writer.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;

use sysup::error::ExecError;
use sysup::exec::{ExecResult, Executor};

/// An executor that simulates a machine.
///
/// `which` answers from a fixed program list, `capture` answers from a
/// per-program response table (defaulting to failure, which installers treat
/// as "nothing present"), and every mutating call succeeds and is recorded.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    which_ok: Vec<String>,
    captures: HashMap<String, (bool, String)>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare which programs exist on the simulated PATH.
    pub fn with_which(mut self, programs: &[&str]) -> Self {
        self.which_ok = programs.iter().map(|p| (*p).to_string()).collect();
        self
    }

    /// Set the response for `capture` calls to `program`.
    pub fn with_capture(mut self, program: &str, success: bool, stdout: &str) -> Self {
        self.captures
            .insert(program.to_string(), (success, stdout.to_string()));
        self
    }

    /// All mutating invocations, rendered as `program arg1 arg2 ...` lines.
    pub fn call_lines(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("calls mutex")
            .iter()
            .map(|(program, args)| {
                if args.is_empty() {
                    program.clone()
                } else {
                    format!("{program} {}", args.join(" "))
                }
            })
            .collect()
    }

    fn record(&self, program: &str, args: &[&str]) {
        self.calls.lock().expect("calls mutex").push((
            program.to_string(),
            args.iter().map(|a| (*a).to_string()).collect(),
        ));
    }
}

impl Executor for ScriptedExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), ExecError> {
        self.record(program, args);
        Ok(())
    }

    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<(), ExecError> {
        self.record(program, args);
        Ok(())
    }

    fn capture(&self, program: &str, _args: &[&str]) -> Result<ExecResult, ExecError> {
        let (success, stdout) = self
            .captures
            .get(program)
            .cloned()
            .unwrap_or((false, String::new()));
        Ok(ExecResult {
            stdout,
            stderr: String::new(),
            success,
            code: Some(i32::from(!success)),
        })
    }

    fn which(&self, program: &str) -> bool {
        self.which_ok.iter().any(|p| p == program)
    }
}

/// Write manifest YAML to a temp file and return its handle.
pub fn write_manifest(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp manifest");
    file.write_all(contents.as_bytes())
        .expect("write temp manifest");
    file
}
