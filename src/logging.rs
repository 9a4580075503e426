//! Terminal output for the provisioning run.

/// Structured logger with verbose gating and dry-run awareness.
#[derive(Debug)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn error(&self, msg: &str) {
        eprintln!("\x1b[31mERROR\x1b[0m {msg}");
    }

    pub fn warn(&self, msg: &str) {
        eprintln!("\x1b[33mWARN\x1b[0m  {msg}");
    }

    pub fn stage(&self, msg: &str) {
        println!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m");
    }

    pub fn info(&self, msg: &str) {
        println!("  {msg}");
    }

    pub fn debug(&self, msg: &str) {
        if self.verbose {
            println!("  \x1b[2m{msg}\x1b[0m");
        }
    }

    pub fn dry_run(&self, msg: &str) {
        println!("  \x1b[33m[DRY RUN]\x1b[0m {msg}");
    }
}
