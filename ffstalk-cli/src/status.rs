//! One-line progress status on stderr.
//!
//! stdout stays reserved for the rendered record so `--json` output can be
//! piped straight into other tools.

use crossterm::style::Stylize;

/// Status line for a single in-flight operation.
pub struct Status {
    quiet: bool,
}

impl Status {
    /// Print the pending message.
    pub fn start(message: &str, quiet: bool) -> Self {
        if !quiet {
            eprintln!("{} {message}", "…".cyan());
        }
        Self { quiet }
    }

    pub fn succeed(self, message: &str) {
        if !self.quiet {
            eprintln!("{} {message}", "✔".green());
        }
    }

    /// Failures are always reported, even when quiet.
    pub fn fail(self, message: &str) {
        eprintln!("{} {message}", "✖".red());
    }
}
