//! User-facing output
//!
//! Command results go through the [`Reporter`] trait so that `--quiet`
//! and `--verbose` are decided in one place:
//! - [`ConsoleReporter`] prints styled messages
//! - [`SilentReporter`] drops everything
//!
//! Diagnostics for developers use `tracing` instead and go to stderr.

use console::Style;

/// Sink for command result messages
pub trait Reporter {
    /// A completed action
    fn success(&self, message: &str);

    /// Neutral information
    fn info(&self, message: &str);

    /// Extra information, shown only in verbose mode
    fn detail(&self, message: &str);

    /// Something the user should look at
    fn warn(&self, message: &str);
}

/// Reporter printing styled messages to the terminal
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn success(&self, message: &str) {
        println!("{} {}", Style::new().green().bold().apply_to("✔"), message);
    }

    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn detail(&self, message: &str) {
        if self.verbose {
            println!("  {}", Style::new().dim().apply_to(message));
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", Style::new().yellow().bold().apply_to("warning:"), message);
    }
}

/// Reporter for `--quiet`
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn success(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn detail(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}

/// Pick a reporter for the global output flags
pub fn reporter(quiet: bool, verbose: bool) -> Box<dyn Reporter> {
    if quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(verbose))
    }
}
