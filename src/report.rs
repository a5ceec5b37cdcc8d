//! User-visible log channel
//!
//! The merge engine writes its fixed messages through a [`Reporter`] rather
//! than straight to stdout, so that the binary can speak the GitHub Actions
//! workflow-command dialect while tests record the lines instead.

use std::io::Write;

/// Log sink with the three severities the merge engine uses
pub trait Reporter: Send + Sync {
    /// Informational message
    fn info(&self, message: &str);

    /// Warning, surfaced as an annotation on the workflow run
    fn warning(&self, message: &str);

    /// Debug message, only shown when step debugging is on
    fn debug(&self, message: &str);
}

/// Reporter that discards everything
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn info(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

/// Reporter emitting GitHub Actions workflow commands on stdout
///
/// `info` lines are printed as-is, `warning` and `debug` become
/// `::warning::` and `::debug::` commands.
#[derive(Debug, Default)]
pub struct ActionsReporter;

impl ActionsReporter {
    fn emit(line: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout must not abort the merge flow.
        let _ = writeln!(stdout, "{line}");
    }
}

impl Reporter for ActionsReporter {
    fn info(&self, message: &str) {
        Self::emit(message);
    }

    fn warning(&self, message: &str) {
        Self::emit(&format_command("warning", message));
    }

    fn debug(&self, message: &str) {
        Self::emit(&format_command("debug", message));
    }
}

/// Escape a message for use as workflow command data
///
/// Mirrors the runner's own escaping: `%`, `\r` and `\n` become
/// `%25`, `%0D` and `%0A`.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Render `::{command}::{message}`
pub fn format_command(command: &str, message: &str) -> String {
    format!("::{command}::{}", escape_data(message))
}
