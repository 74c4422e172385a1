//! Colored terminal output utilities.

use console::{Style, Term};
use serde::Serialize;

use crate::error::CliError;

/// Kind of status line, which decides its color.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Tone {
    Plain,
    Success,
    Warning,
    Error,
    Highlight,
}

/// Terminal output formatter.
///
/// Status lines go to stderr so that stdout carries only command results.
pub(crate) struct Output {
    status: Term,
    results: Term,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            results: Term::stdout(),
        }
    }

    /// Print a status line in the given tone.
    pub(crate) fn line(&self, tone: Tone, msg: &str) {
        let style = match tone {
            Tone::Plain => Style::new(),
            Tone::Success => Style::new().green(),
            Tone::Warning => Style::new().yellow(),
            Tone::Error => Style::new().red(),
            Tone::Highlight => Style::new().cyan().bold(),
        };
        let _ = self.status.write_line(&style.apply_to(msg).to_string());
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        self.line(Tone::Plain, msg);
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.line(Tone::Warning, msg);
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.line(Tone::Error, msg);
    }

    /// Print a plain result line to stdout.
    pub(crate) fn data(&self, text: &str) {
        let _ = self.results.write_line(text);
    }

    /// Print a value as pretty JSON to stdout.
    pub(crate) fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), CliError> {
        self.data(&serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
