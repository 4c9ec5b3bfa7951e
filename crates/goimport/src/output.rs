//! Terminal output for the CLI.
//!
//! Status lines go to stderr so that `goimport resolve` can pipe the rendered
//! document from stdout untouched.

use console::{Style, Term};

pub(crate) struct Output {
    status: Term,
    result: Term,
    label: Style,
    ok: Style,
    warn: Style,
    err: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            result: Term::stdout(),
            label: Style::new().bold(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            err: Style::new().red(),
        }
    }

    /// Print a plain status line.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    /// Print a `label: value` status line with the label in bold.
    pub(crate) fn field(&self, label: &str, value: impl std::fmt::Display) {
        let _ = self
            .status
            .write_line(&format!("{}: {value}", self.label.apply_to(label)));
    }

    pub(crate) fn success(&self, msg: &str) {
        let _ = self.status.write_line(&self.ok.apply_to(msg).to_string());
    }

    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.status.write_line(&self.warn.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        let _ = self.status.write_line(&self.err.apply_to(msg).to_string());
    }

    /// Write a command result verbatim to stdout.
    pub(crate) fn result(&self, text: &str) -> std::io::Result<()> {
        self.result.write_str(text)
    }
}
