//! Status messages returned by the engine in place of errors

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AsDiagnostic, Context};

/// An informational or warning record produced while expanding expressions.
///
/// Status messages are never raised; they are collected and handed back to
/// the caller, which decides whether they block an action (for example,
/// disabling "Apply" until every required template variable is set).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusMessage {
    /// The human-readable message
    pub message: String,
}

impl StatusMessage {
    /// Creates a new status message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates a status message from a diagnostic.
    ///
    /// Help and note entries are appended to the message in parentheses, so
    /// that the information survives in hosts that only display a single line.
    #[must_use]
    pub fn from_diagnostic(diagnostic: &impl AsDiagnostic) -> Self {
        let message = diagnostic.message();
        let context = diagnostic.context();

        if context.is_empty() {
            return Self { message };
        }

        let details = context
            .iter()
            .map(|context| match context {
                Context::Note(note) => format!("note: {note}"),
                Context::Help(help) => format!("help: {help}"),
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            message: format!("{message} ({details})"),
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
