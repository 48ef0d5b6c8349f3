//! Diagnostics produced while tokenizing an expression.
//!
//! Tokenizing never fails. Text that looks like a placeholder but is not a
//! well-formed one is kept as literal text, and a [`MalformedPlaceholder`]
//! is reported alongside the tokens.

use linkval_shared::{
    error::{AsDiagnostic, Context, ErrorLocation},
    span::Span,
};
use serde::Serialize;
use thiserror::Error;

/// Why placeholder-like text was not accepted as a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MalformedReason {
    /// The text between the markers has no `:`
    #[error("is missing a `:` between namespace and key")]
    MissingSeparator,
    /// The text before the `:` is empty
    #[error("has an empty namespace")]
    EmptyNamespace,
    /// The text after the `:` is empty
    #[error("has an empty key")]
    EmptyKey,
    /// A `{{` marker has no matching `}}`
    #[error("is never closed with `}}}}`")]
    Unterminated,
}

/// Placeholder-like text that was kept as a literal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("placeholder `{raw}` {reason}")]
pub struct MalformedPlaceholder {
    raw: String,
    span: Span,
    reason: MalformedReason,
}

impl MalformedPlaceholder {
    pub(crate) fn new(raw: impl Into<String>, span: Span, reason: MalformedReason) -> Self {
        Self {
            raw: raw.into(),
            span,
            reason,
        }
    }

    /// Returns the text as written, including the markers.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the span of the text in the expression source.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns why the text was not accepted as a placeholder.
    #[must_use]
    pub const fn reason(&self) -> MalformedReason {
        self.reason
    }
}

impl AsDiagnostic for MalformedPlaceholder {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self.reason {
            MalformedReason::MissingSeparator
            | MalformedReason::EmptyNamespace
            | MalformedReason::EmptyKey => vec![Context::Help(
                "placeholders are written as `{{NAMESPACE:KEY}}`".to_string(),
            )],
            MalformedReason::Unterminated => vec![Context::Note(
                "the text is kept as written".to_string(),
            )],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        Some(ErrorLocation::from_source_and_span(source, &self.span))
    }
}
