use linkval_parser::PlaceholderName;
use linkval_shared::{
    error::{AsDiagnostic, Context, ErrorLocation},
    span::Span,
    status::StatusMessage,
};
use serde::Serialize;
use thiserror::Error;

/// The outcome of expanding an expression.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ExpansionResult {
    /// The best-effort expanded text. Unresolved placeholders are kept as
    /// written.
    pub text: String,
    /// Placeholders that could not be expanded, in source order.
    pub unresolved: Vec<UnresolvedPlaceholder>,
    /// Problems with the expression text itself, such as malformed
    /// placeholders, in source order.
    pub errors: Vec<StatusMessage>,
}

impl ExpansionResult {
    /// Returns `true` if every placeholder was expanded and the expression
    /// had no malformed placeholders.
    #[must_use]
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty() && self.errors.is_empty()
    }

    /// Returns status messages for the unresolved placeholders followed by
    /// the errors.
    #[must_use]
    pub fn status_messages(&self) -> Vec<StatusMessage> {
        self.unresolved
            .iter()
            .map(StatusMessage::from_diagnostic)
            .chain(self.errors.iter().cloned())
            .collect()
    }
}

/// Why a placeholder was left unexpanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnresolvedReason {
    /// The namespace is registered but no scope defines the key
    #[error("is not defined")]
    NotFound,
    /// The namespace is not registered
    #[error("uses an unknown namespace")]
    UnknownNamespace,
    /// The value contains placeholders but the depth limit was reached
    #[error("would need expansion beyond the depth limit")]
    DepthExceeded,
    /// The placeholder refers back to itself through the values it expands to
    #[error("refers back to itself")]
    Cycle,
}

/// A placeholder that was left unexpanded.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("placeholder `{raw}` {reason}")]
pub struct UnresolvedPlaceholder {
    /// The namespace and key of the placeholder
    pub name: PlaceholderName,
    /// The placeholder as written
    pub raw: String,
    /// The span of the placeholder in the text it appeared in
    pub span: Span,
    /// The placeholder whose value contained this one, if it was not part of
    /// the expression itself
    pub via: Option<PlaceholderName>,
    /// Why the placeholder was left unexpanded
    pub reason: UnresolvedReason,
}

impl AsDiagnostic for UnresolvedPlaceholder {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        let mut context = Vec::new();

        if let Some(via) = &self.via {
            context.push(Context::Note(format!("found in the value of `{via}`")));
        }

        match self.reason {
            UnresolvedReason::NotFound => {}
            UnresolvedReason::UnknownNamespace => context.push(Context::Note(format!(
                "namespace `{}` is not registered",
                self.name.namespace
            ))),
            UnresolvedReason::DepthExceeded => context.push(Context::Help(
                "raise the expansion depth or simplify the chain of linked values".to_string(),
            )),
            UnresolvedReason::Cycle => context.push(Context::Help(
                "break the cycle by giving one of the values a literal".to_string(),
            )),
        }

        context
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        // nested placeholders have spans into a value, not into the source
        self.via
            .is_none()
            .then(|| ErrorLocation::from_source_and_span(source, &self.span))
    }
}
