use linkval_shared::{
    error::{AsDiagnostic, Context, ErrorLocation},
    span::Span,
};
use thiserror::Error;

/// A template placeholder whose variable has no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("template variable `{id}` has no value")]
pub struct MissingTemplateVariable {
    /// The variable id
    pub id: String,
    /// The span of the placeholder in the template text
    pub span: Span,
}

impl AsDiagnostic for MissingTemplateVariable {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        vec![Context::Help(format!(
            "enter a value for `{}` or give the variable a default",
            self.id
        ))]
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        Some(ErrorLocation::from_source_and_span(source, &self.span))
    }
}
