//! Diagnostics for linked value expressions

mod context;
mod location;
mod traits;

use serde::Serialize;

pub use context::Context;
pub use location::ErrorLocation;
pub use traits::AsDiagnostic;

/// Unified diagnostic representation
///
/// This struct represents a problem with an expression in a format suitable
/// for display to users. It includes an optional label naming the
/// configuration field the expression belongs to, a human-readable message,
/// and optional source location information for highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The configuration field the expression belongs to, if known
    label: Option<String>,
    /// Human-readable message
    message: String,
    /// Optional source location information for precise reporting
    location: Option<ErrorLocation>,
    /// Optional context information
    context: Vec<Context>,
}

impl Diagnostic {
    /// Creates a new `Diagnostic` from a value that implements `AsDiagnostic`
    ///
    /// This constructor creates a diagnostic without source location
    /// information. Use `from_error_with_source` if you need line and column
    /// information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkval_shared::error::{AsDiagnostic, Diagnostic};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsDiagnostic for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("Something went wrong".to_string());
    /// let diagnostic = Diagnostic::from_error(&error);
    /// assert_eq!(diagnostic.message(), "Something went wrong");
    /// assert!(diagnostic.location().is_none());
    /// ```
    pub fn from_error(error: &impl AsDiagnostic) -> Self {
        Self {
            label: None,
            message: error.message(),
            location: None,
            context: error.context(),
        }
    }

    /// Creates a new `Diagnostic` with location information computed from the
    /// expression source
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkval_shared::error::{AsDiagnostic, Diagnostic, ErrorLocation};
    ///
    /// struct PositionalError {
    ///     offset: usize,
    /// }
    ///
    /// impl AsDiagnostic for PositionalError {
    ///     fn message(&self) -> String {
    ///         "unexpected marker".to_string()
    ///     }
    ///
    ///     fn error_location(&self, source: &str) -> Option<ErrorLocation> {
    ///         Some(ErrorLocation::from_source_and_offset(source, self.offset))
    ///     }
    /// }
    ///
    /// let diagnostic = Diagnostic::from_error_with_source(&PositionalError { offset: 4 }, "abc {{");
    /// let location = diagnostic.location().expect("location should be computed");
    /// assert_eq!(location.column(), 5);
    /// ```
    pub fn from_error_with_source(error: &impl AsDiagnostic, source: &str) -> Self {
        Self {
            label: None,
            message: error.message(),
            location: error.error_location(source),
            context: error.context(),
        }
    }

    /// Attaches a label naming the configuration field the expression
    /// belongs to
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the label of the configuration field, if any
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the optional source location information
    #[must_use]
    pub const fn location(&self) -> Option<&ErrorLocation> {
        self.location.as_ref()
    }

    /// Returns the context information
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}

impl AsDiagnostic for Diagnostic {
    fn message(&self) -> String {
        self.message.clone()
    }

    fn context(&self) -> Vec<Context> {
        self.context.clone()
    }

    fn error_location(&self, _source: &str) -> Option<ErrorLocation> {
        self.location.clone()
    }
}
