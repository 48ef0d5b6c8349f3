use crate::error::{Context, ErrorLocation};

/// Trait for types that can be rendered as linked value diagnostics.
///
/// Tokenizer problems, unresolved placeholders, and rejected assignments all
/// implement this trait so that hosts can surface them uniformly, either as a
/// [`Diagnostic`](super::Diagnostic) with a source excerpt or as a plain
/// [`StatusMessage`](crate::status::StatusMessage).
pub trait AsDiagnostic {
    /// Returns the primary message.
    ///
    /// This should be a concise, user-friendly description of what went wrong.
    fn message(&self) -> String;

    /// Returns additional context information about the diagnostic.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }

    /// Returns the location of the diagnostic in the expression source.
    ///
    /// The location information is used for highlighting the offending part
    /// of the expression during reporting.
    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let _ = source;
        None
    }
}
