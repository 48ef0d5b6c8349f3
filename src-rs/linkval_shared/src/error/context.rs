use serde::Serialize;

/// Contextual information attached to a diagnostic.
///
/// Context entries are rendered below the main message and give the reader a
/// hint about why the expression did not expand the way they expected, or how
/// to fix it.
///
/// # Examples
///
/// ```rust
/// use linkval_shared::error::Context;
///
/// let note = Context::Note("namespace `Q` is not registered".to_string());
/// let help = Context::Help("placeholders are written as `{{NAMESPACE:KEY}}`".to_string());
///
/// let contexts = vec![note, help];
/// assert_eq!(contexts.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum Context {
    /// Additional information about the diagnostic, such as which scopes
    /// were searched or which variable introduced a nested placeholder.
    Note(String),

    /// An actionable suggestion for resolving the diagnostic.
    Help(String),
}
