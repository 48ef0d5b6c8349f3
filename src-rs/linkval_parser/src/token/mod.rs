//! Tokens of a linked value expression.
//!
//! An expression is a sequence of literal text and placeholders. Tokens borrow
//! from the expression source, so tokenizing never copies the input.
//!
//! - `marker`: nom parsers for the `{{`, `}}` and `:` markers and the text
//!   between them

use std::fmt;

use linkval_shared::span::Span;
use serde::Serialize;

pub mod marker;

/// A single token of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Token<'a> {
    /// Literal text that is copied to the output unchanged
    Literal(Literal<'a>),
    /// A well-formed `{{NAMESPACE:KEY}}` placeholder
    Placeholder(Placeholder<'a>),
}

impl<'a> Token<'a> {
    /// Returns the source text this token was produced from.
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        match self {
            Self::Literal(literal) => literal.text,
            Self::Placeholder(placeholder) => placeholder.raw,
        }
    }

    /// Returns the span of the token in the expression source.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Literal(literal) => literal.span,
            Self::Placeholder(placeholder) => placeholder.span,
        }
    }

    /// Returns the placeholder if this token is one.
    #[must_use]
    pub const fn as_placeholder(&self) -> Option<&Placeholder<'a>> {
        match self {
            Self::Literal(_) => None,
            Self::Placeholder(placeholder) => Some(placeholder),
        }
    }
}

/// A run of literal text.
///
/// Malformed placeholders and unterminated `{{` markers are part of literal
/// runs; they are copied to the output as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Literal<'a> {
    text: &'a str,
    span: Span,
}

impl<'a> Literal<'a> {
    pub(crate) const fn new(text: &'a str, span: Span) -> Self {
        Self { text, span }
    }

    /// Returns the literal text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the span of the literal text.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }
}

/// A well-formed placeholder, `{{NAMESPACE:KEY}}`.
///
/// The namespace is the text before the first `:` and the key is everything
/// after it. Both are case-sensitive and never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder<'a> {
    raw: &'a str,
    namespace: &'a str,
    key: &'a str,
    span: Span,
}

impl<'a> Placeholder<'a> {
    pub(crate) const fn new(raw: &'a str, namespace: &'a str, key: &'a str, span: Span) -> Self {
        Self {
            raw,
            namespace,
            key,
            span,
        }
    }

    /// Returns the placeholder exactly as written, including the markers.
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        self.raw
    }

    /// Returns the namespace code.
    #[must_use]
    pub const fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Returns the key within the namespace.
    #[must_use]
    pub const fn key(&self) -> &'a str {
        self.key
    }

    /// Returns the span of the placeholder in the expression source.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns an owned name for this placeholder.
    #[must_use]
    pub fn name(&self) -> PlaceholderName {
        PlaceholderName::new(self.namespace, self.key)
    }
}

/// The owned namespace and key of a placeholder.
///
/// Used where a placeholder has to outlive the expression it was parsed from,
/// such as in expansion results and cycle tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlaceholderName {
    /// The namespace code
    pub namespace: String,
    /// The key within the namespace
    pub key: String,
}

impl PlaceholderName {
    /// Creates a new placeholder name.
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for PlaceholderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            marker::OPEN,
            self.namespace,
            marker::SEPARATOR,
            self.key,
            marker::CLOSE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_name_displays_as_placeholder() {
        let name = PlaceholderName::new("P", "LOG_DATA");
        assert_eq!(name.to_string(), "{{P:LOG_DATA}}");
    }
}
