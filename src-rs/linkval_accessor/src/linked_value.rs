use serde::{Deserialize, Serialize};

/// A configuration value that is either a literal or a link expression.
///
/// At most one of the two is set; neither being set means the value is
/// unset and the default applies. Only this raw form is ever persisted;
/// expansion happens on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "LinkedValueDocument", rename_all = "camelCase")]
pub struct LinkedValueConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link_expression: Option<String>,
}

impl LinkedValueConfiguration {
    /// Creates an unset value.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            value: None,
            link_expression: None,
        }
    }

    /// Creates a literal value.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            link_expression: None,
        }
    }

    /// Creates a value holding a link expression.
    pub fn link(expression: impl Into<String>) -> Self {
        Self {
            value: None,
            link_expression: Some(expression.into()),
        }
    }

    /// Returns the literal value, if set.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the raw link expression, if set.
    #[must_use]
    pub fn link_expression(&self) -> Option<&str> {
        self.link_expression.as_deref()
    }

    /// Returns `true` if neither a literal nor a link expression is set.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.value.is_none() && self.link_expression.is_none()
    }

    /// Returns `true` if a link expression is set.
    #[must_use]
    pub const fn is_link(&self) -> bool {
        self.link_expression.is_some()
    }
}

/// The stored shape of a linked value, which may violate the
/// one-of invariant.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkedValueDocument {
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    link_expression: Option<String>,
}

impl From<LinkedValueDocument> for LinkedValueConfiguration {
    fn from(document: LinkedValueDocument) -> Self {
        match (document.value, document.link_expression) {
            (Some(_), Some(expression)) => {
                tracing::warn!(
                    expression = expression.as_str(),
                    "linked value has both a literal and a link expression, keeping the expression"
                );
                Self::link(expression)
            }
            (Some(value), None) => Self::literal(value),
            (None, Some(expression)) => Self::link(expression),
            (None, None) => Self::unset(),
        }
    }
}
