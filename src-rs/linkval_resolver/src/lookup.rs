use std::borrow::Cow;

/// The outcome of looking up a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'c> {
    /// A scope defines the key; the value is substituted verbatim
    Found(Cow<'c, str>),
    /// The namespace is registered but no scope defines the key
    NotFound,
    /// The namespace is not registered
    UnknownNamespace,
}

impl<'c> Resolution<'c> {
    /// Returns `true` if a value was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the value, if one was found.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Found(value) => Some(value.as_ref()),
            Self::NotFound | Self::UnknownNamespace => None,
        }
    }

    /// Converts into the found value, if any.
    #[must_use]
    pub fn into_value(self) -> Option<Cow<'c, str>> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::UnknownNamespace => None,
        }
    }
}
