use serde::{Deserialize, Serialize};

use crate::error::ValueValidationError;

/// The declared type of a linked value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    /// Free text
    #[default]
    String,
    /// A number
    Numeric,
    /// Exactly `true` or `false`
    Boolean,
    /// A secret that must not leak into shareable expression text
    Password,
    /// A port a client connects to
    ClientPort,
    /// A port a server listens on
    ServerPort,
    /// A URL
    Url,
}

impl VariableType {
    /// Returns `true` for types whose values are secrets.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }

    /// Returns `true` for port types.
    #[must_use]
    pub const fn is_port(self) -> bool {
        matches!(self, Self::ClientPort | Self::ServerPort)
    }

    /// Checks that `value` is acceptable for this type.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not `true`/`false` for booleans, not a
    /// finite number for numeric values, or not a port number for ports.
    /// The value is checked exactly as given; surrounding whitespace is an
    /// error for these types.
    pub fn validate(self, value: &str) -> Result<(), ValueValidationError> {
        match self {
            Self::Boolean => match value {
                "true" | "false" => Ok(()),
                _ => Err(ValueValidationError::NotBoolean {
                    value: value.to_string(),
                }),
            },
            Self::Numeric => match value.parse::<f64>() {
                Ok(number) if number.is_finite() => Ok(()),
                _ => Err(ValueValidationError::NotNumeric {
                    value: value.to_string(),
                }),
            },
            Self::ClientPort | Self::ServerPort => {
                let digits_only = value.bytes().all(|byte| byte.is_ascii_digit());
                if digits_only && value.parse::<u16>().is_ok() {
                    Ok(())
                } else {
                    Err(ValueValidationError::NotPort {
                        value: value.to_string(),
                    })
                }
            }
            Self::String | Self::Password | Self::Url => Ok(()),
        }
    }
}
