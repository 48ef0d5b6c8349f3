use linkval_shared::error::{AsDiagnostic, Context};
use thiserror::Error;

/// A value rejected by the type check on assignment.
///
/// The linked value keeps whatever it held before the rejected assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueValidationError {
    /// A boolean value other than `true` or `false`
    #[error("`{value}` is not a boolean value")]
    NotBoolean {
        /// The rejected value
        value: String,
    },
    /// A numeric value that does not parse as a number
    #[error("`{value}` is not a number")]
    NotNumeric {
        /// The rejected value
        value: String,
    },
    /// A port value that is not a whole number in `0..=65535`
    #[error("`{value}` is not a valid port")]
    NotPort {
        /// The rejected value
        value: String,
    },
}

impl AsDiagnostic for ValueValidationError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        let help = match self {
            Self::NotBoolean { .. } => "use `true` or `false`",
            Self::NotNumeric { .. } => "use a decimal number such as `42` or `0.5`",
            Self::NotPort { .. } => "use a whole number between 0 and 65535",
        };
        vec![Context::Help(help.to_string())]
    }
}
