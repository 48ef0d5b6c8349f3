//! Template variable substitution
//!
//! Instance and system templates carry names, descriptions and default
//! mappings that refer to template variables as `{{NAMESPACE:KEY}}`. Before
//! an instance is created from a template, those placeholders are replaced
//! with the values the user entered or the variables' defaults.
//!
//! Substitution never fails. Problems are appended to a caller-supplied list
//! of [`StatusMessage`](linkval_shared::status::StatusMessage)s, which the
//! host uses to decide whether the template can be applied.

mod error;
mod substitute;
mod variable;

pub use error::MissingTemplateVariable;
pub use substitute::{TemplateSubstitutionOptions, substitute_template_variables, substitute_with};
pub use variable::{TemplateVariable, TemplateVariableType, TemplateVariableValues};
