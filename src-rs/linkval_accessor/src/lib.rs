//! Literal-or-expression configuration values
//!
//! A [`LinkedValueConfiguration`] holds either a literal value or a link
//! expression such as `{{P:ROOT}}/log`. Only that raw form is stored; the
//! functions here compute its effective value on demand against a
//! [`ResolutionContext`](linkval_resolver::ResolutionContext), check
//! assignments against a [`VariableType`], and convert between the two
//! forms.
//!
//! ```
//! use linkval_accessor::{LinkedValueConfiguration, get_effective_value};
//! use linkval_resolver::{NamespaceRegistry, ResolutionContext, VariableScope};
//!
//! let registry = NamespaceRegistry::with_plain_namespaces(["P"]);
//! let context = ResolutionContext::new(&registry)
//!     .push_scope(VariableScope::new("instance").with_value("P", "ROOT", "/srv"));
//!
//! let linked_value = LinkedValueConfiguration::link("{{P:ROOT}}/log");
//! assert_eq!(get_effective_value(&linked_value, &context).as_deref(), Some("/srv/log"));
//! ```

mod accessor;
mod error;
mod linked_value;
mod value_type;

pub use accessor::{
    LinkedValueAccessor, MASKED_VALUE, assign_link, assign_value, get_display_value,
    get_effective_value, get_pre_renderable, get_pre_renderable_text, get_preview, make_link,
    make_link_from_literal, make_plain, validate_effective_value,
};
pub use error::ValueValidationError;
pub use linked_value::LinkedValueConfiguration;
pub use value_type::VariableType;
