//! Linked value expressions for configuration templates
//!
//! A linked value is a configuration field that holds either a literal or a
//! link expression, text with `{{NAMESPACE:KEY}}` placeholders that refer to
//! other configuration values. This crate bundles the pieces:
//!
//! - [`parser`]: tokenizes expressions
//! - [`resolver`]: namespace registry, variable scopes and lookups
//! - [`expand`]: best-effort expansion of expressions
//! - [`accessor`]: literal-or-expression values and their effective values
//! - [`template`]: template variable substitution
//! - [`document`]: YAML and JSON context and template variable documents

pub mod document;

pub use linkval_accessor as accessor;
pub use linkval_expand as expand;
pub use linkval_parser as parser;
pub use linkval_resolver as resolver;
pub use linkval_shared as shared;
pub use linkval_template as template;
