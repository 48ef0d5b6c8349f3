//! Placeholder resolution for linked value expressions
//!
//! A placeholder `{{NAMESPACE:KEY}}` is resolved against a
//! [`ResolutionContext`]: an ordered list of [`VariableScope`]s together
//! with the [`NamespaceRegistry`] that says which namespaces exist and how
//! their keys are looked up. The engine knows nothing about what any
//! namespace code means; the host registers them.
//!
//! ```rust
//! use linkval_parser::placeholders;
//! use linkval_resolver::{NamespaceRegistry, ResolutionContext, VariableScope, resolve};
//!
//! let registry = NamespaceRegistry::with_plain_namespaces(["A"]);
//! let context = ResolutionContext::new(&registry)
//!     .push_scope(VariableScope::new("process").with_value("A", "UUID", "1234"));
//!
//! let placeholder = placeholders("{{A:UUID}}")[0];
//! assert_eq!(resolve(&placeholder, &context).value(), Some("1234"));
//! ```

mod context;
mod lookup;
mod registry;
mod scope;

use linkval_parser::Placeholder;

pub use context::ResolutionContext;
pub use lookup::Resolution;
pub use registry::{NamespaceRegistry, NamespaceResolver, ScopeLookup};
pub use scope::VariableScope;

/// Resolves a placeholder against a context.
///
/// Unregistered namespaces resolve as [`Resolution::UnknownNamespace`];
/// resolution never fails and never modifies the context.
#[must_use]
pub fn resolve<'c>(placeholder: &Placeholder<'_>, context: &'c ResolutionContext<'_>) -> Resolution<'c> {
    context.lookup(placeholder.namespace(), placeholder.key())
}

#[cfg(test)]
mod tests {
    use linkval_parser::placeholders;

    use super::*;

    #[test]
    fn resolve_uses_namespace_and_key() {
        let registry = NamespaceRegistry::with_plain_namespaces(["P", "I"]);
        let context = ResolutionContext::new(&registry).push_scope(
            VariableScope::new("instance")
                .with_value("P", "LOG_DATA", "/var/log/app")
                .with_value("I", "someId", "42"),
        );

        let found: Vec<_> = placeholders("{{P:LOG_DATA}} {{I:someId}} {{I:other}} {{Q:x}}")
            .iter()
            .map(|placeholder| resolve(placeholder, &context))
            .collect();

        assert_eq!(found[0].value(), Some("/var/log/app"));
        assert_eq!(found[1].value(), Some("42"));
        assert_eq!(found[2], Resolution::NotFound);
        assert_eq!(found[3], Resolution::UnknownNamespace);
    }

    #[test]
    fn resolve_is_case_sensitive() {
        let registry = NamespaceRegistry::with_plain_namespaces(["A"]);
        let context = ResolutionContext::new(&registry)
            .push_scope(VariableScope::new("process").with_value("A", "UUID", "1234"));

        let placeholder = placeholders("{{a:UUID}}")[0];
        assert_eq!(resolve(&placeholder, &context), Resolution::UnknownNamespace);

        let placeholder = placeholders("{{A:uuid}}")[0];
        assert_eq!(resolve(&placeholder, &context), Resolution::NotFound);
    }
}
