use crate::{
    lookup::Resolution,
    registry::NamespaceRegistry,
    scope::VariableScope,
};

/// The ordered variable scopes consulted when expanding placeholders.
///
/// Scope order is precedence order: the first scope that defines a key wins.
/// A context is assembled by the caller for each call from the current
/// configuration snapshot; nothing in the engine keeps it around.
#[derive(Debug, Clone)]
pub struct ResolutionContext<'r> {
    registry: &'r NamespaceRegistry,
    scopes: Vec<VariableScope>,
}

impl<'r> ResolutionContext<'r> {
    /// Creates a context with no scopes.
    #[must_use]
    pub const fn new(registry: &'r NamespaceRegistry) -> Self {
        Self {
            registry,
            scopes: Vec::new(),
        }
    }

    /// Creates a context from scopes in precedence order.
    #[must_use]
    pub const fn with_scopes(registry: &'r NamespaceRegistry, scopes: Vec<VariableScope>) -> Self {
        Self { registry, scopes }
    }

    /// Appends a scope with the lowest precedence so far.
    #[must_use]
    pub fn push_scope(mut self, scope: VariableScope) -> Self {
        self.scopes.push(scope);
        self
    }

    /// Returns the namespace registry.
    #[must_use]
    pub const fn registry(&self) -> &'r NamespaceRegistry {
        self.registry
    }

    /// Returns the scopes in precedence order.
    #[must_use]
    pub fn scopes(&self) -> &[VariableScope] {
        &self.scopes
    }

    /// Looks up `key` in `namespace`, trying each scope in order.
    #[must_use]
    pub fn lookup(&self, namespace: &str, key: &str) -> Resolution<'_> {
        let Some(resolver) = self.registry.get(namespace) else {
            return Resolution::UnknownNamespace;
        };

        self.scopes
            .iter()
            .find_map(|scope| {
                resolver
                    .lookup(key, scope)
                    .map(|value| (scope.name(), value))
            })
            .map_or(Resolution::NotFound, |(scope, value)| {
                tracing::trace!(namespace, key, scope, "resolved placeholder");
                Resolution::Found(value)
            })
    }
}
