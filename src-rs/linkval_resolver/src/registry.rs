use std::{borrow::Cow, fmt};

use indexmap::IndexMap;

use crate::scope::VariableScope;

/// Looks up keys of one namespace in a variable scope.
///
/// The host application registers one resolver per namespace code it knows
/// about. Most namespaces are plain lookups ([`ScopeLookup`]); others derive
/// values from what a scope holds, which a closure can express:
///
/// ```rust
/// use std::borrow::Cow;
///
/// use linkval_resolver::{NamespaceRegistry, VariableScope};
///
/// let mut registry = NamespaceRegistry::new();
/// registry.register_fn("P", |key, scope| {
///     let root = scope.get("P", "ROOT")?;
///     Some(Cow::Owned(format!("{root}/{}", key.to_lowercase())))
/// });
///
/// let scope = VariableScope::new("instance").with_value("P", "ROOT", "/srv/app");
/// let resolver = registry.get("P").expect("P should be registered");
/// assert_eq!(resolver.lookup("LOG_DATA", &scope).as_deref(), Some("/srv/app/log_data"));
/// ```
pub trait NamespaceResolver {
    /// Returns the value of `key` in `scope`, or `None` if the scope does not
    /// define it.
    ///
    /// Implementations must not have side effects; the same inputs always
    /// produce the same output.
    fn lookup<'s>(&self, key: &str, scope: &'s VariableScope) -> Option<Cow<'s, str>>;
}

/// Resolves keys from the values a scope stores under a fixed namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeLookup {
    namespace: String,
}

impl ScopeLookup {
    /// Creates a lookup for values stored under `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl NamespaceResolver for ScopeLookup {
    fn lookup<'s>(&self, key: &str, scope: &'s VariableScope) -> Option<Cow<'s, str>> {
        scope.get(&self.namespace, key).map(Cow::Borrowed)
    }
}

impl<F> NamespaceResolver for F
where
    F: for<'s> Fn(&str, &'s VariableScope) -> Option<Cow<'s, str>>,
{
    fn lookup<'s>(&self, key: &str, scope: &'s VariableScope) -> Option<Cow<'s, str>> {
        self(key, scope)
    }
}

type BoxedResolver = Box<dyn NamespaceResolver + Send + Sync>;

/// The namespaces known to the host application and how to resolve them.
///
/// Placeholders in namespaces that are not registered never resolve.
#[derive(Default)]
pub struct NamespaceRegistry {
    resolvers: IndexMap<String, BoxedResolver>,
}

impl NamespaceRegistry {
    /// Creates a registry with no namespaces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry in which each of `namespaces` is a plain scope
    /// lookup.
    pub fn with_plain_namespaces<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for namespace in namespaces {
            registry.register_plain(namespace);
        }
        registry
    }

    /// Registers `namespace` as a plain scope lookup.
    pub fn register_plain(&mut self, namespace: impl Into<String>) {
        let namespace = namespace.into();
        let resolver = ScopeLookup::new(namespace.clone());
        self.resolvers.insert(namespace, Box::new(resolver));
    }

    /// Registers a resolver for `namespace`, replacing any previous one.
    pub fn register(
        &mut self,
        namespace: impl Into<String>,
        resolver: impl NamespaceResolver + Send + Sync + 'static,
    ) {
        self.resolvers.insert(namespace.into(), Box::new(resolver));
    }

    /// Registers a closure as the resolver for `namespace`.
    pub fn register_fn<F>(&mut self, namespace: impl Into<String>, resolver: F)
    where
        F: for<'s> Fn(&str, &'s VariableScope) -> Option<Cow<'s, str>> + Send + Sync + 'static,
    {
        self.register(namespace, resolver);
    }

    /// Returns the resolver registered for `namespace`.
    #[must_use]
    pub fn get(&self, namespace: &str) -> Option<&(dyn NamespaceResolver + Send + Sync)> {
        self.resolvers.get(namespace).map(AsRef::as_ref)
    }

    /// Returns `true` if `namespace` is registered.
    #[must_use]
    pub fn contains(&self, namespace: &str) -> bool {
        self.resolvers.contains_key(namespace)
    }

    /// Returns the registered namespace codes in registration order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(String::as_str)
    }
}

impl fmt::Debug for NamespaceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceRegistry")
            .field("namespaces", &self.resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_namespaces_are_registered() {
        let registry = NamespaceRegistry::with_plain_namespaces(["A", "P"]);
        assert!(registry.contains("A"));
        assert!(registry.contains("P"));
        assert!(!registry.contains("I"));
        assert_eq!(registry.namespaces().collect::<Vec<_>>(), vec!["A", "P"]);
    }

    #[test]
    fn scope_lookup_reads_its_namespace() {
        let scope = VariableScope::new("process").with_value("A", "UUID", "1234");
        let lookup = ScopeLookup::new("A");
        assert_eq!(lookup.lookup("UUID", &scope).as_deref(), Some("1234"));
        assert_eq!(lookup.lookup("NAME", &scope), None);
    }

    #[test]
    fn closure_resolver() {
        let mut registry = NamespaceRegistry::new();
        registry.register_fn("U", |key, _scope| {
            Some(Cow::Owned(key.to_uppercase()))
        });

        let scope = VariableScope::new("any");
        let resolver = registry.get("U").expect("U should be registered");
        assert_eq!(resolver.lookup("abc", &scope).as_deref(), Some("ABC"));
    }

    #[test]
    fn register_replaces_resolver() {
        let mut registry = NamespaceRegistry::with_plain_namespaces(["A"]);
        registry.register_fn("A", |_key, _scope| {
            Some(Cow::Borrowed("fixed"))
        });

        let scope = VariableScope::new("process").with_value("A", "UUID", "1234");
        let resolver = registry.get("A").expect("A should be registered");
        assert_eq!(resolver.lookup("UUID", &scope).as_deref(), Some("fixed"));
    }
}
