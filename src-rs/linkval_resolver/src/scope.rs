use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named layer of variables, such as the parameters of one process or the
/// variables of an instance.
///
/// Values are grouped by namespace code, then by key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariableScope {
    name: String,
    #[serde(default)]
    values: IndexMap<String, IndexMap<String, String>>,
}

impl VariableScope {
    /// Creates an empty scope.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: IndexMap::new(),
        }
    }

    /// Adds a value and returns the scope, for building scopes inline.
    #[must_use]
    pub fn with_value(
        mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(namespace, key, value);
        self
    }

    /// Adds or replaces a value, returning the previous one.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.values
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Returns the scope name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a value defined directly in this scope.
    #[must_use]
    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        self.values
            .get(namespace)
            .and_then(|values| values.get(key))
            .map(String::as_str)
    }

    /// Returns the keys defined for `namespace`, in insertion order.
    pub fn keys(&self, namespace: &str) -> impl Iterator<Item = &str> {
        self.values
            .get(namespace)
            .into_iter()
            .flat_map(|values| values.keys().map(String::as_str))
    }
}
