use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The type of a template variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateVariableType {
    /// `true` or `false`; a missing value becomes `false`
    Boolean,
    /// A number
    Numeric,
    /// A secret
    Password,
    /// Free text
    #[default]
    #[serde(alias = "TEXT")]
    String,
}

/// A variable declared by an instance or system template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    /// The key used in `{{NAMESPACE:KEY}}` placeholders
    pub id: String,
    /// A display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A longer description shown to the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The variable type
    #[serde(default, rename = "type")]
    pub variable_type: TemplateVariableType,
    /// The value used when the user gives none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl TemplateVariable {
    /// Creates a variable of the given type with no default.
    pub fn new(id: impl Into<String>, variable_type: TemplateVariableType) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            variable_type,
            default_value: None,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}

/// The resolved values of a template's variables, keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateVariableValues {
    values: IndexMap<String, String>,
}

impl TemplateVariableValues {
    /// Creates an empty set of values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves each definition to the user's value, else its default.
    ///
    /// Boolean variables with neither become `"false"`. Other variables
    /// with neither are left out, so their placeholders are reported as
    /// missing on substitution. User values for ids that no definition
    /// declares are ignored.
    #[must_use]
    pub fn from_definitions(
        definitions: &[TemplateVariable],
        user_values: &IndexMap<String, String>,
    ) -> Self {
        let values = definitions
            .iter()
            .filter_map(|definition| {
                let value = user_values
                    .get(&definition.id)
                    .or(definition.default_value.as_ref())
                    .cloned()
                    .or_else(|| {
                        (definition.variable_type == TemplateVariableType::Boolean)
                            .then(|| "false".to_string())
                    })?;
                Some((definition.id.clone(), value))
            })
            .collect();

        Self { values }
    }

    /// Sets the value of a variable, returning the previous one.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(id.into(), value.into())
    }

    /// Returns the value of a variable.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Returns the number of variables with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over ids and values in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateVariableValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(id, value)| (id.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definitions() -> Vec<TemplateVariable> {
        vec![
            TemplateVariable::new("name", TemplateVariableType::String).with_default("server"),
            TemplateVariable::new("debug", TemplateVariableType::Boolean),
            TemplateVariable::new("port", TemplateVariableType::Numeric),
            TemplateVariable::new("secure", TemplateVariableType::Boolean).with_default("true"),
        ]
    }

    #[test]
    fn user_values_win_over_defaults() {
        let user_values = IndexMap::from([("name".to_string(), "gateway".to_string())]);
        let values = TemplateVariableValues::from_definitions(&definitions(), &user_values);

        assert_eq!(values.get("name"), Some("gateway"));
        assert_eq!(values.get("secure"), Some("true"));
    }

    #[test]
    fn missing_boolean_becomes_false() {
        let values = TemplateVariableValues::from_definitions(&definitions(), &IndexMap::new());

        assert_eq!(values.get("debug"), Some("false"));
    }

    #[test]
    fn missing_non_boolean_is_left_out() {
        let values = TemplateVariableValues::from_definitions(&definitions(), &IndexMap::new());

        assert_eq!(values.get("port"), None);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn undeclared_user_values_are_ignored() {
        let user_values = IndexMap::from([("other".to_string(), "x".to_string())]);
        let values = TemplateVariableValues::from_definitions(&definitions(), &user_values);

        assert_eq!(values.get("other"), None);
    }

    #[test]
    fn values_keep_definition_order() {
        let user_values = IndexMap::from([("port".to_string(), "80".to_string())]);
        let values = TemplateVariableValues::from_definitions(&definitions(), &user_values);

        let ids: Vec<_> = values.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["name", "debug", "port", "secure"]);
    }

    #[test]
    fn deserializes_definition() {
        let variable: TemplateVariable = serde_json::from_str(
            r#"{"id":"debug","name":"Debug mode","type":"BOOLEAN","defaultValue":"true"}"#,
        )
        .expect("should deserialize template variable");

        assert_eq!(variable.id, "debug");
        assert_eq!(variable.name.as_deref(), Some("Debug mode"));
        assert_eq!(variable.variable_type, TemplateVariableType::Boolean);
        assert_eq!(variable.default_value.as_deref(), Some("true"));
    }

    #[test]
    fn text_type_is_string() {
        let variable: TemplateVariable = serde_json::from_str(r#"{"id":"name","type":"TEXT"}"#)
            .expect("should deserialize text variable");

        assert_eq!(variable.variable_type, TemplateVariableType::String);
    }
}
