//! YAML and JSON documents describing resolution contexts and template
//! variables
//!
//! A context document lists the registered namespace codes and the variable
//! scopes in precedence order:
//!
//! ```yaml
//! namespaces: [A, P, I]
//! scopes:
//!   - name: process
//!     values:
//!       A: { UUID: "1234" }
//! ```
//!
//! A template variables document lists variable definitions and the values
//! the user entered:
//!
//! ```yaml
//! variables:
//!   - id: name
//!     type: STRING
//!     defaultValue: server
//! values:
//!   name: gateway
//! ```

use std::{fs, io, path::Path};

use indexmap::IndexMap;
use linkval_resolver::{NamespaceRegistry, ResolutionContext, VariableScope};
use linkval_template::{TemplateVariable, TemplateVariableValues};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// The format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML, for `.yaml` and `.yml` files
    Yaml,
    /// JSON, for `.json` files
    Json,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is missing or not recognized.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(DocumentError::UnknownFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// An error loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be read
    #[error("unable to read document")]
    Io(#[from] io::Error),
    /// The file extension does not name a known format
    #[error("`{path}` is not a `.yaml`, `.yml` or `.json` file")]
    UnknownFormat {
        /// The path of the document
        path: String,
    },
    /// The document is not valid YAML for the expected shape
    #[error("invalid YAML document")]
    Yaml(#[from] serde_yaml::Error),
    /// The document is not valid JSON for the expected shape
    #[error("invalid JSON document")]
    Json(#[from] serde_json::Error),
}

/// Parses a document from a string.
///
/// # Errors
///
/// Returns an error if `contents` does not deserialize to `T`.
pub fn parse<T: DeserializeOwned>(contents: &str, format: DocumentFormat) -> Result<T, DocumentError> {
    match format {
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
        DocumentFormat::Json => Ok(serde_json::from_str(contents)?),
    }
}

/// Reads and parses a document, choosing the format from the extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension, or
/// does not deserialize to `T`.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    let contents = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading document");
    parse(&contents, format)
}

/// The namespaces and scopes used to expand expressions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextDocument {
    /// The namespace codes that resolve against the scopes
    #[serde(default)]
    pub namespaces: Vec<String>,
    /// The scopes, first scope wins
    #[serde(default)]
    pub scopes: Vec<VariableScope>,
}

impl ContextDocument {
    /// Creates a registry in which every listed namespace is a plain scope
    /// lookup.
    #[must_use]
    pub fn registry(&self) -> NamespaceRegistry {
        NamespaceRegistry::with_plain_namespaces(self.namespaces.iter().cloned())
    }

    /// Creates a resolution context over the document's scopes.
    #[must_use]
    pub fn into_context(self, registry: &NamespaceRegistry) -> ResolutionContext<'_> {
        ResolutionContext::with_scopes(registry, self.scopes)
    }
}

/// Template variable definitions together with the values the user entered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateVariablesDocument {
    /// The variable definitions
    #[serde(default)]
    pub variables: Vec<TemplateVariable>,
    /// The user's values, by variable id
    #[serde(default)]
    pub values: IndexMap<String, String>,
}

impl TemplateVariablesDocument {
    /// Resolves the values to substitute.
    #[must_use]
    pub fn resolve(&self) -> TemplateVariableValues {
        TemplateVariableValues::from_definitions(&self.variables, &self.values)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use linkval_resolver::Resolution;

    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("context.yaml"))
                .expect("should detect yaml"),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("context.YML"))
                .expect("should detect yml"),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("context.json"))
                .expect("should detect json"),
            DocumentFormat::Json
        );
        assert!(matches!(
            DocumentFormat::from_path(&PathBuf::from("context.toml")),
            Err(DocumentError::UnknownFormat { .. })
        ));
        assert!(matches!(
            DocumentFormat::from_path(&PathBuf::from("context")),
            Err(DocumentError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn yaml_context_document() {
        let contents = r#"
namespaces: [A, P, I]
scopes:
  - name: process
    values:
      A: { UUID: "1234" }
  - name: instance
    values:
      A: { UUID: "5678", NAME: "prod" }
"#;

        let document: ContextDocument =
            parse(contents, DocumentFormat::Yaml).expect("should parse context document");
        assert_eq!(document.namespaces, vec!["A", "P", "I"]);
        assert_eq!(document.scopes.len(), 2);

        let registry = document.registry();
        let context = document.into_context(&registry);
        assert_eq!(context.lookup("A", "UUID"), Resolution::Found("1234".into()));
        assert_eq!(context.lookup("A", "NAME"), Resolution::Found("prod".into()));
        assert_eq!(context.lookup("Z", "UUID"), Resolution::UnknownNamespace);
    }

    #[test]
    fn json_context_document() {
        let contents = r#"{"namespaces":["P"],"scopes":[{"name":"p","values":{"P":{"PORT":"80"}}}]}"#;

        let document: ContextDocument =
            parse(contents, DocumentFormat::Json).expect("should parse context document");
        let registry = document.registry();
        let context = document.into_context(&registry);
        assert_eq!(context.lookup("P", "PORT"), Resolution::Found("80".into()));
    }

    #[test]
    fn empty_context_document() {
        let document: ContextDocument =
            parse("{}", DocumentFormat::Json).expect("should parse empty document");
        assert!(document.namespaces.is_empty());
        assert!(document.scopes.is_empty());
    }

    #[test]
    fn invalid_document_is_an_error() {
        let result: Result<ContextDocument, _> = parse("scopes: 3", DocumentFormat::Yaml);
        assert!(matches!(result, Err(DocumentError::Yaml(_))));
    }

    #[test]
    fn template_variables_document() {
        let contents = r"
variables:
  - id: name
    type: STRING
    defaultValue: server
  - id: debug
    type: BOOLEAN
values:
  name: gateway
";

        let document: TemplateVariablesDocument =
            parse(contents, DocumentFormat::Yaml).expect("should parse variables document");
        let values = document.resolve();
        assert_eq!(values.get("name"), Some("gateway"));
        assert_eq!(values.get("debug"), Some("false"));
    }
}
