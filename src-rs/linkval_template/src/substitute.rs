use linkval_parser::{Placeholder, Token};
use linkval_shared::status::StatusMessage;
use serde::{Deserialize, Serialize};

use crate::{error::MissingTemplateVariable, variable::TemplateVariableValues};

/// Options controlling template substitution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSubstitutionOptions {
    /// Only substitute placeholders in this namespace.
    ///
    /// Placeholders in other namespaces are copied unchanged and not
    /// reported. `None` substitutes every namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl TemplateSubstitutionOptions {
    /// Restricts substitution to one namespace.
    pub fn for_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
        }
    }

    fn applies_to(&self, placeholder: &Placeholder<'_>) -> bool {
        self.namespace
            .as_deref()
            .is_none_or(|namespace| namespace == placeholder.namespace())
    }
}

/// Substitutes template variables in `input`, keyed by placeholder key.
///
/// Placeholders of any namespace are substituted. A placeholder whose key has
/// no value is left as written and a status message naming the variable is
/// appended to `status`, as is one for each malformed placeholder.
pub fn substitute_template_variables(
    input: &str,
    variables: &TemplateVariableValues,
    status: &mut Vec<StatusMessage>,
) -> String {
    substitute_with(input, variables, &TemplateSubstitutionOptions::default(), status)
}

/// Substitutes template variables in `input` with explicit options.
pub fn substitute_with(
    input: &str,
    variables: &TemplateVariableValues,
    options: &TemplateSubstitutionOptions,
    status: &mut Vec<StatusMessage>,
) -> String {
    let scan = linkval_parser::scan(input);
    let mut output = String::with_capacity(input.len());

    status.extend(scan.malformed.iter().map(StatusMessage::from_diagnostic));

    for token in &scan.tokens {
        let placeholder = match token {
            Token::Literal(literal) => {
                output.push_str(literal.text());
                continue;
            }
            Token::Placeholder(placeholder) => placeholder,
        };

        if !options.applies_to(placeholder) {
            output.push_str(placeholder.raw());
            continue;
        }

        if let Some(value) = variables.get(placeholder.key()) {
            output.push_str(value);
        } else {
            tracing::debug!(
                variable = placeholder.key(),
                "template variable has no value"
            );
            output.push_str(placeholder.raw());
            status.push(StatusMessage::from_diagnostic(&MissingTemplateVariable {
                id: placeholder.key().to_string(),
                span: placeholder.span(),
            }));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_kept_and_reported() {
        let mut status = Vec::new();

        let output =
            substitute_template_variables("Hello {{W:name}}", &TemplateVariableValues::new(), &mut status);

        assert_eq!(output, "Hello {{W:name}}");
        assert_eq!(status.len(), 1);
        assert!(status[0].message().contains("name"));
    }

    #[test]
    fn substitutes_any_namespace_by_key() {
        let variables = TemplateVariableValues::from_iter([("name", "gateway"), ("port", "80")]);
        let mut status = Vec::new();

        let output = substitute_template_variables(
            "{{T:name}} on {{X:port}}",
            &variables,
            &mut status,
        );

        assert_eq!(output, "gateway on 80");
        assert!(status.is_empty());
    }

    #[test]
    fn every_missing_occurrence_is_reported() {
        let mut status = Vec::new();

        let output = substitute_template_variables(
            "{{T:a}}-{{T:b}}-{{T:a}}",
            &TemplateVariableValues::new(),
            &mut status,
        );

        assert_eq!(output, "{{T:a}}-{{T:b}}-{{T:a}}");
        assert_eq!(status.len(), 3);
    }

    #[test]
    fn existing_status_is_kept() {
        let mut status = vec![StatusMessage::new("earlier")];

        substitute_template_variables("{{T:x}}", &TemplateVariableValues::new(), &mut status);

        assert_eq!(status.len(), 2);
        assert_eq!(status[0].message(), "earlier");
    }

    #[test]
    fn malformed_placeholder_is_reported() {
        let mut status = Vec::new();

        let output =
            substitute_template_variables("{{name}}", &TemplateVariableValues::new(), &mut status);

        assert_eq!(output, "{{name}}");
        assert_eq!(status.len(), 1);
        assert!(status[0].message().contains("missing a `:`"));
    }

    #[test]
    fn namespace_filter_skips_other_namespaces() {
        let variables = TemplateVariableValues::from_iter([("name", "gateway")]);
        let options = TemplateSubstitutionOptions::for_namespace("T");
        let mut status = Vec::new();

        let output = substitute_with(
            "{{T:name}} {{I:name}} {{I:other}}",
            &variables,
            &options,
            &mut status,
        );

        assert_eq!(output, "gateway {{I:name}} {{I:other}}");
        assert!(status.is_empty());
    }

    #[test]
    fn boolean_default_is_substituted() {
        let definitions = [crate::TemplateVariable::new(
            "debug",
            crate::TemplateVariableType::Boolean,
        )];
        let variables =
            TemplateVariableValues::from_definitions(&definitions, &indexmap::IndexMap::new());
        let mut status = Vec::new();

        let output = substitute_template_variables("debug={{T:debug}}", &variables, &mut status);

        assert_eq!(output, "debug=false");
        assert!(status.is_empty());
    }
}
