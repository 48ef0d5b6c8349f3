use linkval_expand::{ExpansionOptions, ExpansionResult};
use linkval_resolver::ResolutionContext;
use linkval_shared::status::StatusMessage;

use crate::{
    error::ValueValidationError, linked_value::LinkedValueConfiguration,
    value_type::VariableType,
};

/// Text shown instead of a secret literal.
pub const MASKED_VALUE: &str = "********";

/// Reads linked values against a resolution context.
#[derive(Debug, Clone, Copy)]
pub struct LinkedValueAccessor<'c, 'r> {
    context: &'c ResolutionContext<'r>,
    options: ExpansionOptions,
}

impl<'c, 'r> LinkedValueAccessor<'c, 'r> {
    /// Creates an accessor using the default expansion options.
    #[must_use]
    pub fn new(context: &'c ResolutionContext<'r>) -> Self {
        Self::with_options(context, ExpansionOptions::default())
    }

    /// Creates an accessor with explicit expansion options.
    #[must_use]
    pub const fn with_options(
        context: &'c ResolutionContext<'r>,
        options: ExpansionOptions,
    ) -> Self {
        Self { context, options }
    }

    fn expand(&self, expression: &str) -> ExpansionResult {
        linkval_expand::expand_with(expression, self.context, &self.options)
    }

    /// Returns the value the configuration currently stands for.
    ///
    /// A literal is returned as-is. A link expression is expanded, with any
    /// unresolved placeholders left in place. An unset value gives `None`.
    #[must_use]
    pub fn get_effective_value(&self, linked_value: &LinkedValueConfiguration) -> Option<String> {
        if let Some(expression) = linked_value.link_expression() {
            return Some(self.expand(expression).text);
        }

        linked_value.value().map(str::to_string)
    }

    /// Returns the effective value for display, or an empty string if unset.
    #[must_use]
    pub fn get_preview(&self, linked_value: &LinkedValueConfiguration) -> String {
        self.get_effective_value(linked_value).unwrap_or_default()
    }

    /// Returns the effective value, masking secret literals.
    ///
    /// A secret that comes from a link expression shows the expression
    /// itself rather than its expansion.
    #[must_use]
    pub fn get_display_value(
        &self,
        linked_value: &LinkedValueConfiguration,
        value_type: VariableType,
    ) -> String {
        if !value_type.is_secret() {
            return self.get_preview(linked_value);
        }

        match (linked_value.link_expression(), linked_value.value()) {
            (Some(expression), _) => expression.to_string(),
            (None, Some(value)) if !value.is_empty() => MASKED_VALUE.to_string(),
            (None, _) => String::new(),
        }
    }

    /// Converts a value to a literal holding its current effective value.
    ///
    /// A link of a secret type becomes an empty literal so that its
    /// expansion never ends up stored in plain text. Literals, including
    /// secret ones, are returned unchanged. An unset value stays unset.
    #[must_use]
    pub fn make_plain(
        &self,
        linked_value: &LinkedValueConfiguration,
        value_type: VariableType,
    ) -> LinkedValueConfiguration {
        if !linked_value.is_link() {
            return linked_value.clone();
        }

        if value_type.is_secret() {
            return LinkedValueConfiguration::literal("");
        }

        LinkedValueConfiguration::literal(self.get_preview(linked_value))
    }

    /// Checks the effective value against its declared type.
    ///
    /// Unresolved placeholders and malformed expression text are reported
    /// first. The type check only runs on a fully resolved value.
    #[must_use]
    pub fn validate_effective_value(
        &self,
        linked_value: &LinkedValueConfiguration,
        value_type: VariableType,
    ) -> Vec<StatusMessage> {
        let value = match (linked_value.link_expression(), linked_value.value()) {
            (Some(expression), _) => {
                let result = self.expand(expression);
                if !result.is_fully_resolved() {
                    return result.status_messages();
                }
                result.text
            }
            (None, Some(value)) => value.to_string(),
            (None, None) => return Vec::new(),
        };

        match value_type.validate(&value) {
            Ok(()) => Vec::new(),
            Err(error) => vec![StatusMessage::from_diagnostic(&error)],
        }
    }
}

/// Returns the effective value of `linked_value` in `context`.
#[must_use]
pub fn get_effective_value(
    linked_value: &LinkedValueConfiguration,
    context: &ResolutionContext<'_>,
) -> Option<String> {
    LinkedValueAccessor::new(context).get_effective_value(linked_value)
}

/// Returns the effective value of `linked_value`, or an empty string.
#[must_use]
pub fn get_preview(linked_value: &LinkedValueConfiguration, context: &ResolutionContext<'_>) -> String {
    LinkedValueAccessor::new(context).get_preview(linked_value)
}

/// Returns the effective value of `linked_value` with secrets masked.
#[must_use]
pub fn get_display_value(
    linked_value: &LinkedValueConfiguration,
    value_type: VariableType,
    context: &ResolutionContext<'_>,
) -> String {
    LinkedValueAccessor::new(context).get_display_value(linked_value, value_type)
}

/// Converts `linked_value` to a literal of its effective value.
#[must_use]
pub fn make_plain(
    linked_value: &LinkedValueConfiguration,
    value_type: VariableType,
    context: &ResolutionContext<'_>,
) -> LinkedValueConfiguration {
    LinkedValueAccessor::new(context).make_plain(linked_value, value_type)
}

/// Checks the effective value of `linked_value` against `value_type`.
#[must_use]
pub fn validate_effective_value(
    linked_value: &LinkedValueConfiguration,
    value_type: VariableType,
    context: &ResolutionContext<'_>,
) -> Vec<StatusMessage> {
    LinkedValueAccessor::new(context).validate_effective_value(linked_value, value_type)
}

/// Returns the raw text to show in an editor: the link expression if set,
/// else the literal.
#[must_use]
pub fn get_pre_renderable(linked_value: &LinkedValueConfiguration) -> Option<String> {
    linked_value
        .link_expression()
        .or_else(|| linked_value.value())
        .map(str::to_string)
}

/// Like [`get_pre_renderable`], but an empty string for unset values.
#[must_use]
pub fn get_pre_renderable_text(linked_value: &LinkedValueConfiguration) -> String {
    get_pre_renderable(linked_value).unwrap_or_default()
}

/// Replaces `linked_value` with the given link expression.
#[must_use]
pub fn make_link(
    linked_value: &LinkedValueConfiguration,
    expression: impl Into<String>,
) -> LinkedValueConfiguration {
    let expression = expression.into();
    tracing::trace!(
        from_literal = linked_value.value().is_some(),
        expression = expression.as_str(),
        "switching linked value to a link expression"
    );
    LinkedValueConfiguration::link(expression)
}

/// Turns a literal into a link expression that starts out as the literal
/// text.
///
/// Secret literals are not copied into the expression, which starts out
/// empty instead. A value that is already a link is returned unchanged.
#[must_use]
pub fn make_link_from_literal(
    linked_value: &LinkedValueConfiguration,
    value_type: VariableType,
) -> LinkedValueConfiguration {
    if linked_value.is_link() {
        return linked_value.clone();
    }

    if value_type.is_secret() {
        return LinkedValueConfiguration::link("");
    }

    LinkedValueConfiguration::link(linked_value.value().unwrap_or_default())
}

/// Assigns a literal value after checking it against `value_type`.
///
/// On success any link expression is cleared.
///
/// # Errors
///
/// Returns an error if the value is not acceptable for `value_type`. In that
/// case `linked_value` is left exactly as it was.
pub fn assign_value(
    linked_value: &mut LinkedValueConfiguration,
    value_type: VariableType,
    value: impl Into<String>,
) -> Result<(), ValueValidationError> {
    let value = value.into();

    if let Err(error) = value_type.validate(&value) {
        tracing::debug!(%error, "rejected linked value assignment");
        return Err(error);
    }

    *linked_value = LinkedValueConfiguration::literal(value);
    Ok(())
}

/// Assigns a link expression, clearing any literal.
///
/// The expression is stored as-is; malformed placeholders are reported when
/// the value is expanded, not here.
pub fn assign_link(linked_value: &mut LinkedValueConfiguration, expression: impl Into<String>) {
    *linked_value = LinkedValueConfiguration::link(expression);
}

#[cfg(test)]
mod tests {
    use linkval_resolver::{NamespaceRegistry, VariableScope};

    use super::*;

    fn registry() -> NamespaceRegistry {
        NamespaceRegistry::with_plain_namespaces(["A", "P", "I"])
    }

    fn scope() -> VariableScope {
        VariableScope::new("instance")
            .with_value("A", "UUID", "1234")
            .with_value("P", "PORT", "8080")
            .with_value("P", "SECRET", "hunter2")
            .with_value("P", "ROOT", "/srv")
            .with_value("P", "LOG", "{{P:ROOT}}/log")
    }

    #[test]
    fn literal_round_trips() {
        let registry = registry();
        let context = ResolutionContext::new(&registry).push_scope(scope());
        let literal = LinkedValueConfiguration::literal("{{A:UUID}} literal");

        assert_eq!(
            get_effective_value(&literal, &context).as_deref(),
            Some("{{A:UUID}} literal")
        );
        assert_eq!(get_pre_renderable(&literal).as_deref(), Some("{{A:UUID}} literal"));
    }

    #[test]
    fn link_is_expanded() {
        let registry = registry();
        let context = ResolutionContext::new(&registry).push_scope(scope());
        let link = LinkedValueConfiguration::link("id-{{A:UUID}}-{{A:MISSING}}");

        assert_eq!(
            get_effective_value(&link, &context).as_deref(),
            Some("id-1234-{{A:MISSING}}")
        );
        assert_eq!(get_preview(&link, &context), "id-1234-{{A:MISSING}}");
    }

    #[test]
    fn unset_value_has_no_effective_value() {
        let registry = registry();
        let context = ResolutionContext::new(&registry);
        let unset = LinkedValueConfiguration::unset();

        assert_eq!(get_effective_value(&unset, &context), None);
        assert_eq!(get_preview(&unset, &context), "");
        assert_eq!(get_pre_renderable(&unset), None);
        assert_eq!(get_pre_renderable_text(&unset), "");
    }

    #[test]
    fn make_link_exposes_expression() {
        let link = make_link(&LinkedValueConfiguration::literal("8080"), "{{P:PORT}}");
        assert_eq!(get_pre_renderable(&link).as_deref(), Some("{{P:PORT}}"));
        assert_eq!(link.value(), None);
    }

    #[test]
    fn make_link_from_literal_seeds_expression() {
        let literal = LinkedValueConfiguration::literal("/srv/data");
        let link = make_link_from_literal(&literal, VariableType::String);
        assert_eq!(link.link_expression(), Some("/srv/data"));

        let secret = LinkedValueConfiguration::literal("hunter2");
        let link = make_link_from_literal(&secret, VariableType::Password);
        assert_eq!(link.link_expression(), Some(""));

        let existing = LinkedValueConfiguration::link("{{P:ROOT}}");
        assert_eq!(make_link_from_literal(&existing, VariableType::String), existing);
    }

    #[test]
    fn make_plain_flattens_expansion() {
        let registry = registry();
        let context = ResolutionContext::new(&registry).push_scope(scope());

        let link = LinkedValueConfiguration::link("{{P:PORT}}");
        let plain = make_plain(&link, VariableType::ServerPort, &context);
        assert_eq!(plain, LinkedValueConfiguration::literal("8080"));

        let secret = LinkedValueConfiguration::link("{{P:SECRET}}");
        let plain = make_plain(&secret, VariableType::Password, &context);
        assert_eq!(plain, LinkedValueConfiguration::literal(""));

        let unset = LinkedValueConfiguration::unset();
        assert!(make_plain(&unset, VariableType::String, &context).is_unset());
    }

    #[test]
    fn make_plain_keeps_secret_literal() {
        let registry = registry();
        let context = ResolutionContext::new(&registry).push_scope(scope());

        let secret = LinkedValueConfiguration::literal("hunter2");
        assert_eq!(make_plain(&secret, VariableType::Password, &context), secret);

        let literal = LinkedValueConfiguration::literal("8080");
        assert_eq!(make_plain(&literal, VariableType::ServerPort, &context), literal);
    }

    #[test]
    fn padded_or_signed_values_are_rejected() {
        let mut number = LinkedValueConfiguration::literal("1");
        assert!(assign_value(&mut number, VariableType::Numeric, " 42 ").is_err());
        assert_eq!(number, LinkedValueConfiguration::literal("1"));

        let mut port = LinkedValueConfiguration::literal("8080");
        assert!(assign_value(&mut port, VariableType::ServerPort, "+80").is_err());
        assert_eq!(port, LinkedValueConfiguration::literal("8080"));
    }

    #[test]
    fn invalid_boolean_keeps_previous_value() {
        let mut linked_value = LinkedValueConfiguration::literal("false");

        let error = assign_value(&mut linked_value, VariableType::Boolean, "yes")
            .expect_err("should reject non-boolean value");
        assert_eq!(
            error,
            ValueValidationError::NotBoolean {
                value: "yes".to_string()
            }
        );
        assert_eq!(linked_value, LinkedValueConfiguration::literal("false"));
    }

    #[test]
    fn assignment_replaces_link() {
        let mut linked_value = LinkedValueConfiguration::link("{{P:PORT}}");

        assign_value(&mut linked_value, VariableType::ServerPort, "9090")
            .expect("should accept port");
        assert_eq!(linked_value, LinkedValueConfiguration::literal("9090"));

        assign_link(&mut linked_value, "{{P:PORT}}");
        assert_eq!(linked_value, LinkedValueConfiguration::link("{{P:PORT}}"));
    }

    #[test]
    fn invalid_number_keeps_link() {
        let mut linked_value = LinkedValueConfiguration::link("{{P:PORT}}");

        let result = assign_value(&mut linked_value, VariableType::Numeric, "ten");
        assert!(result.is_err());
        assert_eq!(linked_value, LinkedValueConfiguration::link("{{P:PORT}}"));
    }

    #[test]
    fn display_masks_secret_literal() {
        let registry = registry();
        let context = ResolutionContext::new(&registry).push_scope(scope());

        let secret = LinkedValueConfiguration::literal("hunter2");
        assert_eq!(get_display_value(&secret, VariableType::Password, &context), MASKED_VALUE);

        let linked_secret = LinkedValueConfiguration::link("{{P:SECRET}}");
        assert_eq!(
            get_display_value(&linked_secret, VariableType::Password, &context),
            "{{P:SECRET}}"
        );

        let plain = LinkedValueConfiguration::link("{{P:PORT}}");
        assert_eq!(get_display_value(&plain, VariableType::ServerPort, &context), "8080");
    }

    #[test]
    fn validation_checks_expanded_value() {
        let registry = registry();
        let context = ResolutionContext::new(&registry).push_scope(scope());

        let port = LinkedValueConfiguration::link("{{P:PORT}}");
        assert!(validate_effective_value(&port, VariableType::ServerPort, &context).is_empty());

        let not_a_port = LinkedValueConfiguration::link("{{P:ROOT}}");
        let messages = validate_effective_value(&not_a_port, VariableType::ServerPort, &context);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].message().starts_with("`/srv` is not a valid port"));
        assert!(messages[0].message().contains("help: use a whole number"));
    }

    #[test]
    fn validation_reports_unresolved_placeholders() {
        let registry = registry();
        let context = ResolutionContext::new(&registry);

        let link = LinkedValueConfiguration::link("{{P:PORT}}");
        let messages = validate_effective_value(&link, VariableType::ServerPort, &context);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message(), "placeholder `{{P:PORT}}` is not defined");
    }

    #[test]
    fn accessor_honors_depth() {
        let registry = registry();
        let context = ResolutionContext::new(&registry).push_scope(scope());
        let link = LinkedValueConfiguration::link("{{P:LOG}}");

        assert_eq!(
            LinkedValueAccessor::new(&context).get_preview(&link),
            "{{P:ROOT}}/log"
        );
        assert_eq!(
            LinkedValueAccessor::with_options(&context, ExpansionOptions::with_max_depth(2))
                .get_preview(&link),
            "/srv/log"
        );
    }
}
