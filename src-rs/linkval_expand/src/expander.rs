use linkval_parser::{Placeholder, PlaceholderName, Token};
use linkval_resolver::{Resolution, ResolutionContext};
use linkval_shared::status::StatusMessage;

use crate::{
    ExpansionOptions, MAX_EXPANSION_DEPTH,
    result::{ExpansionResult, UnresolvedPlaceholder, UnresolvedReason},
};

/// Expands one expression, tracking the placeholders currently being
/// expanded so that self-references are caught.
pub struct Expander<'c, 'r> {
    context: &'c ResolutionContext<'r>,
    max_depth: usize,
    active: Vec<PlaceholderName>,
    result: ExpansionResult,
}

impl<'c, 'r> Expander<'c, 'r> {
    pub const fn new(context: &'c ResolutionContext<'r>, options: &ExpansionOptions) -> Self {
        Self {
            context,
            max_depth: if options.max_depth > MAX_EXPANSION_DEPTH {
                MAX_EXPANSION_DEPTH
            } else {
                options.max_depth
            },
            active: Vec::new(),
            result: ExpansionResult {
                text: String::new(),
                unresolved: Vec::new(),
                errors: Vec::new(),
            },
        }
    }

    pub fn expand(mut self, source: &str) -> ExpansionResult {
        self.result.text.reserve(source.len());
        self.expand_level(source, 1, None);
        self.result
    }

    /// Expands `source` at `depth`, appending to the result text.
    ///
    /// `via` is the placeholder whose value `source` is, or `None` for the
    /// expression itself.
    fn expand_level(&mut self, source: &str, depth: usize, via: Option<&PlaceholderName>) {
        let scan = linkval_parser::scan(source);

        self.result.errors.extend(
            scan.malformed
                .iter()
                .map(StatusMessage::from_diagnostic),
        );

        for token in &scan.tokens {
            match token {
                Token::Literal(literal) => self.result.text.push_str(literal.text()),
                Token::Placeholder(placeholder) => {
                    self.expand_placeholder(placeholder, depth, via);
                }
            }
        }
    }

    fn expand_placeholder(
        &mut self,
        placeholder: &Placeholder<'_>,
        depth: usize,
        via: Option<&PlaceholderName>,
    ) {
        let name = placeholder.name();

        if self.active.contains(&name) {
            tracing::warn!(placeholder = placeholder.raw(), "linked value refers back to itself");
            self.leave_unresolved(placeholder, name, via, UnresolvedReason::Cycle);
            return;
        }

        let context = self.context;
        let value = match context.lookup(placeholder.namespace(), placeholder.key()) {
            Resolution::Found(value) => value,
            Resolution::NotFound => {
                self.leave_unresolved(placeholder, name, via, UnresolvedReason::NotFound);
                return;
            }
            Resolution::UnknownNamespace => {
                self.leave_unresolved(placeholder, name, via, UnresolvedReason::UnknownNamespace);
                return;
            }
        };

        if self.max_depth <= 1 || !linkval_parser::is_link_expression(&value) {
            self.result.text.push_str(&value);
            return;
        }

        if depth >= self.max_depth {
            tracing::warn!(
                placeholder = placeholder.raw(),
                max_depth = self.max_depth,
                "expansion depth limit reached"
            );
            self.leave_unresolved(placeholder, name, via, UnresolvedReason::DepthExceeded);
            return;
        }

        self.active.push(name);
        let via = self.active.last().cloned();
        self.expand_level(&value, depth + 1, via.as_ref());
        self.active.pop();
    }

    fn leave_unresolved(
        &mut self,
        placeholder: &Placeholder<'_>,
        name: PlaceholderName,
        via: Option<&PlaceholderName>,
        reason: UnresolvedReason,
    ) {
        self.result.text.push_str(placeholder.raw());
        self.result.unresolved.push(UnresolvedPlaceholder {
            name,
            raw: placeholder.raw().to_string(),
            span: placeholder.span(),
            via: via.cloned(),
            reason,
        });
    }
}
