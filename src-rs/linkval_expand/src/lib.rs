//! Expansion of linked value expressions
//!
//! [`expand`] tokenizes an expression, resolves each placeholder against a
//! [`ResolutionContext`] and substitutes the values it finds. Expansion is
//! best-effort and never fails: placeholders that cannot be resolved stay in
//! the text as written and are reported in
//! [`ExpansionResult::unresolved`].
//!
//! By default substituted values are inserted verbatim, even if they contain
//! placeholders themselves. [`ExpansionOptions::max_depth`] enables
//! re-expansion of such values up to a fixed number of levels.

mod expander;
mod result;

use linkval_resolver::ResolutionContext;
use serde::{Deserialize, Serialize};

pub use result::{ExpansionResult, UnresolvedPlaceholder, UnresolvedReason};

/// The deepest expansion ever performed, whatever the options ask for.
///
/// Each level of re-expansion uses stack space, so deeper requests are
/// clamped to this and values past it are reported as
/// [`UnresolvedReason::DepthExceeded`].
pub const MAX_EXPANSION_DEPTH: usize = 64;

/// Options controlling expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionOptions {
    /// How many levels of placeholders are expanded.
    ///
    /// `1` substitutes values verbatim. Larger values re-expand substituted
    /// values that contain placeholders, up to this many levels in total.
    /// Values above [`MAX_EXPANSION_DEPTH`] are clamped to it.
    pub max_depth: usize,
}

impl ExpansionOptions {
    /// Creates options with the given maximum depth.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self { max_depth: 1 }
    }
}

/// Expands `input` with the default options.
#[must_use]
pub fn expand(input: &str, context: &ResolutionContext<'_>) -> ExpansionResult {
    expand_with(input, context, &ExpansionOptions::default())
}

/// Expands `input` with explicit options.
#[must_use]
pub fn expand_with(
    input: &str,
    context: &ResolutionContext<'_>,
    options: &ExpansionOptions,
) -> ExpansionResult {
    let result = expander::Expander::new(context, options).expand(input);

    if !result.unresolved.is_empty() {
        tracing::debug!(
            expression = input,
            unresolved = result.unresolved.len(),
            "expression expanded with unresolved placeholders"
        );
    }

    result
}
