//! Tokenizer for linked value expressions
//!
//! A link expression is text containing zero or more `{{NAMESPACE:KEY}}`
//! placeholders. This crate splits such text into literal and placeholder
//! tokens in a single left-to-right scan. Tokenizing never fails: anything
//! that is not a well-formed placeholder stays literal text.
//!
//! ```rust
//! use linkval_parser::{Token, tokenize};
//!
//! let tokens = tokenize("prefix-{{A:UUID}}-suffix");
//! assert_eq!(tokens.len(), 3);
//!
//! let Token::Placeholder(placeholder) = tokens[1] else {
//!     panic!("expected a placeholder");
//! };
//! assert_eq!(placeholder.namespace(), "A");
//! assert_eq!(placeholder.key(), "UUID");
//! ```

pub mod error;
mod scan;
pub mod token;
mod util;

pub use error::{MalformedPlaceholder, MalformedReason};
pub use scan::Scan;
pub use token::{Literal, Placeholder, PlaceholderName, Token};

/// Splits an expression into literal and placeholder tokens.
///
/// Empty input yields no tokens. Adjacent literal text, including malformed
/// placeholders, is merged into a single literal token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    scan::scan(input).tokens
}

/// Splits an expression into tokens and also reports malformed placeholders.
#[must_use]
pub fn scan(input: &str) -> Scan<'_> {
    scan::scan(input)
}

/// Returns the well-formed placeholders of an expression in source order.
#[must_use]
pub fn placeholders(input: &str) -> Vec<Placeholder<'_>> {
    tokenize(input)
        .into_iter()
        .filter_map(|token| match token {
            Token::Placeholder(placeholder) => Some(placeholder),
            Token::Literal(_) => None,
        })
        .collect()
}

/// Returns `true` if the text contains at least one well-formed placeholder.
#[must_use]
pub fn is_link_expression(input: &str) -> bool {
    input.contains(token::marker::OPEN) && !placeholders(input).is_empty()
}
