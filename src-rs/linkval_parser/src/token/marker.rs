//! Parsers for placeholder markers.
//!
//! None of these parsers consume whitespace; every character of an expression
//! is significant.

use nom::Parser as _;
use nom::branch::alt;
use nom::bytes::complete::{tag, take, take_until};
use nom::combinator::{consumed, rest};
use nom::sequence::delimited;

use crate::util::{InputSpan, Parser, Result};

/// The marker that opens a placeholder.
pub const OPEN: &str = "{{";
/// The marker that closes a placeholder.
pub const CLOSE: &str = "}}";
/// The separator between namespace and key.
pub const SEPARATOR: char = ':';

/// Parses literal text up to (not including) the next opening marker, or the
/// rest of the input if there is none.
///
/// Always succeeds; the result may be empty.
pub fn literal_run(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>> {
    alt((take_until(OPEN), rest)).parse(input)
}

/// Parses `{{ ... }}` up to the first closing marker.
///
/// Returns the full delimited text and the text between the markers. Fails
/// if the input does not start with an opening marker or the marker is never
/// closed.
pub fn delimited_body(input: InputSpan<'_>) -> Result<'_, (InputSpan<'_>, InputSpan<'_>)> {
    consumed(delimited(tag(OPEN), take_until(CLOSE), tag(CLOSE))).parse(input)
}

/// Parses exactly `count` characters of literal text.
pub fn literal_prefix<'a>(count: usize) -> impl Parser<'a, InputSpan<'a>> {
    take(count)
}

/// Parses all remaining input as literal text.
///
/// Always succeeds; the result may be empty.
pub fn trailing_literal(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>> {
    rest(input)
}

/// Splits placeholder content into namespace and key at the first separator.
///
/// Returns `None` if the content has no separator.
#[must_use]
pub fn split_namespace(content: &str) -> Option<(&str, &str)> {
    content.split_once(SEPARATOR)
}
