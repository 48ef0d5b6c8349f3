use nom::{IResult, Parser as NomParser, error::Error};
use nom_locate::LocatedSpan;
use linkval_shared::span::{SourceLocation, Span};

/// A span of text in the expression source.
///
/// This type is used throughout the tokenizer to track source locations.
pub type InputSpan<'a> = LocatedSpan<&'a str>;

pub fn source_location_from(input_span: InputSpan<'_>) -> SourceLocation {
    SourceLocation {
        offset: input_span.location_offset(),
        line: usize::try_from(input_span.location_line()).unwrap_or(usize::MAX),
        column: input_span.get_utf8_column(),
    }
}

pub fn span_from(start_input_span: InputSpan<'_>, end_input_span: InputSpan<'_>) -> Span {
    Span::new(
        source_location_from(start_input_span),
        source_location_from(end_input_span),
    )
}

/// A result type for tokenizer operations.
///
/// This type alias wraps nom's `IResult` with our located span type.
pub type Result<'a, O, E = Error<InputSpan<'a>>> = IResult<InputSpan<'a>, O, E>;

/// A trait for parser implementations that work with our located span type.
///
/// This trait is automatically implemented for any type that implements nom's
/// `Parser` trait with our span type.
pub trait Parser<'a, O, E = Error<InputSpan<'a>>>:
    NomParser<InputSpan<'a>, Output = O, Error = E>
{
}

impl<'a, O, E, P> Parser<'a, O, E> for P where P: NomParser<InputSpan<'a>, Output = O, Error = E> {}
