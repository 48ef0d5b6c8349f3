//! Source location spans for mapping tokens back to expression text

use serde::Serialize;

/// A span of expression source
///
/// A span is a pair of source locations, representing the start and end of the
/// span. The end location is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    start: SourceLocation,
    end: SourceLocation,
}

impl Span {
    /// Creates a new span from a start and end source location
    ///
    /// # Panics
    ///
    /// Panics if `start` comes after `end`.
    #[must_use]
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        assert!(
            start.offset <= end.offset,
            "start offset must be before end offset"
        );

        assert!(
            start.line < end.line || (start.line == end.line && start.column <= end.column),
            "start line and column must be before end line and column"
        );

        Self { start, end }
    }

    /// Returns the start source location
    #[must_use]
    pub const fn start(&self) -> &SourceLocation {
        &self.start
    }

    /// Returns the end source location
    #[must_use]
    pub const fn end(&self) -> &SourceLocation {
        &self.end
    }

    /// Returns the length of the span in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Returns `true` if the span covers no source text
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the slice of `source` that this span covers
    ///
    /// Returns `None` if the span does not fit inside `source` or does not
    /// fall on character boundaries.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start.offset..self.end.offset)
    }
}

/// A source location
///
/// A source location is a position in the expression source, represented by
/// an offset, line, and column.
///
/// Note that it is assumed that the offset corresponds to the line and column.
/// If this assumption is not correct, any code that relies on the line and
/// column for display purposes will be incorrect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    /// The byte offset from the beginning of the source (0-indexed)
    pub offset: usize,
    /// The line number (1-indexed)
    pub line: usize,
    /// The column number (1-indexed)
    pub column: usize,
}
