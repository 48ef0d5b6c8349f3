use serde::Serialize;

use crate::span::Span;

/// Source location information for diagnostic reporting
///
/// Line and column numbers are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLocation {
    /// Byte offset from the beginning of the expression source
    offset: usize,
    /// Line number where the diagnostic occurred (1-indexed)
    line: usize,
    /// Column number where the diagnostic occurred (1-indexed)
    column: usize,
    /// Optional length of the highlighted range in characters
    length: Option<usize>,
    /// The source line content where the diagnostic occurred
    line_source: String,
}

impl ErrorLocation {
    /// Creates a new location from source content and position information
    ///
    /// Offsets past the end of `source` are clamped to the end. A highlighted
    /// range that crosses a newline is cut off at the end of its first line,
    /// since multi-line highlights are not rendered.
    fn new(source: &str, offset: usize, length: Option<usize>) -> Self {
        let offset = floor_char_boundary(source, offset.min(source.len()));

        // Find the offset of the first newline before the given offset.
        // The beginning of the source (offset 0) is assumed if there is no
        // newline before the offset.
        let line_start = source[..offset]
            .rfind('\n')
            .map_or(0, |newline_idx| newline_idx + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |newline_idx| offset + newline_idx);

        // Count the number of tabs before the offset
        let num_tabs = source[line_start..offset]
            .chars()
            .filter(|c| *c == '\t')
            .count();

        // The tab characters are already counted as 1 character, so we need to
        // add 3 spaces for each tab, for a total of 4 characters per tab
        let column = source[line_start..offset].chars().count() + 1 + num_tabs * 3;

        let line = source[..offset].chars().filter(|c| *c == '\n').count() + 1;

        let length = length.map(|length| {
            let end = floor_char_boundary(source, (offset + length).min(line_end));
            source[offset..end].chars().count().max(1)
        });

        let line_source = source[line_start..line_end].replace('\t', "    ");

        Self {
            offset,
            line,
            column,
            length,
            line_source,
        }
    }

    /// Creates a new location from source content and offset
    #[must_use]
    pub fn from_source_and_offset(source: &str, offset: usize) -> Self {
        Self::new(source, offset, None)
    }

    /// Creates a new location that highlights `span` inside `source`
    #[must_use]
    pub fn from_source_and_span(source: &str, span: &Span) -> Self {
        Self::new(source, span.start().offset, Some(span.len().max(1)))
    }

    /// Returns the byte offset from the beginning of the expression source
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line number where the diagnostic occurred (1-indexed)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number where the diagnostic occurred (1-indexed)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the length of the highlighted range in characters
    #[must_use]
    pub fn length(&self) -> usize {
        // if no length is provided, assume a single character
        self.length.unwrap_or(1)
    }

    /// Returns the source line content where the diagnostic occurred
    #[must_use]
    pub fn line_source(&self) -> &str {
        &self.line_source
    }
}

fn floor_char_boundary(source: &str, mut index: usize) -> usize {
    while index > 0 && !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}
