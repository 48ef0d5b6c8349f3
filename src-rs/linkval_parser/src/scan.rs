//! Left-to-right scan of an expression into tokens.

use nom::Parser as _;

use crate::{
    error::{MalformedPlaceholder, MalformedReason},
    token::{
        Literal, Placeholder, Token,
        marker::{self, CLOSE, OPEN},
    },
    util::{InputSpan, span_from},
};

/// The tokens of an expression together with the malformed placeholders
/// found while scanning it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scan<'a> {
    /// The tokens, in source order. Adjacent literal text is merged.
    pub tokens: Vec<Token<'a>>,
    /// Placeholder-like text that was kept as literal text, in source order.
    pub malformed: Vec<MalformedPlaceholder>,
}

impl Scan<'_> {
    /// Returns an iterator over the well-formed placeholders.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder<'_>> {
        self.tokens.iter().filter_map(Token::as_placeholder)
    }
}

/// Scans `source` into tokens.
pub fn scan(source: &str) -> Scan<'_> {
    let mut builder = ScanBuilder::new(source);
    let mut input = InputSpan::new(source);

    while !input.fragment().is_empty() {
        let Ok((rest, literal)) = marker::literal_run(input) else {
            builder.push_literal(input, rest_of(input));
            break;
        };
        builder.push_literal(literal, rest);
        input = rest;

        if input.fragment().is_empty() {
            break;
        }

        let Ok((rest, (raw, content))) = marker::delimited_body(input) else {
            let end = rest_of(input);
            builder.push_malformed(input, end, MalformedReason::Unterminated);
            builder.push_literal(input, end);
            break;
        };

        // The placeholder starts at the last opening marker before the
        // first closing marker. Anything before that is literal text.
        let opening_text = &raw.fragment()[..raw.fragment().len() - CLOSE.len()];
        if let Some(inner_open) = opening_text.rfind(OPEN).filter(|offset| *offset > 0) {
            let prefix_chars = opening_text[..inner_open].chars().count();
            let Ok((after_prefix, _prefix)) = marker::literal_prefix(prefix_chars).parse(input)
            else {
                builder.push_literal(input, rest_of(input));
                break;
            };
            builder.push_literal(input, after_prefix);
            input = after_prefix;
            continue;
        }

        match marker::split_namespace(*content.fragment()) {
            None => {
                builder.push_malformed(raw, rest, MalformedReason::MissingSeparator);
                builder.push_literal(raw, rest);
            }
            Some(("", _)) => {
                builder.push_malformed(raw, rest, MalformedReason::EmptyNamespace);
                builder.push_literal(raw, rest);
            }
            Some((_, "")) => {
                builder.push_malformed(raw, rest, MalformedReason::EmptyKey);
                builder.push_literal(raw, rest);
            }
            Some((namespace, key)) => {
                builder.push_placeholder(raw, rest, namespace, key);
            }
        }

        input = rest;
    }

    builder.finish()
}

/// Returns the empty span at the end of `input`.
fn rest_of(input: InputSpan<'_>) -> InputSpan<'_> {
    marker::trailing_literal(input).map_or(input, |(rest, _)| rest)
}

/// Accumulates tokens, merging adjacent literal text.
struct ScanBuilder<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    malformed: Vec<MalformedPlaceholder>,
    pending_literal: Option<(InputSpan<'a>, InputSpan<'a>)>,
}

impl<'a> ScanBuilder<'a> {
    const fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            malformed: Vec::new(),
            pending_literal: None,
        }
    }

    /// Adds the literal text between `start` and `end`.
    fn push_literal(&mut self, start: InputSpan<'a>, end: InputSpan<'a>) {
        if start.location_offset() == end.location_offset() {
            return;
        }

        self.pending_literal = match self.pending_literal.take() {
            Some((pending_start, _)) => Some((pending_start, end)),
            None => Some((start, end)),
        };
    }

    fn push_placeholder(
        &mut self,
        raw: InputSpan<'a>,
        end: InputSpan<'a>,
        namespace: &'a str,
        key: &'a str,
    ) {
        self.flush_literal();
        let span = span_from(raw, end);
        let placeholder = Placeholder::new(*raw.fragment(), namespace, key, span);
        self.tokens.push(Token::Placeholder(placeholder));
    }

    fn push_malformed(&mut self, start: InputSpan<'a>, end: InputSpan<'a>, reason: MalformedReason) {
        let span = span_from(start, end);
        let raw = &self.source[start.location_offset()..end.location_offset()];
        self.malformed
            .push(MalformedPlaceholder::new(raw, span, reason));
    }

    fn flush_literal(&mut self) {
        if let Some((start, end)) = self.pending_literal.take() {
            let text = &self.source[start.location_offset()..end.location_offset()];
            let span = span_from(start, end);
            self.tokens.push(Token::Literal(Literal::new(text, span)));
        }
    }

    fn finish(mut self) -> Scan<'a> {
        self.flush_literal();
        Scan {
            tokens: self.tokens,
            malformed: self.malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_tokens<'a>(scan: &Scan<'a>) -> Vec<&'a str> {
        scan.tokens.iter().map(Token::raw).collect()
    }

    #[test]
    fn empty_input_has_no_tokens() {
        let scan = scan("");
        assert!(scan.tokens.is_empty());
        assert!(scan.malformed.is_empty());
    }

    #[test]
    fn literal_only() {
        let scan = scan("just text");
        assert_eq!(raw_tokens(&scan), vec!["just text"]);
        assert!(matches!(scan.tokens[0], Token::Literal(_)));
    }

    #[test]
    fn mixed_literal_and_placeholder() {
        let scan = scan("prefix-{{A:UUID}}-suffix");
        assert_eq!(raw_tokens(&scan), vec!["prefix-", "{{A:UUID}}", "-suffix"]);

        let placeholder = scan.tokens[1]
            .as_placeholder()
            .expect("second token should be a placeholder");
        assert_eq!(placeholder.namespace(), "A");
        assert_eq!(placeholder.key(), "UUID");
        assert_eq!(placeholder.span().start().offset, 7);
        assert_eq!(placeholder.span().end().offset, 17);
    }

    #[test]
    fn adjacent_placeholders() {
        let scan = scan("{{P:CONFIG}}{{I:UUID}}");
        assert_eq!(raw_tokens(&scan), vec!["{{P:CONFIG}}", "{{I:UUID}}"]);
        assert_eq!(scan.placeholders().count(), 2);
    }

    #[test]
    fn missing_separator_is_literal() {
        let scan = scan("a{{UUID}}b");
        assert_eq!(raw_tokens(&scan), vec!["a{{UUID}}b"]);
        assert_eq!(scan.malformed.len(), 1);
        assert_eq!(scan.malformed[0].raw(), "{{UUID}}");
        assert_eq!(scan.malformed[0].reason(), MalformedReason::MissingSeparator);
    }

    #[test]
    fn empty_namespace_and_key_are_literal() {
        let scan = scan("{{:x}} {{A:}}");
        assert_eq!(raw_tokens(&scan), vec!["{{:x}} {{A:}}"]);
        let reasons: Vec<_> = scan.malformed.iter().map(MalformedPlaceholder::reason).collect();
        assert_eq!(
            reasons,
            vec![MalformedReason::EmptyNamespace, MalformedReason::EmptyKey]
        );
    }

    #[test]
    fn unterminated_is_trailing_literal() {
        let scan = scan("x {{A:B}} y {{A:C");
        assert_eq!(raw_tokens(&scan), vec!["x ", "{{A:B}}", " y {{A:C"]);
        assert_eq!(scan.malformed.len(), 1);
        assert_eq!(scan.malformed[0].raw(), "{{A:C");
        assert_eq!(scan.malformed[0].reason(), MalformedReason::Unterminated);
    }

    #[test]
    fn key_keeps_further_separators() {
        let scan = scan("{{M:product:version}}");
        let placeholder = scan.tokens[0]
            .as_placeholder()
            .expect("should be a placeholder");
        assert_eq!(placeholder.namespace(), "M");
        assert_eq!(placeholder.key(), "product:version");
    }

    #[test]
    fn first_close_ends_placeholder() {
        let scan = scan("{{A:B}}}}");
        assert_eq!(raw_tokens(&scan), vec!["{{A:B}}", "}}"]);
    }

    #[test]
    fn inner_open_starts_placeholder() {
        let scan = scan("{{a {{B:c}} d");
        assert_eq!(raw_tokens(&scan), vec!["{{a ", "{{B:c}}", " d"]);
        assert!(scan.malformed.is_empty());
    }

    #[test]
    fn triple_braces() {
        let scan = scan("{{{A:B}}}");
        assert_eq!(raw_tokens(&scan), vec!["{", "{{A:B}}", "}"]);
    }

    #[test]
    fn placeholder_spans_on_later_lines() {
        let scan = scan("line one\n{{I:NAME}}");
        let placeholder = scan.tokens[1]
            .as_placeholder()
            .expect("should be a placeholder");
        assert_eq!(placeholder.span().start().line, 2);
        assert_eq!(placeholder.span().start().column, 1);
    }

    #[test]
    fn case_is_preserved() {
        let scan = scan("{{a:Key}}");
        let placeholder = scan.tokens[0]
            .as_placeholder()
            .expect("should be a placeholder");
        assert_eq!(placeholder.namespace(), "a");
        assert_eq!(placeholder.key(), "Key");
    }

    #[test]
    fn multibyte_literal_text() {
        let scan = scan("größe {{A:X}} ✓");
        assert_eq!(raw_tokens(&scan), vec!["größe ", "{{A:X}}", " ✓"]);
    }
}
