use crate::html::Node;
use crate::parsing::error::ParseError;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Image, Link, LinkMatch, Strong},
    types::Span,
};

/// Delimiter rules in precedence order. Code spans come first so their
/// content is never split by the emphasis rules.
const DELIMITERS: [(&str, fn(String) -> Span); 5] = [
    (CodeSpan::TICK, Span::Code),
    (Strong::MARKERS[0], Span::Bold),
    (Strong::MARKERS[1], Span::Bold),
    (Emphasis::MARKERS[0], Span::Italic),
    (Emphasis::MARKERS[1], Span::Italic),
];

/// Intermediate state of a fragment while the rules run.
#[derive(Debug)]
enum Piece {
    /// Text that later rules may still split.
    Open(String),
    /// Text frozen after an unmatched delimiter.
    Literal(String),
    Done(Span),
}

/// The result of splitting one text value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SpanParse {
    pub spans: Vec<Span>,
    pub errors: Vec<ParseError>,
}

/// Splits raw inline markdown into typed spans.
///
/// Images, then links, then each delimiter from [`DELIMITERS`] are applied
/// to whatever text is still open. An unmatched delimiter leaves its
/// fragment as literal text and is reported in [`SpanParse::errors`].
pub fn parse_spans(text: &str) -> SpanParse {
    let mut errors = vec![];
    let mut pieces = vec![Piece::Open(text.to_string())];

    pieces = expand(pieces, |text| {
        split_matches(text, Image::find_all(text), |m| Span::Image {
            alt: m.text.to_string(),
            url: m.url.to_string(),
        })
    });
    pieces = expand(pieces, |text| {
        split_matches(text, Link::find_all(text), |m| Span::Link {
            text: m.text.to_string(),
            url: m.url.to_string(),
        })
    });
    for (delimiter, make) in DELIMITERS {
        pieces = expand(pieces, |text| {
            split_delimited(text, delimiter, make).unwrap_or_else(|err| {
                errors.push(err);
                vec![Piece::Literal(text.to_string())]
            })
        });
    }

    let spans = pieces
        .into_iter()
        .map(|piece| match piece {
            Piece::Open(text) | Piece::Literal(text) => Span::Text(text),
            Piece::Done(span) => span,
        })
        .collect();
    SpanParse { spans, errors }
}

/// Inline-parses a node's value in place, then its styled children.
///
/// `pre` and `code` nodes are left untouched. A value that stays a single
/// text span is kept as-is; anything else replaces the value with children.
pub fn process_node(node: &mut Node, errors: &mut Vec<ParseError>) {
    if node.is_verbatim() {
        return;
    }

    if !node.value.is_empty() {
        let parsed = parse_spans(&node.value);
        errors.extend(parsed.errors);

        let single_text = parsed.spans.len() == 1 && parsed.spans[0].is_text();
        if !single_text {
            node.value.clear();
            node.children = parsed.spans.into_iter().map(Span::into_node).collect();
        }
    }

    for child in node.children.iter_mut().filter(|c| !c.is_text()) {
        process_node(child, errors);
    }
}

fn expand(pieces: Vec<Piece>, mut split: impl FnMut(&str) -> Vec<Piece>) -> Vec<Piece> {
    let mut out = Vec::with_capacity(pieces.len());
    for piece in pieces {
        match piece {
            Piece::Open(text) => out.extend(split(&text)),
            other => out.push(other),
        }
    }
    out
}

fn split_matches(text: &str, found: Vec<LinkMatch<'_>>, make: fn(&LinkMatch<'_>) -> Span) -> Vec<Piece> {
    let mut out = vec![];
    let mut last = 0;
    for m in &found {
        push_open(&mut out, &text[last..m.start]);
        out.push(Piece::Done(make(m)));
        last = m.end;
    }
    push_open(&mut out, &text[last..]);
    out
}

fn split_delimited(
    text: &str,
    delimiter: &'static str,
    make: fn(String) -> Span,
) -> Result<Vec<Piece>, ParseError> {
    let positions = find_delimiters(text, delimiter);
    if positions.len() % 2 == 1 {
        return Err(ParseError::UnmatchedDelimiter {
            delimiter,
            fragment: text.to_string(),
        });
    }

    let mut out = vec![];
    let mut last = 0;
    for (n, &pos) in positions.iter().enumerate() {
        let segment = &text[last..pos];
        if n % 2 == 0 {
            push_open(&mut out, segment);
        } else if !segment.is_empty() {
            out.push(Piece::Done(make(segment.to_string())));
        }
        last = pos + delimiter.len();
    }
    push_open(&mut out, &text[last..]);
    Ok(out)
}

/// Byte offsets of unescaped, non-overlapping occurrences of `delimiter`.
fn find_delimiters(text: &str, delimiter: &str) -> Vec<usize> {
    let mut cur = Cursor::new(text);
    let mut found = vec![];
    while !cur.eof() {
        if cur.starts_with(delimiter.as_bytes()) && !cur.is_escaped() {
            found.push(cur.i);
            cur.bump_n(delimiter.len());
        } else {
            cur.bump();
        }
    }
    found
}

fn push_open(out: &mut Vec<Piece>, text: &str) {
    if !text.is_empty() {
        out.push(Piece::Open(text.to_string()));
    }
}
