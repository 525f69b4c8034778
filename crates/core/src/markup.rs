//! Teletext markup parsing.
//!
//! A page's `content` field is a newline-separated list of rows in a
//! restricted HTML subset: literal text interleaved with
//! `<span class="...">...</span>` runs, where a span body may wrap its text
//! in an anchor tag. The rows come from a fixed-width broadcast medium, so
//! all whitespace is significant and is preserved exactly.

use std::borrow::Cow;

use crate::color::Colour;
use crate::error::{Result, TeletekstError};
use crate::glyph;
use crate::page::{Line, TextRun};

/// One structural token of a content row.
#[derive(Debug, PartialEq, Eq)]
enum RowToken<'a> {
    /// Literal text outside any span, whitespace intact.
    Literal(&'a str),
    /// A `<span class="...">...</span>` element, body still raw.
    Span { class: &'a str, body: &'a str },
}

/// Parse a whole `content` string into the ordered grid of colored lines.
///
/// Rows that are empty after entity decoding contribute no line. Any row
/// that fails to parse fails the whole page.
pub fn parse_content(content: &str) -> Result<Vec<Line>> {
    let mut lines = Vec::new();
    for (idx, raw_row) in content.split('\n').enumerate() {
        // Entities are decoded before tokenizing, matching the upstream
        // producer: `&amp;` must become `&` before tag boundaries are read.
        let row = html_escape::decode_html_entities(raw_row);
        if row.is_empty() {
            continue;
        }
        lines.push(parse_row(&row, idx + 1)?);
    }
    Ok(lines)
}

/// Parse one decoded row into its left-to-right sequence of runs.
fn parse_row(row: &str, row_no: usize) -> Result<Line> {
    let mut runs = Vec::new();
    for token in tokenize_row(row, row_no)? {
        match token {
            RowToken::Literal(text) => {
                runs.push(TextRun::new(glyph::map_str(text), Colour::Black, Colour::White));
            }
            RowToken::Span { class, body } => {
                let (background, foreground) = resolve_classes(class, row_no)?;
                let body = unwrap_anchors(body, row_no)?;
                runs.push(TextRun::new(glyph::map_str(&body), background, foreground));
            }
        }
    }
    Ok(runs)
}

/// Single forward scan over a row, emitting alternating literal and span
/// tokens.
///
/// A `<` that does not open a `<span` tag is plain row text. Empty literal
/// segments (adjacent spans, span at start of row) produce no token.
fn tokenize_row(row: &str, row_no: usize) -> Result<Vec<RowToken<'_>>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < row.len() {
        let Some(off) = row[pos..].find("<span") else {
            tokens.push(RowToken::Literal(&row[pos..]));
            break;
        };
        if off > 0 {
            tokens.push(RowToken::Literal(&row[pos..pos + off]));
        }
        let (class, body_start) = parse_span_open(row, pos + off, row_no)?;
        let Some(body_len) = row[body_start..].find("</span>") else {
            return Err(TeletekstError::MalformedMarkup {
                row: row_no,
                msg: "unclosed <span> tag".to_string(),
            });
        };
        tokens.push(RowToken::Span {
            class,
            body: &row[body_start..body_start + body_len],
        });
        pos = body_start + body_len + "</span>".len();
    }
    Ok(tokens)
}

/// Parse a span open tag starting at `tag` (the `<` of `<span`).
///
/// Returns the raw class attribute value (empty for `<span>`) and the index
/// of the first body byte.
fn parse_span_open(row: &str, tag: usize, row_no: usize) -> Result<(&str, usize)> {
    let mut pos = tag + "<span".len();
    while row[pos..].starts_with(' ') {
        pos += 1;
    }
    let mut class = "";
    if row[pos..].starts_with("class=\"") {
        let value_start = pos + "class=\"".len();
        let Some(len) = row[value_start..].find('"') else {
            return Err(TeletekstError::MalformedMarkup {
                row: row_no,
                msg: "unterminated class attribute".to_string(),
            });
        };
        class = &row[value_start..value_start + len];
        pos = value_start + len + 1;
    }
    while row[pos..].starts_with(' ') {
        pos += 1;
    }
    if !row[pos..].starts_with('>') {
        return Err(TeletekstError::MalformedMarkup {
            row: row_no,
            msg: "malformed <span> open tag".to_string(),
        });
    }
    Ok((class, pos + 1))
}

/// Resolve a class attribute to a (background, foreground) pair.
///
/// Tokens are whitespace-separated and order-independent: a `bg`-prefixed
/// token sets the background, any other token the foreground. An empty
/// attribute keeps the defaults (black on the outside, white text).
fn resolve_classes(class: &str, row_no: usize) -> Result<(Colour, Colour)> {
    let mut background = Colour::Black;
    let mut foreground = Colour::White;
    for token in class.split_whitespace() {
        let colour =
            Colour::from_label(token).ok_or_else(|| TeletekstError::UnknownColorClass {
                row: row_no,
                token: token.to_string(),
            })?;
        if token.starts_with("bg") {
            background = colour;
        } else {
            foreground = colour;
        }
    }
    Ok((background, foreground))
}

/// Strip anchor wrappers from a span body, keeping only their inner text.
///
/// Covers both the generic hyperlink and the `fastText` id variant; the
/// link target is discarded since a terminal cannot follow it.
fn unwrap_anchors<'a>(body: &'a str, row_no: usize) -> Result<Cow<'a, str>> {
    if !body.contains("<a") {
        return Ok(Cow::Borrowed(body));
    }
    let mut out = String::with_capacity(body.len());
    let mut pos = 0;
    while let Some(off) = body[pos..].find("<a") {
        out.push_str(&body[pos..pos + off]);
        let open = pos + off;
        let Some(gt) = body[open..].find('>') else {
            return Err(TeletekstError::MalformedMarkup {
                row: row_no,
                msg: "unterminated <a> tag".to_string(),
            });
        };
        let inner = open + gt + 1;
        let Some(len) = body[inner..].find("</a>") else {
            return Err(TeletekstError::MalformedMarkup {
                row: row_no,
                msg: "unclosed <a> tag".to_string(),
            });
        };
        out.push_str(&body[inner..inner + len]);
        pos = inner + len + "</a>".len();
    }
    out.push_str(&body[pos..]);
    Ok(Cow::Owned(out))
}
