//! Tests for the content markup parser.

use teletekst_core::markup::parse_content;
use teletekst_core::{Colour, TeletekstError, TextRun};

fn run(body: &str, background: Colour, foreground: Colour) -> TextRun {
    TextRun::new(body.to_string(), background, foreground)
}

#[test]
fn test_plain_row_is_one_default_run() {
    let grid = parse_content("plain text").unwrap();
    assert_eq!(grid, vec![vec![run("plain text", Colour::Black, Colour::White)]]);
}

#[test]
fn test_leading_whitespace_is_preserved() {
    let grid = parse_content("   102 Binnenland   ").unwrap();
    assert_eq!(
        grid,
        vec![vec![run("   102 Binnenland   ", Colour::Black, Colour::White)]]
    );
}

#[test]
fn test_spans_and_inter_span_whitespace() {
    let grid =
        parse_content("<span class=\"red\">ABC</span> <span class=\"bg-blue\">DEF</span>")
            .unwrap();
    assert_eq!(
        grid,
        vec![vec![
            run("ABC", Colour::Black, Colour::Red),
            run(" ", Colour::Black, Colour::White),
            run("DEF", Colour::Blue, Colour::White),
        ]]
    );
}

#[test]
fn test_literal_before_first_span() {
    let grid = parse_content("  12 <span class=\"cyan\">Nieuws</span>").unwrap();
    assert_eq!(
        grid,
        vec![vec![
            run("  12 ", Colour::Black, Colour::White),
            run("Nieuws", Colour::Black, Colour::Cyan),
        ]]
    );
}

#[test]
fn test_trailing_literal_after_last_span() {
    let grid = parse_content("<span class=\"green\">ok</span>!!").unwrap();
    assert_eq!(
        grid,
        vec![vec![
            run("ok", Colour::Black, Colour::Green),
            run("!!", Colour::Black, Colour::White),
        ]]
    );
}

#[test]
fn test_entities_decode_before_tag_scan() {
    let grid = parse_content("A &amp; B").unwrap();
    assert_eq!(grid, vec![vec![run("A & B", Colour::Black, Colour::White)]]);

    // Inside a span body as well.
    let grid = parse_content("<span class=\"yellow\">R&amp;D</span>").unwrap();
    assert_eq!(grid, vec![vec![run("R&D", Colour::Black, Colour::Yellow)]]);
}

#[test]
fn test_anchor_is_unwrapped_and_href_discarded() {
    let grid =
        parse_content("<span class=\"green\"><a href=\"x\">LINK</a></span>").unwrap();
    assert_eq!(grid, vec![vec![run("LINK", Colour::Black, Colour::Green)]]);
}

#[test]
fn test_fasttext_anchor_variant() {
    let grid = parse_content(
        "<span class=\"yellow\"><a id=\"fastText2\" class=\"yellow\" href=\"#102\">Sport</a></span>",
    )
    .unwrap();
    assert_eq!(grid, vec![vec![run("Sport", Colour::Black, Colour::Yellow)]]);
}

#[test]
fn test_empty_class_yields_default_pair() {
    let grid = parse_content("<span class=\"\">X</span>").unwrap();
    assert_eq!(grid, vec![vec![run("X", Colour::Black, Colour::White)]]);

    let grid = parse_content("<span>X</span>").unwrap();
    assert_eq!(grid, vec![vec![run("X", Colour::Black, Colour::White)]]);
}

#[test]
fn test_class_tokens_are_order_independent() {
    let expected = vec![vec![run("X", Colour::Blue, Colour::Yellow)]];
    let grid = parse_content("<span class=\"yellow bg-blue\">X</span>").unwrap();
    assert_eq!(grid, expected);
    let grid = parse_content("<span class=\"bg-blue yellow\">X</span>").unwrap();
    assert_eq!(grid, expected);
}

#[test]
fn test_mosaic_codepoints_in_runs_are_mapped() {
    let grid = parse_content("\u{F07F}<span class=\"red\">\u{F021}\u{F035}</span>").unwrap();
    assert_eq!(
        grid,
        vec![vec![
            run("█", Colour::Black, Colour::White),
            run("🬀▌", Colour::Black, Colour::Red),
        ]]
    );
}

#[test]
fn test_blank_rows_yield_empty_grid() {
    assert!(parse_content("").unwrap().is_empty());
    assert!(parse_content("\n\n\n").unwrap().is_empty());
}

#[test]
fn test_blank_rows_between_content_are_dropped() {
    let grid = parse_content("one\n\ntwo").unwrap();
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[0][0].body, "one");
    assert_eq!(grid[1][0].body, "two");
}

#[test]
fn test_unclosed_span_fails_whole_parse() {
    let err = parse_content("fine row\n<span class=\"red\">ABC").unwrap_err();
    match err {
        TeletekstError::MalformedMarkup { row, .. } => assert_eq!(row, 2),
        other => panic!("expected MalformedMarkup, got {other:?}"),
    }
}

#[test]
fn test_span_without_closing_bracket_fails() {
    let err = parse_content("<span class=\"red\"ABC</span>").unwrap_err();
    assert!(matches!(err, TeletekstError::MalformedMarkup { row: 1, .. }));
}

#[test]
fn test_unknown_class_token_fails_with_context() {
    let err = parse_content("row one\n<span class=\"magenta\">X</span>").unwrap_err();
    match err {
        TeletekstError::UnknownColorClass { row, token } => {
            assert_eq!(row, 2);
            assert_eq!(token, "magenta");
        }
        other => panic!("expected UnknownColorClass, got {other:?}"),
    }
}

#[test]
fn test_stray_angle_bracket_is_literal() {
    let grid = parse_content("temp < 10 <span class=\"cyan\">C</span>").unwrap();
    assert_eq!(
        grid,
        vec![vec![
            run("temp < 10 ", Colour::Black, Colour::White),
            run("C", Colour::Black, Colour::Cyan),
        ]]
    );
}
