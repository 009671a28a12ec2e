use crate::{format_document, markdown_to_html, parse_document, Parser};
use pretty_assertions::assert_eq;

#[test]
fn line_by_line_feeding_matches_whole_text() {
    let mut parser = Parser::new();
    parser.parse_line("# Title\n");
    parser.parse_line("\n");
    parser.parse_line("body\n");
    parser.parse_line("");
    let doc = parser.finish();

    let mut out = String::new();
    format_document(&doc, &mut out).unwrap();
    assert_eq!(out, markdown_to_html("# Title\n\nbody\n"));
}

#[test]
fn rendering_twice_is_stable() {
    let doc = parse_document("- *a*\n\n- b\n");
    let mut first = String::new();
    format_document(&doc, &mut first).unwrap();
    let mut second = String::new();
    format_document(&doc, &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn trailing_newline_is_irrelevant() {
    assert_eq!(markdown_to_html("foo"), markdown_to_html("foo\n"));
    assert_eq!(markdown_to_html("# foo"), markdown_to_html("# foo\n"));
    assert_eq!(markdown_to_html("- a"), markdown_to_html("- a\n"));
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(markdown_to_html(""), "");
    assert_eq!(markdown_to_html("\n"), "");
    assert_eq!(markdown_to_html("   \n\n"), "");
}

#[test]
fn every_input_renders() {
    for input in [
        "***\n___\n***\n",
        "`\n``\n```",
        "> > > \n",
        "- - - -",
        "1.",
        "*_*_ __*__",
        "\\",
        "<>",
        "\u{fffd}\u{0}",
        "   \t \t\n\t",
    ] {
        let _ = markdown_to_html(input);
    }
}
