use super::*;

#[test]
fn atx() {
    html("# Hello\n", "<h1>Hello</h1>\n");
}

#[test]
fn atx_levels() {
    html(
        concat!("### three\n", "###### six\n"),
        concat!("<h3>three</h3>\n", "<h6>six</h6>\n"),
    );
}

#[test]
fn seven_hashes_is_no_heading() {
    html("####### nope\n", "<p>####### nope</p>\n");
}

#[test]
fn marker_needs_a_separator() {
    html("#5 bolt\n", "<p>#5 bolt</p>\n");
}

#[test]
fn closing_sequence_is_dropped() {
    html("## foo ##\n", "<h2>foo</h2>\n");
}

#[test]
fn single_trailing_hash_is_content() {
    html("# foo #\n", "<h1>foo #</h1>\n");
}

#[test]
fn empty_heading() {
    html("#\n", "<h1></h1>\n");
}

#[test]
fn heading_interrupts_paragraph() {
    html(
        concat!("foo\n", "# bar\n"),
        concat!("<p>foo</p>\n", "<h1>bar</h1>\n"),
    );
}

#[test]
fn heading_content_is_inline_parsed() {
    html("# *em* and `code`\n", "<h1><em>em</em> and <code>code</code></h1>\n");
}

#[test]
fn setext_level_one() {
    html(concat!("Foo\n", "===\n"), "<h1>Foo</h1>\n");
}

#[test]
fn setext_level_two() {
    html(concat!("Foo\n", "---\n"), "<h2>Foo</h2>\n");
}

#[test]
fn setext_takes_the_whole_paragraph() {
    html(
        concat!("Foo\n", "bar\n", "===\n"),
        "<h1>Foo\nbar</h1>\n",
    );
}

#[test]
fn setext_underline_needs_a_paragraph() {
    html("===\n", "<p>===</p>\n");
}

#[test]
fn lazy_setext_underline_stays_text() {
    html(
        concat!("> foo\n", "===\n"),
        concat!("<blockquote>\n", "<p>foo\n===</p>\n", "</blockquote>\n"),
    );
}
