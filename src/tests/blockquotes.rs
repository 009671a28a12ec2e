use super::*;

#[test]
fn basic() {
    html(
        "> quote\n",
        concat!("<blockquote>\n", "<p>quote</p>\n", "</blockquote>\n"),
    );
}

#[test]
fn marker_without_space() {
    html(
        ">quote\n",
        concat!("<blockquote>\n", "<p>quote</p>\n", "</blockquote>\n"),
    );
}

#[test]
fn contains_other_blocks() {
    html(
        concat!("> # Hi\n", "> text\n"),
        concat!(
            "<blockquote>\n",
            "<h1>Hi</h1>\n",
            "<p>text</p>\n",
            "</blockquote>\n"
        ),
    );
}

#[test]
fn lazy_continuation() {
    html(
        concat!("> foo\n", "bar\n"),
        concat!("<blockquote>\n", "<p>foo\nbar</p>\n", "</blockquote>\n"),
    );
}

#[test]
fn blank_quote_line_splits_paragraphs() {
    html(
        concat!("> a\n", ">\n", "> b\n"),
        concat!(
            "<blockquote>\n",
            "<p>a</p>\n",
            "<p>b</p>\n",
            "</blockquote>\n"
        ),
    );
}

#[test]
fn ends_at_a_blank_line() {
    html(
        concat!("> a\n", "\n", "b\n"),
        concat!("<blockquote>\n", "<p>a</p>\n", "</blockquote>\n", "<p>b</p>\n"),
    );
}

#[test]
fn nested() {
    html(
        "> > a\n",
        concat!(
            "<blockquote>\n",
            "<blockquote>\n",
            "<p>a</p>\n",
            "</blockquote>\n",
            "</blockquote>\n"
        ),
    );
}

#[test]
fn quote_interrupts_paragraph() {
    html(
        concat!("foo\n", "> bar\n"),
        concat!(
            "<p>foo</p>\n",
            "<blockquote>\n",
            "<p>bar</p>\n",
            "</blockquote>\n"
        ),
    );
}
