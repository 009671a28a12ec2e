use super::*;

#[test]
fn tight_bullets() {
    html(
        concat!("- a\n", "- b\n"),
        concat!("<ul>\n", "<li>a</li>\n", "<li>b</li>\n", "</ul>\n"),
    );
}

#[test]
fn loose_bullets() {
    html(
        concat!("- a\n", "\n", "- b\n"),
        concat!(
            "<ul>\n",
            "<li>\na\n</li>\n",
            "<li>\nb\n</li>\n",
            "</ul>\n"
        ),
    );
}

#[test]
fn ordered() {
    html(
        concat!("1. a\n", "2. b\n"),
        concat!("<ol>\n", "<li>a</li>\n", "<li>b</li>\n", "</ol>\n"),
    );
}

#[test]
fn ordered_start() {
    html(
        concat!("3. a\n", "4. b\n"),
        concat!(
            "<ol start=\"3\">\n",
            "<li>a</li>\n",
            "<li>b</li>\n",
            "</ol>\n"
        ),
    );
}

#[test]
fn ordered_list_with_one_interrupts_paragraph() {
    html(
        concat!("foo\n", "1. bar\n"),
        concat!("<p>foo</p>\n", "<ol>\n", "<li>bar</li>\n", "</ol>\n"),
    );
}

#[test]
fn changing_the_bullet_starts_a_new_list() {
    html(
        concat!("- a\n", "* b\n"),
        concat!(
            "<ul>\n",
            "<li>a</li>\n",
            "</ul>\n",
            "<ul>\n",
            "<li>b</li>\n",
            "</ul>\n"
        ),
    );
}

#[test]
fn item_content_is_inline_parsed() {
    html(
        "- *a*\n",
        concat!("<ul>\n", "<li><em>a</em></li>\n", "</ul>\n"),
    );
}

#[test]
fn continuation_line_joins_the_item() {
    html(
        concat!("- a\n", "  b\n"),
        concat!("<ul>\n", "<li>a\nb</li>\n", "</ul>\n"),
    );
}

#[test]
fn lazy_continuation_joins_the_item() {
    html(
        concat!("- a\n", "b\n"),
        concat!("<ul>\n", "<li>a\nb</li>\n", "</ul>\n"),
    );
}

#[test]
fn nested_list() {
    html(
        concat!("- a\n", "  - b\n"),
        concat!(
            "<ul>\n",
            "<li>a\n<ul>\n",
            "<li>b</li>\n",
            "</ul></li>\n",
            "</ul>\n"
        ),
    );
}

#[test]
fn blank_after_nested_list_loosens_the_outer_one() {
    html(
        concat!("- a\n", "  - b\n", "\n", "- c\n"),
        concat!(
            "<ul>\n",
            "<li>\na\n<ul>\n",
            "<li>b</li>\n",
            "</ul>\n</li>\n",
            "<li>\nc\n</li>\n",
            "</ul>\n"
        ),
    );
}

#[test]
fn item_with_two_paragraphs() {
    html(
        concat!("- a\n", "\n", "  b\n"),
        concat!("<ul>\n", "<li>\na\nb\n</li>\n", "</ul>\n"),
    );
}

#[test]
fn empty_item() {
    html(
        concat!("- a\n", "-\n", "- c\n"),
        concat!(
            "<ul>\n",
            "<li>a</li>\n",
            "<li></li>\n",
            "<li>c</li>\n",
            "</ul>\n"
        ),
    );
}

#[test]
fn thematic_break_ends_the_list() {
    html(
        concat!("- a\n", "---\n"),
        concat!("<ul>\n", "<li>a</li>\n", "</ul>\n", "<hr />\n"),
    );
}

#[test]
fn dedented_text_ends_the_list() {
    html(
        concat!("- a\n", "\n", "text\n"),
        concat!("<ul>\n", "<li>a</li>\n", "</ul>\n", "<p>text</p>\n"),
    );
}

#[test]
fn paren_delimiter() {
    html(
        concat!("1) a\n", "2) b\n"),
        concat!("<ol>\n", "<li>a</li>\n", "<li>b</li>\n", "</ol>\n"),
    );
}
