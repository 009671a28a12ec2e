use super::*;
use crate::strings::expand_tabs;
use pretty_assertions::assert_eq;

#[test]
fn expansion_lands_on_the_four_column_grid() {
    assert_eq!(expand_tabs("\tfoo", -1, 0), "    foo");
    assert_eq!(expand_tabs("a\tb", -1, 0), "a   b");
    assert_eq!(expand_tabs("ab\tc", -1, 0), "ab  c");
    assert_eq!(expand_tabs("abc\td", -1, 0), "abc d");
    assert_eq!(expand_tabs("abcd\te", -1, 0), "abcd    e");
}

#[test]
fn expansion_respects_the_column_offset() {
    assert_eq!(expand_tabs("\tx", -1, 2), "  x");
    assert_eq!(expand_tabs("\tx", -1, 3), " x");
}

#[test]
fn tabs_outside_the_window_survive() {
    assert_eq!(expand_tabs("\ta\tb", 1, 0), "    a\tb");
    assert_eq!(expand_tabs("a\tb", 0, 0), "a\tb");
}

#[test]
fn no_tabs_remain_after_whole_line_expansion() {
    let expanded = expand_tabs("\ta\tb\tc", -1, 0);
    assert!(!expanded.contains('\t'));
}

#[test]
fn tab_indent_opens_a_code_block() {
    html("\tfoo\n", "<pre><code>foo\n</code></pre>\n");
    html(" \tfoo\n", "<pre><code>foo\n</code></pre>\n");
}

#[test]
fn tab_after_a_list_marker_is_padding() {
    html(
        "-\tfoo\n",
        concat!("<ul>\n", "<li>foo</li>\n", "</ul>\n"),
    );
}

#[test]
fn tab_inside_code_content_is_kept() {
    html(
        concat!("```\n", "a\tb\n", "```\n"),
        "<pre><code>a\tb\n</code></pre>\n",
    );
}
