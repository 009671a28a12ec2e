use super::*;

#[test]
fn em() {
    html("*foo*\n", "<p><em>foo</em></p>\n");
}

#[test]
fn strong() {
    html("**foo**\n", "<p><strong>foo</strong></p>\n");
}

#[test]
fn em_with_underscores() {
    html("_foo_\n", "<p><em>foo</em></p>\n");
}

#[test]
fn strong_with_underscores() {
    html("__foo__\n", "<p><strong>foo</strong></p>\n");
}

#[test]
fn em_inside_strong_from_triple_runs() {
    html("***a***\n", "<p><em><strong>a</strong></em></p>\n");
}

#[test]
fn nested() {
    html(
        "*foo **bar** baz*\n",
        "<p><em>foo <strong>bar</strong> baz</em></p>\n",
    );
}

#[test]
fn leftover_opener_stays_literal() {
    html("**foo*\n", "<p>*<em>foo</em></p>\n");
}

#[test]
fn leftover_closer_stays_literal() {
    html("*foo**\n", "<p><em>foo</em>*</p>\n");
}

#[test]
fn unmatched_delimiters_are_text() {
    html("*foo\n", "<p>*foo</p>\n");
    html("foo*\n", "<p>foo*</p>\n");
}

#[test]
fn intraword_star_does_not_open() {
    html("a*b*c\n", "<p>a*b*c</p>\n");
}

#[test]
fn intraword_underscore_does_not_open() {
    html("foo_bar_baz\n", "<p>foo_bar_baz</p>\n");
}

#[test]
fn opener_needs_a_following_nonspace() {
    html("a * foo * b\n", "<p>a * foo * b</p>\n");
}

#[test]
fn emphasis_does_not_cross_a_code_span() {
    html("*a `*` b\n", "<p>*a <code>*</code> b</p>\n");
}

#[test]
fn brackets_stay_literal() {
    html("[text] and ![image]\n", "<p>[text] and ![image]</p>\n");
}

#[test]
fn emphasis_around_brackets() {
    html("*a [b] c*\n", "<p><em>a [b] c</em></p>\n");
}
