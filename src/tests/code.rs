use super::*;

#[test]
fn fenced() {
    html(
        concat!("```py\n", "x=1\n", "```\n"),
        "<pre><code class=\"language-py\">x=1\n</code></pre>\n",
    );
}

#[test]
fn fenced_escapes_content() {
    html(
        concat!("``` rust yum\n", "fn main<'a>();\n", "```\n"),
        concat!(
            "<pre><code class=\"language-rust\">fn main&lt;'a&gt;();\n",
            "</code></pre>\n"
        ),
    );
}

#[test]
fn tilde_fence() {
    html(
        concat!("~~~\n", "code\n", "~~~\n"),
        "<pre><code>code\n</code></pre>\n",
    );
}

#[test]
fn unclosed_fence_runs_to_the_end() {
    html(
        concat!("```\n", "abc\n"),
        "<pre><code>abc\n</code></pre>\n",
    );
}

#[test]
fn closing_fence_must_be_long_enough() {
    html(
        concat!("````\n", "```\n", "````\n"),
        "<pre><code>```\n</code></pre>\n",
    );
}

#[test]
fn fence_content_is_never_markdown() {
    html(
        concat!("```\n", "# not a heading\n", "*not em*\n", "```\n"),
        "<pre><code># not a heading\n*not em*\n</code></pre>\n",
    );
}

#[test]
fn fenced_keeps_blank_lines() {
    html(
        concat!("```\n", "a\n", "\n", "b\n", "```\n"),
        "<pre><code>a\n\nb\n</code></pre>\n",
    );
}

#[test]
fn indented() {
    html("    hello\n", "<pre><code>hello\n</code></pre>\n");
}

#[test]
fn indented_keeps_relative_indent() {
    html(
        concat!("    a\n", "      b\n"),
        "<pre><code>a\n  b\n</code></pre>\n",
    );
}

#[test]
fn indented_cannot_interrupt_a_paragraph() {
    html(
        concat!("foo\n", "    bar\n"),
        "<p>foo\nbar</p>\n",
    );
}

#[test]
fn indented_content_is_literal() {
    html("    *foo*\n", "<pre><code>*foo*\n</code></pre>\n");
}

#[test]
fn indented_ends_on_dedented_text() {
    html(
        concat!("    code\n", "text\n"),
        concat!("<pre><code>code\n</code></pre>\n", "<p>text</p>\n"),
    );
}
