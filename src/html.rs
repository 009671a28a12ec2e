//! HTML rendering: a plain walk over the finished block tree.  Leaf text is resolved
//! through the inline pipeline on the way out; the tree itself is never consumed, so a
//! document may be rendered more than once.

use std::fmt::{self, Write};

use crate::nodes::{list_is_loose, Block, BlockValue, Inline, ListType, NodeList};
use crate::parser::inlines;
use crate::strings;

/// Formats a parsed document as an HTML fragment.
pub fn format_document(root: &Block, output: &mut dyn Write) -> fmt::Result {
    render_block(root, output)
}

fn render_block(block: &Block, o: &mut dyn Write) -> fmt::Result {
    match block.value {
        BlockValue::Document => {
            for child in &block.children {
                render_block(child, o)?;
            }
            Ok(())
        }
        BlockValue::ThematicBreak => o.write_str("<hr />\n"),
        BlockValue::Heading(ref nh) => {
            write!(o, "<h{}>", nh.level)?;
            render_inlines(&inlines::parse(&leaf_content(block)), o)?;
            writeln!(o, "</h{}>", nh.level)
        }
        BlockValue::Paragraph(ref np) => {
            if np.setext {
                // The underline is the last stored line; `=` makes a level-1 heading.
                let level = if block.raw_lines.last().map_or(false, |l| l.contains('=')) {
                    1
                } else {
                    2
                };
                let content = block.raw_lines[..block.raw_lines.len() - 1].concat();
                write!(o, "<h{}>", level)?;
                render_inlines(&inlines::parse(content.trim()), o)?;
                writeln!(o, "</h{}>", level)
            } else {
                o.write_str("<p>")?;
                render_inlines(&inlines::parse(leaf_content(block).trim()), o)?;
                o.write_str("</p>\n")
            }
        }
        BlockValue::CodeBlock(ref ncb) => {
            if ncb.fenced {
                o.write_str("<pre><code")?;
                let lang = ncb.info.split_whitespace().next().unwrap_or("");
                if !lang.is_empty() {
                    o.write_str(" class=\"language-")?;
                    escape(o, lang)?;
                    o.write_str("\"")?;
                }
                o.write_str(">")?;
                escape(o, &block.raw_lines.concat())?;
                o.write_str("</code></pre>\n")
            } else {
                o.write_str("<pre><code>")?;
                escape(o, &leaf_content(block))?;
                o.write_str("</code></pre>\n")
            }
        }
        BlockValue::BlockQuote => {
            o.write_str("<blockquote>\n")?;
            for child in &block.children {
                render_block(child, o)?;
            }
            o.write_str("</blockquote>\n")
        }
        BlockValue::List(ref nl) => render_list(block, nl, o),
        BlockValue::Item(..) => render_item(block, false, o),
    }
}

fn render_list(block: &Block, nl: &NodeList, o: &mut dyn Write) -> fmt::Result {
    let loose = list_is_loose(block);
    match nl.list_type {
        ListType::Bullet => o.write_str("<ul>\n")?,
        ListType::Ordered => {
            if nl.start == 1 {
                o.write_str("<ol>\n")?;
            } else {
                write!(o, "<ol start=\"{}\">\n", nl.start)?;
            }
        }
    }
    for item in &block.children {
        render_item(item, loose, o)?;
    }
    match nl.list_type {
        ListType::Bullet => o.write_str("</ul>\n"),
        ListType::Ordered => o.write_str("</ol>\n"),
    }
}

/// Items render their child paragraphs as bare inline content; a loose list only adds
/// breathing room inside the `<li>`.
fn render_item(item: &Block, loose: bool, o: &mut dyn Write) -> fmt::Result {
    let mut content = String::new();
    for child in &item.children {
        match child.value {
            BlockValue::Paragraph(ref np) if !np.setext => {
                render_inlines(&inlines::parse(leaf_content(child).trim()), &mut content)?;
                content.push('\n');
            }
            _ => render_block(child, &mut content)?,
        }
    }
    let content = content.trim();
    if loose {
        write!(o, "<li>\n{}\n</li>\n", content)
    } else {
        write!(o, "<li>{}</li>\n", content)
    }
}

/// A leaf's accumulated text with trailing blank lines dropped.
fn leaf_content(block: &Block) -> String {
    let mut end = block.raw_lines.len();
    while end > 0 && strings::is_blank(&block.raw_lines[end - 1]) {
        end -= 1;
    }
    block.raw_lines[..end].concat()
}

fn render_inlines(nodes: &[Inline], o: &mut dyn Write) -> fmt::Result {
    for node in nodes {
        render_inline(node, o)?;
    }
    Ok(())
}

fn render_inline(node: &Inline, o: &mut dyn Write) -> fmt::Result {
    match node {
        Inline::Text(s) => escape(o, s),
        Inline::Code(children) => {
            let mut literal = String::new();
            collect_text(children, &mut literal);
            o.write_str("<code>")?;
            escape(o, literal.trim())?;
            o.write_str("</code>")
        }
        Inline::Autolink(uri) => {
            o.write_str("<a href=\"")?;
            escape(o, uri)?;
            o.write_str("\">")?;
            escape(o, uri)?;
            o.write_str("</a>")
        }
        Inline::EmailAutolink(addr) => {
            o.write_str("<a href=\"mailto:")?;
            escape(o, addr)?;
            o.write_str("\">")?;
            escape(o, addr)?;
            o.write_str("</a>")
        }
        Inline::Emph { strong, children } => {
            o.write_str(if *strong { "<strong>" } else { "<em>" })?;
            render_inlines(children, o)?;
            o.write_str(if *strong { "</strong>" } else { "</em>" })
        }
        Inline::LineBreak => o.write_str("<br />\n"),
        Inline::SoftBreak => o.write_str("\n"),
    }
}

fn collect_text(nodes: &[Inline], out: &mut String) {
    for node in nodes {
        match node {
            Inline::Text(s) => out.push_str(s),
            Inline::Code(children) | Inline::Emph { children, .. } => collect_text(children, out),
            Inline::Autolink(s) | Inline::EmailAutolink(s) => out.push_str(s),
            Inline::LineBreak | Inline::SoftBreak => out.push('\n'),
        }
    }
}

/// Writes `buffer` to `output`, escaping anything HTML-significant.
///
/// Namely:
///
/// * U+0022 QUOTATION MARK " is rendered as &quot;
/// * U+0026 AMPERSAND & is rendered as &amp;
/// * U+003C LESS-THAN SIGN < is rendered as &lt;
/// * U+003E GREATER-THAN SIGN > is rendered as &gt;
/// * Everything else is passed through unchanged.
pub fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    let bytes = buffer.as_bytes();
    let matcher = jetscii::bytes!(b'"', b'&', b'<', b'>');

    let mut offset = 0;
    while let Some(i) = matcher.find(&bytes[offset..]) {
        let esc: &str = match bytes[offset + i] {
            b'"' => "&quot;",
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => unreachable!(),
        };
        output.write_str(&buffer[offset..offset + i])?;
        output.write_str(esc)?;
        offset += i + 1;
    }
    output.write_str(&buffer[offset..])?;
    Ok(())
}
