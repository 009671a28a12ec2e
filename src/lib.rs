//! A GitHub Flavored Markdown to HTML converter.
//!
//! Parsing runs in two phases.  The block phase consumes the document line by line,
//! maintaining a tree of open blocks (see [`parser`]); the inline phase resolves each
//! leaf's text into code spans, autolinks, emphasis, breaks and escapes when the tree is
//! rendered (see [`html`]).  Every UTF-8 input renders; malformed constructs degrade to
//! literal text.
//!
//! ```
//! assert_eq!(
//!     gfmx::markdown_to_html("Hello, **world**.\n"),
//!     "<p>Hello, <strong>world</strong>.</p>\n"
//! );
//! ```

mod scanners;
mod strings;

pub mod html;
pub mod nodes;
pub mod parser;

#[cfg(test)]
mod tests;

pub use crate::html::format_document;
pub use crate::parser::{parse_document, Parser};

/// Renders Markdown to HTML in one call.
pub fn markdown_to_html(md: &str) -> String {
    let root = parse_document(md);
    let mut out = String::new();
    format_document(&root, &mut out).unwrap();
    out
}
