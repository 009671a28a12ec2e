//! The block-structure phase: a line-oriented automaton over a tree of open blocks.
//!
//! Each line is probed against the open blocks root-first (`close_check`), descended through
//! the deepest chain of still-open containers, matched against the block start ladder
//! (`new_block`), and finally either absorbed as content or committed as a new block.
//! Closing is two-phase: `close_check` only marks (`close_next`); `close_marked` commits,
//! which lets the current line be fully interpreted before the stack mutates.

pub mod inlines;

use crate::nodes::{
    Block, BlockValue, ListType, NodeCodeBlock, NodeHeading, NodeItem, NodeList, NodeParagraph,
};
use crate::scanners;
use crate::strings;

/// Parses a complete document and returns the root block.
///
/// ```
/// let doc = gfmx::parse_document("# Hi\n");
/// assert_eq!(doc.children.len(), 1);
/// ```
pub fn parse_document(buffer: &str) -> Block {
    let mut parser = Parser::new();
    parser.parse_text(buffer);
    parser.finish()
}

/// The block parser.  Feed it lines (or whole texts) and take the finished tree with
/// [`finish`](Parser::finish).  Holds no global state; independent parsers may run on
/// separate threads.
#[derive(Debug)]
pub struct Parser {
    document: Block,
    line_number: usize,
    last_strip: usize,
    lazy: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    pub fn new() -> Parser {
        Parser {
            document: Block::new(BlockValue::Document),
            line_number: 0,
            last_strip: 0,
            lazy: false,
        }
    }

    /// Splits `text` into lines and feeds each through [`parse_line`](Parser::parse_line).
    pub fn parse_text(&mut self, text: &str) {
        for line in strings::split_lines(text) {
            self.parse_line(&line);
        }
    }

    /// Consumes one line.  All lines except the final one must keep their terminator.
    pub fn parse_line(&mut self, line: &str) {
        loop {
            // Mark the blocks this line ends, on a fully tab-expanded probe.
            let probe = strings::expand_tabs(line, -1, 0);
            self.document.close_check(&probe, self.line_number, false);

            // Descend to the deepest still-open block, stripping container markers.
            let mut open_path = Vec::new();
            let open_remainder = last_open_path(&self.document, &probe, &mut open_path);
            let last_path = rightmost_path(&self.document);

            // Re-derive the remainder from the raw line, expanding only the columns the
            // descent consumed, so content keeps its own tabs.
            let to_strip = strings::char_len(&probe) - strings::char_len(&open_remainder);
            let expanded = strings::expand_tabs(line, to_strip as isize, 0);
            let remainder = strings::skip_chars(&expanded, to_strip).to_string();

            let block = new_block(
                block_at(&self.document, &open_path),
                &remainder,
                self.line_number,
                block_at(&self.document, &last_path),
                to_strip,
            );

            self.lazy = to_strip == 0 && (self.lazy || self.last_strip > 0);
            self.last_strip = to_strip;

            // An open fenced code block owns the line outright.
            {
                let last = block_at(&self.document, &last_path);
                if let BlockValue::CodeBlock(ref ncb) = last.value {
                    if ncb.fenced && !last.closed {
                        if last.close_next {
                            // The closing fence itself; consumed by the close.
                            self.document.close_marked();
                        } else {
                            let lazy = self.lazy;
                            block_at_mut(&mut self.document, &last_path)
                                .add_line(&remainder, to_strip, lazy);
                        }
                        break;
                    }
                }
            }

            // A blank line inside a list records where looseness began and commits the
            // pending closes.
            if block.is_none() && strings::is_blank(&remainder) {
                let deepest = block_at(&self.document, &open_path);
                if !matches!(
                    deepest.value,
                    BlockValue::BlockQuote | BlockValue::CodeBlock(..)
                ) {
                    if let Some(list_path) = innermost_open_list(&self.document) {
                        let list = block_at(&self.document, &list_path);
                        let live_item = list.children.last().map_or(false, |item| {
                            !item.children.is_empty()
                                || match item.value {
                                    BlockValue::Item(ni) => ni.start_line < self.line_number,
                                    _ => false,
                                }
                        });
                        if live_item {
                            let total = list.children.iter().map(|c| c.children.len()).sum();
                            if let BlockValue::List(ref mut nl) =
                                block_at_mut(&mut self.document, &list_path).value
                            {
                                if nl.loose.is_none() {
                                    nl.loose = Some(total);
                                }
                            }
                            self.document.close_marked();
                            break;
                        }
                    }
                }
            }

            // A lazy continuation line may not be blank.
            if self.lazy
                && strings::is_blank(&remainder)
                && !matches!(
                    block_at(&self.document, &open_path).value,
                    BlockValue::CodeBlock(..)
                )
            {
                self.document.close_marked();
                break;
            }

            // A non-item block landing in an open list forces the list closed; closing it
            // re-exposes a shallower container, so the whole line is reinterpreted.
            if let Some(ref b) = block {
                if !matches!(b.value, BlockValue::Item(..))
                    && matches!(
                        block_at(&self.document, &open_path).value,
                        BlockValue::List(..)
                    )
                {
                    loop {
                        let mut path = Vec::new();
                        last_open_path(&self.document, &probe, &mut path);
                        if !matches!(block_at(&self.document, &path).value, BlockValue::List(..)) {
                            break;
                        }
                        block_at_mut(&mut self.document, &path).close_check(
                            &probe,
                            self.line_number,
                            true,
                        );
                        self.document.close_marked();
                    }
                    continue;
                }
            }

            // No new block, or a paragraph line continuing an open paragraph: content.
            let last_is_open_paragraph = {
                let last = block_at(&self.document, &last_path);
                matches!(last.value, BlockValue::Paragraph(..)) && !last.closed
            };
            let absorb = match block {
                None => true,
                Some(ref b) => {
                    matches!(b.value, BlockValue::Paragraph(..)) && last_is_open_paragraph
                }
            };
            if absorb {
                let lazy = self.lazy;
                block_at_mut(&mut self.document, &last_path).add_line(&remainder, to_strip, lazy);
                break;
            }

            // Commit pending closes and attach the new block; a container re-enters the
            // loop so the same line can open nested blocks.
            let b = block.unwrap();
            self.document.close_marked();
            let container = b.is_container();
            block_at_mut(&mut self.document, &open_path).children.push(b);
            if !container {
                break;
            }
        }
        self.line_number += 1;
    }

    /// Returns the finished document root.
    pub fn finish(self) -> Block {
        self.document
    }
}

impl Block {
    /// Marks `close_next` on every block in the subtree whose end condition matches `line`
    /// (or unconditionally under `force`).  Containers strip their marker before cascading.
    fn close_check(&mut self, line: &str, line_number: usize, force: bool) {
        match self.value {
            BlockValue::Document => {
                for child in &mut self.children {
                    if !child.closed {
                        child.close_check(line, line_number, force);
                    }
                }
                return;
            }
            BlockValue::BlockQuote => {
                self.close_next = force || !scanners::block_quote_start(line);
            }
            BlockValue::List(ref nl) => {
                self.close_next =
                    force || list_ends(nl, line) || scanners::thematic_break(line);
            }
            BlockValue::Item(ref ni) => {
                self.close_next = force
                    || (line_number != ni.start_line
                        && !strings::is_blank(line)
                        && strings::first_nonspace(line) < ni.indent);
            }
            BlockValue::Paragraph(..) => {
                self.close_next =
                    force || strings::is_blank(line) || interrupts_paragraph(line);
                return;
            }
            BlockValue::CodeBlock(ref ncb) => {
                if ncb.fenced {
                    self.close_next =
                        scanners::close_code_fence(line, ncb.fence_char, ncb.fence_length);
                    if force {
                        self.closed = true;
                    }
                } else {
                    self.close_next = force
                        || (!strings::is_blank(line) && strings::first_nonspace(line) <= 3);
                }
                return;
            }
            BlockValue::Heading(..) | BlockValue::ThematicBreak => {
                self.close_next = true;
                return;
            }
        }
        let stripped = strip_line(self, line);
        let force_children = self.close_next;
        for child in &mut self.children {
            if !child.closed {
                child.close_check(&stripped, line_number, force_children);
            }
        }
    }

    /// Appends a content line.  Closed blocks never change.
    fn add_line(&mut self, line: &str, column_offset: usize, lazy: bool) {
        if self.closed {
            return;
        }
        match self.value {
            BlockValue::Paragraph(ref mut np) => {
                if scanners::setext_heading_line(line).is_some()
                    && !self.raw_lines.is_empty()
                    && !lazy
                {
                    np.setext = true;
                    self.closed = true;
                    self.raw_lines.push(line.to_string());
                } else if strings::is_blank(line) {
                    self.closed = true;
                } else {
                    self.raw_lines.push(strings::trim_space_tab(line).to_string());
                }
            }
            BlockValue::CodeBlock(ref ncb) if ncb.fenced => {
                let expanded =
                    strings::expand_tabs(line, ncb.fence_offset as isize, column_offset);
                if expanded.chars().take(ncb.fence_offset).all(|c| c == ' ') {
                    self.raw_lines
                        .push(strings::skip_chars(&expanded, ncb.fence_offset).to_string());
                } else {
                    self.raw_lines
                        .push(expanded.trim_start_matches(' ').to_string());
                }
            }
            BlockValue::CodeBlock(..) => {
                let expanded = strings::expand_tabs(line, 4, column_offset);
                if !strings::is_blank(&expanded) || strings::char_len(&expanded) > 4 {
                    self.raw_lines
                        .push(strings::skip_chars(&expanded, 4).to_string());
                } else {
                    self.raw_lines
                        .push(strings::trim_space_tab(&expanded).to_string());
                }
            }
            _ => self.raw_lines.push(line.to_string()),
        }
    }
}

/// Removes the block's own marker or indent from a line before its children see it.
fn strip_line(block: &Block, line: &str) -> String {
    match block.value {
        BlockValue::BlockQuote => match scanners::block_quote_prefix(line) {
            Some(offset) => line[offset..].to_string(),
            None => line.to_string(),
        },
        BlockValue::List(ref nl) => strings::skip_chars(line, nl.marker_offset).to_string(),
        BlockValue::Item(ref ni) => {
            // Never strip into the terminator of a short line.
            let cut = match line.find('\n') {
                Some(at) => ni.indent.min(strings::char_len(&line[..at])),
                None => ni.indent,
            };
            strings::skip_chars(line, cut).to_string()
        }
        _ => line.to_string(),
    }
}

/// Walks the chain of last open children, stripping each container's marker; `path`
/// receives the child indices and the return value is the fully stripped remainder.
fn last_open_path(block: &Block, line: &str, path: &mut Vec<usize>) -> String {
    let cur = strip_line(block, line);
    match block
        .children
        .iter()
        .enumerate()
        .rev()
        .find(|(_, child)| child.is_open())
    {
        Some((i, child)) => {
            path.push(i);
            last_open_path(child, &cur, path)
        }
        None => cur,
    }
}

/// Path to the most recently created block, open or not.
fn rightmost_path(block: &Block) -> Vec<usize> {
    let mut path = Vec::new();
    let mut cur = block;
    while !cur.children.is_empty() {
        let i = cur.children.len() - 1;
        path.push(i);
        cur = &cur.children[i];
    }
    path
}

/// Path to the innermost open list, if any.
fn innermost_open_list(document: &Block) -> Option<Vec<usize>> {
    fn walk(block: &Block, path: &mut Vec<usize>, found: &mut Option<Vec<usize>>) {
        if matches!(block.value, BlockValue::List(..)) && block.is_open() {
            *found = Some(path.clone());
        }
        for (i, child) in block.children.iter().enumerate() {
            if !child.closed {
                path.push(i);
                walk(child, path, found);
                path.pop();
            }
        }
    }
    let mut path = Vec::new();
    let mut found = None;
    walk(document, &mut path, &mut found);
    found
}

fn block_at<'a>(mut block: &'a Block, path: &[usize]) -> &'a Block {
    for &i in path {
        block = &block.children[i];
    }
    block
}

fn block_at_mut<'a>(mut block: &'a mut Block, path: &[usize]) -> &'a mut Block {
    for &i in path {
        block = &mut block.children[i];
    }
    block
}

/// Whether a line at the list's own level ends it: dedented actual content that is not a
/// new item carrying the list's own marker.
fn list_ends(nl: &NodeList, line: &str) -> bool {
    if strings::is_blank(line) {
        return false;
    }
    if strings::first_nonspace(line) >= nl.marker_offset.max(1) {
        return false;
    }
    !list_continues_item(nl, line)
}

fn list_continues_item(nl: &NodeList, line: &str) -> bool {
    match nl.list_type {
        ListType::Bullet => scanners::bullet_list_start(line)
            .map_or(false, |m| m.bullet_char == nl.bullet_char),
        ListType::Ordered => scanners::ordered_list_start(line)
            .map_or(false, |m| m.delimiter == nl.delimiter),
    }
}

/// Whether the line begins a block that may interrupt a paragraph.  An ordered list only
/// interrupts when it starts at 1; a thematic break only when it cannot be read as a setext
/// underline.
fn interrupts_paragraph(line: &str) -> bool {
    (scanners::thematic_break(line) && scanners::setext_heading_line(line).is_none())
        || scanners::atx_heading_start(line).is_some()
        || scanners::open_code_fence(line).is_some()
        || scanners::block_quote_start(line)
        || scanners::bullet_list_start(line).is_some()
        || scanners::ordered_list_start(line).map_or(false, |nl| nl.start == 1)
}

/// The block start ladder: returns the block beginning on this line, if any.  First match
/// wins; order carries the grammar's ambiguity decisions.
fn new_block(
    last_open: &Block,
    line: &str,
    line_number: usize,
    last: &Block,
    column_offset: usize,
) -> Option<Block> {
    // Code blocks swallow everything until they close.
    if matches!(last_open.value, BlockValue::CodeBlock(..)) {
        return None;
    }

    if let Some((level, content_start)) = scanners::atx_heading_start(line) {
        return Some(make_heading(line, level, content_start));
    }

    if scanners::thematic_break(line) {
        if matches!(last_open.value, BlockValue::Paragraph(..))
            && scanners::setext_heading_line(line).is_some()
        {
            // The open paragraph absorbs this as a setext underline instead.
            return None;
        }
        return Some(Block::new(BlockValue::ThematicBreak));
    }

    let last_is_open_paragraph =
        matches!(last.value, BlockValue::Paragraph(..)) && !last.closed;
    if scanners::indented_code_start(line)
        && !matches!(last_open.value, BlockValue::Paragraph(..))
        && !last_is_open_paragraph
        && !item_starts(last_open, line)
    {
        let mut block = Block::new(BlockValue::CodeBlock(NodeCodeBlock::default()));
        block.add_line(line, column_offset, false);
        return Some(block);
    }

    if let Some(ncb) = scanners::open_code_fence(line) {
        return Some(Block::new(BlockValue::CodeBlock(ncb)));
    }

    if matches!(last_open.value, BlockValue::List(..)) {
        if let Some((marker, content_blank)) = scanners::list_item_marker(line) {
            let indent = strings::list_item_indent(marker, content_blank, column_offset);
            return Some(Block::new(BlockValue::Item(NodeItem {
                indent,
                start_line: line_number,
            })));
        }
    }

    if let Some(nl) = scanners::ordered_list_start(line) {
        // Interrupting a paragraph takes a list starting at 1.
        if !(matches!(last_open.value, BlockValue::Paragraph(..)) && nl.start != 1) {
            return Some(make_list(nl, line, line_number, column_offset));
        }
    }

    if let Some(nl) = scanners::bullet_list_start(line) {
        return Some(make_list(nl, line, line_number, column_offset));
    }

    if scanners::block_quote_start(line) {
        return Some(Block::new(BlockValue::BlockQuote));
    }

    if !matches!(last_open.value, BlockValue::Paragraph(..)) && !strings::is_blank(line) {
        let mut block = Block::new(BlockValue::Paragraph(NodeParagraph::default()));
        block.add_line(line, column_offset, false);
        return Some(block);
    }

    None
}

fn item_starts(last_open: &Block, line: &str) -> bool {
    matches!(last_open.value, BlockValue::List(..)) && scanners::list_item_marker(line).is_some()
}

fn make_heading(line: &str, level: u32, content_start: usize) -> Block {
    let mut content = strings::skip_chars(line, content_start)
        .trim_end_matches(|c| c == '\n' || c == '\r')
        .to_string();
    strings::chop_trailing_hashes(&mut content);
    let content = strings::trim_space_tab(&content).to_string();
    let mut block = Block::new(BlockValue::Heading(NodeHeading { level }));
    block.raw_lines.push(content);
    block
}

/// A new list starts together with its first item; the item's content is handled when the
/// driver loop re-enters with the marker stripped.
fn make_list(nl: NodeList, line: &str, line_number: usize, column_offset: usize) -> Block {
    let mut list = Block::new(BlockValue::List(nl));
    let inner = strings::skip_chars(line, nl.marker_offset);
    let indent = match scanners::list_item_marker(inner) {
        Some((marker, content_blank)) => {
            strings::list_item_indent(marker, content_blank, column_offset + nl.marker_offset)
        }
        None => 2,
    };
    list.children.push(Block::new(BlockValue::Item(NodeItem {
        indent,
        start_line: line_number,
    })));
    list
}
