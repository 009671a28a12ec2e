//! The GFM document tree.

/// The core block node enum.
#[derive(Debug, Clone)]
pub enum BlockValue {
    /// The root of every document.  Contains **blocks**.
    Document,

    /// **Block**. A [block quote](https://github.github.com/gfm/#block-quotes).  Contains other
    /// **blocks**.
    ///
    /// ``` md
    /// > A block quote.
    /// ```
    BlockQuote,

    /// **Block**.  A [list](https://github.github.com/gfm/#lists).  Contains
    /// [list items](https://github.github.com/gfm/#list-items).
    ///
    /// ``` md
    /// * An unordered list
    /// * Another item
    ///
    /// 1. An ordered list
    /// 2. Another item
    /// ```
    List(NodeList),

    /// **Block**.  A [list item](https://github.github.com/gfm/#list-items).  Contains other
    /// **blocks**.
    Item(NodeItem),

    /// **Block**. A code block; may be [fenced](https://github.github.com/gfm/#fenced-code-blocks)
    /// or [indented](https://github.github.com/gfm/#indented-code-blocks).  Contains raw text
    /// which is not parsed as Markdown, although it is HTML escaped.
    CodeBlock(NodeCodeBlock),

    /// **Block**. A [paragraph](https://github.github.com/gfm/#paragraphs).  Contains raw text
    /// resolved to **inlines** at render time.  A paragraph that absorbed a setext underline
    /// renders as a heading instead.
    Paragraph(NodeParagraph),

    /// **Block**. An [ATX heading](https://github.github.com/gfm/#atx-headings).
    Heading(NodeHeading),

    /// **Block**. A [thematic break](https://github.github.com/gfm/#thematic-breaks).  Has no
    /// children.
    ThematicBreak,
}

/// The type of list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListType {
    /// A bullet list, i.e. an unordered list.
    Bullet,

    /// An ordered list.
    Ordered,
}

impl Default for ListType {
    fn default() -> ListType {
        ListType::Bullet
    }
}

/// The delimiter for ordered lists, i.e. the character which appears after each number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListDelimType {
    /// A period character `.`.
    Period,

    /// A paren character `)`.
    Paren,
}

impl Default for ListDelimType {
    fn default() -> ListDelimType {
        ListDelimType::Period
    }
}

/// The metadata of a list; the kind of list, the delimiter used and so on.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeList {
    /// The kind of list (bullet (unordered) or ordered).
    pub list_type: ListType,

    /// Number of spaces (0..=3) before the first item's marker.
    pub marker_offset: usize,

    /// For ordered lists, the ordinal the list starts at.
    pub start: usize,

    /// For ordered lists, the delimiter after each number.
    pub delimiter: ListDelimType,

    /// For bullet lists, the character used for each bullet.
    pub bullet_char: u8,

    /// `None` while no blank line has been seen between this list's contents; otherwise the
    /// total child count of its items at the moment the first interior blank was observed.
    /// The list renders [loose](https://github.github.com/gfm/#loose) iff that count is
    /// strictly below the final total.
    pub loose: Option<usize>,
}

/// The metadata of a list item.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeItem {
    /// Columns consumed by the item marker and its padding; continuation lines must be
    /// indented at least this far.  Always at least 2.
    pub indent: usize,

    /// The line the item's marker appeared on.  The marker line never closes its own item.
    pub start_line: usize,
}

/// The metadata and data of a code block (fenced or indented).
#[derive(Default, Debug, Clone)]
pub struct NodeCodeBlock {
    /// Whether the code block is fenced.
    pub fenced: bool,

    /// For fenced code blocks, the fence character itself (`` ` `` or `~`).
    pub fence_char: u8,

    /// For fenced code blocks, the length of the fence.
    pub fence_length: usize,

    /// For fenced code blocks, the number of spaces (0..=3) before the opening fence; the
    /// same amount is stripped from every content line.
    pub fence_offset: usize,

    /// For fenced code blocks, the [info string](https://github.github.com/gfm/#info-string)
    /// after the opening fence, if any.
    pub info: String,
}

/// The metadata of a paragraph.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeParagraph {
    /// Whether the paragraph absorbed a [setext
    /// heading](https://github.github.com/gfm/#setext-headings) underline as its final line.
    pub setext: bool,
}

/// The metadata of an ATX heading.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeHeading {
    /// The level of the heading; from 1 to 6.
    pub level: u32,
}

/// A single node in the document tree: the tagged kind plus the lifecycle state every kind
/// shares.
///
/// A block is created open, may be marked for closing during the close-check pass
/// (`close_next`), and is committed closed by `close_marked`.  A closed block is never
/// mutated again.
#[derive(Debug, Clone)]
pub struct Block {
    /// The node kind and its per-kind state.
    pub value: BlockValue,

    /// Whether the block has been committed closed.
    pub closed: bool,

    /// Whether the current line's close-check marked this block for closing.
    pub close_next: bool,

    /// Content lines accumulated verbatim.  Meaningful for leaf blocks only.
    pub raw_lines: Vec<String>,

    /// Child blocks.  Meaningful for container blocks only.
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(value: BlockValue) -> Block {
        Block {
            value,
            closed: false,
            close_next: false,
            raw_lines: vec![],
            children: vec![],
        }
    }

    /// Whether this block may hold child blocks.
    pub fn is_container(&self) -> bool {
        matches!(
            self.value,
            BlockValue::Document
                | BlockValue::BlockQuote
                | BlockValue::List(..)
                | BlockValue::Item(..)
        )
    }

    /// Open means neither committed closed nor marked to close on commit.
    pub fn is_open(&self) -> bool {
        !self.closed && !self.close_next
    }

    /// Commits every `close_next` mark in the subtree.
    pub fn close_marked(&mut self) {
        if self.close_next {
            self.closed = true;
        }
        for child in &mut self.children {
            if !child.closed {
                child.close_marked();
            }
        }
    }
}

/// A loose list renders each item's content inside its own line block; a tight list renders
/// it inline.  A list is loose when a blank line was seen before its last child landed, or
/// when a nested list swallowed a trailing blank that separates it from further content.
pub fn list_is_loose(block: &Block) -> bool {
    let nl = match block.value {
        BlockValue::List(ref nl) => nl,
        _ => return false,
    };
    let total: usize = block.children.iter().map(|item| item.children.len()).sum();
    let last_item = block.children.len().wrapping_sub(1);
    for (i, item) in block.children.iter().enumerate() {
        let last_child = item.children.len().wrapping_sub(1);
        for (j, child) in item.children.iter().enumerate() {
            if let BlockValue::List(ref inner) = child.value {
                let at_end = i == last_item && j == last_child;
                if inner.loose.is_some() && !list_is_loose(child) && !at_end {
                    // Blank line at the end of the nested list.
                    return true;
                }
            }
        }
    }
    match nl.loose {
        Some(count) => count < total,
        None => false,
    }
}

/// The core inline node enum.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// [Textual content](https://github.github.com/gfm/#textual-content).
    Text(String),

    /// A [code span](https://github.github.com/gfm/#code-spans).  The children hold the raw
    /// span text; it is escaped as a whole when rendered.
    Code(Vec<Inline>),

    /// A [URI autolink](https://github.github.com/gfm/#autolinks).  The text between the
    /// angle brackets serves verbatim as both destination and label.
    Autolink(String),

    /// An [email autolink](https://github.github.com/gfm/#autolinks).  The destination gains
    /// a `mailto:` prefix.
    EmailAutolink(String),

    /// [Emphasised](https://github.github.com/gfm/#emphasis-and-strong-emphasis) text; either
    /// `<em>` or `<strong>`, never both in one node.
    Emph { strong: bool, children: Vec<Inline> },

    /// A [hard line break](https://github.github.com/gfm/#hard-line-breaks).
    LineBreak,

    /// A [soft line break](https://github.github.com/gfm/#soft-line-breaks).
    SoftBreak,
}
