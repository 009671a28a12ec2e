//! The inline phase: a fixed pipeline of passes over a sequence of inline nodes.
//!
//! Each pass rewrites `Text` nodes only, replacing them with whatever its scanner produces.
//! Because every non-text kind present at a given pass was made by an earlier pass, no pass
//! descends into children; malformed constructs simply stay literal text.

use smallvec::SmallVec;

use crate::nodes::Inline;
use crate::scanners;

/// Resolves a leaf block's raw text into inline nodes.
pub fn parse(text: &str) -> Vec<Inline> {
    let mut seq = vec![Inline::Text(text.to_string())];
    seq = apply(seq, scan_uri_autolinks);
    seq = apply(seq, scan_email_autolinks);
    seq = apply(seq, scan_code_spans);
    seq = apply(seq, scan_emphasis);
    seq = apply(seq, scan_line_breaks);
    seq = apply(seq, unescape_text);
    seq
}

fn apply(seq: Vec<Inline>, pass: fn(&str) -> Vec<Inline>) -> Vec<Inline> {
    let mut out = Vec::with_capacity(seq.len());
    for node in seq {
        match node {
            Inline::Text(s) => out.extend(pass(&s)),
            other => out.push(other),
        }
    }
    out
}

fn push_text(out: &mut Vec<Inline>, s: &str) {
    if !s.is_empty() {
        out.push(Inline::Text(s.to_string()));
    }
}

/// `<scheme:...>` with no whitespace or angle brackets in the body.
fn scan_uri_autolinks(text: &str) -> Vec<Inline> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' {
            if let Some(len) = scanners::autolink_uri(&text[i + 1..]) {
                push_text(&mut out, &text[start..i]);
                out.push(Inline::Autolink(text[i + 1..i + len].to_string()));
                i += len + 1;
                start = i;
                continue;
            }
        }
        i += 1;
    }
    push_text(&mut out, &text[start..]);
    out
}

/// `<local@domain>` per the GFM address syntax.
fn scan_email_autolinks(text: &str) -> Vec<Inline> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' {
            if let Some(len) = scanners::autolink_email(&text[i + 1..]) {
                push_text(&mut out, &text[start..i]);
                out.push(Inline::EmailAutolink(text[i + 1..i + len].to_string()));
                i += len + 1;
                start = i;
                continue;
            }
        }
        i += 1;
    }
    push_text(&mut out, &text[start..]);
    out
}

/// The shortest balanced pair of equal-length backtick runs.  An unclosed run stays
/// literal.
fn scan_code_spans(text: &str) -> Vec<Inline> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }
        let open_len = run_length(bytes, i);
        let mut j = i + open_len;
        let mut close = None;
        while j < bytes.len() {
            if bytes[j] == b'`' {
                let len = run_length(bytes, j);
                if len == open_len {
                    close = Some(j);
                    break;
                }
                j += len;
            } else {
                j += 1;
            }
        }
        match close {
            Some(close_start) => {
                push_text(&mut out, &text[start..i]);
                out.push(Inline::Code(vec![Inline::Text(
                    text[i + open_len..close_start].to_string(),
                )]));
                i = close_start + open_len;
                start = i;
            }
            None => i += open_len,
        }
    }
    push_text(&mut out, &text[start..]);
    out
}

fn run_length(bytes: &[u8], at: usize) -> usize {
    bytes[at..].iter().take_while(|&&b| b == bytes[at]).count()
}

/// One entry per delimiter run.  `position` indexes the slot holding the run's literal
/// text.
#[derive(Debug)]
struct Delimiter {
    delim_char: u8,
    length: usize,
    can_open: bool,
    can_close: bool,
    active: bool,
    position: usize,
}

/// A tokenized piece of the text under emphasis resolution.  Matched pieces migrate into
/// emphasis nodes, leaving their slots empty.
enum Slot {
    Text(String),
    Node(Inline),
    Empty,
}

/// Delimiter-run emphasis resolution.
fn scan_emphasis(text: &str) -> Vec<Inline> {
    let (mut slots, mut delims) = tokenize(text);
    process_emphasis(&mut slots, &mut delims);
    let mut out = Vec::new();
    for slot in slots {
        match slot {
            Slot::Text(s) => push_text(&mut out, &s),
            Slot::Node(node) => out.push(node),
            Slot::Empty => {}
        }
    }
    out
}

fn tokenize(text: &str) -> (Vec<Slot>, SmallVec<[Delimiter; 8]>) {
    let chars: Vec<char> = text.chars().collect();
    let mut slots = Vec::new();
    let mut delims: SmallVec<[Delimiter; 8]> = SmallVec::new();
    let mut plain = String::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            c @ ('*' | '_') => {
                let mut length = 1;
                while i + length < chars.len() && chars[i + length] == c {
                    length += 1;
                }
                let prev = if i == 0 { None } else { Some(chars[i - 1]) };
                let next = chars.get(i + length).copied();
                let (can_open, can_close) = flanking(c, prev, next);
                flush(&mut slots, &mut plain);
                delims.push(Delimiter {
                    delim_char: c as u8,
                    length,
                    can_open,
                    can_close,
                    active: true,
                    position: slots.len(),
                });
                slots.push(Slot::Text(std::iter::repeat(c).take(length).collect()));
                i += length;
            }
            '!' if chars.get(i + 1) == Some(&'[') => {
                flush(&mut slots, &mut plain);
                delims.push(bracket(b'!', slots.len()));
                slots.push(Slot::Text("![".to_string()));
                i += 2;
            }
            '[' => {
                flush(&mut slots, &mut plain);
                delims.push(bracket(b'[', slots.len()));
                slots.push(Slot::Text("[".to_string()));
                i += 1;
            }
            ']' => {
                match look_for_link_or_img(&mut delims) {
                    Some(node) => {
                        flush(&mut slots, &mut plain);
                        slots.push(Slot::Node(node));
                    }
                    None => plain.push(']'),
                }
                i += 1;
            }
            c => {
                plain.push(c);
                i += 1;
            }
        }
    }
    flush(&mut slots, &mut plain);
    (slots, delims)
}

fn flush(slots: &mut Vec<Slot>, plain: &mut String) {
    if !plain.is_empty() {
        slots.push(Slot::Text(std::mem::take(plain)));
    }
}

fn bracket(delim_char: u8, position: usize) -> Delimiter {
    Delimiter {
        delim_char,
        length: 1,
        can_open: true,
        can_close: true,
        active: true,
        position,
    }
}

/// Extension point for link and image references: bracket runs are kept on the delimiter
/// stack, but nothing resolves them yet.
// TODO: implement the CommonMark link resolution algorithm over the bracket delimiters.
fn look_for_link_or_img(_delims: &mut SmallVec<[Delimiter; 8]>) -> Option<Inline> {
    None
}

/// Whether a run may open or close emphasis, from the characters around it.  `_` follows
/// the same rules as `*` but never opens inside a word.
fn flanking(c: char, prev: Option<char>, next: Option<char>) -> (bool, bool) {
    let mut can_open = prev.map_or(true, |p| !(p.is_alphanumeric() || p == c))
        && next.map_or(false, |n| !n.is_whitespace());
    let can_close = prev.map_or(false, |p| !p.is_whitespace())
        && next.map_or(true, |n| !(n.is_alphanumeric() || n == c));
    if c == '_'
        && prev.map_or(false, |p| p.is_alphanumeric())
        && next.map_or(false, |n| n.is_alphanumeric())
    {
        can_open = false;
    }
    (can_open, can_close)
}

/// Walks the closers left to right, pairing each with its nearest eligible opener until
/// the closer is spent.  Everything strictly between a matched pair is deactivated; what
/// never matches stays literal.
fn process_emphasis(slots: &mut Vec<Slot>, delims: &mut [Delimiter]) {
    // No opener for this kind exists below the recorded index; keeps repeated misses from
    // rescanning the whole stack.
    let mut openers_bottom = [0usize; 2];
    for c_idx in 0..delims.len() {
        let bottom_slot = match delims[c_idx].delim_char {
            b'*' => 0,
            b'_' => 1,
            _ => continue,
        };
        if !delims[c_idx].active || !delims[c_idx].can_close {
            continue;
        }
        while delims[c_idx].length > 0 {
            let mut opener = None;
            let mut o_idx = c_idx;
            while o_idx > openers_bottom[bottom_slot] {
                o_idx -= 1;
                let d = &delims[o_idx];
                if d.delim_char == delims[c_idx].delim_char
                    && d.active
                    && d.can_open
                    && d.length > 0
                {
                    opener = Some(o_idx);
                    break;
                }
            }
            let o_idx = match opener {
                Some(found) => found,
                None => {
                    openers_bottom[bottom_slot] = c_idx;
                    break;
                }
            };

            let size = if delims[c_idx].length >= 2 && delims[o_idx].length >= 2 {
                2
            } else {
                1
            };
            let opos = delims[o_idx].position;
            let cpos = delims[c_idx].position;
            truncate_suffix(&mut slots[opos], size);
            drop_prefix(&mut slots[cpos], size);
            let mut children = Vec::new();
            for slot in &mut slots[opos + 1..cpos] {
                match std::mem::replace(slot, Slot::Empty) {
                    Slot::Text(s) => {
                        if !s.is_empty() {
                            children.push(Inline::Text(s));
                        }
                    }
                    Slot::Node(node) => children.push(node),
                    Slot::Empty => {}
                }
            }
            slots[opos + 1] = Slot::Node(Inline::Emph {
                strong: size == 2,
                children,
            });
            delims[o_idx].length -= size;
            delims[c_idx].length -= size;
            for d in &mut delims[o_idx + 1..c_idx] {
                d.active = false;
            }
        }
    }
}

fn truncate_suffix(slot: &mut Slot, n: usize) {
    if let Slot::Text(s) = slot {
        let len = s.len().saturating_sub(n);
        s.truncate(len);
    }
}

fn drop_prefix(slot: &mut Slot, n: usize) {
    if let Slot::Text(s) = slot {
        s.drain(..n.min(s.len()));
    }
}

/// Hard breaks from trailing spaces, a backslash or a tab before the terminator; every
/// other terminator is a soft break.
fn scan_line_breaks(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(at) = rest.find('\n') {
        let seg = &rest[..at];
        if seg.ends_with("  ") {
            push_text(&mut out, seg.trim_end_matches(' '));
            out.push(Inline::LineBreak);
        } else if seg.ends_with('\\') {
            push_text(&mut out, seg[..seg.len() - 1].trim_end_matches(' '));
            out.push(Inline::LineBreak);
        } else if seg.ends_with('\t') {
            push_text(&mut out, seg.trim_end_matches(|c| c == '\t' || c == ' '));
            out.push(Inline::LineBreak);
        } else {
            push_text(&mut out, seg);
            out.push(Inline::SoftBreak);
        }
        rest = &rest[at + 1..];
    }
    push_text(&mut out, rest);
    out
}

/// `\x` becomes literal `x` for ASCII punctuation.
fn unescape_text(text: &str) -> Vec<Inline> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_punctuation() {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    let mut nodes = Vec::new();
    push_text(&mut nodes, &out);
    nodes
}
