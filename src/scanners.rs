//! Hand-rolled scanners for the line-level constructs.  Each takes the line as seen by the
//! block in question (already stripped of enclosing container markers) and decides in a
//! single left-to-right pass; no scanner allocates.

use crate::nodes::{ListDelimType, ListType, NodeCodeBlock, NodeList};
use crate::strings;

fn is_line_end(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn is_space_or_tab(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Counts up to `max` leading spaces, returning `None` when more follow.
fn leading_spaces(line: &str, max: usize) -> Option<usize> {
    let n = line.chars().take_while(|&c| c == ' ').count();
    if n <= max {
        Some(n)
    } else {
        None
    }
}

/// A run of three or more of the same `*`, `-` or `_`, interleaved with spaces and tabs,
/// after at most three leading spaces.
pub fn thematic_break(line: &str) -> bool {
    let n = match leading_spaces(line, 3) {
        Some(n) => n,
        None => return false,
    };
    let mut chars = line.chars().skip(n);
    let marker = match chars.next() {
        Some(c @ ('*' | '-' | '_')) => c,
        _ => return false,
    };
    let mut count = 1;
    for c in chars {
        if c == marker {
            count += 1;
        } else if !is_space_or_tab(c) && !is_line_end(c) {
            return false;
        }
    }
    count >= 3
}

/// An opening ATX marker: 1..=6 `#` after at most three leading spaces, followed by a space,
/// a tab or the end of the line.  Returns the level and the content offset (in characters,
/// past the single separator).
pub fn atx_heading_start(line: &str) -> Option<(u32, usize)> {
    let n = leading_spaces(line, 3)?;
    let mut level = 0;
    let mut pos = n;
    let mut chars = line.chars().skip(n).peekable();
    while let Some(&'#') = chars.peek() {
        chars.next();
        level += 1;
        pos += 1;
    }
    if level == 0 || level > 6 {
        return None;
    }
    match chars.next() {
        None => Some((level, pos)),
        Some(c) if is_space_or_tab(c) => Some((level, pos + 1)),
        Some(c) if is_line_end(c) => Some((level, pos)),
        Some(_) => None,
    }
}

pub enum SetextChar {
    Equals,
    Hyphen,
}

/// A run of `=` or `-` after at most three leading spaces, with only spaces to the end of
/// the line.  A single character qualifies.
pub fn setext_heading_line(line: &str) -> Option<SetextChar> {
    let n = leading_spaces(line, 3)?;
    let mut chars = line.chars().skip(n).peekable();
    let marker = match chars.next() {
        Some('=') => SetextChar::Equals,
        Some('-') => SetextChar::Hyphen,
        _ => return None,
    };
    let c = match marker {
        SetextChar::Equals => '=',
        SetextChar::Hyphen => '-',
    };
    while let Some(&next) = chars.peek() {
        if next != c {
            break;
        }
        chars.next();
    }
    for next in chars {
        if next != ' ' && !is_line_end(next) {
            return None;
        }
    }
    Some(marker)
}

/// An indented chunk opening an indented code block: four spaces, or any spaces followed by
/// a tab, with actual content after the indentation.
pub fn indented_code_start(line: &str) -> bool {
    let mut chars = line.chars();
    let mut pos = 0;
    loop {
        match chars.next() {
            Some(' ') => pos += 1,
            Some('\t') => {
                pos = 4;
                break;
            }
            _ => break,
        }
        if pos == 4 {
            break;
        }
    }
    if pos < 4 {
        return false;
    }
    chars.any(|c| !c.is_whitespace())
}

/// An opening code fence: a run of three or more backticks or tildes after at most three
/// leading spaces, with an optional info string.  Backticks in the info string disqualify
/// the whole line.
pub fn open_code_fence(line: &str) -> Option<NodeCodeBlock> {
    let n = leading_spaces(line, 3)?;
    let rest = &line[n..];
    let fence_char = match rest.chars().next() {
        Some(c @ ('`' | '~')) => c,
        _ => return None,
    };
    let fence_length = rest.chars().take_while(|&c| c == fence_char).count();
    if fence_length < 3 {
        return None;
    }
    let info: &str = &rest[fence_length..];
    let info = info.trim_matches(|c: char| is_space_or_tab(c) || is_line_end(c));
    if info.contains('`') {
        return None;
    }
    Some(NodeCodeBlock {
        fenced: true,
        fence_char: fence_char as u8,
        fence_length,
        fence_offset: n,
        info: info.to_string(),
    })
}

/// A closing fence for an open fenced code block: at least as many of the same character,
/// at most three spaces deep, with only spaces to the end of the line.
pub fn close_code_fence(line: &str, fence_char: u8, fence_length: usize) -> bool {
    let n = match leading_spaces(line, 3) {
        Some(n) => n,
        None => return false,
    };
    let mut chars = line.chars().skip(n);
    let mut count = 0;
    let mut trailer = None;
    for c in chars.by_ref() {
        if c == fence_char as char {
            count += 1;
        } else {
            trailer = Some(c);
            break;
        }
    }
    if count < fence_length {
        return false;
    }
    if let Some(c) = trailer {
        if c != ' ' && !is_line_end(c) {
            return false;
        }
    }
    chars.all(|c| c == ' ' || is_line_end(c))
}

/// Whether the line begins a block quote: `>` after at most three leading spaces.
pub fn block_quote_start(line: &str) -> bool {
    block_quote_prefix(line).is_some()
}

/// The byte length of a block quote marker (up to three spaces, `>`, and one optional
/// space), for stripping.
pub fn block_quote_prefix(line: &str) -> Option<usize> {
    let n = leading_spaces(line, 3)?;
    if line[n..].starts_with('>') {
        let mut end = n + 1;
        if line[end..].starts_with(' ') {
            end += 1;
        }
        Some(end)
    } else {
        None
    }
}

/// A bullet list opener: `-`, `+` or `*` after at most three leading spaces, followed by a
/// space, a tab or the end of the line.
pub fn bullet_list_start(line: &str) -> Option<NodeList> {
    let n = leading_spaces(line, 3)?;
    let mut chars = line.chars().skip(n);
    let marker = match chars.next() {
        Some(c @ ('-' | '+' | '*')) => c,
        _ => return None,
    };
    match chars.next() {
        None => {}
        Some(c) if is_space_or_tab(c) || is_line_end(c) => {}
        Some(_) => return None,
    }
    Some(NodeList {
        list_type: ListType::Bullet,
        marker_offset: n,
        bullet_char: marker as u8,
        ..NodeList::default()
    })
}

/// An ordered list opener: 1..=9 digits, `.` or `)`, then a space, a tab or the end of the
/// line, after at most three leading spaces.
pub fn ordered_list_start(line: &str) -> Option<NodeList> {
    let n = leading_spaces(line, 3)?;
    let digits: String = line.chars().skip(n).take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || digits.len() > 9 {
        return None;
    }
    let mut chars = line.chars().skip(n + digits.len());
    let delimiter = match chars.next() {
        Some('.') => ListDelimType::Period,
        Some(')') => ListDelimType::Paren,
        _ => return None,
    };
    match chars.next() {
        None => {}
        Some(c) if is_space_or_tab(c) || is_line_end(c) => {}
        Some(_) => return None,
    }
    Some(NodeList {
        list_type: ListType::Ordered,
        marker_offset: n,
        start: digits.parse().unwrap_or(0),
        delimiter,
        ..NodeList::default()
    })
}

/// A list item marker as seen from inside an open list: any leading spaces, a bullet or
/// ordered marker, and its space/tab padding.  Returns the padded marker text and whether
/// the rest of the line is blank.
pub fn list_item_marker(line: &str) -> Option<(&str, bool)> {
    let spaces = line.chars().take_while(|&c| c == ' ').count();
    let rest = &line[spaces..];
    let marker_len = match rest.chars().next() {
        Some('-') | Some('+') | Some('*') => 1,
        Some(c) if c.is_ascii_digit() => {
            let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
            if digits > 9 {
                return None;
            }
            match rest[digits..].chars().next() {
                Some('.') | Some(')') => digits + 1,
                _ => return None,
            }
        }
        _ => return None,
    };
    let after = &rest[marker_len..];
    let sep = after.chars().next();
    match sep {
        None => {}
        Some(c) if is_space_or_tab(c) || is_line_end(c) => {}
        Some(_) => return None,
    }
    let padding = after.chars().take_while(|&c| is_space_or_tab(c)).count();
    let end = spaces + marker_len + padding;
    let content = &line[end..];
    Some((&line[..end], strings::is_blank(content)))
}

/// A URI autolink body, positioned just past the opening `<`: a scheme, a colon, and any
/// run free of whitespace and angle brackets, up to a closing `>`.  Returns the length
/// consumed including the `>`.
pub fn autolink_uri(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_alphabetic() {
        return None;
    }
    let mut i = 1;
    while i < bytes.len()
        && (bytes[i].is_ascii_alphabetic() || matches!(bytes[i], b'+' | b'.' | b'-'))
    {
        i += 1;
    }
    if i < 2 || i >= bytes.len() || bytes[i] != b':' {
        return None;
    }
    while i < bytes.len() {
        match bytes[i] {
            b'>' => return Some(i + 1),
            b'<' | b' ' | b'\t' | b'\n' | b'\r' => return None,
            _ => i += 1,
        }
    }
    None
}

/// An email autolink body, positioned just past the opening `<`, per the GFM address
/// syntax.  Returns the length consumed including the `>`.
pub fn autolink_email(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len()
        && (bytes[i].is_ascii_alphanumeric()
            || b".!#$%&'*+/=?^_`{|}~-".contains(&bytes[i]))
    {
        i += 1;
    }
    if i == 0 || i >= bytes.len() || bytes[i] != b'@' {
        return None;
    }
    i += 1;
    loop {
        let label_start = i;
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
            i += 1;
        }
        let label = &bytes[label_start..i];
        if label.is_empty()
            || label.len() > 63
            || label[0] == b'-'
            || label[label.len() - 1] == b'-'
        {
            return None;
        }
        match bytes.get(i) {
            Some(&b'.') => i += 1,
            Some(&b'>') => return Some(i + 1),
            _ => return None,
        }
    }
}
