/// Splits `text` into lines, preserving the terminator on every line but the last.  A
/// trailing newline therefore yields a final empty element.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(String::from).collect();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        line.push('\n');
    }
    lines
}

/// Replaces each tab among the first `width` characters of `line` (the whole line when
/// `width < 0`) with 1..=4 spaces, so that the column after the tab is a multiple of 4
/// relative to `column_offset`.  Expansion can push later tabs past the window, in which
/// case they are preserved.
pub fn expand_tabs(line: &str, width: isize, column_offset: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0;
    for c in line.chars() {
        if c == '\t' && (width < 0 || col < width as usize) {
            let fill = 4 - (col + column_offset) % 4;
            for _ in 0..fill {
                out.push(' ');
            }
            col += fill;
        } else {
            out.push(c);
            col += 1;
        }
    }
    out
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Drops the first `n` characters; past-the-end counts yield the empty string.
pub fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

/// Whether the line holds nothing but spaces, tabs and line ends.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c == ' ' || c == '\t' || c == '\n' || c == '\r')
}

/// Index of the first character that is not a space, or the line length.
pub fn first_nonspace(s: &str) -> usize {
    s.chars().take_while(|&c| c == ' ').count()
}

/// Trims spaces and tabs from both ends.  A line terminator shields any spaces before it,
/// so trailing hard-break whitespace survives.
pub fn trim_space_tab(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

/// Removes a closing sequence of two or more `#` from an ATX heading's content, unless the
/// run is escaped, then drops the whitespace around it.
pub fn chop_trailing_hashes(content: &mut String) {
    while content.ends_with(' ') {
        content.pop();
    }
    let hashes = content.chars().rev().take_while(|&c| c == '#').count();
    if hashes >= 2 && !content[..content.len() - hashes].ends_with('\\') {
        content.truncate(content.len() - hashes);
    }
    while content.ends_with(' ') || content.ends_with('\t') {
        content.pop();
    }
}

/// The item marker's column width at `column_offset`, measured over `marker` (leading
/// spaces, the marker itself and its padding).  An empty item counts the marker plus one
/// space, as does a marker padded with five or more spaces (the rest is content).  Never
/// below 2.
pub fn list_item_indent(marker: &str, content_blank: bool, column_offset: usize) -> usize {
    let expanded = expand_tabs(marker, -1, column_offset);
    let expanded = expanded.trim_end_matches('\n');
    let trailing = expanded.chars().rev().take_while(|&c| c == ' ').count();
    let mut width = char_len(expanded);
    if content_blank || trailing >= 5 {
        width = width - trailing + 1;
    }
    width.max(2)
}
