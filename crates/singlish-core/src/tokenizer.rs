//! Splits raw input into word and separator segments.
//!
//! Concatenating segment text reconstructs the input byte-for-byte.
//! Separators are whitespace runs, the literal line-break markers
//! (`<br>`, `<br/>`) even when glued to a word, and sentence punctuation
//! at a word's edges. Interior punctuation stays inside the word so that
//! URLs (`www.google.com`) and decimal tokens (`7.30`) survive as single
//! units. No boundary is ever inferred inside an unbroken letter run, so
//! unspaced words remain one segment.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Word,
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Byte offset of the segment start in the input.
    pub start: usize,
    /// Byte offset one past the segment end.
    pub end: usize,
    pub kind: SegmentKind,
}

impl Segment {
    fn new(input: &str, start: usize, end: usize, kind: SegmentKind) -> Self {
        Segment {
            text: input[start..end].to_string(),
            start,
            end,
            kind,
        }
    }
}

/// Punctuation split off a word's edges. Interior occurrences are kept.
fn is_edge_punct(c: char) -> bool {
    matches!(c, ',' | '.' | '?' | '!' | ';' | ':')
}

/// Pure function of the input string: the returned segments partition it
/// exactly, with no gaps and no overlaps. Empty input yields no segments.
pub fn tokenize(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut i = 0;
    while i < input.len() {
        let rest = &input[i..];
        let first = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };
        if first.is_whitespace() {
            let len = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            segments.push(Segment::new(input, i, i + len, SegmentKind::Separator));
            i += len;
        } else {
            let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            split_chunk(input, i, i + len, &mut segments);
            i += len;
        }
    }
    segments
}

/// Split a whitespace-free chunk into line-break markers, edge
/// punctuation and the word itself.
fn split_chunk(input: &str, start: usize, end: usize, segments: &mut Vec<Segment>) {
    let mut pos = start;
    while pos < end {
        match find_marker(&input[pos..end]) {
            Some((offset, len)) => {
                if offset > 0 {
                    split_word(input, pos, pos + offset, segments);
                }
                segments.push(Segment::new(
                    input,
                    pos + offset,
                    pos + offset + len,
                    SegmentKind::Separator,
                ));
                pos += offset + len;
            }
            None => {
                split_word(input, pos, end, segments);
                pos = end;
            }
        }
    }
}

/// Locate the first line-break marker in `s`, returning (offset, length).
fn find_marker(s: &str) -> Option<(usize, usize)> {
    let mut search = 0;
    while let Some(found) = s[search..].find("<br") {
        let offset = search + found;
        let tail = &s[offset + 3..];
        if tail.starts_with("/>") {
            return Some((offset, 5));
        }
        if tail.starts_with('>') {
            return Some((offset, 4));
        }
        search = offset + 3;
    }
    None
}

/// Strip edge punctuation runs off a marker-free piece and emit the word.
fn split_word(input: &str, start: usize, end: usize, segments: &mut Vec<Segment>) {
    let piece = &input[start..end];
    let lead = piece
        .find(|c: char| !is_edge_punct(c))
        .unwrap_or(piece.len());
    if lead > 0 {
        segments.push(Segment::new(input, start, start + lead, SegmentKind::Separator));
    }
    if lead == piece.len() {
        return;
    }
    let trail = piece
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_edge_punct(c))
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(piece.len());
    segments.push(Segment::new(input, start + lead, start + trail, SegmentKind::Word));
    if start + trail < end {
        segments.push(Segment::new(input, start + trail, end, SegmentKind::Separator));
    }
}
