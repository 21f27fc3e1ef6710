use std::fmt;

use serde::Serialize;

/// Byte-offset span into source text. Start is inclusive, end is exclusive.
///
/// All positions in docscript are tracked as byte offsets into the original
/// source string. Line/column information is computed on demand via
/// [`LineIndex`] when an error has to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span from byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start ({start}) must be <= end ({end})");
        Self { start, end }
    }
}

/// A human-readable source position: 1-based line, 0-based column.
///
/// Columns count UTF-16 code units from the start of the line, which is the
/// convention JavaScript tooling uses for `loc` information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Whether `c` ends a line: `\n`, `\r`, U+2028 or U+2029.
///
/// A `\r\n` pair is a single line break; callers that walk characters must
/// treat the `\n` after a `\r` as part of the same terminator.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Pre-computed index of line start positions for on-demand location lookup.
///
/// Constructed once per source text, then used to convert byte offsets to
/// [`Location`]s via binary search.
#[derive(Debug)]
pub struct LineIndex<'src> {
    source: &'src str,
    /// Byte offset of the start of each line. The first entry is always 0.
    line_starts: Vec<u32>,
}

impl<'src> LineIndex<'src> {
    /// Build a line index by scanning the source text for line terminators.
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0u32];
        let mut chars = source.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
                line_starts.push((i + 2) as u32);
            } else if is_line_terminator(c) {
                line_starts.push((i + c.len_utf8()) as u32);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a [`Location`].
    ///
    /// Offsets past the end of the source clamp to the end. An offset that
    /// falls inside a multi-byte character counts the partial character.
    pub fn location(&self, offset: u32) -> Location {
        let offset = offset.min(self.source.len() as u32);
        // partition_point returns the index of the first line_start > offset,
        // so the line index is one less than that.
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line_idx] as usize;
        let column = self.source[line_start..]
            .char_indices()
            .take_while(|(i, _)| line_start + i < offset as usize)
            .map(|(_, c)| c.len_utf16() as u32)
            .sum();
        Location {
            line: line_idx as u32 + 1,
            column,
        }
    }
}
