/// Character-level source iterator for the docscript lexer.
///
/// The cursor wraps a source string and provides character-by-character
/// iteration with byte-offset position tracking. All positions are byte
/// offsets into the original UTF-8 source text.
pub struct Cursor<'src> {
    source: &'src str,
    pos: u32,
    chars: std::str::Chars<'src>,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at the start of the source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            chars: source.chars(),
        }
    }

    /// Look at the current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Look `n` characters ahead without consuming anything. `peek_nth(0)`
    /// is the same as [`Cursor::peek`].
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n)
    }

    /// Consume the current character and advance the position.
    ///
    /// Returns the consumed character, or `None` if at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos += c.len_utf8() as u32;
        Some(c)
    }

    /// Consume the current character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Current byte position in the source text.
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Whether there are no more characters to consume.
    pub fn is_eof(&self) -> bool {
        self.peek().is_none()
    }

    /// Advance while the predicate holds for the current character.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if predicate(c) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Extract a slice of the source text by byte offsets.
    ///
    /// # Panics
    ///
    /// Panics if start or end are out of bounds or not on UTF-8 boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'src str {
        &self.source[start as usize..end as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_nth_looks_ahead_without_consuming() {
        let cursor = Cursor::new("===");
        assert_eq!(cursor.peek_nth(0), Some('='));
        assert_eq!(cursor.peek_nth(2), Some('='));
        assert_eq!(cursor.peek_nth(3), None);
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn advance_tracks_multibyte_utf8() {
        let mut cursor = Cursor::new("\u{00E9}a");
        assert_eq!(cursor.advance(), Some('\u{00E9}'));
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_eof());
    }

    #[test]
    fn eat_only_consumes_on_match() {
        let mut cursor = Cursor::new("=>");
        assert!(!cursor.eat('>'));
        assert!(cursor.eat('='));
        assert!(cursor.eat('>'));
        assert!(cursor.is_eof());
    }

    #[test]
    fn eat_while_and_slice() {
        let mut cursor = Cursor::new("group(");
        cursor.eat_while(char::is_alphabetic);
        assert_eq!(cursor.pos(), 5);
        assert_eq!(cursor.slice(0, cursor.pos()), "group");
        assert_eq!(cursor.peek(), Some('('));
    }

    #[test]
    fn empty_source() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.peek_nth(1), None);
    }
}
