//! Character cursor over the source buffer.
//!
//! The cursor owns the read position and the line/column it maps to. The
//! position only ever moves forward; running off the end leaves the cursor in
//! a stable end state where `lookahead()` is `None`.

use crate::utils::Span;

/// A forward-only cursor over a source buffer.
///
/// `lookahead` is always the character starting at byte `position`, or
/// `None` once the whole buffer has been consumed.
///
/// ```
/// use lexfront::frontend::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab\nc");
/// assert_eq!(cursor.lookahead(), Some('a'));
/// assert_eq!(cursor.peek(), Some('b'));
/// cursor.advance();
/// cursor.advance();
/// cursor.advance();
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the lookahead character.
    position: usize,

    /// Line of the lookahead character (1-based).
    line: usize,

    /// Column of the lookahead character (1-based, in characters).
    column: usize,

    /// Character at `position`, `None` at end of buffer.
    lookahead: Option<char>,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            lookahead: source.chars().next(),
        }
    }

    /// The character that the next `advance` will consume.
    #[inline]
    pub fn lookahead(&self) -> Option<char> {
        self.lookahead
    }

    /// The character after the lookahead, without consuming anything.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let c = self.lookahead?;
        self.source[self.position + c.len_utf8()..].chars().next()
    }

    /// Consume the lookahead and return it.
    ///
    /// Consuming `\n` moves to column 1 of the next line; any other character
    /// moves one column right. At end of input this is a no-op returning
    /// `None`.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.lookahead?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.lookahead = self.source[self.position..].chars().next();
        Some(c)
    }

    /// Consume characters while `predicate` holds for the lookahead.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.lookahead {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.lookahead.is_none()
    }

    /// Byte offset of the lookahead.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Zero-width span at the lookahead.
    pub fn here(&self) -> Span {
        Span::point(self.position, self.line, self.column)
    }

    /// Source text between two byte offsets previously returned by `position`.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.lookahead(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!((cursor.position(), cursor.line(), cursor.column()), (0, 1, 1));
    }

    #[test]
    fn test_advance_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\n\ncd");
        let mut seen = Vec::new();
        while !cursor.is_at_end() {
            seen.push((cursor.lookahead().unwrap(), cursor.line(), cursor.column()));
            cursor.advance();
        }

        assert_eq!(
            seen,
            vec![
                ('a', 1, 1),
                ('b', 1, 2),
                ('\n', 1, 3),
                ('\n', 2, 1),
                ('c', 3, 1),
                ('d', 3, 2),
            ]
        );
        assert_eq!((cursor.line(), cursor.column()), (3, 3));
    }

    #[test]
    fn test_advance_past_end_is_stable() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.advance(), Some('x'));
        let before = (cursor.position(), cursor.line(), cursor.column());
        for _ in 0..3 {
            assert_eq!(cursor.advance(), None);
        }
        assert_eq!((cursor.position(), cursor.line(), cursor.column()), before);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = Cursor::new("/*");
        assert_eq!(cursor.peek(), Some('*'));
        assert_eq!(cursor.peek(), Some('*'));
        assert_eq!(cursor.lookahead(), Some('/'));
        cursor.advance();
        assert_eq!(cursor.lookahead(), Some('*'));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("é→x");
        assert_eq!(cursor.peek(), Some('→'));
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.lookahead(), Some('x'));
        assert_eq!(cursor.position(), "é→".len());
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_eat_while_and_slice() {
        let mut cursor = Cursor::new("abc123 rest");
        let start = cursor.position();
        cursor.eat_while(|c| c.is_alphanumeric());
        assert_eq!(cursor.slice(start, cursor.position()), "abc123");
        assert_eq!(cursor.lookahead(), Some(' '));
        assert_eq!(cursor.here(), Span::point(6, 1, 7));
    }
}
