//! Scan cursor for traversing template source.
//!
//! The cursor owns the scanning position state: the byte offset of the next
//! character, the offset where the item currently being assembled began, and
//! the width of the last decoded character so that exactly one step of
//! backtracking is possible.
//!
//! Unlike a lookahead cursor, this one is built around `next`/`backup`: a
//! scanner consumes a character, inspects it, and puts it back when it
//! belongs to the next item. Only one level of backup is supported; calling
//! [`Cursor::backup`] twice without an intervening [`Cursor::next`] is a
//! logic error.

use std::sync::Arc;

/// A cursor over template source text.
///
/// The input is shared (`Arc<str>`) because the consumer side of the lexer
/// keeps a reference to the same text for line-number diagnostics while the
/// cursor lives on the scanning thread.
///
/// # Example
///
/// ```
/// use weft_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.next(), Some('a'));
/// cursor.backup();
/// assert_eq!(cursor.next(), Some('a'));
/// assert_eq!(cursor.next(), Some('b'));
/// assert_eq!(cursor.next(), None);
/// ```
pub struct Cursor {
    /// The full source text, immutable for the cursor's lifetime.
    input: Arc<str>,

    /// Byte offset of the next character to decode.
    pos: usize,

    /// Byte offset where the pending item began.
    start: usize,

    /// Byte width of the most recently decoded character (0 at end of input).
    last_width: usize,
}

impl Cursor {
    /// Creates a new cursor over the given source text.
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
            start: 0,
            last_width: 0,
        }
    }

    /// Decodes and consumes the next character.
    ///
    /// Returns `None` once the input is exhausted. The decoded width is
    /// recorded so a subsequent [`Cursor::backup`] can undo the step; at end
    /// of input the recorded width is zero, making `backup` a no-op.
    #[inline]
    pub fn next(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                self.last_width = c.len_utf8();
                self.pos += self.last_width;
                Some(c)
            }
            None => {
                self.last_width = 0;
                None
            }
        }
    }

    /// Looks at the next character without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        let c = self.next();
        self.backup();
        c
    }

    /// Rewinds by the width of the last decoded character.
    ///
    /// Only one level of backup is guaranteed correct.
    #[inline]
    pub fn backup(&mut self) {
        self.pos -= self.last_width;
    }

    /// Consumes the next character if it is in `valid`.
    pub fn accept(&mut self, valid: &str) -> bool {
        match self.next() {
            Some(c) if valid.contains(c) => true,
            Some(_) => {
                self.backup();
                false
            }
            None => false,
        }
    }

    /// Consumes a maximal run of characters from `valid`.
    pub fn accept_run(&mut self, valid: &str) {
        while self.accept(valid) {}
    }

    /// Returns true if the unconsumed input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.input[self.pos..].starts_with(prefix)
    }

    /// Advances past a known byte sequence, e.g. a delimiter already matched
    /// with [`Cursor::starts_with`]. `count` must land on a character
    /// boundary.
    #[inline]
    pub fn skip_bytes(&mut self, count: usize) {
        self.pos += count;
    }

    /// Finds `needle` in the unconsumed input, returning its byte offset
    /// relative to the current position.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.input[self.pos..].find(needle)
    }

    /// The text accumulated since the last emit/ignore.
    #[inline]
    pub fn pending(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    /// Returns true if any input has been consumed since the last
    /// emit/ignore.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pos > self.start
    }

    /// Discards the pending text without emitting it.
    #[inline]
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Byte offset where the pending item began.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns true if the input is exhausted.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}
