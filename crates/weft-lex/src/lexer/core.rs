//! Core lexer implementation.
//!
//! The scanner is a classic state-function design: each state consumes zero
//! or more characters, emits zero or more items, and names the next state.
//! The driving loop runs on a dedicated scanning thread created when the
//! [`Lexer`] is constructed; items cross to the consumer over a rendezvous
//! channel, one at a time.
//!
//! The scanner terminates after exactly one terminal item (`Eof` or
//! `Error`), after which the channel closes. A consumer that drops its
//! [`Lexer`] mid-stream cancels the scanner instead of leaking the thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use weft_util::span::line_at;

use crate::cursor::Cursor;
use crate::handoff::{rendezvous, ItemReceiver, ItemSender, Stopped};
use crate::token::{Item, ItemKind};
use crate::unicode::{is_alphanumeric, is_space};

/// The literal marker opening an action block.
pub const LEFT_DELIM: &str = "<=";
/// The literal marker closing an action block.
pub const RIGHT_DELIM: &str = "=>";
/// The comment-open sequence, valid immediately after the left delimiter.
pub const LEFT_COMMENT: &str = "/*";
/// The comment-close sequence, which must abut the right delimiter.
pub const RIGHT_COMMENT: &str = "*/";

/// The states of the scanning machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Plain text outside any action.
    Text,
    /// At the `<=` marker.
    LeftDelim,
    /// Inside a `/* ... */` comment.
    Comment,
    /// At the `=>` marker.
    RightDelim,
    /// Between the delimiters, dispatching on the next character.
    InsideBlock,
    /// In a run of spaces/tabs inside an action.
    Space,
    /// In an identifier or keyword.
    Identifier,
    /// In a quoted string.
    Quote,
    /// In a numeric literal.
    Number,
}

/// Result of one state step: the next state, `Ok(None)` to terminate
/// normally, or `Err(Stopped)` when the consumer has gone away.
pub(crate) type StepResult = Result<Option<State>, Stopped>;

/// The scanning half of the lexer. Owned exclusively by the scanning
/// thread; nothing else reads or writes this state.
pub(crate) struct Scanner {
    /// Scan position over the input.
    pub(crate) cursor: Cursor,
    /// Item handoff to the consumer.
    out: ItemSender,
    /// Nesting depth of `(` `)` within the current action.
    paren_depth: isize,
    /// Nesting depth of `{` `}` within the current action.
    brace_depth: isize,
}

impl Scanner {
    fn new(input: Arc<str>, out: ItemSender) -> Self {
        Self {
            cursor: Cursor::new(input),
            out,
            paren_depth: 0,
            brace_depth: 0,
        }
    }

    /// Drives the state machine until a state terminates it or the consumer
    /// cancels. Dropping `self.out` afterwards closes the item channel.
    fn run(mut self) {
        let mut state = Some(State::Text);
        while let Some(current) = state {
            state = match self.step(current) {
                Ok(next) => next,
                Err(Stopped) => None,
            };
        }
    }

    fn step(&mut self, state: State) -> StepResult {
        match state {
            State::Text => self.lex_text(),
            State::LeftDelim => self.lex_left_delim(),
            State::Comment => self.lex_comment(),
            State::RightDelim => self.lex_right_delim(),
            State::InsideBlock => self.lex_inside_block(),
            State::Space => self.lex_space(),
            State::Identifier => self.lex_identifier(),
            State::Quote => self.lex_quote(),
            State::Number => self.lex_number(),
        }
    }

    /// Sends an item covering the pending text and resets the item start.
    pub(crate) fn emit(&mut self, kind: ItemKind) -> Result<(), Stopped> {
        let item = Item::new(kind, self.cursor.start(), self.cursor.pending());
        self.cursor.ignore();
        self.out.send(item)
    }

    /// Sends a terminal `Error` item and ends scanning.
    pub(crate) fn errorf(&mut self, message: String) -> StepResult {
        let item = Item::new(ItemKind::Error, self.cursor.start(), message);
        // Delivery failure means the consumer is gone; either way we stop.
        let _ = self.out.send(item);
        Ok(None)
    }

    /// Scans plain text up to the next left delimiter or end of input.
    fn lex_text(&mut self) -> StepResult {
        loop {
            if self.cursor.starts_with(LEFT_DELIM) {
                if self.cursor.has_pending() {
                    self.emit(ItemKind::Text)?;
                }
                return Ok(Some(State::LeftDelim));
            }
            if self.cursor.next().is_none() {
                break;
            }
        }
        if self.cursor.has_pending() {
            self.emit(ItemKind::Text)?;
        }
        self.emit(ItemKind::Eof)?;
        Ok(None)
    }

    /// Consumes the left delimiter; a comment-open immediately after it
    /// routes to comment scanning with the delimiter still pending (so the
    /// whole `<=/*...*/=>` sequence can be discarded together).
    fn lex_left_delim(&mut self) -> StepResult {
        self.cursor.skip_bytes(LEFT_DELIM.len());
        if self.cursor.starts_with(LEFT_COMMENT) {
            return Ok(Some(State::Comment));
        }
        self.emit(ItemKind::LeftDelim)?;
        Ok(Some(State::InsideBlock))
    }

    /// Consumes and emits the right delimiter.
    fn lex_right_delim(&mut self) -> StepResult {
        self.cursor.skip_bytes(RIGHT_DELIM.len());
        self.emit(ItemKind::RightDelim)?;
        Ok(Some(State::Text))
    }

    /// Dispatches on the next character inside an action block.
    ///
    /// The right-delimiter check comes before single-character dispatch so
    /// `=>` is never read as two operators.
    fn lex_inside_block(&mut self) -> StepResult {
        if self.cursor.starts_with(RIGHT_DELIM) {
            return Ok(Some(State::RightDelim));
        }
        let Some(c) = self.cursor.next() else {
            return self.errorf("unclosed action".to_string());
        };
        match c {
            '\n' => self.errorf("unclosed action".to_string()),
            c if is_space(c) => Ok(Some(State::Space)),
            '"' => Ok(Some(State::Quote)),
            '(' => {
                self.emit(ItemKind::LeftParen)?;
                self.paren_depth += 1;
                Ok(Some(State::InsideBlock))
            }
            ')' => {
                // The bracket item is emitted even when unbalanced; the
                // error follows it.
                self.emit(ItemKind::RightParen)?;
                self.paren_depth -= 1;
                if self.paren_depth < 0 {
                    return self.errorf(format!("unexpected closing parenthesis {c:?}"));
                }
                Ok(Some(State::InsideBlock))
            }
            '{' => {
                self.emit(ItemKind::LeftBrace)?;
                self.brace_depth += 1;
                Ok(Some(State::InsideBlock))
            }
            '}' => {
                self.emit(ItemKind::RightBrace)?;
                self.brace_depth -= 1;
                if self.brace_depth < 0 {
                    return self.errorf(format!("unexpected closing brace {c:?}"));
                }
                Ok(Some(State::InsideBlock))
            }
            ':' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.next();
                    self.emit(ItemKind::ColonEqual)?;
                } else {
                    self.emit(ItemKind::Colon)?;
                }
                Ok(Some(State::InsideBlock))
            }
            ',' => {
                self.emit(ItemKind::Comma)?;
                Ok(Some(State::InsideBlock))
            }
            ';' => {
                self.emit(ItemKind::SemiColon)?;
                Ok(Some(State::InsideBlock))
            }
            '&' | '|' | '<' | '>' | '=' => {
                self.emit(ItemKind::Operator)?;
                Ok(Some(State::InsideBlock))
            }
            '+' | '-' | '0'..='9' => {
                self.cursor.backup();
                Ok(Some(State::Number))
            }
            c if is_alphanumeric(c) => {
                self.cursor.backup();
                Ok(Some(State::Identifier))
            }
            c => self.errorf(format!("unrecognized character in action: {c:?}")),
        }
    }

    /// Consumes a maximal run of spaces and tabs.
    fn lex_space(&mut self) -> StepResult {
        while self.cursor.peek().is_some_and(is_space) {
            self.cursor.next();
        }
        self.emit(ItemKind::Space)?;
        Ok(Some(State::InsideBlock))
    }
}

/// A lexer over one template, bound to an immutable input and a name used
/// in diagnostics.
///
/// Construction starts the scanning thread immediately; the scanner does
/// not wait for the first [`Lexer::next_item`] call. Each emitted item
/// blocks the scanner until the consumer takes it, so the scanner can never
/// outrun the consumer.
///
/// A lexer is single-use: after the terminal `Eof` or `Error` item no
/// further items are produced, and there is no rewinding.
///
/// # Example
///
/// ```
/// use weft_lex::{ItemKind, Lexer};
///
/// let mut lexer = Lexer::new("greeting", "Hello, <= name =>!");
/// assert_eq!(lexer.next_item().kind, ItemKind::Text);
/// assert_eq!(lexer.next_item().kind, ItemKind::LeftDelim);
/// ```
pub struct Lexer {
    /// Name used in diagnostics, typically the template file name.
    name: String,
    /// The full source text, shared with the scanning thread.
    input: Arc<str>,
    /// Receiving half of the item handoff.
    items: ItemReceiver,
    /// The scanning thread, joined on drop.
    scanner: Option<JoinHandle<()>>,
    /// Byte position of the most recently received item.
    last_pos: usize,
    /// Set once the terminal item has been yielded by the iterator.
    finished: bool,
}

impl Lexer {
    /// Creates a lexer and starts scanning `input` immediately.
    pub fn new(name: impl Into<String>, input: impl Into<Arc<str>>) -> Self {
        let input: Arc<str> = input.into();
        let (sender, receiver) = rendezvous();
        let scanner_input = Arc::clone(&input);
        let scanner = thread::spawn(move || Scanner::new(scanner_input, sender).run());
        Self {
            name: name.into(),
            input,
            items: receiver,
            scanner: Some(scanner),
            last_pos: 0,
            finished: false,
        }
    }

    /// Blocks until the next item is available.
    ///
    /// After the terminal item has been delivered the channel is closed and
    /// this returns a synthesized `Eof` item at the end of the input, so a
    /// consumer that keeps pulling degrades gracefully instead of
    /// deadlocking.
    pub fn next_item(&mut self) -> Item {
        match self.items.recv() {
            Some(item) => {
                self.last_pos = item.pos;
                item
            }
            None => {
                self.last_pos = self.input.len();
                Item::new(ItemKind::Eof, self.input.len(), "")
            }
        }
    }

    /// Discards all remaining items until the scanner terminates.
    pub fn drain(&mut self) {
        while self.items.recv().is_some() {}
    }

    /// The 1-based line number of the most recently received item.
    ///
    /// Computed on demand by counting newlines; nothing is cached.
    pub fn line_number(&self) -> usize {
        line_at(&self.input, self.last_pos)
    }

    /// The diagnostic name this lexer was built with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full template source.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Iterator for Lexer {
    type Item = Item;

    /// Yields items up to and including a terminal `Error`; a terminal
    /// `Eof` ends iteration without being yielded.
    fn next(&mut self) -> Option<Item> {
        if self.finished {
            return None;
        }
        let item = self.next_item();
        match item.kind {
            ItemKind::Eof => {
                self.finished = true;
                None
            }
            ItemKind::Error => {
                self.finished = true;
                Some(item)
            }
            _ => Some(item),
        }
    }
}

impl Drop for Lexer {
    /// Cancels the scanner if it is still running and joins the thread, so
    /// a consumer that stops reading early does not leak it.
    fn drop(&mut self) {
        self.items.hang_up();
        if let Some(scanner) = self.scanner.take() {
            let _ = scanner.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("t", "");
        let item = lexer.next_item();
        assert_eq!(item.kind, ItemKind::Eof);
        assert_eq!(item.pos, 0);
    }

    #[test]
    fn test_text_only() {
        let mut lexer = Lexer::new("t", "just some text");
        let item = lexer.next_item();
        assert_eq!(item.kind, ItemKind::Text);
        assert_eq!(item.text, "just some text");
        assert_eq!(lexer.next_item().kind, ItemKind::Eof);
    }

    #[test]
    fn test_next_item_after_terminal_returns_eof() {
        let mut lexer = Lexer::new("t", "abc");
        lexer.next_item(); // Text
        lexer.next_item(); // Eof
        let item = lexer.next_item();
        assert_eq!(item.kind, ItemKind::Eof);
        assert_eq!(item.pos, 3);
        assert_eq!(lexer.next_item().kind, ItemKind::Eof);
    }

    #[test]
    fn test_item_positions() {
        let mut lexer = Lexer::new("t", "ab<=if=>");
        assert_eq!(lexer.next_item().pos, 0); // Text "ab"
        assert_eq!(lexer.next_item().pos, 2); // LeftDelim
        assert_eq!(lexer.next_item().pos, 4); // If
        assert_eq!(lexer.next_item().pos, 6); // RightDelim
        assert_eq!(lexer.next_item().pos, 8); // Eof
    }

    #[test]
    fn test_line_number_tracks_last_item() {
        let mut lexer = Lexer::new("t", "a\nb\n<=if=>");
        assert_eq!(lexer.line_number(), 1);
        lexer.next_item(); // Text "a\nb\n" at pos 0
        assert_eq!(lexer.line_number(), 1);
        lexer.next_item(); // LeftDelim at pos 4
        assert_eq!(lexer.line_number(), 3);
    }

    #[test]
    fn test_drop_mid_stream_does_not_hang() {
        let source = "<=a b c d e f g=>".repeat(16);
        let mut lexer = Lexer::new("t", source);
        lexer.next_item();
        lexer.next_item();
        drop(lexer);
    }

    #[test]
    fn test_drop_without_reading_does_not_hang() {
        let lexer = Lexer::new("t", "<=a b c=>");
        drop(lexer);
    }

    #[test]
    fn test_drain() {
        let mut lexer = Lexer::new("t", "x<=func y=>z");
        lexer.next_item();
        lexer.drain();
        assert_eq!(lexer.next_item().kind, ItemKind::Eof);
    }

    #[test]
    fn test_iterator_stops_at_eof() {
        let lexer = Lexer::new("t", "<=if=>");
        let kinds: Vec<ItemKind> = lexer.map(|item| item.kind).collect();
        assert_eq!(
            kinds,
            vec![ItemKind::LeftDelim, ItemKind::If, ItemKind::RightDelim]
        );
    }

    #[test]
    fn test_iterator_yields_terminal_error() {
        let lexer = Lexer::new("t", "<=/*x");
        let kinds: Vec<ItemKind> = lexer.map(|item| item.kind).collect();
        assert_eq!(kinds, vec![ItemKind::Error]);
    }

    #[test]
    fn test_name() {
        let lexer = Lexer::new("page.weft", "");
        assert_eq!(lexer.name(), "page.weft");
    }
}
