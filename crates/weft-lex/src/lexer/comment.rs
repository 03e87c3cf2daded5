//! Comment scanning.
//!
//! Comments take the form `<=/* ... */=>`: the comment-open must directly
//! follow the left delimiter and the comment-close must directly abut the
//! right delimiter. The whole sequence is dropped from the item stream.

use super::core::{Scanner, State, StepResult, LEFT_COMMENT, RIGHT_COMMENT, RIGHT_DELIM};

impl Scanner {
    /// Scans past a comment, discarding it and its surrounding delimiters.
    ///
    /// On entry the cursor sits just past the left delimiter, which is
    /// still pending; everything from the delimiter through the closing
    /// `=>` is dropped together via `ignore`.
    pub(crate) fn lex_comment(&mut self) -> StepResult {
        self.cursor.skip_bytes(LEFT_COMMENT.len());
        let Some(close) = self.cursor.find(RIGHT_COMMENT) else {
            return self.errorf("unclosed comment".to_string());
        };
        self.cursor.skip_bytes(close + RIGHT_COMMENT.len());
        if !self.cursor.starts_with(RIGHT_DELIM) {
            return self.errorf("comment ends before closing delimiter".to_string());
        }
        self.cursor.skip_bytes(RIGHT_DELIM.len());
        self.cursor.ignore();
        Ok(Some(State::Text))
    }
}
