//! Identifier and keyword scanning.

use super::core::{Scanner, State, StepResult};
use crate::token::{keyword_from_ident, ItemKind};
use crate::unicode::is_alphanumeric;

impl Scanner {
    /// Scans a maximal run of letters, digits, and underscores, then emits
    /// either the matching keyword kind or a generic `Identifier`.
    pub(crate) fn lex_identifier(&mut self) -> StepResult {
        loop {
            match self.cursor.next() {
                Some(c) if is_alphanumeric(c) => {}
                _ => {
                    self.cursor.backup();
                    break;
                }
            }
        }
        let kind = keyword_from_ident(self.cursor.pending()).unwrap_or(ItemKind::Identifier);
        self.emit(kind)?;
        Ok(Some(State::InsideBlock))
    }
}
