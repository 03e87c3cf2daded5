//! Quoted string scanning.

use super::core::{Scanner, State, StepResult};
use crate::token::ItemKind;

impl Scanner {
    /// Scans a double-quoted string. The opening quote has already been
    /// consumed; the emitted text includes both quotes. Backslash escapes
    /// any single character, but neither a newline nor end of input may
    /// appear before the closing quote.
    pub(crate) fn lex_quote(&mut self) -> StepResult {
        loop {
            match self.cursor.next() {
                Some('\\') => {
                    if matches!(self.cursor.next(), Some('\n') | None) {
                        return self.errorf("unterminated quoted string".to_string());
                    }
                }
                Some('\n') | None => {
                    return self.errorf("unterminated quoted string".to_string());
                }
                Some('"') => break,
                Some(_) => {}
            }
        }
        self.emit(ItemKind::String)?;
        Ok(Some(State::InsideBlock))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::ItemKind;
    use crate::Lexer;

    fn first_block_item(input: &str) -> (ItemKind, String) {
        let mut lexer = Lexer::new("t", input);
        lexer.next_item(); // LeftDelim
        let item = lexer.next_item();
        (item.kind, item.text)
    }

    #[test]
    fn test_string() {
        assert_eq!(
            first_block_item("<=\"hello\"=>"),
            (ItemKind::String, "\"hello\"".to_string())
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(
            first_block_item("<=\"\"=>"),
            (ItemKind::String, "\"\"".to_string())
        );
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(
            first_block_item(r#"<="a\"b"=>"#),
            (ItemKind::String, r#""a\"b""#.to_string())
        );
    }

    #[test]
    fn test_escaped_newline_sequence() {
        assert_eq!(
            first_block_item(r#"<="a\nb"=>"#),
            (ItemKind::String, r#""a\nb""#.to_string())
        );
    }

    #[test]
    fn test_unterminated_at_eof() {
        let (kind, text) = first_block_item("<=\"oops");
        assert_eq!(kind, ItemKind::Error);
        assert_eq!(text, "unterminated quoted string");
    }

    #[test]
    fn test_literal_newline_terminates() {
        let (kind, text) = first_block_item("<=\"a\nb\"=>");
        assert_eq!(kind, ItemKind::Error);
        assert_eq!(text, "unterminated quoted string");
    }

    #[test]
    fn test_backslash_at_eof() {
        let (kind, _) = first_block_item("<=\"a\\");
        assert_eq!(kind, ItemKind::Error);
    }
}
