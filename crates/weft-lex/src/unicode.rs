//! Character classification helpers.
//!
//! Weft actions allow full Unicode identifiers, so classification goes
//! through `char`'s Unicode-aware predicates rather than ASCII tables.

/// Returns true for in-action whitespace: space or tab.
///
/// Newlines are deliberately excluded; a newline inside an action is an
/// unclosed-action error, not whitespace.
#[inline]
pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Returns true for characters that may appear in an identifier: letters,
/// digits, and underscore.
///
/// # Examples
///
/// ```
/// use weft_lex::unicode::is_alphanumeric;
///
/// assert!(is_alphanumeric('a'));
/// assert!(is_alphanumeric('_'));
/// assert!(is_alphanumeric('λ'));
/// assert!(!is_alphanumeric('+'));
/// ```
#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c.is_numeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_space() {
        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(!is_space('\n'));
        assert!(!is_space('\r'));
        assert!(!is_space('x'));
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric('a'));
        assert!(is_alphanumeric('Z'));
        assert!(is_alphanumeric('0'));
        assert!(is_alphanumeric('_'));
        assert!(is_alphanumeric('é'));
        assert!(!is_alphanumeric('"'));
        assert!(!is_alphanumeric('='));
        assert!(!is_alphanumeric(' '));
    }
}
