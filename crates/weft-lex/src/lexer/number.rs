//! Numeric literal scanning.
//!
//! Accepts decimal and hexadecimal integers, floats with fraction and
//! exponent parts, imaginary literals with a trailing `i`, and complex
//! numbers written as a sum of two such literals (`1+2i`).

use super::core::{Scanner, State, StepResult};
use crate::token::ItemKind;
use crate::unicode::is_alphanumeric;

impl Scanner {
    /// Scans a number. The leading sign, if any, is part of the literal.
    ///
    /// A complex literal is two back-to-back numbers where the second
    /// carries the imaginary suffix, as in `1+2i`. Whether plain or
    /// complex, the literal must not run into a letter or digit.
    pub(crate) fn lex_number(&mut self) -> StepResult {
        if !self.scan_number() {
            let pending = self.cursor.pending().to_string();
            return self.errorf(format!("bad number syntax: {pending:?}"));
        }
        let kind = if matches!(self.cursor.peek(), Some('+' | '-')) {
            // Complex: 1+2i. The second half must be imaginary.
            if !self.scan_number() || !self.cursor.pending().ends_with('i') {
                let pending = self.cursor.pending().to_string();
                return self.errorf(format!("bad number syntax: {pending:?}"));
            }
            ItemKind::Complex
        } else {
            ItemKind::Number
        };
        self.emit(kind)?;
        Ok(Some(State::InsideBlock))
    }

    /// Consumes one numeric literal, returning false if what follows the
    /// digits makes the pending text not a number.
    fn scan_number(&mut self) -> bool {
        self.cursor.accept("+-");
        let mut digits = "0123456789";
        if self.cursor.accept("0") && self.cursor.accept("xX") {
            digits = "0123456789abcdefABCDEF";
        }
        self.cursor.accept_run(digits);
        if self.cursor.accept(".") {
            self.cursor.accept_run(digits);
        }
        if self.cursor.accept("eE") {
            self.cursor.accept("+-");
            self.cursor.accept_run("0123456789");
        }
        // Imaginary suffix.
        self.cursor.accept("i");
        // A letter or digit directly after the literal is malformed; pull
        // it into the pending text so the error message shows it.
        if self.cursor.peek().is_some_and(is_alphanumeric) {
            self.cursor.next();
            return false;
        }
        true
    }
}
