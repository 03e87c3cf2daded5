//! Token type definitions.
//!
//! A weft template is opaque text with embedded actions between the `<=` and
//! `=>` delimiters. The lexer partitions the source into [`Item`]s: the text
//! between actions, the delimiters themselves, and the tokens of the
//! expression language inside each action.

use std::fmt;

/// The lexical category of an [`Item`].
///
/// The taxonomy is flat and exhaustive; a parser dispatches on it directly.
/// `Error` and `Eof` are terminal: exactly one of them ends every stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ItemKind {
    /// A lexical error; the item text carries the message.
    Error,
    /// End of input.
    Eof,
    /// Plain text outside any action.
    Text,
    /// The `<=` action-open delimiter.
    LeftDelim,
    /// The `=>` action-close delimiter.
    RightDelim,
    /// The `:=` declaration operator.
    ColonEqual,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// A numeric literal (decimal, hex, float, or imaginary).
    Number,
    /// A quoted string literal, quotes included.
    String,
    /// A run of spaces and tabs inside an action.
    Space,
    /// A single-character operator: `&`, `|`, `<`, `>`, or `=`.
    Operator,
    /// A bare `:`.
    Colon,
    /// `,`
    Comma,
    /// `;`
    SemiColon,
    /// The `if` keyword.
    If,
    /// The `else` keyword.
    Else,
    /// The `range` keyword.
    Range,
    /// The `func` keyword.
    Func,
    /// The `nil` keyword.
    Nil,
    /// A complex-number literal such as `1+2i`.
    Complex,
    /// An identifier that is not a keyword.
    Identifier,
    /// The `var` keyword.
    Variable,
    /// The `const` keyword.
    Constant,
    /// The `import` keyword.
    Import,
}

impl ItemKind {
    /// Returns true for kinds produced by the keyword table.
    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            ItemKind::If
                | ItemKind::Else
                | ItemKind::Range
                | ItemKind::Func
                | ItemKind::Nil
                | ItemKind::Variable
                | ItemKind::Constant
                | ItemKind::Import
        )
    }

    /// Returns true for the two terminal kinds.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ItemKind::Eof | ItemKind::Error)
    }
}

/// Look up the keyword kind for an identifier, if it is one.
///
/// # Examples
///
/// ```
/// use weft_lex::token::{keyword_from_ident, ItemKind};
///
/// assert_eq!(keyword_from_ident("func"), Some(ItemKind::Func));
/// assert_eq!(keyword_from_ident("var"), Some(ItemKind::Variable));
/// assert_eq!(keyword_from_ident("funky"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<ItemKind> {
    match ident {
        "if" => Some(ItemKind::If),
        "else" => Some(ItemKind::Else),
        "range" => Some(ItemKind::Range),
        "nil" => Some(ItemKind::Nil),
        "func" => Some(ItemKind::Func),
        "import" => Some(ItemKind::Import),
        "var" => Some(ItemKind::Variable),
        "const" => Some(ItemKind::Constant),
        _ => None,
    }
}

/// A classified, positioned span of template source.
///
/// Items are immutable values: produced once by the scanner, handed to the
/// consumer, never updated. `text` is the exact substring the item covers,
/// except for `Error` items where it is the human-readable message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Item {
    /// Lexical category.
    pub kind: ItemKind,
    /// Byte offset into the input where the item begins.
    pub pos: usize,
    /// Covered substring, or the error message for `Error` items.
    pub text: String,
}

impl Item {
    /// Create a new item.
    pub fn new(kind: ItemKind, pos: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            pos,
            text: text.into(),
        }
    }
}

impl fmt::Display for Item {
    /// Renders an item the way diagnostics print tokens: `EOF` for end of
    /// input, the raw message for errors, `<text>` for keywords, and the
    /// quoted text (truncated past ten characters) for everything else.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemKind::Eof => write!(f, "EOF"),
            ItemKind::Error => write!(f, "{}", self.text),
            k if k.is_keyword() => write!(f, "<{}>", self.text),
            _ => match self.text.char_indices().nth(10) {
                Some((i, _)) => write!(f, "{:?}...", &self.text[..i]),
                None => write!(f, "{:?}", self.text),
            },
        }
    }
}
