//! Streaming lexer for weft templates.
//!
//! A template is plain text with embedded action blocks delimited by `<=`
//! and `=>`. The lexer scans the input on a background thread and hands
//! items to the consumer one at a time over a synchronous channel, so
//! scanning proceeds in lock-step with consumption.
//!
//! Every scan produces exactly one terminal item, either [`ItemKind::Eof`]
//! for well-formed input or [`ItemKind::Error`] carrying a message, after
//! which the stream is exhausted.
//!
//! # Example
//!
//! ```
//! use weft_lex::{ItemKind, Lexer};
//!
//! let lexer = Lexer::new("demo", "Total: <= count =>");
//! let kinds: Vec<ItemKind> = lexer.map(|item| item.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         ItemKind::Text,
//!         ItemKind::LeftDelim,
//!         ItemKind::Space,
//!         ItemKind::Identifier,
//!         ItemKind::Space,
//!         ItemKind::RightDelim,
//!     ]
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
#[cfg(test)]
mod edge_cases;
mod handoff;
pub mod lexer;
pub mod token;
pub mod unicode;

pub use lexer::{Lexer, LEFT_COMMENT, LEFT_DELIM, RIGHT_COMMENT, RIGHT_DELIM};
pub use token::{keyword_from_ident, Item, ItemKind};
