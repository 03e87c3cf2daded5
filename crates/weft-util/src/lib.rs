//! weft-util - Foundation Types for the Weft Template Language
//!
//! This crate provides the small set of shared utilities the weft toolchain
//! is built on: source spans, line/column lookup over template text, and the
//! error types those operations can produce.
//!
//! Weft templates are lexed from a single in-memory string, so there is no
//! file table or source map here; a [`Span`] is a plain byte range and all
//! line/column information is derived on demand from the text itself.
//!
//! # Example
//!
//! ```
//! use weft_util::span::{line_at, Span};
//!
//! let source = "header\n<= func =>\nfooter";
//! assert_eq!(line_at(source, 0), 1);
//! assert_eq!(line_at(source, 8), 2);
//!
//! let span = Span::new(7, 9);
//! assert_eq!(span.text_in(source).unwrap(), "<=");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod span;

// Re-export main types for convenience
pub use error::{SpanError, SpanResult};
pub use span::{column_at, line_at, line_span, Span};
