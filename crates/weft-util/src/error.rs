//! Core error types for the weft-util crate.
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for span operations over source text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Span has start > end.
    #[error("invalid span: start {start} > end {end}")]
    Inverted {
        /// Start byte offset of the span.
        start: usize,
        /// End byte offset of the span.
        end: usize,
    },

    /// Span extends past the end of the source text.
    #[error("span out of bounds: source has {source_len} bytes, span is {start}..{end}")]
    OutOfBounds {
        /// Length of the source text in bytes.
        source_len: usize,
        /// Start byte offset of the span.
        start: usize,
        /// End byte offset of the span.
        end: usize,
    },

    /// Span endpoints do not fall on UTF-8 character boundaries.
    #[error("span {start}..{end} does not lie on character boundaries")]
    NotCharBoundary {
        /// Start byte offset of the span.
        start: usize,
        /// End byte offset of the span.
        end: usize,
    },
}

/// Result type alias for span operations.
pub type SpanResult<T> = std::result::Result<T, SpanError>;
