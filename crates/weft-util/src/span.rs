//! Span module - Source location tracking.
//!
//! This module provides a byte-range [`Span`] over template source text plus
//! free functions for deriving line and column information on demand.
//!
//! Line numbers are intentionally not cached anywhere: diagnostics are rare,
//! templates are small, and counting newlines up to a byte offset is cheap
//! compared to keeping positions in sync while scanning.

use crate::error::{SpanError, SpanResult};

/// A byte range into template source text.
///
/// # Examples
///
/// ```
/// use weft_util::span::Span;
///
/// let span = Span::new(10, 20);
/// assert_eq!(span.len(), 10);
/// assert!(span.contains(15));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive).
    pub start: usize,
    /// End byte offset in source (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if this span is empty (start == end).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span contains a byte offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert!(span.contains(10));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Extract the text this span covers, validating the range first.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError`] if the span is inverted, out of bounds, or does
    /// not lie on UTF-8 character boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft_util::span::Span;
    ///
    /// let source = "<= func =>";
    /// assert_eq!(Span::new(3, 7).text_in(source).unwrap(), "func");
    /// assert!(Span::new(3, 99).text_in(source).is_err());
    /// ```
    pub fn text_in<'a>(&self, source: &'a str) -> SpanResult<&'a str> {
        if self.start > self.end {
            return Err(SpanError::Inverted {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > source.len() {
            return Err(SpanError::OutOfBounds {
                source_len: source.len(),
                start: self.start,
                end: self.end,
            });
        }
        source
            .get(self.start..self.end)
            .ok_or(SpanError::NotCharBoundary {
                start: self.start,
                end: self.end,
            })
    }
}

/// Returns the 1-based line number of the byte offset `pos` in `source`.
///
/// Offsets past the end of the source count as the last line.
///
/// # Examples
///
/// ```
/// use weft_util::span::line_at;
///
/// let source = "one\ntwo\nthree";
/// assert_eq!(line_at(source, 0), 1);
/// assert_eq!(line_at(source, 4), 2);
/// assert_eq!(line_at(source, source.len()), 3);
/// ```
pub fn line_at(source: &str, pos: usize) -> usize {
    let end = pos.min(source.len());
    source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Returns the span of the line containing the byte offset `pos`, without
/// the trailing newline.
///
/// # Examples
///
/// ```
/// use weft_util::span::line_span;
///
/// let source = "one\ntwo\nthree";
/// let span = line_span(source, 5);
/// assert_eq!(span.text_in(source).unwrap(), "two");
/// ```
pub fn line_span(source: &str, pos: usize) -> Span {
    let pos = pos.min(source.len());
    let start = source[..pos].rfind('\n').map_or(0, |i| i + 1);
    let end = source[pos..].find('\n').map_or(source.len(), |i| pos + i);
    Span::new(start, end)
}

/// Returns the 1-based column (in characters) of the byte offset `pos`.
///
/// `pos` must lie on a character boundary; offsets past the end of the
/// source count as one past the last column.
pub fn column_at(source: &str, pos: usize) -> usize {
    let pos = pos.min(source.len());
    let line = line_span(source, pos);
    source[line.start..pos].chars().count() + 1
}
