//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - scanner state machine, driving loop, and the consumer handle
//! - `comment` - comment scanning
//! - `identifier` - identifier and keyword scanning
//! - `number` - numeric literal scanning
//! - `string` - quoted string scanning

mod comment;
mod core;
mod identifier;
mod number;
mod string;

pub use core::{Lexer, LEFT_COMMENT, LEFT_DELIM, RIGHT_COMMENT, RIGHT_DELIM};
