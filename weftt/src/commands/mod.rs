//! Command implementations for the weftt CLI.

pub mod lex;
