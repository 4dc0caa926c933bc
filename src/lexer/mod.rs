//! Lexical analysis for Kona source text.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a flat stream of tokens for parsing. It handles:
//!
//! - Indentation runs at the start of each line, emitted as tokens
//! - Collapsing of blank lines into a single `Newline` token
//! - Keywords, identifiers, number and string literals, operators
//! - Line comments (`#`) and block comments (`#[ ... ]`)
//! - Exact line/column/length tracking for diagnostics

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
