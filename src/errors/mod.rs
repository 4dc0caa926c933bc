//! Diagnostics produced by the lexer and the parser.
//!
//! Every diagnostic pairs an [`errors::ErrorImpl`] with the source position
//! it was detected at. Neither pass stops at the first problem, so both
//! hand back a list of these alongside their regular output.

pub mod errors;

#[cfg(test)]
mod tests;
