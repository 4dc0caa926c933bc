//! Parser module for building the syntax tree.
//!
//! Expressions are parsed Pratt style: NUD (null denotation) and LED (left
//! denotation) handlers are looked up by token kind, and binding powers
//! give the precedence ladder. Statements are dispatched on their leading
//! keyword. Blocks are delimited by indentation tokens, so the parser
//! tracks the depth it expects and the file's indentation style.
//!
//! A failed statement records a diagnostic and is skipped; parsing then
//! resumes at the next plausible statement start.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
