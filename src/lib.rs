#![allow(clippy::module_inception)]

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod printer;

extern crate regex;

/// A location in the source text. Lines and columns are 1-based; the
/// end-of-input sentinel is the only position with column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub length: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, length: usize) -> Self {
        Position { line, column, length }
    }

    pub fn eof(line: usize) -> Self {
        Position { line, column: 0, length: 0 }
    }

    pub fn is_eof(&self) -> bool {
        self.column == 0
    }
}

/// Everything a single lex + parse run produces.
///
/// The root is always present, but it is only meaningful to downstream
/// stages when `had_error()` is false.
#[derive(Debug)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub root: Stmt,
    pub diagnostics: Vec<Error>,
}

impl Compilation {
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Hands out the root only when the run was clean.
    pub fn into_result(self) -> Result<Stmt, Vec<Error>> {
        if self.diagnostics.is_empty() {
            Ok(self.root)
        } else {
            Err(self.diagnostics)
        }
    }
}

/// Lexes and parses `source` in two complete passes.
///
/// Lexical diagnostics come first in `diagnostics`, followed by parser
/// diagnostics in the order they were detected.
pub fn compile(source: &str) -> Compilation {
    let (tokens, mut diagnostics) = tokenize(source);
    tracing::debug!("lexed {} tokens ({} errors)", tokens.len(), diagnostics.len());

    let (root, parse_errors) = parse(&tokens);
    tracing::debug!("parsed with {} errors", parse_errors.len());

    diagnostics.extend(parse_errors);

    Compilation {
        tokens,
        root,
        diagnostics,
    }
}

/// Returns the text of the 1-based `line`, without its line terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a diagnostic as its one-line report followed by the offending
/// source line and a caret underline.
///
/// ```text
/// 3:9 error: Unexpected character.
///   |
/// 3 | val x = @
///   |         ^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let mut out = error.to_string();

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        out.push_str(&format!(" ({})", tip));
    }

    let position = error.get_position();
    if position.is_eof() {
        return out;
    }

    let Some(line_text) = get_line(source, position.line) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    // Tabs are kept in the marker so the caret lines up under the source.
    let marker: String = line_text
        .chars()
        .take(position.column - 1)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let underline = "^".repeat(position.length.max(1));

    out.push('\n');
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text));
    out.push_str(&format!("{:>padding$} {}{}", "|", marker, underline));

    out
}

#[cfg(test)]
mod tests {
    use crate::{compile, display_error, get_line};

    #[test]
    fn test_get_line() {
        let source = "val x = 1\r\necho x\n\nfun f;";
        assert_eq!(get_line(source, 1), Some("val x = 1"));
        assert_eq!(get_line(source, 2), Some("echo x"));
        assert_eq!(get_line(source, 3), Some(""));
        assert_eq!(get_line(source, 4), Some("fun f;"));
        assert_eq!(get_line(source, 5), None);
        assert_eq!(get_line(source, 0), None);
    }

    #[test]
    fn test_display_error_underlines_span() {
        let source = "val x = @\n";
        let compilation = compile(source);
        assert!(compilation.had_error());

        let rendered = display_error(&compilation.diagnostics[0], source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "1:9 error: Unexpected character.");
        assert_eq!(lines[2], "1 | val x = @");
        assert_eq!(lines[3], "  |         ^");
    }

    #[test]
    fn test_display_error_at_end_of_file_has_no_excerpt() {
        let source = "val x =";
        let compilation = compile(source);
        let error = compilation.diagnostics.last().unwrap();

        assert!(error.get_position().is_eof());
        assert_eq!(display_error(error, source).lines().count(), 1);
    }

    #[test]
    fn test_clean_compilation_yields_root() {
        let compilation = compile("val x = 1\n");
        assert!(!compilation.had_error());
        assert!(compilation.into_result().is_ok());
    }
}
