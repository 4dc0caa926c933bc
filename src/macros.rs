//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's text
/// * `$line` - 1-based source line
/// * `$column` - 1-based source column of the first character
/// * `$length` - Length of the lexeme in the source, in characters
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1, 5, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $column:expr, $length:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
            column: $column,
            length: $length,
        }
    };
}

/// Creates a default lexer handler for operators and punctuation.
///
/// Generates a handler function that pushes a token with the given kind
/// at the lexer's current position and advances past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^->").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::FieldEqual, "->"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let token = MK_TOKEN!(
                $kind,
                String::from($value),
                lexer.line,
                lexer.column,
                $value.len()
            );
            lexer.push(token);
            lexer.advance_n($value.len());
        }
    };
}
