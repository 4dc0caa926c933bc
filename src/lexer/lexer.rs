use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("lexer patterns are valid regular expressions"),
            handler,
        }
    }
}

lazy_static! {
    // Anchored at the start of the remaining input. Order matters: two
    // character operators come before their one character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^\n", newline_handler),
        RegexPattern::new("^[ \t\r]+", skip_handler),
        RegexPattern::new("^#\\[", block_comment_handler),
        RegexPattern::new("^#[^\n]*", skip_handler),
        RegexPattern::new("^\"", string_handler),
        RegexPattern::new("^[0-9]+(\\.[0-9]+)?", number_handler),
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new("^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("^->", MK_DEFAULT_HANDLER!(TokenKind::FieldEqual, "->")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("^&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        RegexPattern::new("^&", MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&")),
        RegexPattern::new("^\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        RegexPattern::new("^\\|", MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|")),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
    ];
}

/// Single pass cursor over the source text.
///
/// `pos` is a byte offset into `source`; `line` and `column` are the
/// 1-based character coordinates of `pos`.
pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            errors: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Advances over `n` bytes that are known not to contain a newline.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        self.column += self.source[self.pos..end].chars().count();
        self.pos = end;
    }

    /// Advances over one character, keeping line and column in step.
    pub fn advance_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn error(&mut self, error: ErrorImpl, position: Position) {
        tracing::trace!("lexical error at {}:{}: {}", position.line, position.column, error);
        self.errors.push(Error::new(error, position));
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consumes the whitespace run at the start of a line and emits it as a
    /// single indentation token.
    ///
    /// Nothing is emitted for a line that holds only whitespace. When tabs
    /// and spaces are mixed the first run is kept so the parser still sees
    /// one indentation token for the line.
    fn indentation_run(&mut self) {
        let start_column = self.column;
        let mut runs = vec![];

        while let Some(c @ ('\t' | ' ')) = self.peek() {
            let kind = if c == '\t' {
                TokenKind::TabsIndent
            } else {
                TokenKind::SpacesIndent
            };
            let start = self.pos;
            let column = self.column;

            while self.peek() == Some(c) {
                self.advance_n(1);
            }

            let length = self.pos - start;
            runs.push(MK_TOKEN!(
                kind,
                self.source[start..self.pos].to_string(),
                self.line,
                column,
                length
            ));
        }

        if runs.is_empty() || self.at_blank_line_end() {
            return;
        }

        if runs.len() > 1 {
            self.error(
                ErrorImpl::MixedIndentation,
                Position::new(self.line, start_column, self.column - start_column),
            );
        }

        let first = runs.swap_remove(0);
        self.push(first);
    }

    fn at_blank_line_end(&self) -> bool {
        let rest = self.remainder();
        rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n")
    }

    /// Drops an indentation token that turned out to start an empty line
    /// (one holding only comments).
    fn discard_dangling_indent(&mut self) {
        if self.tokens.last().is_some_and(|token| token.kind.is_indent()) {
            self.tokens.pop();
        }
    }
}

fn newline_handler(lexer: &mut Lexer, _regex: &Regex) {
    lexer.discard_dangling_indent();

    if lexer
        .tokens
        .last()
        .is_some_and(|token| token.kind != TokenKind::Newline)
    {
        let token = MK_TOKEN!(
            TokenKind::Newline,
            String::from("\n"),
            lexer.line,
            lexer.column,
            1
        );
        lexer.push(token);
    }

    lexer.advance_char();
    lexer.indentation_run();
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    if let Some(matched) = regex.find(lexer.remainder()) {
        let end = matched.end();
        lexer.advance_n(end);
    }
}

fn block_comment_handler(lexer: &mut Lexer, _regex: &Regex) {
    lexer.advance_n(2);

    // An unterminated block comment runs to the end of the input.
    while let Some(c) = lexer.advance_char() {
        if c == ']' {
            if lexer.peek() == Some('#') {
                lexer.advance_n(1);
            }
            break;
        }
    }
}

fn string_handler(lexer: &mut Lexer, _regex: &Regex) {
    let (line, column) = (lexer.line, lexer.column);
    let start = lexer.pos;
    let mut length = 1;
    lexer.advance_char();

    loop {
        match lexer.advance_char() {
            Some('"') => {
                length += 1;
                break;
            }
            Some(_) => length += 1,
            None => {
                lexer.error(
                    ErrorImpl::UnterminatedString,
                    Position::new(line, column, length),
                );
                return;
            }
        }
    }

    let lexeme = lexer.source[start + 1..lexer.pos - 1].to_string();
    lexer.push(MK_TOKEN!(TokenKind::String, lexeme, line, column, length));
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return;
    };
    let value = matched.as_str().to_string();
    let length = value.len();

    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        value,
        lexer.line,
        lexer.column,
        length
    ));
    lexer.advance_n(length);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return;
    };
    let value = matched.as_str().to_string();
    let length = value.len();
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, value, lexer.line, lexer.column, length));
    lexer.advance_n(length);
}

/// Converts source text into tokens, collecting every lexical error.
///
/// The returned stream always ends with an `EOF` token whose column and
/// length are 0.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source);
    lex.indentation_run();

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let position = Position::new(lex.line, lex.column, 1);
                lex.error(ErrorImpl::UnexpectedCharacter, position);
                lex.advance_char();
            }
        }
    }

    lex.discard_dangling_indent();
    let eof = MK_TOKEN!(TokenKind::EOF, String::new(), lex.line, 0, 0);
    lex.push(eof);

    (lex.tokens, lex.errors)
}
