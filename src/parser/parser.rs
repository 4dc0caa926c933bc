//! Parser state and the token cursor shared by every parsing function.
//!
//! Besides the Pratt lookup tables the parser tracks the indentation the
//! grammar expects: `indent_level` is the nesting depth a statement must be
//! indented to, and the file's indentation style is fixed by the first
//! indentation token the parser looks at.

use std::collections::HashMap;

use crate::{
    ast::{ast::Stmt, statements::DeclarationsStmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_declaration,
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

/// Signals that the current statement attempt failed. The diagnostic has
/// already been recorded on the parser by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError;

pub type ParseResult<T> = Result<T, ParseError>;

/// The file's indentation style, fixed on first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Tabs,
    /// Spaces, with the width of one indentation unit.
    Spaces(usize),
}

/// Outcome of error recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// A fresh statement starts at the current depth.
    Resume,
    /// The enclosing block is over.
    Abandon,
}

pub struct Parser {
    /// The tokens to parse, ending with `EOF`
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    /// Depth the next statement must be indented to
    pub(super) indent_level: usize,
    /// Tabs or spaces, unknown until the first indentation token
    indent_style: Option<IndentStyle>,
    /// Whether the expression currently being extended started right
    /// after an opening parenthesis
    pub(super) enclosed_call: bool,
    /// Every error reported so far, in source order
    diagnostics: Vec<Error>,
    /// Statement handlers keyed by leading keyword
    stmt_lookup: StmtLookup,
    /// Prefix handlers
    nud_lookup: NUDLookup,
    /// Infix handlers
    led_lookup: LEDLookup,
    /// Binding power of each infix token
    binding_power_lookup: BPLookup,
    /// Handlers for the tokens a type atom can start with
    type_nud_lookup: TypeNUDLookup,
}

impl Parser {
    /// `tokens` must be non-empty and end with the `EOF` token.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            indent_level: 0,
            indent_style: None,
            enclosed_call: false,
            diagnostics: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
        }
    }

    /// Returns the token `offset` places ahead, clamped to the final `EOF`.
    pub fn peek_at(&self, offset: usize) -> &Token {
        let index = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek_at(0)
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    pub fn peek_next(&self) -> &Token {
        self.peek_at(1)
    }

    pub fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|index| self.tokens.get(index))
    }

    /// Advances to the next token and returns the one just consumed. At the
    /// end of input the `EOF` token is returned and the cursor stays put.
    pub fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
            return &self.tokens[self.pos - 1];
        }

        self.current_token()
    }

    pub fn is_at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    pub fn has_tokens(&self) -> bool {
        !self.is_at_end()
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_token_kind() == kind
    }

    pub fn check_at(&self, offset: usize, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek_at(offset).kind == kind
    }

    pub fn check_next(&self, kind: TokenKind) -> bool {
        self.check_at(1, kind)
    }

    /// Consumes the current token if it is of `kind`.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }

        false
    }

    /// Consumes and returns the current token if it is of `kind`.
    pub fn match_token(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            return Some(self.advance().clone());
        }

        None
    }

    /// Consumes a token of `expected_kind`, or records `message` as a
    /// diagnostic at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.check(expected_kind) {
            return Ok(self.advance().clone());
        }

        Err(self.unexpected(message))
    }

    /// Records `message` against the current token.
    pub fn unexpected(&mut self, message: &str) -> ParseError {
        let error = Error::unexpected(self.current_token(), message);
        self.report(error)
    }

    pub fn error_at(&mut self, error_impl: ErrorImpl, token: &Token) -> ParseError {
        self.report(Error::at_token(error_impl, token))
    }

    /// Records a diagnostic without abandoning the current statement.
    pub fn report(&mut self, error: Error) -> ParseError {
        tracing::trace!("parse error: {}", error);
        self.diagnostics.push(error);
        ParseError
    }

    /// Statements end at a newline, or at the end of input.
    pub fn end_of_line(&mut self, message: &str) -> ParseResult<()> {
        if !self.is_at_end() {
            self.expect(TokenKind::Newline, message)?;
        }

        Ok(())
    }

    pub fn is_indents(&self) -> bool {
        self.current_token_kind().is_indent()
    }

    /// Returns the file's indentation style, fixing it from the current
    /// token if no indentation has been seen yet.
    pub fn indent_style(&mut self) -> IndentStyle {
        if let Some(style) = self.indent_style {
            return style;
        }

        let token = self.current_token();
        let style = match token.kind {
            TokenKind::SpacesIndent => IndentStyle::Spaces(token.length.max(1)),
            _ => IndentStyle::Tabs,
        };

        if token.kind.is_indent() {
            tracing::debug!("indentation style fixed to {:?}", style);
            self.indent_style = Some(style);
        }

        style
    }

    pub fn indent_kind_matches(&mut self) -> bool {
        match (self.indent_style(), self.current_token_kind()) {
            (IndentStyle::Tabs, TokenKind::TabsIndent) => true,
            (IndentStyle::Spaces(_), TokenKind::SpacesIndent) => true,
            _ => false,
        }
    }

    pub fn check_indent_kind(&mut self) -> ParseResult<()> {
        if self.indent_kind_matches() {
            return Ok(());
        }

        let expected = match self.indent_style() {
            IndentStyle::Tabs => "tabs",
            IndentStyle::Spaces(_) => "spaces",
        };
        let token = self.current_token().clone();
        Err(self.error_at(ErrorImpl::WrongIndentationKind { expected }, &token))
    }

    /// Depth of the current indentation token in indentation units. Runs
    /// of spaces that are not a multiple of the unit give a fractional
    /// depth, which never equals a level.
    pub fn indents_level(&mut self) -> f32 {
        let length = self.current_token().length as f32;
        match self.indent_style() {
            IndentStyle::Tabs => length,
            IndentStyle::Spaces(width) => length / width as f32,
        }
    }

    /// Consumes an indentation token of exactly `indent_level` depth.
    pub fn consume_indents(&mut self) -> ParseResult<()> {
        if self.is_indents() {
            self.check_indent_kind()?;

            if self.indents_level() == self.indent_level as f32 {
                self.advance();
                return Ok(());
            }
        }

        let expected = match self.indent_style {
            Some(IndentStyle::Tabs) => format!("{} tabs", self.indent_level),
            Some(IndentStyle::Spaces(width)) => format!("{} spaces", self.indent_level * width),
            None if self.indent_level == 1 => String::from("1 level"),
            None => format!("{} levels", self.indent_level),
        };
        let token = self.current_token().clone();
        Err(self.error_at(ErrorImpl::IndentationDepth { expected }, &token))
    }

    /// Consumes an indentation token at the current depth when `kind`
    /// follows it. Used for the keywords that continue an `if`.
    pub fn continues_with(&mut self, kind: TokenKind) -> bool {
        if self.indent_level == 0 {
            return self.check(kind);
        }

        if self.is_indents()
            && self.check_next(kind)
            && self.indent_kind_matches()
            && self.indents_level() == self.indent_level as f32
        {
            self.advance();
            return true;
        }

        false
    }

    /// Skips tokens after a failed statement until parsing can plausibly
    /// continue. Always consumes at least one token.
    pub fn synchronize(&mut self) -> Recovery {
        if self.advance().kind == TokenKind::Newline {
            if let Some(recovery) = self.recover_at_line_start() {
                return recovery;
            }
        }

        while !self.is_at_end() {
            if self.match_kind(TokenKind::Newline) {
                if let Some(recovery) = self.recover_at_line_start() {
                    return recovery;
                }
                continue;
            }

            self.advance();
        }

        Recovery::Abandon
    }

    /// Judges the first token of a line during recovery. `None` means the
    /// line is skipped.
    fn recover_at_line_start(&mut self) -> Option<Recovery> {
        if self.indent_level == 0 {
            if self.current_token_kind().is_restart_point() {
                tracing::trace!("resuming at line {}", self.current_token().line);
                return Some(Recovery::Resume);
            }
            return None;
        }

        if !self.is_indents() {
            return Some(Recovery::Abandon);
        }
        if !self.indent_kind_matches() {
            return None;
        }

        let depth = self.indents_level();
        let level = self.indent_level as f32;

        if depth < level {
            return Some(Recovery::Abandon);
        }
        if depth == level && self.peek_next().kind.is_restart_point() {
            tracing::trace!("resuming at line {}", self.current_token().line);
            return Some(Recovery::Resume);
        }

        None
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a leading keyword.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a handler for a token that can start a type atom.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    pub fn into_diagnostics(self) -> Vec<Error> {
        self.diagnostics
    }
}

/// Parses a token stream into the program root.
///
/// Parsing never stops at the first error: every diagnostic is returned
/// alongside the root, which holds every declaration that parsed cleanly.
pub fn parse(tokens: &[Token]) -> (Stmt, Vec<Error>) {
    let mut tokens = tokens.to_vec();
    if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
        let line = tokens.last().map_or(1, |token| token.line);
        tokens.push(Token {
            kind: TokenKind::EOF,
            lexeme: String::new(),
            line,
            column: 0,
            length: 0,
        });
    }

    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let mut declarations = vec![];

    while parser.has_tokens() {
        if let Some(declaration) = parse_declaration(&mut parser) {
            declarations.push(declaration);
        }
    }

    tracing::debug!("parsed {} top-level declarations", declarations.len());

    (
        Stmt::Declarations(DeclarationsStmt { declarations }),
        parser.into_diagnostics(),
    )
}
