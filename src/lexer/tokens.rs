use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("template", TokenKind::Template);
        map.insert("def", TokenKind::Def);
        map.insert("class", TokenKind::Class);
        map.insert("ext", TokenKind::Ext);
        map.insert("of", TokenKind::Of);
        map.insert("req", TokenKind::Req);
        map.insert("override", TokenKind::Override);
        map.insert("priv", TokenKind::Priv);
        map.insert("mut", TokenKind::Mut);
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("fun", TokenKind::Fun);
        map.insert("null", TokenKind::Null);
        map.insert("echo", TokenKind::Echo);
        map.insert("return", TokenKind::Return);
        map.insert("super", TokenKind::Super);
        map.insert("self", TokenKind::SelfKw);
        map.insert("final", TokenKind::Final);
        map.insert("val", TokenKind::Val);
        map.insert("let", TokenKind::Let);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("each", TokenKind::Each);
        map.insert("block", TokenKind::Block);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    // Structure
    Newline,
    TabsIndent,
    SpacesIndent,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    Comma,
    Dot,
    Colon,
    Semicolon,

    Plus,
    Dash,
    Star,
    Slash,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=
    FieldEqual, // ->

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Ampersand, // &
    And,       // &&
    Pipe,      // |
    Or,        // ||

    // Reserved
    Template,
    Def,
    Class,
    Ext,
    Of,
    Req,
    Override,
    Priv,
    Mut,
    If,
    Elif,
    Else,
    True,
    False,
    Fun,
    Null,
    Echo,
    Return,
    Super,
    SelfKw,
    Final,
    Val,
    Let,
    While,
    For,
    Each,
    Block,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TokenKind {
    pub fn is_indent(&self) -> bool {
        matches!(self, TokenKind::TabsIndent | TokenKind::SpacesIndent)
    }

    /// Keywords error recovery treats as the start of a fresh statement.
    pub fn is_restart_point(&self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Final
                | TokenKind::Val
                | TokenKind::Mut
                | TokenKind::Let
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Echo
                | TokenKind::Return
        )
    }
}

/// A lexeme with its exact source span.
///
/// For string literals `lexeme` excludes the quotes while `column` and
/// `length` still cover them. Indentation tokens carry the raw run length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub length: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lexeme = match self.kind {
            TokenKind::Newline => "\\n".to_string(),
            TokenKind::TabsIndent => "\\t".repeat(self.length),
            _ => self.lexeme.clone(),
        };

        write!(
            f,
            "{} {} {} {} {}",
            self.kind, lexeme, self.line, self.column, self.length
        )
    }
}

impl Token {
    pub fn position(&self) -> Position {
        if self.kind == TokenKind::EOF {
            Position::eof(self.line)
        } else {
            Position::new(self.line, self.column, self.length)
        }
    }

    /// Column one past the last character of the token.
    pub fn end_column(&self) -> usize {
        self.column + self.length
    }
}
