//! Unit tests for the lexer module.
//!
//! Covers keywords, literals, operators, comments, the span of every
//! token, newline collapsing and indentation runs.

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn lex_clean(source: &str) -> Vec<Token> {
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty(), "unexpected lexical errors: {:?}", errors);
    tokens
}

#[test]
fn test_tokenize_keywords() {
    let tokens = lex_clean(
        "template def class ext of req override priv mut if elif else true false fun null \
         echo return super self final val let while for each block",
    );

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Template,
            TokenKind::Def,
            TokenKind::Class,
            TokenKind::Ext,
            TokenKind::Of,
            TokenKind::Req,
            TokenKind::Override,
            TokenKind::Priv,
            TokenKind::Mut,
            TokenKind::If,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Fun,
            TokenKind::Null,
            TokenKind::Echo,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::SelfKw,
            TokenKind::Final,
            TokenKind::Val,
            TokenKind::Let,
            TokenKind::While,
            TokenKind::For,
            TokenKind::Each,
            TokenKind::Block,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex_clean("foo _bar baz_123 Classy iff");

    for (token, lexeme) in tokens.iter().zip(["foo", "_bar", "baz_123", "Classy", "iff"]) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, lexeme);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex_clean("42 3.14 7.");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].lexeme, "3.14");
    // A trailing dot is not part of the number.
    assert_eq!(tokens[2].lexeme, "7");
    assert_eq!(tokens[3].kind, TokenKind::Dot);
}

#[test]
fn test_tokenize_operators() {
    let tokens = lex_clean("!= ! == = <= < >= > -> - && & || | + * / : ; , . ( ) { }");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::LessEquals,
            TokenKind::Less,
            TokenKind::GreaterEquals,
            TokenKind::Greater,
            TokenKind::FieldEqual,
            TokenKind::Dash,
            TokenKind::And,
            TokenKind::Ampersand,
            TokenKind::Or,
            TokenKind::Pipe,
            TokenKind::Plus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_string_span_includes_quotes() {
    let tokens = lex_clean("echo \"hi there\"");

    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].lexeme, "hi there");
    assert_eq!(tokens[1].column, 6);
    assert_eq!(tokens[1].length, 10);
}

#[test]
fn test_tokenize_multiline_string() {
    let tokens = lex_clean("\"a\nb\" x");

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "a\nb");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[1].column, 4);
}

#[test]
fn test_unterminated_string_is_reported() {
    let (tokens, errors) = tokenize("val s = \"open\nmore");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "1:9 error: Unterminated string.");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Val,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_unexpected_character_does_not_stop_lexing() {
    let (tokens, errors) = tokenize("a @ b $ c");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_position().column, 3);
    assert_eq!(errors[1].get_position().column, 7);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_token_spans_match_source() {
    let source = "class Point\n\tfun sum:\n\t\treturn self.x + 2.5 <= \"s\"\n";
    let tokens = lex_clean(source);
    let lines: Vec<&str> = source.split('\n').collect();

    for token in tokens.iter().filter(|token| {
        !matches!(
            token.kind,
            TokenKind::EOF | TokenKind::Newline | TokenKind::String
        )
    }) {
        let line: Vec<char> = lines[token.line - 1].chars().collect();
        let text: String = line[token.column - 1..token.column - 1 + token.length]
            .iter()
            .collect();
        assert_eq!(text, token.lexeme, "span mismatch for {}", token);
    }
}

#[test]
fn test_newlines_are_collapsed() {
    let tokens = lex_clean("\n\na\n\n\n   \n# comment\nb\n");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_indentation_tokens() {
    let tokens = lex_clean("if a\n\t\techo 1\n    echo 2\n");

    assert_eq!(tokens[3].kind, TokenKind::TabsIndent);
    assert_eq!(tokens[3].length, 2);
    assert_eq!(tokens[3].column, 1);
    assert_eq!(tokens[4].column, 3);
    assert_eq!(tokens[7].kind, TokenKind::SpacesIndent);
    assert_eq!(tokens[7].length, 4);
    assert_eq!(tokens[7].lexeme, "    ");
}

#[test]
fn test_indentation_at_start_of_source() {
    let tokens = lex_clean("  val x = 1");

    assert_eq!(tokens[0].kind, TokenKind::SpacesIndent);
    assert_eq!(tokens[0].length, 2);
    assert_eq!(tokens[1].kind, TokenKind::Val);
}

#[test]
fn test_indented_comment_lines_are_blank() {
    let tokens = lex_clean("a\n\t# note\n\t#[ block ]#\nb");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_mixed_indentation_keeps_first_run() {
    let (tokens, errors) = tokenize("if a\n\t  echo 1\n");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "2:1 error: Indentation must not have both tabs and spaces."
    );
    assert_eq!(tokens[3].kind, TokenKind::TabsIndent);
    assert_eq!(tokens[3].length, 1);
    assert_eq!(tokens[4].kind, TokenKind::Echo);
    assert_eq!(tokens[4].column, 4);
}

#[test]
fn test_whitespace_only_mixed_line_is_ignored() {
    let (tokens, errors) = tokenize("a\n \t \nb");

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_comments() {
    let tokens = lex_clean("val x = 1 # trailing\n#[ spans\nlines ]# val y = 2");

    assert_eq!(tokens[4].kind, TokenKind::Newline);
    assert_eq!(tokens[5].kind, TokenKind::Val);
    assert_eq!(tokens[5].line, 3);
    assert_eq!(tokens[5].column, 10);
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    let tokens = lex_clean("a #[ never closed\nb c");

    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::EOF]);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_eof_token() {
    let tokens = lex_clean("a\nb");
    let eof = tokens.last().unwrap();

    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.line, 2);
    assert_eq!(eof.column, 0);
    assert_eq!(eof.length, 0);
    assert!(eof.position().is_eof());
}

#[test]
fn test_token_display() {
    let tokens = lex_clean("val x\n\tx");

    assert_eq!(tokens[0].to_string(), "Val val 1 1 3");
    assert_eq!(tokens[2].to_string(), "Newline \\n 1 6 1");
    assert_eq!(tokens[3].to_string(), "TabsIndent \\t 2 1 1");
}
