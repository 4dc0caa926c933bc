//! Integration tests for the whole front end.
//!
//! These run complete programs through `compile` and check the token
//! stream, the syntax tree and the diagnostics together.

use kona::{
    ast::ast::{Stmt, StmtType},
    compile, display_error,
    lexer::tokens::TokenKind,
    printer::print,
};

const PROGRAM: &str = "\
# Shapes and the things that draw them
template Drawable
\tdef colour
\tfun draw;

class Square of Drawable
\tside,
\tpriv mut colour
\tfun draw;
\t\tval area = self.side * self.side
\t\tif area > 10
\t\t\techo \"big\"
\t\telif area > 1
\t\t\techo \"medium\"
\t\telse
\t\t\techo |Str|area
\tfun grow: amount
\t\tself.side = self.side + amount
\t\treturn self

val square = Square{side -> 2, colour -> \"red\"}
(square.grow: 3,
\t1).draw;
for shapes each shape, i
\twhile !shape.done
\t\tshape.step;
";

#[test]
fn test_compile_program() {
    let compilation = compile(PROGRAM);

    assert!(
        !compilation.had_error(),
        "unexpected diagnostics: {:?}",
        compilation.diagnostics
    );

    let Stmt::Declarations(root) = &compilation.root else {
        panic!("root must be a declaration list");
    };
    let kinds: Vec<StmtType> = root.declarations.iter().map(Stmt::get_stmt_type).collect();
    assert_eq!(
        kinds,
        vec![
            StmtType::Template,
            StmtType::Class,
            StmtType::Val,
            StmtType::Expression,
            StmtType::For
        ]
    );

    assert_eq!(
        print(&root.declarations[3]),
        "(expression: (Call: (Get: (group (Call: (Get: square grow) (Arguments: 3 1))) draw) (Arguments:)))"
    );
}

#[test]
fn test_compile_tokens_end_with_eof() {
    let compilation = compile(PROGRAM);
    let eof = compilation.tokens.last().unwrap();

    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.column, 0);
    assert!(compilation
        .tokens
        .windows(2)
        .all(|pair| !(pair[0].kind == TokenKind::Newline && pair[1].kind == TokenKind::Newline)));
}

#[test]
fn test_compile_reports_lexer_errors_before_parser_errors() {
    let source = "val x = 1 $\necho (\n";
    let compilation = compile(source);

    let reports: Vec<String> = compilation
        .diagnostics
        .iter()
        .map(|error| error.to_string())
        .collect();
    assert_eq!(
        reports,
        vec![
            "1:11 error: Unexpected character.",
            "2:7 error: Expect expression."
        ]
    );
}

#[test]
fn test_compile_keeps_good_declarations_around_bad_ones() {
    let source = "fun ok;\n\techo 1\nfun bad:\n\techo 2\nfun also_ok;\n\techo 3\n";
    let compilation = compile(source);

    assert_eq!(compilation.diagnostics.len(), 1);
    assert_eq!(
        compilation.diagnostics[0].get_message(),
        "Expect parameter name."
    );

    let Stmt::Declarations(root) = &compilation.root else {
        panic!("root must be a declaration list");
    };
    let names: Vec<String> = root
        .declarations
        .iter()
        .filter_map(|declaration| match declaration {
            Stmt::Function(function) => Some(function.name.lexeme.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["ok", "also_ok"]);
}

#[test]
fn test_compile_into_result() {
    assert!(compile("echo 1\n").into_result().is_ok());

    let errors = compile("echo )\n").into_result().unwrap_err();
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_display_error_for_indentation() {
    let source = "fun f;\n\techo 1\n\t\techo 2\n";
    let compilation = compile(source);

    let rendered = display_error(&compilation.diagnostics[0], source);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines[0],
        "3:1 error: Incorrect indentation. (this line is indented deeper than the block it belongs to)"
    );
    assert_eq!(lines[2], "3 | \t\techo 2");
    assert_eq!(lines[3], "  | ^^");
}
