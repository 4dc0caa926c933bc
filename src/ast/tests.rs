use crate::{
    ast::{
        ast::{Expr, ExprType, Stmt, StmtType},
        types::{TypeAtom, TypeExpr},
    },
    compile,
};

fn declarations(source: &str) -> Vec<Stmt> {
    let compilation = compile(source);
    assert!(!compilation.had_error(), "{:?}", compilation.diagnostics);

    match compilation.root {
        Stmt::Declarations(root) => root.declarations,
        other => panic!("expected declarations, got {:?}", other.get_stmt_type()),
    }
}

#[test]
fn test_stmt_types() {
    let stmts = declarations(
        "val a = 1\nmut b = 2\nlet c = 3\necho a\nfun f;\n\treturn a\nwhile a\n\tb = 1\n",
    );
    let kinds: Vec<StmtType> = stmts.iter().map(Stmt::get_stmt_type).collect();

    assert_eq!(
        kinds,
        vec![
            StmtType::Val,
            StmtType::Mut,
            StmtType::Let,
            StmtType::Print,
            StmtType::Function,
            StmtType::While,
        ]
    );
}

#[test]
fn test_expr_types() {
    let stmts = declarations("echo -a\necho a.b\necho a || b\necho (a)\necho self\n");
    let kinds: Vec<ExprType> = stmts
        .iter()
        .map(|stmt| match stmt {
            Stmt::Print(print) => print.expression.get_expr_type(),
            other => panic!("expected echo, got {:?}", other.get_stmt_type()),
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            ExprType::Unary,
            ExprType::Get,
            ExprType::Logical,
            ExprType::Grouping,
            ExprType::SelfRef,
        ]
    );
}

#[test]
fn test_type_names_flatten_unions() {
    let stmts = declarations("val t = |Int (Str (Num Bool))|x\n");
    let Stmt::Val(decl) = &stmts[0] else {
        panic!("expected val");
    };
    let Expr::Cast(cast) = &decl.initializers[0] else {
        panic!("expected cast");
    };

    let names: Vec<&str> = cast
        .cast_type
        .names()
        .into_iter()
        .map(|token| token.lexeme.as_str())
        .collect();
    assert_eq!(names, vec!["Int", "Str", "Num", "Bool"]);

    assert_eq!(cast.cast_type.atoms.len(), 2);
    assert!(matches!(cast.cast_type.atoms[0], TypeAtom::Name(_)));
    assert!(matches!(
        &cast.cast_type.atoms[1],
        TypeAtom::Union(TypeExpr { atoms }) if atoms.len() == 2
    ));
}
