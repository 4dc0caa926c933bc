//! Parenthesized rendering of the syntax tree, used by the driver and by
//! tests to compare trees by shape.
//!
//! Every node renders as `(label: child child ...)`. Absent optional parts
//! render as `null`.

use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{BlockStmt, FunctionStmt, VarDeclStmt},
        types::{TypeAtom, TypeExpr},
    },
    lexer::tokens::Token,
};

pub fn print(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Declarations(declarations) => declarations
            .declarations
            .iter()
            .map(print)
            .collect::<Vec<_>>()
            .join("\n"),
        Stmt::Block(block) => print_block(block),
        Stmt::Template(template) => {
            let fields = template
                .fields
                .fields
                .iter()
                .map(|field| parenthesize("field:", &[optional(&field.def), lexeme(&field.name)]))
                .collect::<Vec<_>>();
            let methods = template
                .methods
                .methods
                .iter()
                .map(|method| {
                    parenthesize("method:", &[optional(&method.def), print_function(&method.method)])
                })
                .collect::<Vec<_>>();

            parenthesize(
                "template:",
                &[
                    lexeme(&template.name),
                    optional(&template.parent),
                    parenthesize("fields:", &fields),
                    parenthesize("methods:", &methods),
                ],
            )
        }
        Stmt::Class(class) => {
            let fields = class
                .fields
                .fields
                .iter()
                .map(|field| {
                    parenthesize(
                        "field:",
                        &[
                            optional(&field.private),
                            optional(&field.mutable),
                            lexeme(&field.name),
                        ],
                    )
                })
                .collect::<Vec<_>>();
            let methods = class
                .methods
                .methods
                .iter()
                .map(|method| {
                    parenthesize(
                        "method:",
                        &[
                            optional(&method.overrides),
                            optional(&method.private),
                            optional(&method.mutable),
                            print_function(&method.function),
                        ],
                    )
                })
                .collect::<Vec<_>>();

            parenthesize(
                "class:",
                &[
                    optional(&class.mutable),
                    lexeme(&class.name),
                    optional(&class.parent),
                    parenthesize("templates:", &lexemes(&class.templates.templates)),
                    parenthesize("req:", &lexemes(&class.require.requirements)),
                    parenthesize("fields:", &fields),
                    parenthesize("methods:", &methods),
                ],
            )
        }
        Stmt::Expression(statement) => {
            parenthesize("expression:", &[print_expr(&statement.expression)])
        }
        Stmt::Function(function) => print_function(function),
        Stmt::If(statement) => {
            let branches = statement
                .else_ifs
                .branches
                .iter()
                .map(|branch| {
                    parenthesize(
                        "elif:",
                        &[print_expr(&branch.condition), print_block(&branch.body)],
                    )
                })
                .collect::<Vec<_>>();
            let else_branch = statement
                .else_branch
                .as_ref()
                .map_or_else(|| String::from("null"), print_block);

            parenthesize(
                "if:",
                &[
                    print_expr(&statement.condition),
                    print_block(&statement.then_branch),
                    parenthesize("elifs:", &branches),
                    else_branch,
                ],
            )
        }
        Stmt::Print(statement) => parenthesize("echo:", &[print_expr(&statement.expression)]),
        Stmt::Return(statement) => {
            let value = statement
                .value
                .as_ref()
                .map_or_else(|| String::from("null"), print_expr);
            parenthesize("return:", &[value])
        }
        Stmt::Val(declaration) => print_var_decl("val:", declaration),
        Stmt::Mut(declaration) => print_var_decl("mut:", declaration),
        Stmt::Let(declaration) => print_var_decl("let:", declaration),
        Stmt::While(statement) => parenthesize(
            "while:",
            &[print_expr(&statement.condition), print_block(&statement.body)],
        ),
        Stmt::For(statement) => parenthesize(
            "for:",
            &[
                lexeme(&statement.array),
                lexeme(&statement.item),
                optional(&statement.index),
                print_block(&statement.body),
            ],
        ),
    }
}

pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Assign(assign) => {
            parenthesize("=", &[lexeme(&assign.name), print_expr(&assign.value)])
        }
        Expr::Binary(binary) => parenthesize(
            &binary.operator.lexeme,
            &[print_expr(&binary.left), print_expr(&binary.right)],
        ),
        Expr::Cast(cast) => parenthesize(
            "Cast:",
            &[print_type(&cast.cast_type), print_expr(&cast.expression)],
        ),
        Expr::Call(call) => {
            let arguments = call
                .arguments
                .arguments
                .iter()
                .map(print_expr)
                .collect::<Vec<_>>();
            parenthesize(
                "Call:",
                &[print_expr(&call.callee), parenthesize("Arguments:", &arguments)],
            )
        }
        Expr::Get(get) => parenthesize("Get:", &[print_expr(&get.object), lexeme(&get.name)]),
        Expr::Instance(instance) => {
            let fields = instance
                .fields
                .fields
                .iter()
                .map(|field| parenthesize("->", &[lexeme(&field.name), print_expr(&field.value)]))
                .collect::<Vec<_>>();
            parenthesize("Instance:", &[lexeme(&instance.name), parenthesize("fields:", &fields)])
        }
        Expr::Grouping(grouping) => parenthesize("group", &[print_expr(&grouping.expression)]),
        Expr::Literal(literal) => literal.value.lexeme.clone(),
        Expr::Logical(logical) => parenthesize(
            &logical.operator.lexeme,
            &[print_expr(&logical.left), print_expr(&logical.right)],
        ),
        Expr::Set(set) => parenthesize(
            "Set:",
            &[print_expr(&set.object), lexeme(&set.name), print_expr(&set.value)],
        ),
        Expr::Super(super_expr) => parenthesize("super", &[lexeme(&super_expr.method)]),
        Expr::SelfRef(_) => String::from("self"),
        Expr::Unary(unary) => parenthesize(&unary.operator.lexeme, &[print_expr(&unary.right)]),
        Expr::Variable(variable) => variable.name.lexeme.clone(),
    }
}

fn print_type(type_expr: &TypeExpr) -> String {
    let atoms = type_expr
        .atoms
        .iter()
        .map(|atom| match atom {
            TypeAtom::Name(name) => lexeme(name),
            TypeAtom::Union(inner) => print_type(inner),
        })
        .collect::<Vec<_>>();

    parenthesize("type:", &atoms)
}

fn print_block(block: &BlockStmt) -> String {
    let statements = block.statements.iter().map(print).collect::<Vec<_>>();
    parenthesize("block:", &statements)
}

fn print_function(function: &FunctionStmt) -> String {
    parenthesize(
        "fun:",
        &[
            lexeme(&function.name),
            parenthesize("params:", &lexemes(&function.params.params)),
            print_block(&function.body),
        ],
    )
}

fn print_var_decl(label: &str, declaration: &VarDeclStmt) -> String {
    let mut parts = lexemes(&declaration.names);
    parts.extend(declaration.initializers.iter().map(print_expr));
    parenthesize(label, &parts)
}

fn parenthesize(label: &str, parts: &[String]) -> String {
    let mut out = format!("({}", label);
    for part in parts {
        out.push(' ');
        out.push_str(part);
    }
    out.push(')');
    out
}

fn lexeme(token: &Token) -> String {
    token.lexeme.clone()
}

fn lexemes(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(lexeme).collect()
}

fn optional(token: &Option<Token>) -> String {
    token.as_ref().map_or_else(|| String::from("null"), lexeme)
}

#[cfg(test)]
mod tests {
    use crate::{compile, printer::print};

    fn render(source: &str) -> String {
        let compilation = compile(source);
        assert!(
            !compilation.had_error(),
            "unexpected diagnostics: {:?}",
            compilation.diagnostics
        );
        print(&compilation.root)
    }

    #[test]
    fn test_print_expressions() {
        assert_eq!(render("x = 1 + 2 * 3"), "(expression: (= x (+ 1 (* 2 3))))");
        assert_eq!(render("echo -(a) || !b"), "(echo: (|| (- (group a)) (! b)))");
        assert_eq!(render("p.x = self.y"), "(expression: (Set: p x (Get: self y)))");
        assert_eq!(render("super.init;"), "(expression: (Call: (super init) (Arguments:)))");
    }

    #[test]
    fn test_print_declarations() {
        assert_eq!(render("val a, b = 1, \"s\""), "(val: a b 1 s)");
        assert_eq!(render("return"), "(return: null)");
        assert_eq!(
            render("for list each item, i\n\techo item\n"),
            "(for: list item i (block: (echo: item)))"
        );
    }

    #[test]
    fn test_print_cast_and_instance() {
        assert_eq!(
            render("val n = |Int (Str Num)|x"),
            "(val: n (Cast: (type: Int (type: Str Num)) x))"
        );
        assert_eq!(
            render("val p = Point{x -> 1, y -> 2}"),
            "(val: p (Instance: Point (fields: (-> x 1) (-> y 2))))"
        );
    }

    #[test]
    fn test_print_class() {
        let source = "mut class Cat ext Animal of Pet\n\treq Named\n\tpriv mut name\n\toverride fun speak;\n\t\techo \"meow\"\n";
        assert_eq!(
            render(source),
            "(class: mut Cat Animal (templates: Pet) (req: Named) \
             (fields: (field: priv mut name)) \
             (methods: (method: override null null (fun: speak (params:) (block: (echo: meow))))))"
        );
    }

    #[test]
    fn test_print_joins_declarations_with_newlines() {
        assert_eq!(render("echo 1\necho 2\n"), "(echo: 1)\n(echo: 2)");
    }
}
