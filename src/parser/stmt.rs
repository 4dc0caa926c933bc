use crate::{
    ast::{
        ast::Stmt,
        statements::{
            BlockStmt, ClassStmt, ElseIfStmt, ElseIfsStmt, ExpressionStmt, FieldStmt, FieldsStmt,
            ForStmt, FunctionStmt, IfStmt, MethodStmt, MethodsStmt, ParamsStmt, PrintStmt,
            RequireStmt, ReturnStmt, TemplateFieldStmt, TemplateFieldsStmt, TemplateMethodStmt,
            TemplateMethodsStmt, TemplateStmt, TemplatesStmt, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::BindingPower,
    parser::{ParseResult, Parser, Recovery},
};

/// Parses one top-level declaration. Returns `None` when the declaration
/// failed; its diagnostics are on the parser and the cursor has been moved
/// past the broken tokens.
pub fn parse_declaration(parser: &mut Parser) -> Option<Stmt> {
    let depth = parser.indent_level;

    let result = match parser.current_token_kind() {
        TokenKind::Template => parse_template_decl_stmt(parser),
        TokenKind::Class => parse_class_decl_stmt(parser),
        TokenKind::Mut if parser.check_next(TokenKind::Class) => parse_class_decl_stmt(parser),
        TokenKind::Fun => {
            parser.advance();
            parse_function(parser, "function").map(Stmt::Function)
        }
        _ => return parse_stmt(parser),
    };

    match result {
        Ok(declaration) => {
            tracing::debug!("parsed {:?} declaration", declaration.get_stmt_type());
            Some(declaration)
        }
        Err(_) => {
            parser.indent_level = depth;
            parser.synchronize();
            None
        }
    }
}

/// Parses one statement at the current depth.
///
/// Returns `None` when the enclosing block ends here, or when a failed
/// statement could not be resumed from.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    let depth = parser.indent_level;

    loop {
        match parse_indented_stmt(parser) {
            Ok(stmt) => return stmt,
            Err(_) => {
                parser.indent_level = depth;

                if parser.synchronize() == Recovery::Abandon || depth == 0 {
                    return None;
                }
            }
        }
    }
}

fn parse_indented_stmt(parser: &mut Parser) -> ParseResult<Option<Stmt>> {
    if parser.indent_level > 0 {
        if !parser.is_indents() {
            return Ok(None);
        }

        parser.check_indent_kind()?;
        let depth = parser.indents_level();
        let level = parser.indent_level as f32;

        if depth < level {
            return Ok(None);
        }
        if depth > level {
            let token = parser.current_token().clone();
            return Err(parser.error_at(ErrorImpl::IncorrectIndentation, &token));
        }

        parser.advance();
    } else if parser.is_indents() {
        parser.check_indent_kind()?;
        let token = parser.current_token().clone();
        return Err(parser.error_at(ErrorImpl::IncorrectIndentation, &token));
    }

    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser).map(Some);
    }

    parse_expression_stmt(parser).map(Some)
}

/// Statements indented one level deeper than the current depth, up to the
/// first line that is not.
pub fn parse_block(parser: &mut Parser) -> BlockStmt {
    parser.indent_level += 1;

    let mut statements = vec![];
    while parser.has_tokens() {
        match parse_stmt(parser) {
            Some(stmt) => statements.push(stmt),
            None => break,
        }
    }

    parser.indent_level -= 1;
    BlockStmt { statements }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.end_of_line("Expression must occupy the rest of the line.")?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    parser.advance();
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.end_of_line("Expression must occupy the rest of the line.")?;

    Ok(Stmt::Print(PrintStmt { expression }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let keyword = parser.advance().clone();

    let value = if parser.has_tokens() && !parser.check(TokenKind::Newline) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.end_of_line("Expression must occupy the rest of the line.")?;

    Ok(Stmt::Return(ReturnStmt { keyword, value }))
}

/// `val`, `mut` and `let`: `a, b = 1, 2`. A value list may continue on
/// the next line, one level deeper, after a trailing comma.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let keyword = parser.advance().kind;

    let mut names = vec![];
    loop {
        names.push(parser.expect(TokenKind::Identifier, "Expect variable name.")?);

        if !parser.match_kind(TokenKind::Comma) {
            break;
        }
    }

    let mut initializers = vec![];
    if parser.match_kind(TokenKind::Assignment) {
        let mut continued = false;

        loop {
            initializers.push(parse_expr(parser, BindingPower::Default)?);

            if !parser.match_kind(TokenKind::Comma) {
                break;
            }

            if parser.match_kind(TokenKind::Newline) {
                if !continued {
                    parser.indent_level += 1;
                    continued = true;
                }
                parser.consume_indents()?;
            }
        }

        if continued {
            parser.indent_level -= 1;
        }
    }

    parser.end_of_line("Expression must occupy the rest of the line.")?;

    let declaration = VarDeclStmt {
        names,
        initializers,
    };

    Ok(match keyword {
        TokenKind::Mut => Stmt::Mut(declaration),
        TokenKind::Let => Stmt::Let(declaration),
        _ => Stmt::Val(declaration),
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Newline, "Condition must occupy the rest of the line.")?;
    let then_branch = parse_block(parser);

    let mut branches = vec![];
    while parser.continues_with(TokenKind::Elif) {
        parser.advance();
        let condition = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Newline, "Condition must occupy the rest of the line.")?;
        let body = parse_block(parser);

        branches.push(ElseIfStmt { condition, body });
    }

    let mut else_branch = None;
    if parser.continues_with(TokenKind::Else) {
        parser.advance();
        parser.expect(TokenKind::Newline, "\"else\" must occupy the rest of the line.")?;
        else_branch = Some(parse_block(parser));
    }

    Ok(Stmt::If(IfStmt {
        condition,
        then_branch,
        else_ifs: ElseIfsStmt { branches },
        else_branch,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Newline, "Only condition goes on this line")?;
    let body = parse_block(parser);

    Ok(Stmt::While(WhileStmt { condition, body }))
}

/// `for array each item[, index]`
pub fn parse_for_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    parser.advance();
    let array = parser.expect(TokenKind::Identifier, "Expect array name after \"for\".")?;
    parser.expect(TokenKind::Each, "Expect \"each\" after array name.")?;
    let item = parser.expect(TokenKind::Identifier, "Expect item name after \"each\".")?;

    let index = if parser.match_kind(TokenKind::Comma) {
        Some(parser.expect(TokenKind::Identifier, "Index variable must come after \",\".")?)
    } else {
        None
    };

    parser.expect(TokenKind::Newline, "Statement must occupy the rest of the line.")?;
    let body = parse_block(parser);

    Ok(Stmt::For(ForStmt {
        array,
        item,
        index,
        body,
    }))
}

/// `name;` or `name: a, b` followed by the indented body. The keyword has
/// already been consumed.
pub fn parse_function(parser: &mut Parser, kind: &str) -> ParseResult<FunctionStmt> {
    let name = parser.expect(TokenKind::Identifier, &format!("Expect {} name.", kind))?;

    let mut params = vec![];
    if parser.match_kind(TokenKind::Colon) {
        loop {
            params.push(parser.expect(TokenKind::Identifier, "Expect parameter name.")?);

            if !parser.match_kind(TokenKind::Comma) {
                break;
            }
        }
    } else if !parser.match_kind(TokenKind::Semicolon) {
        return Err(parser.unexpected("Expect \":\" or \";\" after function name."));
    }

    parser.end_of_line("Function header must occupy the rest of the line.")?;
    let body = parse_block(parser);

    Ok(FunctionStmt {
        name,
        params: ParamsStmt { params },
        body,
    })
}

pub fn parse_template_decl_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    parser.advance();
    let name = parser.expect(TokenKind::Identifier, "Expect template name.")?;

    let parent = if parser.match_kind(TokenKind::Ext) {
        Some(parser.expect(
            TokenKind::Identifier,
            "Expect parent template name after \"ext\".",
        )?)
    } else {
        None
    };

    parser.expect(
        TokenKind::Newline,
        "Template header must occupy the rest of the line.",
    )?;
    parser.indent_level += 1;

    let mut fields = vec![];
    if parser.is_indents()
        && (parser.check_next(TokenKind::Identifier)
            || (parser.check_next(TokenKind::Def) && parser.check_at(2, TokenKind::Identifier)))
    {
        loop {
            parser.consume_indents()?;

            let def = parser.match_token(TokenKind::Def);
            let name = parser.expect(TokenKind::Identifier, "Expect field name.")?;
            fields.push(TemplateFieldStmt { def, name });

            if !parser.match_kind(TokenKind::Comma) {
                break;
            }
            parser.expect(TokenKind::Newline, "Expect another field after \",\".")?;
        }

        parser.end_of_line("Field must occupy the rest of the line.")?;
    }

    let mut methods = vec![];
    if parser.is_indents()
        && (parser.check_next(TokenKind::Fun)
            || (parser.check_next(TokenKind::Def) && parser.check_at(2, TokenKind::Fun)))
    {
        while parser.is_indents() {
            parser.consume_indents()?;

            let def = parser.match_token(TokenKind::Def);
            if def.is_some() {
                parser.expect(TokenKind::Fun, "Expect \"fun\" after \"def\".")?;
            } else if !parser.match_kind(TokenKind::Fun) {
                return Err(parser.unexpected("Expect method after indentation."));
            }

            let method = parse_function(parser, "method")?;
            methods.push(TemplateMethodStmt { def, method });
        }
    }

    if parser.is_indents() {
        parser.consume_indents()?;

        if parser.match_kind(TokenKind::Def) {
            return Err(parser.unexpected("Expect field or method after \"def\"."));
        }
        return Err(parser.unexpected("Expect a field or method."));
    }

    parser.indent_level -= 1;

    Ok(Stmt::Template(TemplateStmt {
        name,
        parent,
        fields: TemplateFieldsStmt { fields },
        methods: TemplateMethodsStmt { methods },
    }))
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let mutable = parser.match_token(TokenKind::Mut);
    parser.advance();

    let name = parser.expect(TokenKind::Identifier, "Expect class name.")?;

    let parent = if parser.match_kind(TokenKind::Ext) {
        Some(parser.expect(TokenKind::Identifier, "Expect parent class name after \"ext\".")?)
    } else {
        None
    };

    let mut templates = vec![];
    if parser.match_kind(TokenKind::Of) {
        loop {
            templates.push(parser.expect(TokenKind::Identifier, "Expect template name.")?);

            if !parser.match_kind(TokenKind::Comma) {
                break;
            }
        }
    }

    parser.end_of_line("Class header must occupy the rest of the line.")?;
    parser.indent_level += 1;

    let mut requirements = vec![];
    if parser.is_indents() && parser.check_next(TokenKind::Req) {
        parser.consume_indents()?;
        parser.advance();

        loop {
            requirements.push(parser.expect(TokenKind::Identifier, "Expect template name.")?);

            if !parser.match_kind(TokenKind::Comma) {
                break;
            }
        }

        parser.end_of_line("\"req\" statement must occupy the rest of the line.")?;
    }

    let fields = parse_class_fields(parser)?;

    let mut methods = vec![];
    while parser.is_indents() {
        parser.consume_indents()?;

        let overrides = parser.match_token(TokenKind::Override);
        let private = parser.match_token(TokenKind::Priv);
        let mutable = parser.match_token(TokenKind::Mut);

        if !parser.match_kind(TokenKind::Fun) {
            return Err(parser.unexpected("Expect method."));
        }

        let function = parse_function(parser, "method")?;
        methods.push(MethodStmt {
            overrides,
            private,
            mutable,
            function,
        });
    }

    parser.indent_level -= 1;

    Ok(Stmt::Class(ClassStmt {
        mutable,
        name,
        parent,
        templates: TemplatesStmt { templates },
        require: RequireStmt { requirements },
        fields: FieldsStmt { fields },
        methods: MethodsStmt { methods },
    }))
}

/// Whether the indentation token under the cursor starts a field line:
/// `[priv] [mut] name`.
fn field_ahead(parser: &Parser) -> bool {
    if !parser.is_indents() {
        return false;
    }

    let mut offset = 1;
    if parser.check_at(offset, TokenKind::Priv) {
        offset += 1;
    }
    if parser.check_at(offset, TokenKind::Mut) {
        offset += 1;
    }

    parser.check_at(offset, TokenKind::Identifier)
}

/// One field per line; a trailing comma continues the list on the next
/// line.
fn parse_class_fields(parser: &mut Parser) -> ParseResult<Vec<FieldStmt>> {
    let mut fields = vec![];

    if !field_ahead(parser) {
        return Ok(fields);
    }

    loop {
        if !field_ahead(parser) {
            return Err(parser.unexpected("Expect field after \",\"."));
        }

        parser.consume_indents()?;

        let private = parser.match_token(TokenKind::Priv);
        let mutable = parser.match_token(TokenKind::Mut);
        let name = parser.expect(TokenKind::Identifier, "Expect field name.")?;
        fields.push(FieldStmt {
            private,
            mutable,
            name,
        });

        if !parser.match_kind(TokenKind::Comma) {
            parser.end_of_line("Field must occupy the rest of the line.")?;
            return Ok(fields);
        }

        parser.expect(TokenKind::Newline, "Field must occupy the rest of the line.")?;
    }
}
