use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArgsExpr, AssignExpr, BinaryExpr, CallExpr, CastExpr, GetExpr, GroupingExpr,
            InstanceExpr, InstanceFieldExpr, InstanceFieldsExpr, LiteralExpr, LogicalExpr,
            SelfExpr, SetExpr, SuperExpr, UnaryExpr, VariableExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::BindingPower,
    parser::{ParseResult, Parser},
    types::parse_type,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    let enclosed = parser
        .previous()
        .is_some_and(|token| token.kind == TokenKind::OpenParen);

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = parser.get_nud_lookup().get(&token_kind).copied();

    // A cast binds looser than the unary operators and calls.
    let nud = match nud {
        Some(_) if token_kind == TokenKind::Pipe && bp >= BindingPower::Cast => None,
        nud => nud,
    };

    let Some(nud) = nud else {
        return Err(parser.unexpected("Expect expression."));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, keep extending the left side
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = parser
            .get_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);

        if next_bp <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        parser.enclosed_call = enclosed;
        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_literal_expr(parser: &mut Parser) -> ParseResult<Expr> {
    Ok(Expr::Literal(LiteralExpr {
        value: parser.advance().clone(),
    }))
}

/// A variable, or an instance literal when the name is followed by `{`.
pub fn parse_symbol_expr(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.check_next(TokenKind::OpenCurly) {
        return parse_instance_expr(parser);
    }

    Ok(Expr::Variable(VariableExpr {
        name: parser.advance().clone(),
    }))
}

pub fn parse_self_expr(parser: &mut Parser) -> ParseResult<Expr> {
    Ok(Expr::SelfRef(SelfExpr {
        keyword: parser.advance().clone(),
    }))
}

pub fn parse_super_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let keyword = parser.advance().clone();
    parser.expect(TokenKind::Dot, "Expect \".\" after \"super\".")?;
    let method = parser.expect(TokenKind::Identifier, "Expect superclass method name.")?;

    Ok(Expr::Super(SuperExpr { keyword, method }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.advance();
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "Expect \")\" after expression.")?;

    Ok(Expr::Grouping(GroupingExpr {
        expression: Box::new(expression),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        operator,
        right: Box::new(right),
    }))
}

/// `|Type|expression`. Both pipes must touch the type text.
pub fn parse_cast_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let open = parser.advance().clone();
    let first = parser.current_token().clone();
    let cast_type = parse_type(parser)?;

    if first.column != open.end_column() || first.line != open.line {
        return Err(parser.error_at(ErrorImpl::CastLeftSpacing, &first));
    }

    let last = parser.previous().cloned().unwrap_or(first);
    let close = parser.expect(TokenKind::Pipe, "Expect \"|\" after type.")?;

    if last.end_column() != close.column || last.line != close.line {
        return Err(parser.error_at(ErrorImpl::CastRightSpacing, &close));
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Cast(CastExpr {
        cast_type,
        expression: Box::new(expression),
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> ParseResult<Expr> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_logical_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> ParseResult<Expr> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Logical(LogicalExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// Right associative. An invalid target is reported but the left side is
/// still handed back so the statement can complete.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> ParseResult<Expr> {
    let equals = parser.advance().clone();
    let value = Box::new(parse_expr(parser, BindingPower::Default)?);

    match left {
        Expr::Variable(variable) => Ok(Expr::Assign(AssignExpr {
            name: variable.name,
            value,
        })),
        Expr::Get(get) => Ok(Expr::Set(SetExpr {
            object: get.object,
            name: get.name,
            value,
        })),
        left => {
            parser.report(Error::at_token(ErrorImpl::InvalidAssignmentTarget, &equals));
            Ok(left)
        }
    }
}

pub fn parse_member_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> ParseResult<Expr> {
    parser.advance();
    let name = parser.expect(TokenKind::Identifier, "Expect property name after \".\".")?;

    Ok(Expr::Get(GetExpr {
        object: Box::new(left),
        name,
    }))
}

/// `callee;` calls without arguments and `callee: a, b` with arguments.
/// The `;` or `:` must directly follow the callee. Inside parentheses the
/// argument list may continue on lines indented one level deeper.
pub fn parse_call_expr(parser: &mut Parser, callee: Expr, _bp: BindingPower) -> ParseResult<Expr> {
    let enclosed = parser.enclosed_call;
    let paren = parser.current_token().clone();
    let adjacent = parser
        .previous()
        .is_some_and(|previous| previous.line == paren.line && previous.end_column() == paren.column);

    if paren.kind == TokenKind::Semicolon {
        if !adjacent {
            return Err(parser.unexpected("Expect semicolon immediately after function call name."));
        }
        parser.advance();

        return Ok(Expr::Call(CallExpr {
            callee: Box::new(callee),
            paren,
            arguments: ArgsExpr::default(),
        }));
    }

    if !adjacent {
        return Err(parser.unexpected("Expect colon immediately after function call name."));
    }
    parser.advance();

    let mut arguments = vec![];

    if enclosed {
        parser.indent_level += 1;

        loop {
            if parser.match_kind(TokenKind::Newline) {
                if !parser.is_indents() {
                    return Err(parser.unexpected("Expected indented arguments."));
                }
                parser.consume_indents()?;
            }

            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if !parser.match_kind(TokenKind::Comma) {
                break;
            }
        }

        parser.indent_level -= 1;
    } else {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if !parser.match_kind(TokenKind::Comma) {
                break;
            }
        }
    }

    Ok(Expr::Call(CallExpr {
        callee: Box::new(callee),
        paren,
        arguments: ArgsExpr { arguments },
    }))
}

/// `Name{field -> value, ...}` on one line, or spread over lines indented
/// one level deeper with the closing `}` on the last field line or on a
/// line of its own at the starting depth.
pub fn parse_instance_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let name = parser.advance().clone();
    parser.advance();

    let mut fields = vec![];

    if parser.check(TokenKind::CloseCurly) {
        let close = parser.advance().clone();
        return Ok(finish_instance(parser, name, fields, &close));
    }

    if !parser.match_kind(TokenKind::Newline) {
        if parse_instance_line(parser, &mut fields, false)? {
            let close = parser.expect(TokenKind::CloseCurly, "Expect \"}\" after fields.")?;
            return Ok(finish_instance(parser, name, fields, &close));
        }
    }

    parser.indent_level += 1;

    while !parser.is_at_end() {
        if parser.indent_level == 1 && parser.check(TokenKind::CloseCurly) {
            let close = parser.advance().clone();
            parser.indent_level -= 1;
            return Ok(finish_instance(parser, name, fields, &close));
        }

        if parser.is_indents() && parser.check_next(TokenKind::CloseCurly) {
            parser.indent_level -= 1;
            parser.consume_indents()?;
            let close = parser.advance().clone();
            return Ok(finish_instance(parser, name, fields, &close));
        }

        parser.consume_indents()?;

        if parse_instance_line(parser, &mut fields, true)? {
            let close = parser.expect(TokenKind::CloseCurly, "Expect \"}\" after fields.")?;
            parser.indent_level -= 1;
            return Ok(finish_instance(parser, name, fields, &close));
        }
    }

    Err(parser.unexpected("Expect \"}\" after fields."))
}

/// Parses comma separated fields up to the end of the line. Returns
/// whether the `}` is expected on this same line.
///
/// On the line of the opening brace a trailing comma may end the line;
/// on continuation lines the line simply ends after a field.
fn parse_instance_line(
    parser: &mut Parser,
    fields: &mut Vec<InstanceFieldExpr>,
    continuation: bool,
) -> ParseResult<bool> {
    loop {
        if !continuation && parser.match_kind(TokenKind::Newline) {
            return Ok(false);
        }

        let name = parser.expect(TokenKind::Identifier, "Expect field name.")?;
        parser.expect(
            TokenKind::FieldEqual,
            "Expect field assignment operator \"->\".",
        )?;
        let value = parse_expr(parser, BindingPower::Default)?;
        fields.push(InstanceFieldExpr { name, value });

        if continuation && parser.match_kind(TokenKind::Newline) {
            return Ok(false);
        }
        if !parser.match_kind(TokenKind::Comma) {
            return Ok(true);
        }
    }
}

fn finish_instance(
    parser: &mut Parser,
    name: Token,
    fields: Vec<InstanceFieldExpr>,
    close: &Token,
) -> Expr {
    if fields.is_empty() {
        parser.report(Error::at_token(ErrorImpl::EmptyInstance, close));
    }

    Expr::Instance(InstanceExpr {
        name,
        fields: InstanceFieldsExpr { fields },
    })
}
