//! Type parsing for cast expressions.
//!
//! A type is a sequence of atoms. An identifier is a plain type name and a
//! parenthesized sequence is a union. Each token that can start an atom
//! has a handler in the type lookup table; the sequence ends at the first
//! token without one.

use std::collections::HashMap;

use crate::{
    ast::types::{TypeAtom, TypeExpr},
    lexer::tokens::TokenKind,
};

use super::parser::{ParseResult, Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> ParseResult<TypeAtom>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_name_type);
    parser.type_nud(TokenKind::OpenParen, parse_union_type);
}

pub fn parse_type(parser: &mut Parser) -> ParseResult<TypeExpr> {
    let mut atoms = vec![];

    while let Some(handler) = parser
        .get_type_nud_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        atoms.push(handler(parser)?);
    }

    if atoms.is_empty() {
        return Err(parser.unexpected("Expect type."));
    }

    Ok(TypeExpr { atoms })
}

fn parse_name_type(parser: &mut Parser) -> ParseResult<TypeAtom> {
    Ok(TypeAtom::Name(parser.advance().clone()))
}

fn parse_union_type(parser: &mut Parser) -> ParseResult<TypeAtom> {
    parser.advance();
    let inner = parse_type(parser)?;
    parser.expect(TokenKind::CloseParen, "Expect \")\" after type union.")?;

    Ok(TypeAtom::Union(inner))
}
