use crate::lexer::tokens::Token;

use super::{ast::Expr, types::TypeExpr};

/// Assignment to a plain variable: `name = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// `|Type|expression`
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub cast_type: TypeExpr,
    pub expression: Box<Expr>,
}

/// `callee;` or `callee: a, b`
///
/// `paren` is the `;` or `:` token that introduced the call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: ArgsExpr,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgsExpr {
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetExpr {
    pub object: Box<Expr>,
    pub name: Token,
}

/// `Name{field -> value, ...}`
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceExpr {
    pub name: Token,
    pub fields: InstanceFieldsExpr,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstanceFieldsExpr {
    pub fields: Vec<InstanceFieldExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstanceFieldExpr {
    pub name: Token,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub expression: Box<Expr>,
}

/// Number, string, `true`, `false` or `null`; the token's lexeme is the value.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Token,
}

/// `&&` and `||`
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Assignment to a field: `object.name = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct SetExpr {
    pub object: Box<Expr>,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuperExpr {
    pub keyword: Token,
    pub method: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelfExpr {
    pub keyword: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: Token,
}
