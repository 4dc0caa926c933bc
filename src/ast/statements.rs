use crate::lexer::tokens::Token;

use super::{ast::Stmt, ast::Expr};

/// Root of every parse: the top-level declarations in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeclarationsStmt {
    pub declarations: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
}

// TEMPLATES

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateStmt {
    pub name: Token,
    pub parent: Option<Token>,
    pub fields: TemplateFieldsStmt,
    pub methods: TemplateMethodsStmt,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateFieldsStmt {
    pub fields: Vec<TemplateFieldStmt>,
}

/// A template field, optionally prefixed with `def`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateFieldStmt {
    pub def: Option<Token>,
    pub name: Token,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateMethodsStmt {
    pub methods: Vec<TemplateMethodStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateMethodStmt {
    pub def: Option<Token>,
    pub method: FunctionStmt,
}

// CLASSES

/// `[mut] class Name [ext Parent] [of T, ...] [req A, ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStmt {
    pub mutable: Option<Token>,
    pub name: Token,
    pub parent: Option<Token>,
    pub templates: TemplatesStmt,
    pub require: RequireStmt,
    pub fields: FieldsStmt,
    pub methods: MethodsStmt,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplatesStmt {
    pub templates: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequireStmt {
    pub requirements: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldsStmt {
    pub fields: Vec<FieldStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldStmt {
    pub private: Option<Token>,
    pub mutable: Option<Token>,
    pub name: Token,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodsStmt {
    pub methods: Vec<MethodStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodStmt {
    pub overrides: Option<Token>,
    pub private: Option<Token>,
    pub mutable: Option<Token>,
    pub function: FunctionStmt,
}

// FUNCTIONS

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStmt {
    pub name: Token,
    pub params: ParamsStmt,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamsStmt {
    pub params: Vec<Token>,
}

// CONTROL FLOW

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: BlockStmt,
    pub else_ifs: ElseIfsStmt,
    pub else_branch: Option<BlockStmt>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElseIfsStmt {
    pub branches: Vec<ElseIfStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseIfStmt {
    pub condition: Expr,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
}

/// `for array each item[, index]`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub array: Token,
    pub item: Token,
    pub index: Option<Token>,
    pub body: BlockStmt,
}

// SIMPLE STATEMENTS

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// `echo expression`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub keyword: Token,
    pub value: Option<Expr>,
}

/// Payload of `val`, `mut` and `let`. Names and initializers are paired by
/// position; either list may be longer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub names: Vec<Token>,
    pub initializers: Vec<Expr>,
}
