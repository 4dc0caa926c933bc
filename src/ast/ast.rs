use super::{expressions::*, statements::*};

/// Statement Types
///
/// Discriminant of a [`Stmt`], used for logging and assertions.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    Declarations,
    Block,
    Template,
    Class,
    Expression,
    Function,
    If,
    Print,
    Return,
    Val,
    Mut,
    Let,
    While,
    For,
}

/// Statement
///
/// The three variable declaration forms share one payload and differ only
/// in the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declarations(DeclarationsStmt),
    Block(BlockStmt),
    Template(TemplateStmt),
    Class(ClassStmt),
    Expression(ExpressionStmt),
    Function(FunctionStmt),
    If(IfStmt),
    Print(PrintStmt),
    Return(ReturnStmt),
    Val(VarDeclStmt),
    Mut(VarDeclStmt),
    Let(VarDeclStmt),
    While(WhileStmt),
    For(ForStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Declarations(_) => StmtType::Declarations,
            Stmt::Block(_) => StmtType::Block,
            Stmt::Template(_) => StmtType::Template,
            Stmt::Class(_) => StmtType::Class,
            Stmt::Expression(_) => StmtType::Expression,
            Stmt::Function(_) => StmtType::Function,
            Stmt::If(_) => StmtType::If,
            Stmt::Print(_) => StmtType::Print,
            Stmt::Return(_) => StmtType::Return,
            Stmt::Val(_) => StmtType::Val,
            Stmt::Mut(_) => StmtType::Mut,
            Stmt::Let(_) => StmtType::Let,
            Stmt::While(_) => StmtType::While,
            Stmt::For(_) => StmtType::For,
        }
    }
}

/// Expression Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Assign,
    Binary,
    Cast,
    Call,
    Get,
    Instance,
    Grouping,
    Literal,
    Logical,
    Set,
    Super,
    SelfRef,
    Unary,
    Variable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Assign(AssignExpr),
    Binary(BinaryExpr),
    Cast(CastExpr),
    Call(CallExpr),
    Get(GetExpr),
    Instance(InstanceExpr),
    Grouping(GroupingExpr),
    Literal(LiteralExpr),
    Logical(LogicalExpr),
    Set(SetExpr),
    Super(SuperExpr),
    SelfRef(SelfExpr),
    Unary(UnaryExpr),
    Variable(VariableExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Assign(_) => ExprType::Assign,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Cast(_) => ExprType::Cast,
            Expr::Call(_) => ExprType::Call,
            Expr::Get(_) => ExprType::Get,
            Expr::Instance(_) => ExprType::Instance,
            Expr::Grouping(_) => ExprType::Grouping,
            Expr::Literal(_) => ExprType::Literal,
            Expr::Logical(_) => ExprType::Logical,
            Expr::Set(_) => ExprType::Set,
            Expr::Super(_) => ExprType::Super,
            Expr::SelfRef(_) => ExprType::SelfRef,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Variable(_) => ExprType::Variable,
        }
    }
}
