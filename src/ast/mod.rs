/// AST (Abstract Syntax Tree) module
/// Contains the syntax tree the parser produces
///
/// Submodules:
/// - ast: The `Expr` and `Stmt` enums every node is reached through
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement variants
/// - types: Type expressions used by casts
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
