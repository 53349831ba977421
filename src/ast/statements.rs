use crate::Position;

use super::{ast::VarDecl, expressions::Expr};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Return(ReturnStmt),
    Continue(ContinueStmt),
    Break(BreakStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn position(&self) -> Position {
        match self {
            Stmt::Block(block) => block.position,
            Stmt::If(if_stmt) => if_stmt.position,
            Stmt::While(while_stmt) => while_stmt.position,
            Stmt::For(for_stmt) => for_stmt.position,
            Stmt::Return(return_stmt) => return_stmt.position,
            Stmt::Continue(continue_stmt) => continue_stmt.position,
            Stmt::Break(break_stmt) => break_stmt.position,
            Stmt::Expression(expression_stmt) => expression_stmt.expression.position,
        }
    }
}

/// Block Statement
///
/// Locals are declared before any statement and are visible for the whole
/// block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub locals: Vec<VarDecl>,
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl BlockStmt {
    pub fn empty(position: Position) -> Self {
        BlockStmt {
            locals: vec![],
            body: vec![],
            position,
        }
    }
}

/// If Statement
///
/// A missing `else` is an empty block.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: BlockStmt,
    pub else_body: BlockStmt,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub position: Position,
}

/// For Statement
///
/// Omitted clauses are `ExprKind::NoExpr`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Expr,
    pub condition: Expr,
    pub step: Expr,
    pub body: BlockStmt,
    pub position: Position,
}

/// Return Statement
///
/// `return;` carries an `ExprKind::NoExpr` value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}
