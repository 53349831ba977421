use crate::Position;

use super::{statements::BlockStmt, symbol::Symbol};

/// A parsed program: the ordered list of top-level declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub decls: Vec<Decl>,
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Function(FnDecl),
    Variable(VarDecl),
}

/// Variable declaration, used for globals and for block locals.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Symbol,
    pub type_name: Symbol,
    pub position: Position,
}

/// Formal parameter of a function.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Symbol,
    pub type_name: Symbol,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub name: Symbol,
    pub params: Vec<Param>,
    pub return_type: Symbol,
    pub body: BlockStmt,
    pub position: Position,
}
