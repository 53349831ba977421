use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Position};

use super::{symbol::Symbol, types::Type};

/// Expression node.
///
/// `ty` is empty after parsing and filled in by the type checker.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub position: Position,
    pub ty: Option<Type>,
}

impl Expr {
    pub fn new(kind: ExprKind, position: Position) -> Self {
        Expr {
            kind,
            position,
            ty: None,
        }
    }

    /// The placeholder for an omitted expression (`return;`, `for (;;)`).
    pub fn empty(position: Position) -> Self {
        Expr::new(ExprKind::NoExpr, position)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, ExprKind::NoExpr)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // LITERALS
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),

    /// Reference to a variable.
    Object(Symbol),
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Call(CallExpr),
    /// Call argument wrapper.
    Actual(Box<Expr>),
    NoExpr,
}

/// `target = value`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub target: Symbol,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: PrefixOperator,
    pub right_expr: Box<Expr>,
}

/// Call of a registered function or of the built-in `printf`.
///
/// Every element of `actuals` is an `ExprKind::Actual` node.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: Symbol,
    pub actuals: Vec<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    And,
    Or,
    Xor,
    BitAnd,
    BitOr,
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<BinaryOperator> {
        let operator = match kind {
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Dash => BinaryOperator::Sub,
            TokenKind::Star => BinaryOperator::Mul,
            TokenKind::Slash => BinaryOperator::Div,
            TokenKind::Percent => BinaryOperator::Mod,
            TokenKind::Less => BinaryOperator::Lt,
            TokenKind::LessEquals => BinaryOperator::Le,
            TokenKind::Greater => BinaryOperator::Gt,
            TokenKind::GreaterEquals => BinaryOperator::Ge,
            TokenKind::Equals => BinaryOperator::Eq,
            TokenKind::NotEquals => BinaryOperator::Ne,
            TokenKind::And => BinaryOperator::And,
            TokenKind::Or => BinaryOperator::Or,
            TokenKind::Caret => BinaryOperator::Xor,
            TokenKind::Ampersand => BinaryOperator::BitAnd,
            TokenKind::Pipe => BinaryOperator::BitOr,
            _ => return None,
        };
        Some(operator)
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::Xor => "^",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Neg,
    Not,
    BitNot,
}

impl PrefixOperator {
    pub fn from_token(kind: TokenKind) -> Option<PrefixOperator> {
        match kind {
            TokenKind::Dash => Some(PrefixOperator::Neg),
            TokenKind::Not => Some(PrefixOperator::Not),
            TokenKind::Tilde => Some(PrefixOperator::BitNot),
            _ => None,
        }
    }
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            PrefixOperator::Neg => "-",
            PrefixOperator::Not => "!",
            PrefixOperator::BitNot => "~",
        };
        write!(f, "{}", text)
    }
}
