use std::fmt::Display;

use super::symbol::Symbol;

/// The primitive types of the language.
///
/// `Void` only appears as a function return annotation. The checker also
/// records it on expressions whose check failed, so parents do not report
/// the same problem twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    String,
    Bool,
    Void,
}

impl Type {
    /// Resolves a type annotation. Unknown names resolve to `None`.
    pub fn from_symbol(name: Symbol) -> Option<Type> {
        match name {
            Symbol::INT => Some(Type::Int),
            Symbol::FLOAT => Some(Type::Float),
            Symbol::STRING => Some(Type::String),
            Symbol::BOOL => Some(Type::Bool),
            Symbol::VOID => Some(Type::Void),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// Types that `==` and `!=` accept.
    pub fn is_equatable(&self) -> bool {
        matches!(self, Type::Int | Type::Float | Type::Bool)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Int => "Int",
            Type::Float => "Float",
            Type::String => "String",
            Type::Bool => "Bool",
            Type::Void => "Void",
        };
        write!(f, "{}", name)
    }
}
