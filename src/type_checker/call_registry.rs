use std::collections::HashMap;

use crate::{
    ast::{ast::FnDecl, symbol::Symbol, types::Type},
    Position,
};

/// What a call site needs to know about a function.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub name: Symbol,
    /// Declared parameter types in order. `None` for a parameter whose
    /// annotation was rejected (Void or unknown); such positions accept any
    /// argument.
    pub params: Vec<Option<Type>>,
    pub return_type: Symbol,
    pub position: Position,
    /// Index of the declaration in `Program::decls`.
    pub decl_index: usize,
}

impl Signature {
    pub fn from_decl(function: &FnDecl, decl_index: usize) -> Self {
        Signature {
            name: function.name,
            params: function
                .params
                .iter()
                .map(|param| Type::from_symbol(param.type_name).filter(|ty| *ty != Type::Void))
                .collect(),
            return_type: function.return_type,
            position: function.position,
            decl_index,
        }
    }

    /// Type a call to this function evaluates to, if the annotation is valid.
    pub fn resolved_return_type(&self) -> Option<Type> {
        Type::from_symbol(self.return_type)
    }
}

/// Flat function-name to signature table, filled once before any body is
/// checked and only read afterwards.
#[derive(Debug, Default)]
pub struct CallRegistry {
    functions: HashMap<Symbol, Signature>,
}

impl CallRegistry {
    pub fn new() -> Self {
        CallRegistry {
            functions: HashMap::new(),
        }
    }

    pub fn install(&mut self, signature: Signature) {
        self.functions.insert(signature.name, signature);
    }

    pub fn get(&self, name: Symbol) -> Option<&Signature> {
        self.functions.get(&name)
    }

    pub fn contains(&self, name: Symbol) -> bool {
        self.functions.contains_key(&name)
    }

    /// Whether the declaration at `decl_index` is the one registered under
    /// `name`. Rejected duplicates are not.
    pub fn is_installed(&self, name: Symbol, decl_index: usize) -> bool {
        self.get(name)
            .is_some_and(|signature| signature.decl_index == decl_index)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
