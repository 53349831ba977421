use std::collections::HashMap;

use crate::{
    ast::{symbol::Symbol, types::Type},
    errors::errors::InternalError,
};

/// What a name is bound to in a scope.
///
/// A declaration whose type was rejected still occupies its name as
/// `Rejected`, so later declarations of the same name are redefinitions and
/// uses of it stay silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Typed(Type),
    Rejected,
}

impl Binding {
    pub fn ty(self) -> Option<Type> {
        match self {
            Binding::Typed(ty) => Some(ty),
            Binding::Rejected => None,
        }
    }
}

impl From<Type> for Binding {
    fn from(ty: Type) -> Self {
        Binding::Typed(ty)
    }
}

impl From<Option<Type>> for Binding {
    fn from(ty: Option<Type>) -> Self {
        ty.map_or(Binding::Rejected, Binding::Typed)
    }
}

/// Stack of lexical scopes, innermost last.
///
/// An inner binding hides an outer one with the same name until its scope
/// is exited.
#[derive(Debug, Default)]
pub struct Environment {
    scopes: Vec<HashMap<Symbol, Binding>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment { scopes: vec![] }
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
        log::trace!("enter scope (depth {})", self.scopes.len());
    }

    pub fn exit_scope(&mut self) -> Result<(), InternalError> {
        log::trace!("exit scope (depth {})", self.scopes.len());
        self.scopes
            .pop()
            .map(|_| ())
            .ok_or(InternalError::ScopeUnderflow)
    }

    /// Binds `name` in the innermost scope. Callers check for an existing
    /// binding first with `probe_current`.
    pub fn bind(&mut self, name: Symbol, binding: impl Into<Binding>) -> Result<(), InternalError> {
        let Some(scope) = self.scopes.last_mut() else {
            return Err(InternalError::NoOpenScope {
                name: name.to_string(),
            });
        };

        scope.insert(name, binding.into());
        Ok(())
    }

    pub fn lookup(&self, name: Symbol) -> Option<Binding> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(&name).copied())
    }

    pub fn probe_current(&self, name: Symbol) -> Option<Binding> {
        self.scopes.last().and_then(|scope| scope.get(&name).copied())
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
