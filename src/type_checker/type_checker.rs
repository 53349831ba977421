use crate::{
    ast::{
        ast::{Decl, Program},
        symbol::Symbol,
    },
    errors::{
        diagnostics::Diagnostics,
        errors::{InternalError, SemantError},
    },
};

use super::{
    call_registry::CallRegistry,
    declarations::{check_main, install_functions, install_globals},
    environment::Environment,
    stmt::type_check_function,
};

/// State of one semantic pass.
///
/// The driver builds one per program; nothing here is shared between runs.
#[derive(Debug)]
pub struct TypeChecker {
    pub environment: Environment,
    pub registry: CallRegistry,
    pub diagnostics: Diagnostics,
    /// Name of the function execution starts in.
    pub entry_point: Symbol,
    /// Function whose body is being checked, for return diagnostics.
    pub current_function: Option<Symbol>,
    /// Number of `while`/`for` bodies enclosing the current statement.
    pub loop_depth: usize,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::with_entry_point(Symbol::MAIN)
    }

    pub fn with_entry_point(entry_point: Symbol) -> Self {
        TypeChecker {
            environment: Environment::new(),
            registry: CallRegistry::new(),
            diagnostics: Diagnostics::new(),
            entry_point,
            current_function: None,
            loop_depth: 0,
        }
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        TypeChecker::new()
    }
}

/// Runs the whole semantic pass over `program`, annotating every expression
/// with its type.
///
/// User errors are collected in the returned checker's `diagnostics`; an
/// `Err` means the checker itself misbehaved.
pub fn type_check(program: &mut Program, entry_point: Symbol) -> Result<TypeChecker, InternalError> {
    let mut type_checker = TypeChecker::with_entry_point(entry_point);

    install_functions(&mut type_checker, program);
    check_main(&mut type_checker);

    type_checker.environment.enter_scope();
    install_globals(&mut type_checker, program)?;

    for (index, decl) in program.decls.iter_mut().enumerate() {
        let Decl::Function(function) = decl else {
            continue;
        };

        // Rejected declarations (printf, duplicates) are not checked
        if !type_checker.registry.is_installed(function.name, index) {
            log::trace!("skipping uninstalled function {} at {}", function.name, function.position);
            continue;
        }

        type_check_function(&mut type_checker, function)?;
    }

    type_checker.environment.exit_scope()?;

    let depth = type_checker.environment.depth();
    if depth != 0 {
        return Err(InternalError::UnbalancedScopes { depth });
    }

    log::debug!(
        "semantic pass finished with {} diagnostics",
        type_checker.diagnostics.len()
    );
    Ok(type_checker)
}

/// Pass/fail verdict for `program`: any diagnostic halts compilation.
pub fn semant(program: &mut Program, entry_point: Symbol) -> Result<(), SemantError> {
    let type_checker = type_check(program, entry_point)?;

    if type_checker.diagnostics.has_errors() {
        return Err(SemantError::Halted(type_checker.diagnostics));
    }

    Ok(())
}
