use crate::{
    ast::{
        ast::{Decl, Program},
        symbol::Symbol,
        types::Type,
    },
    errors::errors::{ErrorImpl, InternalError},
};

use super::{call_registry::Signature, type_checker::TypeChecker};

/// Registers every top-level function. `printf` and repeated names are
/// reported and left out.
pub fn install_functions(type_checker: &mut TypeChecker, program: &Program) {
    for (index, decl) in program.decls.iter().enumerate() {
        let Decl::Function(function) = decl else {
            continue;
        };
        log::trace!("installing function {} at {}", function.name, function.position);

        if function.name == Symbol::PRINTF {
            type_checker
                .diagnostics
                .error_at(ErrorImpl::PrintRedefined, function.position);
            continue;
        }

        if type_checker.registry.contains(function.name) {
            type_checker.diagnostics.error_at(
                ErrorImpl::FunctionAlreadyDeclared {
                    function: function.name.to_string(),
                },
                function.position,
            );
            continue;
        }

        type_checker
            .registry
            .install(Signature::from_decl(function, index));
    }

    log::debug!("installed {} functions", type_checker.registry.len());
}

/// Binds every top-level variable in the current (global) scope. A variable
/// with a rejected type still takes its name.
pub fn install_globals(type_checker: &mut TypeChecker, program: &Program) -> Result<(), InternalError> {
    let mut installed = 0;

    for decl in &program.decls {
        let Decl::Variable(variable) = decl else {
            continue;
        };
        log::trace!("installing global {} at {}", variable.name, variable.position);

        if type_checker.environment.probe_current(variable.name).is_some() {
            type_checker.diagnostics.error_at(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: variable.name.to_string(),
                },
                variable.position,
            );
            continue;
        }

        let ty = match Type::from_symbol(variable.type_name) {
            None => {
                type_checker.diagnostics.error_at(
                    ErrorImpl::UnknownType {
                        type_: variable.type_name.to_string(),
                    },
                    variable.position,
                );
                None
            }
            Some(Type::Void) => {
                type_checker.diagnostics.error_at(
                    ErrorImpl::VoidVariable {
                        variable: variable.name.to_string(),
                    },
                    variable.position,
                );
                None
            }
            Some(ty) => {
                installed += 1;
                Some(ty)
            }
        };

        type_checker.environment.bind(variable.name, ty)?;
    }

    log::debug!("installed {} globals", installed);
    Ok(())
}

/// The entry function must exist, take no parameters and return Void.
pub fn check_main(type_checker: &mut TypeChecker) {
    let entry = type_checker.entry_point;

    let Some(signature) = type_checker.registry.get(entry) else {
        type_checker.diagnostics.error(ErrorImpl::MissingEntryPoint {
            entry: entry.to_string(),
        });
        return;
    };

    if !signature.params.is_empty() {
        type_checker.diagnostics.error_at(
            ErrorImpl::EntryPointHasParameters {
                entry: entry.to_string(),
            },
            signature.position,
        );
    }

    if signature.return_type != Symbol::VOID {
        type_checker.diagnostics.error_at(
            ErrorImpl::EntryPointReturnType {
                entry: entry.to_string(),
            },
            signature.position,
        );
    }
}
