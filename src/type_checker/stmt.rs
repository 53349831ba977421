use crate::{
    ast::{
        ast::FnDecl,
        expressions::Expr,
        statements::{BlockStmt, ForStmt, IfStmt, ReturnStmt, Stmt, WhileStmt},
        symbol::Symbol,
        types::Type,
    },
    errors::errors::{ErrorImpl, InternalError},
    Position,
};

use super::{expr::type_check_expr, type_checker::TypeChecker};

/// Checks one installed function: its return annotation, its parameters
/// (bound in a scope of their own) and its body.
pub fn type_check_function(type_checker: &mut TypeChecker, function: &mut FnDecl) -> Result<(), InternalError> {
    log::trace!("checking function {} at {}", function.name, function.position);
    let errors_before = type_checker.diagnostics.len();

    let previous_function = type_checker.current_function.replace(function.name);
    let previous_loop_depth = std::mem::take(&mut type_checker.loop_depth);

    let return_type = if function.return_type == Symbol::PRINTF {
        type_checker.diagnostics.error_at(
            ErrorImpl::ReturnTypeIsPrint {
                function: function.name.to_string(),
            },
            function.position,
        );
        None
    } else {
        let resolved = Type::from_symbol(function.return_type);
        if resolved.is_none() {
            type_checker.diagnostics.error_at(
                ErrorImpl::UnknownType {
                    type_: function.return_type.to_string(),
                },
                function.position,
            );
        }
        resolved
    };

    type_checker.environment.enter_scope();

    for param in &function.params {
        let ty = match Type::from_symbol(param.type_name) {
            Some(Type::Void) => {
                type_checker.diagnostics.error_at(
                    ErrorImpl::VoidParameter {
                        function: function.name.to_string(),
                        parameter: param.name.to_string(),
                    },
                    param.position,
                );
                None
            }
            None => {
                type_checker.diagnostics.error_at(
                    ErrorImpl::UnknownType {
                        type_: param.type_name.to_string(),
                    },
                    param.position,
                );
                None
            }
            ty => ty,
        };

        if type_checker.environment.probe_current(param.name).is_some() {
            type_checker.diagnostics.error_at(
                ErrorImpl::DuplicateParameter {
                    function: function.name.to_string(),
                    parameter: param.name.to_string(),
                },
                param.position,
            );
            continue;
        }

        type_checker.environment.bind(param.name, ty)?;
    }

    type_check_block(type_checker, &mut function.body, return_type)?;
    type_checker.environment.exit_scope()?;

    type_checker.current_function = previous_function;
    type_checker.loop_depth = previous_loop_depth;

    log::debug!(
        "function {}: {} diagnostics",
        function.name,
        type_checker.diagnostics.len() - errors_before
    );
    Ok(())
}

/// Checks a block in a fresh scope: locals first, then statements.
pub fn type_check_block(
    type_checker: &mut TypeChecker,
    block: &mut BlockStmt,
    return_type: Option<Type>,
) -> Result<(), InternalError> {
    type_checker.environment.enter_scope();

    for local in &block.locals {
        log::trace!("declaring local {} at {}", local.name, local.position);

        let ty = match Type::from_symbol(local.type_name) {
            None => {
                type_checker.diagnostics.error_at(
                    ErrorImpl::UnknownType {
                        type_: local.type_name.to_string(),
                    },
                    local.position,
                );
                None
            }
            Some(Type::Void) => {
                type_checker.diagnostics.error_at(
                    ErrorImpl::VoidVariable {
                        variable: local.name.to_string(),
                    },
                    local.position,
                );
                None
            }
            ty => ty,
        };

        if type_checker.environment.probe_current(local.name).is_some() {
            type_checker.diagnostics.error_at(
                ErrorImpl::LocalAlreadyDeclared {
                    variable: local.name.to_string(),
                },
                local.position,
            );
            continue;
        }

        type_checker.environment.bind(local.name, ty)?;
    }

    for stmt in block.body.iter_mut() {
        type_check_stmt(type_checker, stmt, return_type)?;
    }

    type_checker.environment.exit_scope()
}

/// `return_type` is the enclosing function's declared return type, or `None`
/// when that annotation was invalid and return values go unchecked.
pub fn type_check_stmt(
    type_checker: &mut TypeChecker,
    stmt: &mut Stmt,
    return_type: Option<Type>,
) -> Result<(), InternalError> {
    log::trace!("checking statement at {}", stmt.position());

    match stmt {
        Stmt::Block(block) => type_check_block(type_checker, block, return_type),
        Stmt::If(if_stmt) => type_check_if(type_checker, if_stmt, return_type),
        Stmt::While(while_stmt) => type_check_while(type_checker, while_stmt, return_type),
        Stmt::For(for_stmt) => type_check_for(type_checker, for_stmt, return_type),
        Stmt::Return(return_stmt) => {
            type_check_return(type_checker, return_stmt, return_type);
            Ok(())
        }
        Stmt::Continue(continue_stmt) => {
            check_inside_loop(type_checker, "continue", continue_stmt.position);
            Ok(())
        }
        Stmt::Break(break_stmt) => {
            check_inside_loop(type_checker, "break", break_stmt.position);
            Ok(())
        }
        Stmt::Expression(expression_stmt) => {
            type_check_expr(type_checker, &mut expression_stmt.expression);
            Ok(())
        }
    }
}

/// Reports a predicate that checked to something other than Bool. Poisoned
/// predicates were already reported.
fn check_predicate(type_checker: &mut TypeChecker, condition: &mut Expr, statement: &'static str, position: Position) {
    match type_check_expr(type_checker, condition) {
        Some(Type::Bool) | None => {}
        Some(_) => type_checker
            .diagnostics
            .error_at(ErrorImpl::PredicateNotBool { statement }, position),
    }
}

fn check_inside_loop(type_checker: &mut TypeChecker, statement: &'static str, position: Position) {
    if type_checker.loop_depth == 0 {
        type_checker
            .diagnostics
            .error_at(ErrorImpl::OutsideLoop { statement }, position);
    }
}

fn type_check_if(
    type_checker: &mut TypeChecker,
    if_stmt: &mut IfStmt,
    return_type: Option<Type>,
) -> Result<(), InternalError> {
    check_predicate(type_checker, &mut if_stmt.condition, "if", if_stmt.position);

    // Both branches nest inside one if-level scope
    type_checker.environment.enter_scope();
    type_check_block(type_checker, &mut if_stmt.then_body, return_type)?;
    type_check_block(type_checker, &mut if_stmt.else_body, return_type)?;
    type_checker.environment.exit_scope()
}

fn type_check_loop_body(
    type_checker: &mut TypeChecker,
    body: &mut BlockStmt,
    return_type: Option<Type>,
) -> Result<(), InternalError> {
    type_checker.loop_depth += 1;
    let result = type_check_block(type_checker, body, return_type);
    type_checker.loop_depth -= 1;
    result
}

fn type_check_while(
    type_checker: &mut TypeChecker,
    while_stmt: &mut WhileStmt,
    return_type: Option<Type>,
) -> Result<(), InternalError> {
    check_predicate(type_checker, &mut while_stmt.condition, "while", while_stmt.position);
    type_check_loop_body(type_checker, &mut while_stmt.body, return_type)
}

fn type_check_for(
    type_checker: &mut TypeChecker,
    for_stmt: &mut ForStmt,
    return_type: Option<Type>,
) -> Result<(), InternalError> {
    type_check_expr(type_checker, &mut for_stmt.init);

    if for_stmt.condition.is_empty() {
        type_check_expr(type_checker, &mut for_stmt.condition);
    } else {
        check_predicate(type_checker, &mut for_stmt.condition, "for", for_stmt.position);
    }

    type_check_expr(type_checker, &mut for_stmt.step);
    type_check_loop_body(type_checker, &mut for_stmt.body, return_type)
}

fn type_check_return(type_checker: &mut TypeChecker, return_stmt: &mut ReturnStmt, return_type: Option<Type>) {
    let has_value = !return_stmt.value.is_empty();
    let value_type = type_check_expr(type_checker, &mut return_stmt.value);

    let Some(expected) = return_type else {
        return;
    };

    let function = type_checker
        .current_function
        .map(|name| name.to_string())
        .unwrap_or_default();

    match (expected, has_value, value_type) {
        (Type::Void, true, _) => type_checker.diagnostics.error_at(
            ErrorImpl::ReturnValueInVoidFunction { function },
            return_stmt.position,
        ),
        (Type::Void, false, _) => {}
        (expected, false, _) => type_checker.diagnostics.error_at(
            ErrorImpl::MissingReturnValue { function, expected },
            return_stmt.position,
        ),
        (expected, true, Some(received)) if received != expected => type_checker.diagnostics.error_at(
            ErrorImpl::ReturnTypeMatchError {
                function,
                expected,
                received,
            },
            return_stmt.position,
        ),
        _ => {}
    }
}
