use crate::{
    ast::{
        expressions::{AssignmentExpr, BinaryExpr, BinaryOperator, CallExpr, Expr, ExprKind, PrefixExpr, PrefixOperator},
        symbol::Symbol,
        types::Type,
    },
    errors::errors::ErrorImpl,
    Position,
};

use super::type_checker::TypeChecker;

/// Computes the type of `expr` and records it on the node.
///
/// `None` means the expression is poisoned: a diagnostic was already reported
/// for it or one of its operands, and enclosing checks stay silent. The node
/// records `Void` in that case.
pub fn type_check_expr(type_checker: &mut TypeChecker, expr: &mut Expr) -> Option<Type> {
    let position = expr.position;
    log::trace!("checking expression at {}", position);

    let ty = match &mut expr.kind {
        ExprKind::Int(_) => Some(Type::Int),
        ExprKind::Float(_) => Some(Type::Float),
        ExprKind::String(_) => Some(Type::String),
        ExprKind::Bool(_) => Some(Type::Bool),
        ExprKind::Object(name) => type_check_object(type_checker, *name, position),
        ExprKind::Assignment(assignment) => type_check_assignment(type_checker, assignment, position),
        ExprKind::Binary(binary) => type_check_binary(type_checker, binary, position),
        ExprKind::Prefix(prefix) => type_check_prefix(type_checker, prefix, position),
        ExprKind::Call(call) => type_check_call(type_checker, call, position),
        ExprKind::Actual(inner) => type_check_expr(type_checker, inner),
        ExprKind::NoExpr => Some(Type::Void),
    };

    expr.ty = Some(ty.unwrap_or(Type::Void));
    ty
}

fn type_check_object(type_checker: &mut TypeChecker, name: Symbol, position: Position) -> Option<Type> {
    let Some(binding) = type_checker.environment.lookup(name) else {
        type_checker.diagnostics.error_at(
            ErrorImpl::VariableNotDeclared {
                variable: name.to_string(),
            },
            position,
        );
        return None;
    };
    binding.ty()
}

fn type_check_assignment(
    type_checker: &mut TypeChecker,
    assignment: &mut AssignmentExpr,
    position: Position,
) -> Option<Type> {
    let Some(binding) = type_checker.environment.lookup(assignment.target) else {
        type_checker.diagnostics.error_at(
            ErrorImpl::LeftValueNotDeclared {
                variable: assignment.target.to_string(),
            },
            position,
        );
        return None;
    };

    let received = type_check_expr(type_checker, &mut assignment.value);
    let expected = binding.ty()?;

    match received {
        Some(received) if received != expected => {
            type_checker.diagnostics.error_at(
                ErrorImpl::AssignmentTypeMatchError { expected, received },
                position,
            );
            None
        }
        _ => Some(expected),
    }
}

fn type_check_binary(type_checker: &mut TypeChecker, binary: &mut BinaryExpr, position: Position) -> Option<Type> {
    // Both sides are checked before bailing out so each reports its own errors
    let left = type_check_expr(type_checker, &mut binary.left);
    let right = type_check_expr(type_checker, &mut binary.right);
    let (left, right) = (left?, right?);

    let operator = binary.operator;
    let (accepted, result, error) = match operator {
        BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
            let result = match (left, right) {
                (Type::Int, Type::Int) => Type::Int,
                _ => Type::Float,
            };
            (
                left.is_numeric() && right.is_numeric(),
                result,
                ErrorImpl::CannotCompare { left, right },
            )
        }
        BinaryOperator::Mod => (
            left == Type::Int && right == Type::Int,
            Type::Int,
            ErrorImpl::CannotMod { left, right },
        ),
        BinaryOperator::Lt | BinaryOperator::Le | BinaryOperator::Gt | BinaryOperator::Ge => (
            left.is_numeric() && right.is_numeric(),
            Type::Bool,
            ErrorImpl::CannotCompare { left, right },
        ),
        BinaryOperator::Eq | BinaryOperator::Ne => (
            left.is_equatable() && right.is_equatable(),
            Type::Bool,
            ErrorImpl::CannotCompare { left, right },
        ),
        BinaryOperator::And | BinaryOperator::Or | BinaryOperator::Xor => (
            left == Type::Bool && right == Type::Bool,
            Type::Bool,
            ErrorImpl::LogicalOperands {
                operator: operator.to_string(),
                left,
                right,
            },
        ),
        BinaryOperator::BitAnd | BinaryOperator::BitOr => (
            left == Type::Int && right == Type::Int,
            Type::Int,
            ErrorImpl::BitwiseOperands {
                operator: operator.to_string(),
                left,
                right,
            },
        ),
    };

    apply_rule(type_checker, accepted, result, error, position)
}

fn type_check_prefix(type_checker: &mut TypeChecker, prefix: &mut PrefixExpr, position: Position) -> Option<Type> {
    let operand = type_check_expr(type_checker, &mut prefix.right_expr)?;

    let (accepted, result, error) = match prefix.operator {
        PrefixOperator::Neg => (operand.is_numeric(), operand, ErrorImpl::NoNegative { operand }),
        PrefixOperator::Not => (operand == Type::Bool, Type::Bool, ErrorImpl::LogicalNot { operand }),
        PrefixOperator::BitNot => (operand == Type::Int, Type::Int, ErrorImpl::BitwiseNot { operand }),
    };

    apply_rule(type_checker, accepted, result, error, position)
}

/// Yields `result` for accepted operands, otherwise reports `error` and
/// poisons the node.
fn apply_rule(
    type_checker: &mut TypeChecker,
    accepted: bool,
    result: Type,
    error: ErrorImpl,
    position: Position,
) -> Option<Type> {
    if accepted {
        return Some(result);
    }

    type_checker.diagnostics.error_at(error, position);
    None
}

fn type_check_call(type_checker: &mut TypeChecker, call: &mut CallExpr, position: Position) -> Option<Type> {
    // Arguments are checked in every case, even when the callee is unknown
    let actual_types: Vec<Option<Type>> = call
        .actuals
        .iter_mut()
        .map(|actual| type_check_expr(type_checker, actual))
        .collect();

    if call.name == Symbol::PRINTF {
        return type_check_print(type_checker, &actual_types, position);
    }

    let Some(signature) = type_checker.registry.get(call.name) else {
        type_checker.diagnostics.error_at(
            ErrorImpl::FunctionNotDeclared {
                function: call.name.to_string(),
            },
            position,
        );
        return None;
    };

    let return_type = signature.resolved_return_type();

    if signature.params.len() != actual_types.len() {
        type_checker.diagnostics.error_at(
            ErrorImpl::WrongArgumentCount {
                function: call.name.to_string(),
                expected: signature.params.len(),
                received: actual_types.len(),
            },
            position,
        );
        return return_type;
    }

    for (index, (expected, received)) in signature.params.iter().zip(&actual_types).enumerate() {
        let (Some(expected), Some(received)) = (*expected, *received) else {
            continue;
        };

        if expected != received {
            type_checker.diagnostics.error_at(
                ErrorImpl::ArgumentTypeMatchError {
                    function: call.name.to_string(),
                    index: index + 1,
                    expected,
                    received,
                },
                position,
            );
        }
    }

    return_type
}

/// `printf(format, ...)`: the format must be a String, the rest is free.
fn type_check_print(type_checker: &mut TypeChecker, actual_types: &[Option<Type>], position: Position) -> Option<Type> {
    match actual_types.first() {
        None => {
            type_checker
                .diagnostics
                .error_at(ErrorImpl::PrintWithoutFormat, position);
            None
        }
        Some(Some(received)) if *received != Type::String => {
            type_checker
                .diagnostics
                .error_at(ErrorImpl::PrintFormatType { received: *received }, position);
            None
        }
        _ => Some(Type::Void),
    }
}
