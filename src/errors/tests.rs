//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::types::Type;
use crate::errors::diagnostics::Diagnostics;
use crate::errors::errors::{Error, ErrorImpl, InternalError, SemantError};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::new(10, 3),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        Position::new(42, 1),
    );

    assert_eq!(error.get_position().map(|p| p.line), Some(42));
}

#[test]
fn test_positioned_error_display() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        },
        Position::new(7, 12),
    );

    assert_eq!(error.to_string(), "7: object foo has not been defined.");
}

#[test]
fn test_unpositioned_error_display() {
    let error = Error::unpositioned(ErrorImpl::MissingEntryPoint {
        entry: "main".to_string(),
    });

    assert_eq!(error.get_position(), None);
    assert_eq!(error.to_string(), "Main function main is not defined.");
}

#[test]
fn test_type_mismatch_messages() {
    let error = ErrorImpl::AssignmentTypeMatchError {
        expected: Type::Int,
        received: Type::Bool,
    };
    assert_eq!(error.to_string(), "Right value must have type Int, got Bool.");

    let error = ErrorImpl::CannotCompare {
        left: Type::Int,
        right: Type::String,
    };
    assert_eq!(error.to_string(), "Cannot compare a Int and a String.");
}

#[test]
fn test_predicate_message() {
    let error = ErrorImpl::PredicateNotBool { statement: "if" };
    assert_eq!(error.to_string(), "Predicate of 'if' does not have type Bool.");
}

#[test]
fn test_function_already_declared_error() {
    let error = Error::new(
        ErrorImpl::FunctionAlreadyDeclared {
            function: "main".to_string(),
        },
        Position::new(3, 1),
    );

    assert_eq!(error.get_error_name(), "FunctionAlreadyDeclared");
    assert_eq!(error.to_string(), "3: Function main was previously defined.");
}

#[test]
fn test_unknown_type_error() {
    let error = Error::new(
        ErrorImpl::UnknownType {
            type_: "CustomType".to_string(),
        },
        Position::new(0, 0),
    );

    assert_eq!(error.get_error_name(), "UnknownType");
}

#[test]
fn test_diagnostics_keep_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    diagnostics.error(ErrorImpl::MissingEntryPoint {
        entry: "main".to_string(),
    });
    diagnostics.error_at(
        ErrorImpl::NoNegative {
            operand: Type::String,
        },
        Position::new(4, 2),
    );

    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.has_errors());
    assert_eq!(
        diagnostics.render(),
        vec![
            "Main function main is not defined.".to_string(),
            "4: A String doesn't have a negative.".to_string(),
        ]
    );
}

#[test]
fn test_semant_error_display() {
    let halted = SemantError::Halted(Diagnostics::new());
    assert_eq!(
        halted.to_string(),
        "Compilation halted due to static semantic errors."
    );

    let internal: SemantError = InternalError::ScopeUnderflow.into();
    assert_eq!(
        internal.to_string(),
        "FATAL: exit_scope called with no open scope"
    );
}
