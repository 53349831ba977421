use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::Type, Position};

/// A user-facing diagnostic: what went wrong and, when known, where.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// A program-wide diagnostic that is not tied to a source line.
    pub fn unpositioned(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<Position> {
        self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::PrintRedefined => "PrintRedefined",
            ErrorImpl::FunctionAlreadyDeclared { .. } => "FunctionAlreadyDeclared",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::LocalAlreadyDeclared { .. } => "LocalAlreadyDeclared",
            ErrorImpl::DuplicateParameter { .. } => "DuplicateParameter",
            ErrorImpl::VoidParameter { .. } => "VoidParameter",
            ErrorImpl::VoidVariable { .. } => "VoidVariable",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::ReturnTypeIsPrint { .. } => "ReturnTypeIsPrint",
            ErrorImpl::MissingEntryPoint { .. } => "MissingEntryPoint",
            ErrorImpl::EntryPointHasParameters { .. } => "EntryPointHasParameters",
            ErrorImpl::EntryPointReturnType { .. } => "EntryPointReturnType",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::LeftValueNotDeclared { .. } => "LeftValueNotDeclared",
            ErrorImpl::FunctionNotDeclared { .. } => "FunctionNotDeclared",
            ErrorImpl::AssignmentTypeMatchError { .. } => "AssignmentTypeMatchError",
            ErrorImpl::CannotCompare { .. } => "CannotCompare",
            ErrorImpl::CannotMod { .. } => "CannotMod",
            ErrorImpl::NoNegative { .. } => "NoNegative",
            ErrorImpl::LogicalOperands { .. } => "LogicalOperands",
            ErrorImpl::LogicalNot { .. } => "LogicalNot",
            ErrorImpl::BitwiseOperands { .. } => "BitwiseOperands",
            ErrorImpl::BitwiseNot { .. } => "BitwiseNot",
            ErrorImpl::PrintWithoutFormat => "PrintWithoutFormat",
            ErrorImpl::PrintFormatType { .. } => "PrintFormatType",
            ErrorImpl::WrongArgumentCount { .. } => "WrongArgumentCount",
            ErrorImpl::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
            ErrorImpl::PredicateNotBool { .. } => "PredicateNotBool",
            ErrorImpl::ReturnValueInVoidFunction { .. } => "ReturnValueInVoidFunction",
            ErrorImpl::MissingReturnValue { .. } => "MissingReturnValue",
            ErrorImpl::ReturnTypeMatchError { .. } => "ReturnTypeMatchError",
            ErrorImpl::OutsideLoop { .. } => "OutsideLoop",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(f, "{}: {}", position.line, self.internal_error),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Front end
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Declarations
    #[error("Function printf cannot be redefined.")]
    PrintRedefined,
    #[error("Function {function} was previously defined.")]
    FunctionAlreadyDeclared { function: String },
    #[error("var {variable} was previously defined.")]
    VariableAlreadyDeclared { variable: String },
    #[error("var {variable} was previously defined in this scope.")]
    LocalAlreadyDeclared { variable: String },
    #[error("Function {function} 's parameter has a duplicate name {parameter}.")]
    DuplicateParameter { function: String, parameter: String },
    #[error("Function {function} 's parameter {parameter} has an invalid type Void.")]
    VoidParameter { function: String, parameter: String },
    #[error("var {variable} cannot be of type Void. Void can just be used as return type.")]
    VoidVariable { variable: String },
    #[error("Unknown type {type_}.")]
    UnknownType { type_: String },
    #[error("Function {function} cannot have printf as its return type.")]
    ReturnTypeIsPrint { function: String },

    // Entry point
    #[error("Main function {entry} is not defined.")]
    MissingEntryPoint { entry: String },
    #[error("Main function {entry} should not have any parameters.")]
    EntryPointHasParameters { entry: String },
    #[error("Main function {entry} should have return type Void.")]
    EntryPointReturnType { entry: String },

    // Scoping
    #[error("object {variable} has not been defined.")]
    VariableNotDeclared { variable: String },
    #[error("Left value {variable} has not been defined.")]
    LeftValueNotDeclared { variable: String },
    #[error("Function {function} has not been defined.")]
    FunctionNotDeclared { function: String },

    // Expressions
    #[error("Right value must have type {expected}, got {received}.")]
    AssignmentTypeMatchError { expected: Type, received: Type },
    #[error("Cannot compare a {left} and a {right}.")]
    CannotCompare { left: Type, right: Type },
    #[error("Cannot mod a {left} and a {right}.")]
    CannotMod { left: Type, right: Type },
    #[error("A {operand} doesn't have a negative.")]
    NoNegative { operand: Type },
    #[error("Cannot apply logical {operator} to a {left} and a {right}.")]
    LogicalOperands { operator: String, left: Type, right: Type },
    #[error("Cannot apply logical ! to a {operand}.")]
    LogicalNot { operand: Type },
    #[error("Cannot apply bitwise {operator} to a {left} and a {right}.")]
    BitwiseOperands { operator: String, left: Type, right: Type },
    #[error("Cannot apply bitwise ~ to a {operand}.")]
    BitwiseNot { operand: Type },
    #[error("printf requires a format argument of type String.")]
    PrintWithoutFormat,
    #[error("The first argument of printf should be String, got {received}.")]
    PrintFormatType { received: Type },
    #[error("Function {function} called with wrong number of arguments: expected {expected}, received {received}.")]
    WrongArgumentCount { function: String, expected: usize, received: usize },
    #[error("Function {function}, the {index} parameter should be {expected} but provided a {received}.")]
    ArgumentTypeMatchError { function: String, index: usize, expected: Type, received: Type },

    // Statements
    #[error("Predicate of '{statement}' does not have type Bool.")]
    PredicateNotBool { statement: &'static str },
    #[error("Function {function} has return type Void, so it cannot return a value.")]
    ReturnValueInVoidFunction { function: String },
    #[error("Function {function} should return a value of type {expected}.")]
    MissingReturnValue { function: String, expected: Type },
    #[error("Function {function} should return {expected}, but returns {received}.")]
    ReturnTypeMatchError { function: String, expected: Type, received: Type },
    #[error("'{statement}' must be used inside a loop.")]
    OutsideLoop { statement: &'static str },
}

/// A defect in the checker itself rather than in the program being checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InternalError {
    #[error("exit_scope called with no open scope")]
    ScopeUnderflow,
    #[error("bind of {name:?} attempted with no open scope")]
    NoOpenScope { name: String },
    #[error("scope stack left at depth {depth} after the pass")]
    UnbalancedScopes { depth: usize },
}

/// Verdict of the semantic pass.
#[derive(Error, Debug)]
pub enum SemantError {
    #[error("Compilation halted due to static semantic errors.")]
    Halted(super::diagnostics::Diagnostics),
    #[error("FATAL: {0}")]
    Internal(#[from] InternalError),
}
