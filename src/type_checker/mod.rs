//! Type checking and semantic analysis module.
//!
//! Validates a parsed `Program` and annotates every expression with its type:
//!
//! - Installs functions into the call registry and globals into the outermost
//!   scope, rejecting duplicates and reserved names
//! - Validates the entry function's signature
//! - Walks every function body with a scoped binding environment, checking
//!   statements and computing expression types
//!
//! Errors in the program are accumulated as diagnostics and never stop the
//! walk. Only defects in the checker itself abort it.

pub mod call_registry;
pub mod declarations;
pub mod environment;
pub mod expr;
pub mod stmt;
pub mod type_checker;
