//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! Transforms a token stream into a `Program`. Expressions use a Pratt
//! parser: NUD (null denotation) and LED (left denotation) handlers are
//! looked up by token kind, and binding powers decide precedence.
//! Declarations, blocks and statements are parsed by recursive descent.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
