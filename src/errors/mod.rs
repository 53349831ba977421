//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the checker:
//!
//! - Error structures with optional source position information
//! - Specific error variants for the front end and the semantic pass
//! - A diagnostics collector that accumulates errors without aborting
//! - Internal errors for defects in the checker itself

pub mod diagnostics;
pub mod errors;

#[cfg(test)]
mod tests;
