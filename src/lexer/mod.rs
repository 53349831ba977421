//! Lexical analysis.
//!
//! Turns source text into a stream of tokens using an ordered table of
//! anchored regex patterns. Keywords are looked up after an identifier
//! matches. Whitespace and `//` / `/* */` comments are skipped, and every
//! token carries its 1-based line and column.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
