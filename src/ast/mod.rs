/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Programs and top-level declarations
/// - expressions: Expression nodes and operators
/// - statements: Statement nodes
/// - symbol: Interned identifiers
/// - types: The primitive types annotations resolve to
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod symbol;
pub mod types;
