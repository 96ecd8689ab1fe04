/// AST (Abstract Syntax Tree) module
/// Contains the literal expressions built from classified tokens
///
/// Submodules:
/// - expressions: Literal expression values and their source spans
pub mod expressions;
