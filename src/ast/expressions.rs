use crate::Span;

// LITERALS

/// Literal Expression
/// The value a literal token denotes, with escapes still unprocessed.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralExpr {
    Integer(i64),
    Float(f64),
    Char(char),
    String(String),
    Template(String),
}

/// A literal expression and the span of the token it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralNode {
    pub literal: LiteralExpr,
    pub span: Span,
}
