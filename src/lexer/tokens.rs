use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words, mapped to the kind they are emitted as.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for keyword in KEYWORDS {
            map.insert(*keyword, TokenKind::Statement);
        }
        map.insert("instanceof", TokenKind::Operator);
        map
    };
}

pub const KEYWORDS: &[&str] = &[
    "fn",
    "var",
    "const",
    "class",
    "interface",
    "enum",
    "struct",
    "if",
    "else",
    "for",
    "while",
    "do",
    "break",
    "continue",
    "return",
    "match",
    "import",
    "export",
    "module",
    "new",
    "this",
    "super",
    "null",
    "true",
    "false",
    "public",
    "private",
    "protected",
    "static",
    "abstract",
    "final",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    IdentifierName,
    Statement,

    NumericLiteral,
    FloatLiteral,
    BinaryLiteral,
    OctalLiteral,
    HexaLiteral,

    CharLiteral,
    StringLiteral,
    TemplateString,

    Operator,
    Token,
    Unknown,
}

impl TokenKind {
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::NumericLiteral
                | TokenKind::FloatLiteral
                | TokenKind::BinaryLiteral
                | TokenKind::OctalLiteral
                | TokenKind::HexaLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
                | TokenKind::TemplateString
        )
    }

    /// Radix of an integer literal kind.
    pub fn radix(&self) -> Option<u32> {
        match self {
            TokenKind::NumericLiteral => Some(10),
            TokenKind::BinaryLiteral => Some(2),
            TokenKind::OctalLiteral => Some(8),
            TokenKind::HexaLiteral => Some(16),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) @{}:{}",
            self.kind,
            self.value,
            self.line(),
            self.position()
        )
    }
}

impl Token {
    /// Offset of the token's first character in the source.
    pub fn position(&self) -> u32 {
        self.span.start.offset
    }

    pub fn line(&self) -> u32 {
        self.span.start.line
    }
}

/// Classifies a scanned alphanumeric run.
pub fn resolve_symbol(symbol: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(symbol)
        .copied()
        .unwrap_or(TokenKind::IdentifierName)
}
