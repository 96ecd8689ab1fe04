use std::rc::Rc;

use crate::{
    ast::expressions::{LiteralExpr, LiteralNode},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// Builds the literal expression for an already classified token.
pub fn parse_literal_expr(token: &Token) -> Result<LiteralNode, Error> {
    let number_error = || {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    };

    let literal = match token.kind {
        TokenKind::NumericLiteral
        | TokenKind::BinaryLiteral
        | TokenKind::OctalLiteral
        | TokenKind::HexaLiteral => {
            let radix = token.kind.radix().ok_or_else(number_error)?;
            let value = i64::from_str_radix(&token.value, radix).map_err(|_| number_error())?;
            LiteralExpr::Integer(value)
        }
        TokenKind::FloatLiteral => {
            LiteralExpr::Float(token.value.parse().map_err(|_| number_error())?)
        }
        TokenKind::CharLiteral => {
            let mut chars = token.value.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => LiteralExpr::Char(ch),
                _ => {
                    return Err(Error::new(
                        ErrorImpl::CharLiteralOverflow {
                            content: token.value.clone(),
                        },
                        token.span.start.clone(),
                    ))
                }
            }
        }
        TokenKind::StringLiteral => LiteralExpr::String(token.value.clone()),
        TokenKind::TemplateString => LiteralExpr::Template(token.value.clone()),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    };

    Ok(LiteralNode {
        literal,
        span: token.span.clone(),
    })
}

/// Parses the literal under the parser's cursor and advances past it.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<LiteralNode, Error> {
    let Some(token) = parser.current_token() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: String::from("end of input"),
            },
            parser.get_position(),
        ));
    };

    let node = parse_literal_expr(token)?;
    parser.advance();
    Ok(node)
}

/// Collects every literal in a token stream, in source order.
pub fn parse_literals(tokens: Vec<Token>, file: Rc<String>) -> Result<Vec<LiteralNode>, Error> {
    let mut parser = Parser::new(tokens, file);
    let mut literals = vec![];

    while let Some(kind) = parser.current_token_kind() {
        if kind.is_literal() {
            literals.push(parse_primary_expr(&mut parser)?);
        } else {
            parser.advance();
        }
    }

    Ok(literals)
}
