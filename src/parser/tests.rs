//! Unit tests for the parser module.
//!
//! This module contains tests for building literal expressions from
//! classified tokens.

use std::rc::Rc;

use pretty_assertions::assert_eq;
use test_case::test_case;

use super::{
    expr::{parse_literal_expr, parse_literals, parse_primary_expr},
    parser::Parser,
};
use crate::{
    ast::expressions::LiteralExpr,
    lexer::{lexer::tokenize, tokens::TokenKind},
};

fn literal(source: &str) -> LiteralExpr {
    let tokens = tokenize(source.to_string(), Some("test.src".to_string())).unwrap();
    parse_literal_expr(&tokens[0]).unwrap().literal
}

#[test_case("42", 42 ; "decimal")]
#[test_case("1_000_000", 1_000_000 ; "decimal with separators")]
#[test_case("0b101", 5 ; "binary")]
#[test_case("0o17", 15 ; "octal")]
#[test_case("0xFF", 255 ; "hex")]
#[test_case("0xff", 255 ; "lowercase hex")]
fn test_parse_integer_literals(source: &str, expected: i64) {
    assert_eq!(literal(source), LiteralExpr::Integer(expected));
}

#[test]
fn test_parse_float_literal() {
    assert_eq!(literal("1.25"), LiteralExpr::Float(1.25));
}

#[test]
fn test_parse_quoted_literals() {
    assert_eq!(literal("'a'"), LiteralExpr::Char('a'));
    assert_eq!(literal("\"hi\""), LiteralExpr::String("hi".to_string()));
    assert_eq!(literal("`${x}`"), LiteralExpr::Template("${x}".to_string()));
}

#[test]
fn test_parse_integer_overflow() {
    let tokens = tokenize("99999999999999999999".to_string(), None).unwrap();
    let error = parse_literal_expr(&tokens[0]).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_parse_non_literal() {
    let tokens = tokenize("foo".to_string(), None).unwrap();
    let error = parse_literal_expr(&tokens[0]).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_literals_in_order() {
    let tokens = tokenize(
        "var a = 0x10; var b = 'c'; fn f() -> float { return 2.5; }".to_string(),
        None,
    )
    .unwrap();

    let literals: Vec<LiteralExpr> = parse_literals(tokens, Rc::new("shell".to_string()))
        .unwrap()
        .into_iter()
        .map(|node| node.literal)
        .collect();

    assert_eq!(
        literals,
        vec![
            LiteralExpr::Integer(16),
            LiteralExpr::Char('c'),
            LiteralExpr::Float(2.5),
        ]
    );
}

#[test]
fn test_parser_expect() {
    let tokens = tokenize("var x".to_string(), None).unwrap();
    let mut parser = Parser::new(tokens, Rc::new("shell".to_string()));

    assert_eq!(parser.expect(TokenKind::Statement).unwrap().value, "var");
    assert!(parser.expect(TokenKind::Statement).is_err());
    assert_eq!(parser.expect(TokenKind::IdentifierName).unwrap().value, "x");
    assert!(!parser.has_tokens());

    let error = parser.expect(TokenKind::Token).unwrap_err();
    assert_eq!(error.get_position().offset, 5);
}

#[test]
fn test_parse_primary_at_end_of_input() {
    let mut parser = Parser::new(vec![], Rc::new("empty.src".to_string()));
    let error = parse_primary_expr(&mut parser).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_file(), "empty.src");
}
