//! Integration tests for end-to-end tokenization.
//!
//! These tests drive whole programs through the lexer, check diagnostics
//! rendered for malformed input, and hand the resulting tokens to the
//! literal parser.

use std::rc::Rc;

use pretty_assertions::assert_eq;
use tokenizer::{
    ast::expressions::LiteralExpr,
    lexer::{
        lexer::{tokenize, Lexer, LexerOptions},
        tokens::{Token, TokenKind},
    },
    parser::expr::parse_literals,
    render_error,
};

const PROGRAM: &str = r#"// Geometry helpers
import math::vector;

public class Circle {
    private const radius: float = 2.5;

    /* area of the circle,
       rounded down */
    public fn area() -> float {
        return radius * radius * 1.5;
    }
}

fn main() {
    var mask = 0b1111_0000;
    var mode = 0o755;
    var color = 0xFFaa00;
    var items = list[1..10];
    var greeting = `Hello, ${name}!`;
    var sep = ',';
    if (mask instanceof Flags) { print("masked"); } else { rest(...args); }
}
"#;

fn values(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.value.as_str()).collect()
}

#[test]
fn test_tokenize_program() {
    let tokens = tokenize(PROGRAM.to_string(), Some("geometry.src".to_string())).unwrap();

    assert_eq!(
        values(&tokens[..6]),
        vec!["import", "math", "::", "vector", ";", "public"]
    );
    assert_eq!(tokens[0].line(), 2);

    let find = |value: &str| {
        tokens
            .iter()
            .find(|token| token.value == value)
            .unwrap_or_else(|| panic!("no token {:?}", value))
    };

    assert_eq!(find("11110000").kind, TokenKind::BinaryLiteral);
    assert_eq!(find("755").kind, TokenKind::OctalLiteral);
    assert_eq!(find("FFaa00").kind, TokenKind::HexaLiteral);
    assert_eq!(find("1.5").kind, TokenKind::FloatLiteral);
    assert_eq!(find("Hello, ${name}!").kind, TokenKind::TemplateString);
    assert_eq!(find("masked").kind, TokenKind::StringLiteral);
    assert_eq!(find("instanceof").kind, TokenKind::Operator);
    assert_eq!(find("...").kind, TokenKind::Token);
    assert_eq!(find("->").kind, TokenKind::Token);
    assert_eq!(find("area").line(), 9);
    assert_eq!(find("return").line(), 10);

    assert!(tokens.iter().all(|token| token.kind != TokenKind::Unknown));
    assert!(tokens
        .windows(2)
        .all(|pair| pair[0].line() <= pair[1].line()));
}

#[test]
fn test_char_literal_comma_is_a_char() {
    let tokens = tokenize(PROGRAM.to_string(), None).unwrap();

    let sep = tokens
        .iter()
        .position(|token| token.value == "sep")
        .unwrap();
    assert_eq!(tokens[sep + 2].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[sep + 2].value, ",");
}

#[test]
fn test_slice_in_program() {
    let tokens = tokenize(PROGRAM.to_string(), None).unwrap();

    let items = tokens
        .iter()
        .position(|token| token.value == "items")
        .unwrap();
    assert_eq!(
        values(&tokens[items..items + 9]),
        vec!["items", "=", "list", "[", "1", "..", "10", "]", ";"]
    );
}

#[test]
fn test_scans_are_idempotent() {
    let first = tokenize(PROGRAM.to_string(), Some("a.src".to_string())).unwrap();
    let second = Lexer::default().tokenize(PROGRAM, "a.src").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_one_lexer_many_files() {
    let mut lexer = Lexer::new(LexerOptions::default());

    let program = lexer.tokenize(PROGRAM, "geometry.src").unwrap();
    let small = lexer.tokenize("var x = 1;", "small.src").unwrap();
    let again = lexer.tokenize(PROGRAM, "geometry.src").unwrap();

    assert_eq!(small.len(), 5);
    assert_eq!(small[0].line(), 1);
    assert_eq!(small[0].span.start.file.as_str(), "small.src");
    assert_eq!(program, again);
}

#[test]
fn test_failure_reports_first_error() {
    let source = "var ok = 1;\nvar bad = 1__0;\n";
    let error = tokenize(source.to_string(), Some("bad.src".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "MisplacedOrDuplicateSeparator");
    assert_eq!(error.get_line(), 2);
    assert_eq!(error.get_position().offset, 23);
    assert_eq!(error.to_string(), "bad.src:2:23: consecutive digit separators");
}

#[test]
fn test_render_diagnostic() {
    let source = "fn f() {\n    var c = 'ab';\n}\n";
    let error = tokenize(source.to_string(), Some("chars.src".to_string())).unwrap_err();

    let rendered = render_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines,
        vec![
            "error: CharLiteralOverflow (Use double quotes for strings longer than one character)",
            "-> chars.src",
            "  |",
            "2 | var c = 'ab';",
            "  | --------^",
        ]
    );
}

#[test]
fn test_literals_from_program() {
    let tokens = tokenize(PROGRAM.to_string(), None).unwrap();
    let literals: Vec<LiteralExpr> = parse_literals(tokens, Rc::new("shell".to_string()))
        .unwrap()
        .into_iter()
        .map(|node| node.literal)
        .collect();

    assert_eq!(
        literals,
        vec![
            LiteralExpr::Float(2.5),
            LiteralExpr::Float(1.5),
            LiteralExpr::Integer(0b1111_0000),
            LiteralExpr::Integer(0o755),
            LiteralExpr::Integer(0xFFAA00),
            LiteralExpr::Integer(1),
            LiteralExpr::Integer(10),
            LiteralExpr::Template("Hello, ${name}!".to_string()),
            LiteralExpr::Char(','),
            LiteralExpr::String("masked".to_string()),
        ]
    );
}

#[test]
fn test_strict_mode_rejects_unknown_characters() {
    let mut lexer = Lexer::new(LexerOptions { strict: true });

    assert!(lexer.tokenize(PROGRAM, "geometry.src").is_ok());

    let error = lexer.tokenize("var a = b % c;", "mod.src").unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().offset, 10);
}
