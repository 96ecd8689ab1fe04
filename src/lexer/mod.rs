//! Lexical analysis module for the tokenizer.
//!
//! This module contains the lexer that converts source text into a
//! sequence of tokens for parsing. It handles:
//!
//! - Character classification and dispatch over a position-tracked cursor
//! - Recognition of keywords, identifiers, operators and punctuation
//! - Decimal, float, binary, octal and hexadecimal literals with `_` separators
//! - Char, string and template literals
//! - Line and block comments and whitespace elision
//! - Line and offset tracking for error reporting

pub mod cursor;
pub mod lexer;
pub mod literals;
pub mod numbers;
pub mod tokens;
