//! Parser module consuming the token stream.
//!
//! Only literal expressions are built here: each literal token is turned
//! into the value it denotes, using the kind the lexer already assigned.

pub mod expr;
pub mod parser;

#[cfg(test)]
mod tests;
