//! Parser implementation over the lexer's token stream.
//!
//! This module contains the main Parser struct: a cursor over a token
//! sequence used by the expression parsing functions.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Expects a token of the specified kind.
    ///
    /// Returns the token and advances past it, or an `UnexpectedToken`
    /// error pointing at whatever was found instead.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )),
            None => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: String::from("end of input"),
                },
                self.get_position(),
            )),
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Position of the current token, or the end of the last one.
    pub fn get_position(&self) -> Position {
        match self.current_token().or(self.tokens.last()) {
            Some(token) if self.has_tokens() => token.span.start.clone(),
            Some(token) => token.span.end.clone(),
            None => Position::new(0, 1, Rc::clone(&self.file)),
        }
    }
}
