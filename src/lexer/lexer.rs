use std::rc::Rc;

use log::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    literals::scan_quoted,
    numbers::scan_number,
    tokens::{resolve_symbol, Token, TokenKind},
};

const DEFAULT_FILE: &str = "shell";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Fail on characters that belong to no token class instead of
    /// emitting them as `Unknown` tokens.
    pub strict: bool,
}

/// What the character under the cursor can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    Alphabetic,
    Numeric,
    Structural,
    Operator,
    Slash,
    Dash,
    Quote,
    Colon,
    Dot,
    Unmatched,
}

impl CharClass {
    fn of(ch: char, next: Option<char>) -> CharClass {
        match ch {
            c if c.is_whitespace() => CharClass::Whitespace,
            c if c.is_alphabetic() => CharClass::Alphabetic,
            c if c.is_ascii_digit() => CharClass::Numeric,
            '_' if next.is_some_and(|c| c.is_ascii_digit()) => CharClass::Numeric,
            '(' | ')' | '{' | '}' | '[' | ']' | ',' | '&' | '=' | '~' | ';' | '!' | '?' => {
                CharClass::Structural
            }
            '>' | '<' | '+' | '*' => CharClass::Operator,
            '/' => CharClass::Slash,
            '-' => CharClass::Dash,
            '\'' | '`' | '"' => CharClass::Quote,
            ':' => CharClass::Colon,
            '.' => CharClass::Dot,
            _ => CharClass::Unmatched,
        }
    }
}

/// Hand-written scanner turning source text into [`Token`]s.
///
/// One instance can scan any number of files in sequence; each call to
/// [`Lexer::tokenize`] rebinds the cursor and resets the line counter.
#[derive(Debug, Clone)]
pub struct Lexer {
    options: LexerOptions,
    tokens: Vec<Token>,
    cursor: Cursor,
    line: u32,
}

impl Lexer {
    pub fn new(options: LexerOptions) -> Lexer {
        Lexer {
            options,
            tokens: vec![],
            cursor: Cursor::new("", Rc::new(String::from(DEFAULT_FILE))),
            line: 1,
        }
    }

    /// Binds a new source and file name, discarding any previous scan state.
    pub fn reset(&mut self, source: &str, file: &str) {
        self.cursor.rebind(source, Rc::new(String::from(file)));
        self.line = 1;
        self.tokens.clear();
    }

    /// Scans `source` to completion.
    ///
    /// Stops at the first malformed construct; tokens gathered before it are
    /// dropped so the caller only ever sees a complete sequence or an error.
    pub fn tokenize(&mut self, source: &str, file: &str) -> Result<Vec<Token>, Error> {
        self.reset(source, file);
        debug!("tokenizing {}", file);

        match self.run() {
            Ok(()) => {
                debug!("tokenized {} into {} tokens", file, self.tokens.len());
                Ok(std::mem::take(&mut self.tokens))
            }
            Err(error) => {
                debug!("tokenizing {} failed: {}", file, error);
                self.tokens.clear();
                Err(error)
            }
        }
    }

    fn run(&mut self) -> Result<(), Error> {
        while let Some(ch) = self.cursor.current() {
            match CharClass::of(ch, self.cursor.peek()) {
                CharClass::Whitespace => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    self.cursor.advance();
                }
                CharClass::Alphabetic => self.scan_symbol(),
                CharClass::Numeric => {
                    let token = scan_number(&mut self.cursor, self.line)?;
                    self.push(token);
                }
                CharClass::Structural => self.push_fixed(TokenKind::Token, ch.to_string()),
                CharClass::Operator => self.push_fixed(TokenKind::Operator, ch.to_string()),
                CharClass::Slash => self.scan_slash()?,
                CharClass::Dash => self.scan_dash(),
                CharClass::Quote => {
                    let token = scan_quoted(&mut self.cursor, &mut self.line, ch)?;
                    self.push(token);
                }
                CharClass::Colon => self.scan_colon(),
                CharClass::Dot => self.scan_dot(),
                CharClass::Unmatched => self.scan_unknown(ch)?,
            }
        }

        Ok(())
    }

    fn here(&self) -> Position {
        self.cursor.here(self.line)
    }

    fn push(&mut self, token: Token) {
        trace!("{}", token);
        self.tokens.push(token);
    }

    /// Emits a token made of the next `value.len()` characters.
    fn push_fixed(&mut self, kind: TokenKind, value: String) {
        let start = self.here();
        for _ in value.chars() {
            self.cursor.advance();
        }

        let token = MK_TOKEN!(kind, value, Span { start, end: self.here() });
        self.push(token);
    }

    fn scan_symbol(&mut self) {
        let start = self.here();
        let mut symbol = String::new();

        while let Some(ch) = self.cursor.current() {
            if !ch.is_alphanumeric() {
                break;
            }
            symbol.push(ch);
            self.cursor.advance();
        }

        let kind = resolve_symbol(&symbol);
        let token = MK_TOKEN!(kind, symbol, Span { start, end: self.here() });
        self.push(token);
    }

    fn scan_slash(&mut self) -> Result<(), Error> {
        match self.cursor.peek() {
            Some('/') => {
                while let Some(ch) = self.cursor.next() {
                    if ch == '\n' {
                        break;
                    }
                }
                trace!("skipped line comment ending at {}", self.cursor.position());
            }
            Some('*') => {
                let start = self.here();
                self.cursor.advance();

                loop {
                    match self.cursor.next() {
                        None => return Err(Error::new(ErrorImpl::UnterminatedComment, start)),
                        Some('*') if self.cursor.peek() == Some('/') => {
                            self.cursor.advance();
                            self.cursor.advance();
                            break;
                        }
                        Some('\n') => self.line += 1,
                        Some(_) => {}
                    }
                }
                trace!("skipped block comment ending at {}", self.cursor.position());
            }
            _ => self.push_fixed(TokenKind::Operator, String::from("/")),
        }

        Ok(())
    }

    fn scan_dash(&mut self) {
        if self.cursor.peek() == Some('>') {
            self.push_fixed(TokenKind::Token, String::from("->"));
        } else {
            self.push_fixed(TokenKind::Operator, String::from("-"));
        }
    }

    fn scan_colon(&mut self) {
        if self.cursor.peek() == Some(':') {
            self.push_fixed(TokenKind::Operator, String::from("::"));
        } else {
            self.push_fixed(TokenKind::Token, String::from(":"));
        }
    }

    fn scan_dot(&mut self) {
        let start = self.here();
        let mut dots = String::from(".");
        self.cursor.advance();

        while dots.len() < 3 && self.cursor.current() == Some('.') {
            dots.push('.');
            self.cursor.advance();
        }

        let token = MK_TOKEN!(TokenKind::Token, dots, Span { start, end: self.here() });
        self.push(token);
    }

    fn scan_unknown(&mut self, ch: char) -> Result<(), Error> {
        if self.options.strict {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: ch.to_string(),
                },
                self.here(),
            ));
        }

        warn!(
            "unrecognised character {:?} at {}:{}",
            ch,
            self.cursor.file(),
            self.line
        );
        self.push_fixed(TokenKind::Unknown, ch.to_string());
        Ok(())
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new(LexerOptions::default())
    }
}

/// Tokenizes `source` with default options.
///
/// `file` names the source in diagnostics and defaults to `shell`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file_name = file.unwrap_or_else(|| String::from(DEFAULT_FILE));
    Lexer::default().tokenize(&source, &file_name)
}
