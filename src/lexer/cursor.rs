use std::rc::Rc;

use crate::Position;

/// Position-tracked character access over one source buffer.
///
/// Sub-scanners borrow the cursor mutably for the length of one token and
/// never keep a reference to it afterwards.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: Vec<char>,
    pos: usize,
    file: Rc<String>,
}

impl Cursor {
    pub fn new(source: &str, file: Rc<String>) -> Cursor {
        Cursor {
            source: source.chars().collect(),
            pos: 0,
            file,
        }
    }

    /// Replaces the buffer and file name, rewinding to the first character.
    pub fn rebind(&mut self, source: &str, file: Rc<String>) {
        self.source.clear();
        self.source.extend(source.chars());
        self.pos = 0;
        self.file = file;
    }

    pub fn current(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    pub fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn previous(&self) -> Option<char> {
        self.pos
            .checked_sub(1)
            .and_then(|pos| self.source.get(pos).copied())
    }

    /// Moves one character forward and returns the new current character.
    pub fn next(&mut self) -> Option<char> {
        self.advance();
        self.current()
    }

    pub fn advance(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> u32 {
        self.pos as u32
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    /// The current offset, stamped with `line` and the bound file name.
    pub fn here(&self, line: u32) -> Position {
        Position::new(self.position(), line, Rc::clone(&self.file))
    }
}
