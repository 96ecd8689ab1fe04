#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A point in a source file: 0-based character offset and 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, file: Rc<String>) -> Self {
        Position { offset, line, file }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the character at `position`.
///
/// Returns the 1-based line number, the text of that line (including its
/// trailing newline, if any) and the character column inside the line.
/// An offset one past the end of the source maps onto the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) || (pos == end && !line.ends_with('\n')) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    if pos == start {
        return Some((line_number, String::new(), 0));
    }

    None
}

/// Renders an error against the source it was raised for.
///
/// ```text
/// error: MultipleFloatDots (only one dot is permitted in a float literal)
/// -> main.src
///    |
/// 20 | var a = 3.1.4;
///    | -----------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();

    match error.get_tip() {
        ErrorTip::None => {
            let _ = writeln!(out, "error: {}", error.get_error_name());
        }
        tip => {
            let _ = writeln!(out, "error: {} ({})", error.get_error_name(), tip);
        }
    }
    let _ = writeln!(out, "-> {}", error.get_file());

    let position = error.get_position();
    let Some((_, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        let _ = writeln!(out, "   {}", error.get_message());
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();
    (string.chars().skip(start).collect(), start)
}
