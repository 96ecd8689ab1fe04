use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    tokens::{Token, TokenKind},
};

fn literal_kind(delimiter: char) -> TokenKind {
    match delimiter {
        '\'' => TokenKind::CharLiteral,
        '`' => TokenKind::TemplateString,
        _ => TokenKind::StringLiteral,
    }
}

/// Scans a quoted literal whose opening `delimiter` is under the cursor.
///
/// Content is taken verbatim up to the matching delimiter; escape
/// sequences are left for later stages. Newlines inside the literal bump
/// `line`, the token itself carries the line it started on.
pub fn scan_quoted(cursor: &mut Cursor, line: &mut u32, delimiter: char) -> Result<Token, Error> {
    let start = cursor.here(*line);
    let kind = literal_kind(delimiter);
    let mut value = String::new();

    loop {
        match cursor.next() {
            None => {
                return Err(Error::new(ErrorImpl::UnterminatedLiteral { delimiter }, start));
            }
            Some(ch) if ch == delimiter => break,
            Some(ch) => {
                if ch == '\n' {
                    *line += 1;
                }
                value.push(ch);
            }
        }
    }

    // closing delimiter
    cursor.advance();

    if kind == TokenKind::CharLiteral {
        match value.chars().count() {
            0 => return Err(Error::new(ErrorImpl::EmptyCharLiteral, start)),
            1 => {}
            _ => {
                return Err(Error::new(
                    ErrorImpl::CharLiteralOverflow { content: value },
                    start,
                ))
            }
        }
    }

    Ok(MK_TOKEN!(
        kind,
        value,
        Span {
            start,
            end: cursor.here(*line)
        }
    ))
}
