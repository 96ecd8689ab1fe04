use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberMode {
    Decimal,
    Float,
    Binary,
    Octal,
    Hexadecimal,
}

impl NumberMode {
    fn from_marker(marker: char) -> Option<NumberMode> {
        match marker {
            'b' | 'B' => Some(NumberMode::Binary),
            'o' | 'O' => Some(NumberMode::Octal),
            'x' | 'X' => Some(NumberMode::Hexadecimal),
            _ => None,
        }
    }

    fn accepts(&self, digit: char) -> bool {
        match self {
            NumberMode::Decimal | NumberMode::Float => digit.is_ascii_digit(),
            NumberMode::Binary => matches!(digit, '0' | '1'),
            NumberMode::Octal => matches!(digit, '0'..='7'),
            NumberMode::Hexadecimal => digit.is_ascii_hexdigit(),
        }
    }

    fn malformed(&self, found: char) -> ErrorImpl {
        match self {
            NumberMode::Decimal | NumberMode::Float => ErrorImpl::MalformedDecimalLiteral { found },
            NumberMode::Binary => ErrorImpl::MalformedBinaryLiteral { found },
            NumberMode::Octal => ErrorImpl::MalformedOctalLiteral { found },
            NumberMode::Hexadecimal => ErrorImpl::MalformedHexLiteral { found },
        }
    }

    fn kind(&self) -> TokenKind {
        match self {
            NumberMode::Decimal => TokenKind::NumericLiteral,
            NumberMode::Float => TokenKind::FloatLiteral,
            NumberMode::Binary => TokenKind::BinaryLiteral,
            NumberMode::Octal => TokenKind::OctalLiteral,
            NumberMode::Hexadecimal => TokenKind::HexaLiteral,
        }
    }
}

/// Scans a numeric literal starting at the cursor's current character.
///
/// The token's value drops the base prefix and every `_` separator, so
/// `0xFF` yields `FF` and `1_000` yields `1000`. A `..` directly after the
/// digits ends the literal so ranges such as `0..10` scan as three tokens.
pub fn scan_number(cursor: &mut Cursor, line: u32) -> Result<Token, Error> {
    let start = cursor.here(line);
    let mut mode = NumberMode::Decimal;
    let mut value = String::new();
    let mut last = None;

    if cursor.current() == Some('0') {
        if let Some(next) = cursor.peek() {
            if let Some(prefixed) = NumberMode::from_marker(next) {
                mode = prefixed;
                cursor.advance();
                cursor.advance();
                last = Some(next);
            } else if next.is_ascii_alphanumeric() || next == '_' {
                cursor.advance();
                return Err(Error::new(
                    ErrorImpl::InvalidBaseMarker { found: next },
                    cursor.here(line),
                ));
            }
        }
    }

    while let Some(ch) = cursor.current() {
        match ch {
            '_' => {
                let next = cursor.peek();
                if next == Some('_') {
                    return Err(Error::new(
                        ErrorImpl::MisplacedOrDuplicateSeparator { duplicate: true },
                        cursor.here(line),
                    ));
                }

                let between_digits = last.is_some_and(|c: char| c.is_ascii_digit())
                    && next.is_some_and(|c| c.is_ascii_digit());
                if !between_digits {
                    return Err(Error::new(
                        ErrorImpl::MisplacedOrDuplicateSeparator { duplicate: false },
                        cursor.here(line),
                    ));
                }
            }
            '.' => {
                if cursor.peek() == Some('.') {
                    break;
                }

                match mode {
                    NumberMode::Decimal => {
                        mode = NumberMode::Float;
                        value.push(ch);
                    }
                    NumberMode::Float => {
                        return Err(Error::new(ErrorImpl::MultipleFloatDots, cursor.here(line)));
                    }
                    _ => {
                        return Err(Error::new(
                            ErrorImpl::FloatOnBasePrefixedLiteral,
                            cursor.here(line),
                        ));
                    }
                }
            }
            c if c.is_ascii_alphanumeric() => {
                if !mode.accepts(c) {
                    return Err(Error::new(mode.malformed(c), cursor.here(line)));
                }
                value.push(c);
            }
            _ => break,
        }

        last = Some(ch);
        cursor.advance();
    }

    match last {
        Some(c) if mode.accepts(c) => {}
        Some(c) => {
            return Err(Error::new(
                ErrorImpl::NumberMustEndNumeric { found: c },
                cursor.here(line),
            ));
        }
        None => {
            return Err(Error::new(
                ErrorImpl::MisplacedOrDuplicateSeparator { duplicate: false },
                cursor.here(line),
            ));
        }
    }

    Ok(MK_TOKEN!(
        mode.kind(),
        value,
        Span {
            start,
            end: cursor.here(line)
        }
    ))
}
