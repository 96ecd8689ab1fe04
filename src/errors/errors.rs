use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.position.line
    }

    pub fn get_file(&self) -> &str {
        &self.position.file
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MalformedBinaryLiteral { .. } => "MalformedBinaryLiteral",
            ErrorImpl::MalformedOctalLiteral { .. } => "MalformedOctalLiteral",
            ErrorImpl::MalformedHexLiteral { .. } => "MalformedHexLiteral",
            ErrorImpl::MalformedDecimalLiteral { .. } => "MalformedDecimalLiteral",
            ErrorImpl::InvalidBaseMarker { .. } => "InvalidBaseMarker",
            ErrorImpl::MultipleFloatDots => "MultipleFloatDots",
            ErrorImpl::FloatOnBasePrefixedLiteral => "FloatOnBasePrefixedLiteral",
            ErrorImpl::MisplacedOrDuplicateSeparator { .. } => "MisplacedOrDuplicateSeparator",
            ErrorImpl::NumberMustEndNumeric { .. } => "NumberMustEndNumeric",
            ErrorImpl::CharLiteralOverflow { .. } => "CharLiteralOverflow",
            ErrorImpl::EmptyCharLiteral => "EmptyCharLiteral",
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Expected a literal, found `{}`", token))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::MalformedBinaryLiteral { .. } => {
                ErrorTip::Suggestion(String::from("Binary literals only accept the digits 0 and 1"))
            }
            ErrorImpl::MalformedOctalLiteral { .. } => {
                ErrorTip::Suggestion(String::from("Octal literals only accept the digits 0 to 7"))
            }
            ErrorImpl::MalformedHexLiteral { .. } => ErrorTip::Suggestion(String::from(
                "Hexadecimal literals only accept the digits 0 to 9 and the letters A to F",
            )),
            ErrorImpl::MalformedDecimalLiteral { .. } => ErrorTip::Suggestion(String::from(
                "Separate the number from the following name with a space",
            )),
            ErrorImpl::InvalidBaseMarker { .. } => ErrorTip::Suggestion(String::from(
                "A leading `0` must be followed by `b`, `o` or `x`",
            )),
            ErrorImpl::MultipleFloatDots => ErrorTip::Suggestion(String::from(
                "Only one dot is permitted in a float literal",
            )),
            ErrorImpl::FloatOnBasePrefixedLiteral => ErrorTip::Suggestion(String::from(
                "Binary, octal and hexadecimal numbers cannot be floats",
            )),
            ErrorImpl::MisplacedOrDuplicateSeparator { duplicate: true } => ErrorTip::Suggestion(
                String::from("Remove the repeated `_`"),
            ),
            ErrorImpl::MisplacedOrDuplicateSeparator { duplicate: false } => ErrorTip::Suggestion(
                String::from("A `_` may only appear between two digits"),
            ),
            ErrorImpl::NumberMustEndNumeric { .. } => {
                ErrorTip::Suggestion(String::from("A number must end with a digit"))
            }
            ErrorImpl::CharLiteralOverflow { .. } => ErrorTip::Suggestion(String::from(
                "Use double quotes for strings longer than one character",
            )),
            ErrorImpl::EmptyCharLiteral => {
                ErrorTip::Suggestion(String::from("A char literal must hold exactly one character"))
            }
            ErrorImpl::UnterminatedLiteral { delimiter } => {
                ErrorTip::Suggestion(format!("Close the literal with `{}`", delimiter))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Close the comment with `*/`"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.position.file, self.position.line, self.position.offset, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("malformed binary literal: {found:?} is not a binary digit")]
    MalformedBinaryLiteral { found: char },
    #[error("malformed octal literal: {found:?} is not an octal digit")]
    MalformedOctalLiteral { found: char },
    #[error("malformed hexadecimal literal: {found:?} is not a hexadecimal digit")]
    MalformedHexLiteral { found: char },
    #[error("malformed number: {found:?} is not a decimal digit")]
    MalformedDecimalLiteral { found: char },
    #[error("invalid base marker {found:?} after a leading zero")]
    InvalidBaseMarker { found: char },
    #[error("only one dot is permitted in a float literal")]
    MultipleFloatDots,
    #[error("base-prefixed numbers cannot be float")]
    FloatOnBasePrefixedLiteral,
    #[error("{}", separator_message(.duplicate))]
    MisplacedOrDuplicateSeparator { duplicate: bool },
    #[error("number must end with a digit, found {found:?}")]
    NumberMustEndNumeric { found: char },
    #[error("content {content:?} overflows the size of this type")]
    CharLiteralOverflow { content: String },
    #[error("empty char literal")]
    EmptyCharLiteral,
    #[error("unterminated literal, expected closing {delimiter:?}")]
    UnterminatedLiteral { delimiter: char },
    #[error("unterminated block comment")]
    UnterminatedComment,
}

fn separator_message(duplicate: &bool) -> &'static str {
    if *duplicate {
        "consecutive digit separators"
    } else {
        "misplaced digit separator"
    }
}
