use nom::{error::VerboseError, IResult};
use serde::Serialize;
use thiserror::Error;

use super::kind::TokenKind;

/// A classified lexeme.
///
/// `value` borrows the exact slice of the input that was matched, and `position`
/// is the byte offset of that slice in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, value: &'a str, position: usize) -> Self {
        Self {
            kind,
            value,
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Byte offset one past the end of this token.
    pub fn end(&self) -> usize {
        self.position + self.value.len()
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?}) at {}", self.kind, self.value, self.position)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenizerError {
    #[error("There is no token with value {value:?} at position {position}")]
    UnrecognizedValue { value: String, position: usize },

    #[error("There is no token kind with code {code}")]
    UnknownKind { code: u16 },

    #[error("{kind} not found")]
    KindNotFound { kind: TokenKind },

    #[error("Parse error: {message} at position {position}")]
    ParseError {
        message: String,
        found: String,
        position: usize,
    },
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

pub type TokenizerResult<T> = Result<T, TokenizerError>;
