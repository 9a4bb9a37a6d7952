//! # Lexeme Classification
//!
//! Assigns a [`TokenKind`] to a scanned lexeme. The rules are tried in order and
//! the first match wins:
//!
//! 1. Exact lookup in the symbol table (structural symbols, whitespace, CRLF,
//!    `IPv6` and the empty string)
//! 2. Any control character 0x01-0x1F makes the lexeme [`TokenKind::Invalid`]
//! 3. Any character from DEL upwards is rejected with
//!    [`TokenizerError::UnrecognizedValue`]
//! 4. Everything else is [`TokenKind::Generic`]
//!
//! An `INVALID` token is not an error. The grammar validator receives it and
//! decides how to react. Characters outside printable US-ASCII cannot appear in
//! any production the validator supports, so they stop tokenization instead.

use lazy_static::lazy_static;
use regex::Regex;

use super::{
    kind::{TokenKind, SYMBOLS},
    token::{TokenizerError, TokenizerResult},
};

lazy_static! {
    static ref CONTROL_PATTERN: Regex = Regex::new(r"[\x01-\x1F]").unwrap();
    static ref EXTENDED_PATTERN: Regex = Regex::new(r"[\x7F-\x{10FFFF}]").unwrap();
}

/// Classifies `value`, found at byte offset `position` of the input.
pub fn classify(value: &str, position: usize) -> TokenizerResult<TokenKind> {
    if let Some(kind) = SYMBOLS.get(value) {
        return Ok(*kind);
    }

    if CONTROL_PATTERN.is_match(value) {
        return Ok(TokenKind::Invalid);
    }

    if EXTENDED_PATTERN.is_match(value) {
        let error = TokenizerError::UnrecognizedValue {
            value: value.to_string(),
            position,
        };
        tracing::error!("{}", error);
        return Err(error);
    }

    Ok(TokenKind::Generic)
}

/// True for characters matched by the control pattern (0x01-0x1F).
pub fn is_control(c: char) -> bool {
    ('\x01'..='\x1F').contains(&c)
}

/// True for DEL and every character outside US-ASCII.
pub fn is_extended(c: char) -> bool {
    c as u32 >= u32::from(super::kind::C_DEL)
}
