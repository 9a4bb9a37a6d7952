//! # Pattern Scanner
//!
//! Splits the unconsumed input into lexemes. At each offset the rules below are
//! tried in priority order and the first one that matches produces the lexeme:
//!
//! 1. A run of ASCII letters and underscores, optionally followed by one `4` or
//!    `6` (so `IPv6` is a single lexeme)
//! 2. A run of ASCII digits
//! 3. CR LF
//! 4. `::`
//! 5. Whitespace (space, tab, CR, LF), one character or a whole run depending on
//!    [`WhitespaceRuns`]
//! 6. A run of control characters 0x01-0x1F
//! 7. A run of extended characters (DEL and non-ASCII), which the
//!    [`classifier`](super::classifier) rejects
//! 8. Any single character
//!
//! Every rule consumes at least one character and the last rule matches any
//! character, so scanning always makes progress and never skips input.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{anychar, digit1, one_of, satisfy},
    combinator::{opt, recognize},
    error::context,
    sequence::pair,
};

use crate::config::{LexerConfig, WhitespaceRuns};

use super::{
    classifier::{classify, is_control, is_extended},
    token::{ParserResult, Token, TokenizerError, TokenizerResult},
};

/// Lazily scans and classifies the tokens of an input string.
///
/// The scanner is a plain value: cloning it yields an independent scanning
/// position over the same input.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    offset: usize,
    whitespace_runs: WhitespaceRuns,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, &LexerConfig::default())
    }

    pub fn with_config(input: &'a str, config: &LexerConfig) -> Self {
        Self {
            input,
            offset: 0,
            whitespace_runs: config.whitespace_runs,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the next lexeme.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scans the next lexeme and classifies it.
    ///
    /// Returns `Ok(None)` at the end of the input. On error the offset is left
    /// where it was, so calling again reports the same error.
    pub fn next_token(&mut self) -> TokenizerResult<Option<Token<'a>>> {
        let remaining = self.remaining();
        if remaining.is_empty() {
            return Ok(None);
        }

        let position = self.offset;
        let lexeme = match scan_lexeme(remaining, self.whitespace_runs) {
            Ok((_, lexeme)) => lexeme,
            Err(e) => {
                let found = remaining.chars().take(20).collect::<String>();
                let message = match e {
                    nom::Err::Incomplete(needed) => format!("Incomplete input, {:?}", needed),
                    nom::Err::Error(e) | nom::Err::Failure(e) => {
                        nom::error::convert_error(remaining, e)
                    }
                };
                let error = TokenizerError::ParseError {
                    message,
                    found,
                    position,
                };
                tracing::error!("{}", error);
                return Err(error);
            }
        };

        let kind = classify(lexeme, position)?;
        self.offset += lexeme.len();
        Ok(Some(Token::new(kind, lexeme, position)))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = TokenizerResult<Token<'a>>;

    /// Yields tokens until the input ends. After an error the scanner is
    /// exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(error) => {
                self.offset = self.input.len();
                Some(Err(error))
            }
        }
    }
}

/// Tokenizes the whole input with the default configuration.
pub fn tokenize(input: &str) -> TokenizerResult<Vec<Token<'_>>> {
    tokenize_with(input, &LexerConfig::default())
}

/// Tokenizes the whole input, failing on the first unrecognized value.
#[tracing::instrument(level = "debug", skip(input))]
pub fn tokenize_with<'a>(input: &'a str, config: &LexerConfig) -> TokenizerResult<Vec<Token<'a>>> {
    Scanner::with_config(input, config).collect()
}

/// Matches the next lexeme at the start of `input`.
///
/// Fails only on empty input.
#[tracing::instrument(level = "debug", skip(input))]
pub fn scan_lexeme(input: &str, whitespace_runs: WhitespaceRuns) -> ParserResult<&str> {
    context(
        "lexeme",
        alt((
            letters,
            digit1,
            tag("\r\n"),
            tag("::"),
            whitespace(whitespace_runs),
            take_while1(is_control),
            take_while1(is_extended),
            recognize(anychar),
        )),
    )(input)
}

fn letters(input: &str) -> ParserResult<&str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
        opt(one_of("46")),
    ))(input)
}

fn whitespace<'a>(
    whitespace_runs: WhitespaceRuns,
) -> impl FnMut(&'a str) -> ParserResult<'a, &'a str> {
    move |input| match whitespace_runs {
        WhitespaceRuns::Split => recognize(satisfy(is_whitespace))(input),
        WhitespaceRuns::Merge => take_while1(is_whitespace)(input),
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
