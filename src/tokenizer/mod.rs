//! # Tokenizer Component
//!
//! The Tokenizer component performs lexical analysis of email addresses, turning
//! raw text into a stream of classified tokens for an RFC 5321/5322 grammar
//! validator.
//!
//! ## Design Principles
//!
//! * **Total Coverage**: Every byte of the input ends up in exactly one token, so
//!   concatenating token values reproduces the input.
//! * **Positions**: Each token carries the byte offset of its first character.
//! * **Lazy Production**: Tokens are scanned one at a time as the cursor advances.
//! * **Recoverable Control Bytes**: Runs of control characters become `INVALID`
//!   tokens. Only characters outside printable US-ASCII abort tokenization.
//!
//! ## Component Structure
//!
//! * [`kind`]: The closed catalog of token kinds and their numeric codes
//! * [`token`]: The [`Token`](token::Token) type and [`TokenizerError`](token::TokenizerError)
//! * [`scanner`]: Pattern rules that split input into lexemes
//! * [`classifier`]: Lexeme to token kind classification
//! * [`cursor`]: The [`Lexer`](cursor::Lexer) sliding window used by the validator
//!
//! ## Usage Example
//!
//! ```rust
//! use email_lexer::tokenizer::{kind::TokenKind, scanner::tokenize};
//!
//! let tokens = tokenize("user@[IPv6::1]").unwrap();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Generic,
//!         TokenKind::At,
//!         TokenKind::OpenBracket,
//!         TokenKind::Ipv6Tag,
//!         TokenKind::DoubleColon,
//!         TokenKind::Generic,
//!         TokenKind::CloseBracket,
//!     ]
//! );
//! ```

pub mod classifier;
pub mod cursor;
pub mod kind;
pub mod scanner;
pub mod token;
