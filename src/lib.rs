//! # email-lexer: Email Address Tokenizer
//!
//! `email-lexer` turns a raw email-address string into an ordered stream of
//! classified tokens. The stream is meant to be consumed by a grammar validator
//! implementing the RFC 5321/5322 address syntax; this crate does not decide
//! whether an address is valid, it only tokenizes.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Raw input → Scanner (lexemes) → Classifier (token kinds) → Lexer cursor → Grammar validator
//! ```
//!
//! * [`tokenizer::scanner`]: splits the input into lexemes with ordered pattern rules
//! * [`tokenizer::classifier`]: assigns each lexeme a [`TokenKind`](tokenizer::kind::TokenKind)
//! * [`tokenizer::cursor`]: the [`Lexer`](tokenizer::cursor::Lexer) window of previous,
//!   current and lookahead tokens
//!
//! ## Configuration
//!
//! Scanning behavior that has more than one reasonable answer is exposed through
//! [`config::LexerConfig`], loadable from JSON.
//!
//! ## Usage Example
//!
//! ```rust
//! use email_lexer::tokenizer::{cursor::Lexer, kind::TokenKind};
//!
//! let mut lexer = Lexer::new("john.doe@example.com");
//! assert!(lexer.advance().unwrap());
//! assert_eq!(lexer.current_kind(), TokenKind::Generic);
//! assert_eq!(lexer.find_next(TokenKind::At).unwrap().position, 8);
//! ```

pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::{
    cursor::Lexer,
    kind::{kind_name, TokenKind},
    token::{Token, TokenizerError},
};
