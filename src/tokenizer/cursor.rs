//! # Token Stream Cursor
//!
//! [`Lexer`] is the interface the grammar validator drives. It keeps a
//! three-slot [`Window`] over the lazily scanned token stream:
//!
//! ```text
//!   previous   current   lookahead   (rest of the input, not yet scanned)
//! ```
//!
//! [`Lexer::advance`] slides the window by one token. The initial state has all
//! three slots empty; the first call fills `current` and `lookahead`. Once there
//! is no lookahead the cursor is terminal and `advance` returns `false` without
//! changing anything.
//!
//! ## Searching ahead
//!
//! [`Lexer::find_next`] answers questions like "is there an `@` further on?"
//! without consuming anything: it advances a copy of the cursor, so the caller's
//! position is untouched.

use crate::config::LexerConfig;

use super::{
    kind::TokenKind,
    scanner::Scanner,
    token::{Token, TokenizerError, TokenizerResult},
};

/// The previous, current and lookahead slots of the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Window<'a> {
    pub previous: Option<Token<'a>>,
    pub current: Option<Token<'a>>,
    pub lookahead: Option<Token<'a>>,
}

impl<'a> Window<'a> {
    fn shift(&mut self, next: Option<Token<'a>>) {
        self.previous = self.current;
        self.current = self.lookahead;
        self.lookahead = next;
    }
}

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    window: Window<'a>,
    primed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, &LexerConfig::default())
    }

    pub fn with_config(input: &'a str, config: &LexerConfig) -> Self {
        Self {
            scanner: Scanner::with_config(input, config),
            window: Window::default(),
            primed: false,
        }
    }

    pub fn input(&self) -> &'a str {
        self.scanner.input()
    }

    /// Returns to the initial state over the same input.
    pub fn reset(&mut self) {
        self.scanner.reset();
        self.window = Window::default();
        self.primed = false;
    }

    /// Moves to the next token.
    ///
    /// Returns `Ok(false)` when there is no token left. A scan error leaves the
    /// window unchanged.
    pub fn advance(&mut self) -> TokenizerResult<bool> {
        self.prime()?;
        if self.window.lookahead.is_none() {
            return Ok(false);
        }

        let next = self.scanner.next_token()?;
        self.window.shift(next);
        Ok(true)
    }

    fn prime(&mut self) -> TokenizerResult<()> {
        if !self.primed {
            self.window.lookahead = self.scanner.next_token()?;
            self.primed = true;
        }
        Ok(())
    }

    pub fn window(&self) -> &Window<'a> {
        &self.window
    }

    pub fn current(&self) -> Option<&Token<'a>> {
        self.window.current.as_ref()
    }

    pub fn lookahead(&self) -> Option<&Token<'a>> {
        self.window.lookahead.as_ref()
    }

    /// The token produced immediately before the current one.
    pub fn previous(&self) -> Option<&Token<'a>> {
        self.window.previous.as_ref()
    }

    pub fn current_kind(&self) -> TokenKind {
        kind_of(self.window.current)
    }

    pub fn lookahead_kind(&self) -> TokenKind {
        kind_of(self.window.lookahead)
    }

    pub fn previous_kind(&self) -> TokenKind {
        kind_of(self.window.previous)
    }

    pub fn is_next_token(&self, kind: TokenKind) -> bool {
        self.window.lookahead.is_some_and(|token| token.is(kind))
    }

    pub fn is_next_token_any(&self, kinds: &[TokenKind]) -> bool {
        self.window
            .lookahead
            .is_some_and(|token| kinds.contains(&token.kind))
    }

    /// The first token not yet in the window, without moving the cursor.
    ///
    /// Once the cursor has advanced this is the token after the lookahead.
    /// Before the first advance the window is empty, so it is the first token.
    pub fn glimpse(&self) -> TokenizerResult<Option<Token<'a>>> {
        self.scanner.clone().next_token()
    }

    /// Advances until the lookahead has `kind` or the input ends.
    pub fn skip_until(&mut self, kind: TokenKind) -> TokenizerResult<()> {
        self.prime()?;
        while self
            .window
            .lookahead
            .is_some_and(|token| !token.is(kind))
        {
            self.advance()?;
        }
        Ok(())
    }

    /// Finds the next token of `kind`, starting from the lookahead.
    ///
    /// The search runs on a copy of the cursor and never moves this one.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn find_next(&self, kind: TokenKind) -> TokenizerResult<Token<'a>> {
        let mut search = self.clone();
        search.skip_until(kind)?;

        match search.window.lookahead {
            Some(token) => {
                tracing::debug!("found {} at {}", kind, token.position);
                Ok(token)
            }
            None => {
                tracing::debug!("{} not found", kind);
                Err(TokenizerError::KindNotFound { kind })
            }
        }
    }
}

fn kind_of(slot: Option<Token<'_>>) -> TokenKind {
    slot.map_or(TokenKind::Empty, |token| token.kind)
}
