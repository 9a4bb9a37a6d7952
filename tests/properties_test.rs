mod common;

use email_lexer::{
    config::{LexerConfig, WhitespaceRuns},
    tokenizer::scanner::{tokenize, tokenize_with, Scanner},
    Lexer, TokenKind, TokenizerError,
};
use proptest::prelude::*;

const STRUCTURAL: [(char, TokenKind); 16] = [
    ('@', TokenKind::At),
    ('.', TokenKind::Dot),
    ('"', TokenKind::Dquote),
    ('(', TokenKind::OpenParenthesis),
    (')', TokenKind::CloseParenthesis),
    ('[', TokenKind::OpenBracket),
    (']', TokenKind::CloseBracket),
    ('-', TokenKind::Hyphen),
    (':', TokenKind::Colon),
    (';', TokenKind::Semicolon),
    (',', TokenKind::Comma),
    ('\\', TokenKind::Backslash),
    ('<', TokenKind::LowerThan),
    ('>', TokenKind::GreaterThan),
    ('{', TokenKind::OpenQBracket),
    ('}', TokenKind::CloseQBracket),
];

/// Printable US-ASCII plus whitespace and control characters.
fn ascii_input() -> impl Strategy<Value = String> {
    "[\\x00-\\x7E]{0,64}"
}

fn whitespace_runs() -> impl Strategy<Value = WhitespaceRuns> {
    prop_oneof![Just(WhitespaceRuns::Split), Just(WhitespaceRuns::Merge)]
}

proptest! {
    #[test]
    fn total_coverage(input in ascii_input(), runs in whitespace_runs()) {
        let config = LexerConfig::default().with_whitespace_runs(runs);
        let tokens = tokenize_with(&input, &config).unwrap();

        let rebuilt: String = tokens.iter().map(|t| t.value).collect();
        prop_assert_eq!(rebuilt, input.clone());

        let mut expected_position = 0;
        for token in &tokens {
            prop_assert_eq!(token.position, expected_position);
            expected_position = token.end();
        }
    }

    #[test]
    fn progress(input in ascii_input()) {
        let mut scanner = Scanner::new(&input);
        let mut count = 0;
        let mut last_offset = 0;
        while let Some(token) = scanner.next_token().unwrap() {
            prop_assert!(!token.value.is_empty());
            prop_assert!(scanner.offset() > last_offset);
            last_offset = scanner.offset();
            count += 1;
        }
        prop_assert!(count <= input.len());
    }

    #[test]
    fn structural_symbols_are_context_free(
        prefix in "[a-z0-9]{0,8}",
        index in 0..STRUCTURAL.len(),
        suffix in "[a-z0-9]{0,8}",
    ) {
        let (symbol, kind) = STRUCTURAL[index];
        let input = format!("{prefix}{symbol}{suffix}");
        let tokens = tokenize(&input).unwrap();
        let token = tokens.iter().find(|t| t.position == prefix.len()).unwrap();
        prop_assert_eq!(token.kind, kind);
        prop_assert_eq!(token.value, symbol.to_string());
    }

    #[test]
    fn crlf_is_never_split(prefix in "[a-z ]{0,8}", suffix in "[a-z ]{0,8}", runs in whitespace_runs()) {
        let input = format!("{prefix}\r\n{suffix}");
        let config = LexerConfig::default().with_whitespace_runs(runs);
        let tokens = tokenize_with(&input, &config).unwrap();
        prop_assert!(!tokens.iter().any(|t| t.kind == TokenKind::Cr || t.kind == TokenKind::Lf));
        if runs == WhitespaceRuns::Split {
            prop_assert!(tokens.iter().any(|t| t.kind == TokenKind::Crlf && t.position == prefix.len()));
        }
    }

    #[test]
    fn control_bytes_are_invalid(byte in 0x01u8..=0x1F) {
        let c = byte as char;
        prop_assume!(!matches!(c, '\t' | '\r' | '\n'));
        let input = format!("a{c}b");
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens[1].kind, TokenKind::Invalid);
    }

    #[test]
    fn extended_characters_are_rejected(
        prefix in "[a-z]{0,8}",
        c in prop_oneof![Just('\u{7f}'), any::<char>().prop_filter("non-ascii", |c| !c.is_ascii())],
    ) {
        let input = format!("{prefix}{c}@example");
        let result = tokenize(&input);
        let is_expected_error = matches!(
            result,
            Err(TokenizerError::UnrecognizedValue { position, .. }) if position == prefix.len()
        );
        prop_assert!(is_expected_error);
    }

    #[test]
    fn find_next_never_moves_the_cursor(input in "[a-z.@]{0,24}", steps in 0usize..8) {
        let mut lexer = Lexer::new(&input);
        for _ in 0..steps {
            lexer.advance().unwrap();
        }
        let before = *lexer.window();
        let _ = lexer.find_next(TokenKind::At);
        prop_assert_eq!(*lexer.window(), before);
    }
}
