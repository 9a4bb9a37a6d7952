//! # Token Kind Catalog
//!
//! The closed set of token kinds handed to the grammar validator. Each kind has a
//! stable numeric code and an upper-case catalog name (`AT`, `DOUBLECOLON`, ...).
//! The validator pattern-matches on these values, so neither the set nor the
//! codes may change without a version bump.
//!
//! Two lookup tables are built once, on first use:
//!
//! * code to kind, backing [`kind_name`] and [`TokenKind::from_code`]
//! * lexeme to kind, backing exact-value classification in
//!   [`classifier`](super::classifier)

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;
use strum::IntoEnumIterator;

use super::token::TokenizerError;

/// DEL byte. Not a token kind.
pub const C_DEL: u8 = 127;
/// NUL byte. Not a token kind.
pub const C_NUL: u8 = 0;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u16)]
pub enum TokenKind {
    // Structural symbols
    /// `@`
    At = 64,
    /// `\`
    Backslash = 92,
    /// `.`
    Dot = 46,
    /// `"`
    Dquote = 34,
    /// `(`
    OpenParenthesis = 49,
    /// `)`
    CloseParenthesis = 261,
    /// `[`
    OpenBracket = 262,
    /// `]`
    CloseBracket = 263,
    /// `-`
    Hyphen = 264,
    /// `:`
    Colon = 265,
    /// `::`
    DoubleColon = 266,
    /// `<`
    LowerThan = 272,
    /// `>`
    GreaterThan = 273,
    /// `,`
    Comma = 274,
    /// `;`
    Semicolon = 275,
    /// `{`
    OpenQBracket = 276,
    /// `}`
    CloseQBracket = 277,

    // Whitespace and line endings
    Sp = 267,
    Htab = 268,
    Cr = 269,
    Lf = 270,
    Crlf = 301,

    /// The case-sensitive literal `IPv6`
    Ipv6Tag = 271,

    // Catch-alls
    /// Letter or digit runs and any unclassified visible character
    Generic = 300,
    /// A run of control characters 0x01-0x1F
    Invalid = 302,
    /// No token: an empty window slot or the empty string
    Empty = 0,
}

lazy_static! {
    static ref KINDS_BY_CODE: HashMap<u16, TokenKind> =
        TokenKind::iter().map(|kind| (kind.code(), kind)).collect();
    pub(crate) static ref SYMBOLS: HashMap<&'static str, TokenKind> = TokenKind::iter()
        .filter_map(|kind| kind.lexeme().map(|lexeme| (lexeme, kind)))
        .collect();
}

impl TokenKind {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Result<Self, TokenizerError> {
        KINDS_BY_CODE
            .get(&code)
            .copied()
            .ok_or(TokenizerError::UnknownKind { code })
    }

    /// Catalog name of this kind, e.g. `OPENPARENTHESIS`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The exact lexeme this kind stands for, if it has a dedicated one.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::At => Some("@"),
            Self::Backslash => Some("\\"),
            Self::Dot => Some("."),
            Self::Dquote => Some("\""),
            Self::OpenParenthesis => Some("("),
            Self::CloseParenthesis => Some(")"),
            Self::OpenBracket => Some("["),
            Self::CloseBracket => Some("]"),
            Self::Hyphen => Some("-"),
            Self::Colon => Some(":"),
            Self::DoubleColon => Some("::"),
            Self::LowerThan => Some("<"),
            Self::GreaterThan => Some(">"),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::OpenQBracket => Some("{"),
            Self::CloseQBracket => Some("}"),
            Self::Sp => Some(" "),
            Self::Htab => Some("\t"),
            Self::Cr => Some("\r"),
            Self::Lf => Some("\n"),
            Self::Crlf => Some("\r\n"),
            Self::Ipv6Tag => Some("IPv6"),
            Self::Empty => Some(""),
            Self::Generic | Self::Invalid => None,
        }
    }

    pub fn is_whitespace(self) -> bool {
        matches!(
            self,
            Self::Sp | Self::Htab | Self::Cr | Self::Lf | Self::Crlf
        )
    }
}

impl TryFrom<u16> for TokenKind {
    type Error = TokenizerError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

/// Reverse lookup from a numeric kind code to its catalog name.
pub fn kind_name(code: u16) -> Result<&'static str, TokenizerError> {
    TokenKind::from_code(code).map(TokenKind::name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_kind_names() {
        let test_cases = [
            (64, "AT"),
            (92, "BACKSLASH"),
            (46, "DOT"),
            (34, "DQUOTE"),
            (49, "OPENPARENTHESIS"),
            (261, "CLOSEPARENTHESIS"),
            (266, "DOUBLECOLON"),
            (267, "SP"),
            (268, "HTAB"),
            (271, "IPV6TAG"),
            (276, "OPENQBRACKET"),
            (277, "CLOSEQBRACKET"),
            (300, "GENERIC"),
            (301, "CRLF"),
            (302, "INVALID"),
            (0, "EMPTY"),
        ];

        for (code, expected) in test_cases.iter() {
            assert_eq!(kind_name(*code).unwrap(), *expected);
        }
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(
            kind_name(999),
            Err(TokenizerError::UnknownKind { code: 999 })
        );
        // byte constants are not kinds
        assert!(TokenKind::try_from(C_DEL as u16).is_err());
    }

    // check that every kind survives code and name lookups
    #[test]
    fn test_all_kinds_roundtrip() {
        for kind in TokenKind::iter() {
            assert_eq!(TokenKind::from_code(kind.code()).unwrap(), kind);
            assert_eq!(TokenKind::from_str(kind.name()).unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_codes_and_lexemes_are_unique() {
        let codes: HashSet<u16> = TokenKind::iter().map(TokenKind::code).collect();
        assert_eq!(codes.len(), TokenKind::iter().count());

        let lexemes: Vec<&str> = TokenKind::iter().filter_map(TokenKind::lexeme).collect();
        let unique: HashSet<&str> = lexemes.iter().copied().collect();
        assert_eq!(unique.len(), lexemes.len());
        assert_eq!(SYMBOLS.len(), lexemes.len());
    }

    #[test]
    fn test_symbol_table() {
        assert_eq!(SYMBOLS.get("@"), Some(&TokenKind::At));
        assert_eq!(SYMBOLS.get("\r\n"), Some(&TokenKind::Crlf));
        assert_eq!(SYMBOLS.get("IPv6"), Some(&TokenKind::Ipv6Tag));
        assert_eq!(SYMBOLS.get(""), Some(&TokenKind::Empty));
        assert_eq!(SYMBOLS.get("ipv6"), None);
    }

    #[test]
    fn test_is_whitespace() {
        let whitespace: Vec<TokenKind> = TokenKind::iter().filter(|k| k.is_whitespace()).collect();
        assert_eq!(
            whitespace,
            vec![
                TokenKind::Sp,
                TokenKind::Htab,
                TokenKind::Cr,
                TokenKind::Lf,
                TokenKind::Crlf
            ]
        );
        assert!(!TokenKind::Invalid.is_whitespace());
        assert!(!TokenKind::Empty.is_whitespace());
    }

    #[test]
    fn test_serialize_uses_catalog_name() {
        let json = serde_json::to_string(&TokenKind::OpenQBracket).unwrap();
        assert_eq!(json, "\"OPENQBRACKET\"");
    }
}
