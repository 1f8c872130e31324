//! Token definitions for lexfront

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::{Error, Span};

/// Reserved words. Read-only and shared by every scan.
pub const KEYWORDS: [&str; 7] = ["if", "else", "for", "func", "int", "float", "string"];

/// Single-character symbols classified as operators
pub const OPERATOR_SYMBOLS: [char; 7] = ['+', '-', '*', '/', '=', '<', '>'];

/// Single-character symbols classified as separators
pub const SEPARATOR_SYMBOLS: [char; 6] = [';', ',', '(', ')', '{', '}'];

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self { kind, lexeme: lexeme.into(), span }
    }

    pub fn eof(span: Span) -> Self {
        Self { kind: TokenKind::EndOfInput, lexeme: String::new(), span }
    }

    /// Line of the token's first character
    pub fn line(&self) -> usize {
        self.span.line
    }

    /// Column of the token's first character
    pub fn column(&self) -> usize {
        self.span.column
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    /// Reserved word from [`KEYWORDS`]
    Keyword,
    /// Letter or `_` followed by letters, digits and `_`
    Identifier,
    /// Run of digits
    Number,
    /// Digits, one `.`, digits
    Float,
    /// Contents of a double-quoted literal, quotes excluded
    String,
    /// `+ - * / = < >`
    Operator,
    /// `; , ( ) { }`
    Separator,
    /// Any character no other rule accepts
    Unknown,
    /// End of input
    #[serde(rename = "EOF")]
    EndOfInput,
}

impl TokenKind {
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Operator,
        TokenKind::Separator,
        TokenKind::Unknown,
        TokenKind::EndOfInput,
    ];

    /// Name used by the textual token format
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownTokenKind(s.to_string()))
    }
}

/// Check if an identifier-shaped lexeme is reserved
pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// Classify an identifier-shaped lexeme
pub fn keyword_from_str(s: &str) -> TokenKind {
    if is_keyword(s) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

/// Classify a single-character symbol, if it is one
pub fn symbol_kind(c: char) -> Option<TokenKind> {
    if OPERATOR_SYMBOLS.contains(&c) {
        Some(TokenKind::Operator)
    } else if SEPARATOR_SYMBOLS.contains(&c) {
        Some(TokenKind::Separator)
    } else {
        None
    }
}
