//! Token definitions for the Tally language
//!
//! This module defines the token types produced by lexical analysis.

use std::fmt;

/// A token in the Tally language
///
/// Tokens are plain values; `lexeme` is present for literals and operators
/// and absent for the structural tokens (`Newline`, `Eof`).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Option<String>,
}

impl Token {
    /// Create a new token with a lexeme
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: Some(lexeme.into()),
        }
    }

    /// Create a structural token with no lexeme
    pub fn structural(kind: TokenKind) -> Self {
        Self { kind, lexeme: None }
    }

    /// Whether this token marks the end of the input
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Token kinds in the Tally language
///
/// A closed set: classification is total over the accepted character set
/// and anything else is a fatal error, so no catch-all variant exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Arithmetic operators
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /

    // Literals
    Number,
    Str,

    // Structural
    Newline,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Number => write!(f, "number"),
            Self::Str => write!(f, "string"),
            Self::Newline => write!(f, "newline"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_structural_token_has_no_lexeme() {
        let token = Token::structural(TokenKind::Newline);
        assert_eq!(token.lexeme, None);
        assert!(!token.is_eof());
        assert!(Token::structural(TokenKind::Eof).is_eof());
    }

    #[test]
    fn test_token_with_lexeme() {
        let token = Token::new(TokenKind::Number, "3.14");
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.lexeme.as_deref(), Some("3.14"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Plus.to_string(), "+");
        assert_eq!(TokenKind::Str.to_string(), "string");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }
}
