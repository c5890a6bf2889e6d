//! Error handling and diagnostics for the Tally lexer
//!
//! Every malformed construct is fatal to the scan: the lexer returns the
//! error from `next_token` and never produces a partial token for it.
//! The caller decides whether to print-and-exit or propagate.

use std::fmt;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for lexer operations
pub type LexResult<T> = Result<T, LexError>;

/// A fatal lexical error
///
/// The three variants are the complete taxonomy; there is no recovery or
/// resynchronization mode. Each variant carries the 1-based line number at
/// which the offending construct was encountered (for string literals, the
/// line where the literal began).
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A string literal ran into a newline or end-of-input before its
    /// closing quote
    UnterminatedString { partial: String, line: usize },
    /// A numeric literal contained more than one decimal point
    MalformedNumber {
        found: char,
        digits: String,
        line: usize,
    },
    /// A character outside the accepted set, outside a string or comment
    UnexpectedCharacter { found: char, line: usize },
}

impl LexError {
    /// Create a new unterminated-string error
    pub fn unterminated_string(partial: impl Into<String>, line: usize) -> Self {
        Self::UnterminatedString {
            partial: partial.into(),
            line,
        }
    }

    /// Create a new malformed-number error
    pub fn malformed_number(found: char, digits: impl Into<String>, line: usize) -> Self {
        Self::MalformedNumber {
            found,
            digits: digits.into(),
            line,
        }
    }

    /// Create a new unexpected-character error
    pub fn unexpected_character(found: char, line: usize) -> Self {
        Self::UnexpectedCharacter { found, line }
    }

    /// The line number the error was reported at
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::UnexpectedCharacter { line, .. } => *line,
        }
    }

    /// The human-readable message, without any location prefix
    pub fn message(&self) -> String {
        match self {
            Self::UnterminatedString { partial, .. } => {
                format!("( {} ) \nmissing double quotes after opening quotes", partial)
            }
            Self::MalformedNumber { found, digits, .. } => {
                format!("unexpected token \"{}\" before {}", found, digits)
            }
            Self::UnexpectedCharacter { found, .. } => {
                format!("unexpected token \"{}\"", found)
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line: {}", self.message(), self.line())
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unexpected_character_message() {
        let err = LexError::unexpected_character('@', 3);
        assert_eq!(err.message(), "unexpected token \"@\"");
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_malformed_number_message() {
        let err = LexError::malformed_number('.', "1.2", 1);
        assert_eq!(err.message(), "unexpected token \".\" before 1.2");
    }

    #[test]
    fn test_unterminated_string_message() {
        let err = LexError::unterminated_string("hello", 2);
        assert_eq!(
            err.message(),
            "( hello ) \nmissing double quotes after opening quotes"
        );
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_error_display_includes_line() {
        let err = LexError::unexpected_character('?', 7);
        assert_eq!(err.to_string(), "unexpected token \"?\" at line: 7");
    }
}
