//! # Tally
//!
//! A small expression-oriented language. This crate implements the lexical
//! front end: arithmetic operators, numeric and string literals, significant
//! newlines, and `#` line comments become a flat stream of tokens ending in
//! a single `Eof`.
//!
//! ## Architecture
//!
//! - `lexer`: tokenization of source code (the scanner and token types)
//! - `error`: error handling and diagnostics
//!
//! The scanner is pull-based: the consumer calls [`Lexer::next_token`] until
//! it returns an `Eof` token. [`tokenize`] wraps that loop for callers that
//! want the whole stream at once. Lexical errors are returned as values;
//! nothing in the library prints or terminates the process.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, LexResult};
pub use lexer::{Lexer, Token, TokenKind};

/// Version of the Tally language
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize a Tally source buffer
///
/// Pulls tokens one at a time until end-of-input. The returned vector ends
/// with exactly one `Eof` token. Stops at the first lexical error.
///
/// # Arguments
///
/// * `source` - The source text to tokenize
/// * `filename` - Display name used for diagnostics
pub fn tokenize(source: &str, filename: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(source, filename);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let is_eof = token.is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_tokenize_ends_with_single_eof() {
        let tokens = tokenize("1 + 2", "test.tly").unwrap();
        assert!(tokens.last().unwrap().is_eof());
        assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn test_tokenize_stops_at_first_error() {
        assert!(tokenize("1 + ?", "test.tly").is_err());
    }
}
