//! Lexer/Scanner implementation for the Tally language
//!
//! This module implements lexical analysis as a pull-based scanner: each
//! call to `next_token` skips insignificant input, classifies the current
//! character, and produces exactly one token.

use crate::error::{LexError, LexResult};
use super::token::{Token, TokenKind};

/// Lexer for Tally source code
///
/// Holds the trimmed source text and a cursor `(index, line, current)`.
/// `current` always reflects the character at `index`, or `None` once the
/// input is exhausted. The cursor only ever moves forward; once `Eof` has
/// been produced every further call produces `Eof` again.
pub struct Lexer {
    source: Vec<char>,
    filename: String,
    index: usize,
    line: usize,
    current: Option<char>,
}

impl Lexer {
    /// Create a new lexer
    ///
    /// The source text is trimmed of leading and trailing whitespace before
    /// scanning begins, so stripped leading blank lines do not count toward
    /// line numbers. Empty (or all-whitespace) input is accepted and yields
    /// an immediate `Eof`.
    pub fn new(source: &str, filename: &str) -> Self {
        let source: Vec<char> = source.trim().chars().collect();
        let current = source.first().copied();

        Self {
            source,
            filename: filename.to_string(),
            index: 0,
            line: 1,
            current,
        }
    }

    /// The display name used for diagnostics
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The 1-based line number of the cursor
    pub fn line(&self) -> usize {
        self.line
    }

    /// Scan and return the next token
    ///
    /// Skips runs of space, tab, and carriage return (newline is a
    /// significant token, never whitespace) and a `#` line comment, then
    /// classifies the current character. A uniform trailing advance moves
    /// the cursor past the token before returning: for operators and
    /// newlines it consumes the token character itself, for strings the
    /// closing quote, and for numbers the first character after the digits.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace();
        self.skip_comment();

        let token = match self.current {
            None => Token::structural(TokenKind::Eof),
            Some('\n') => Token::structural(TokenKind::Newline),
            Some('+') => Token::new(TokenKind::Plus, "+"),
            Some('-') => Token::new(TokenKind::Minus, "-"),
            Some('*') => Token::new(TokenKind::Star, "*"),
            Some('/') => Token::new(TokenKind::Slash, "/"),
            Some('"') => self.scan_string()?,
            Some(c) if c.is_ascii_digit() => self.scan_number(c)?,
            Some(c) => return Err(LexError::unexpected_character(c, self.line)),
        };

        self.advance();
        Ok(token)
    }

    /// Scan a string literal
    ///
    /// The cursor sits on the opening quote on entry and on the closing
    /// quote on success; the raw text between the quotes becomes the
    /// lexeme, with no escape processing. A newline or end-of-input before
    /// the closing quote is fatal, reported at the line the literal began.
    fn scan_string(&mut self) -> LexResult<Token> {
        let start_line = self.line;
        let mut value = String::new();

        self.advance();

        loop {
            match self.current {
                Some('"') => break,
                Some('\n') | None => {
                    return Err(LexError::unterminated_string(value, start_line));
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        Ok(Token::new(TokenKind::Str, value))
    }

    /// Scan a number literal (digits with at most one decimal point)
    ///
    /// The lexeme stays text; numeric parsing is left to the consumer. A
    /// trailing `.` gets a synthetic `0` appended so the lexeme is always a
    /// complete decimal numeral. The loop exits with the cursor on the
    /// first non-literal character.
    fn scan_number(&mut self, first: char) -> LexResult<Token> {
        let mut digits = String::from(first);
        let mut seen_decimal = false;

        self.advance();

        while let Some(c) = self.current {
            match c {
                '0'..='9' => digits.push(c),
                '.' => {
                    if seen_decimal {
                        return Err(LexError::malformed_number(c, digits, self.line));
                    }
                    seen_decimal = true;
                    digits.push(c);
                }
                _ => break,
            }
            self.advance();
        }

        if digits.ends_with('.') {
            digits.push('0');
        }

        Ok(Token::new(TokenKind::Number, digits))
    }

    /// Skip spaces, tabs, and carriage returns
    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\r')) {
            self.advance();
        }
    }

    /// Skip a `#` line comment up to (not including) the newline
    ///
    /// Comments only ever end at a newline or end-of-input, both of which
    /// classify normally, so one pass is enough.
    fn skip_comment(&mut self) {
        if self.current == Some('#') {
            while !matches!(self.current, Some('\n') | None) {
                self.advance();
            }
        }
    }

    /// Move the cursor one character forward
    ///
    /// Advancing past a newline increments the line counter. At
    /// end-of-input this is a no-op, which makes the `Eof` tail idempotent.
    fn advance(&mut self) {
        if self.current.is_none() {
            return;
        }

        self.index += 1;

        if self.index >= self.source.len() {
            self.current = None;
        } else {
            if self.current == Some('\n') {
                self.line += 1;
            }
            self.current = Some(self.source[self.index]);
        }
    }
}
