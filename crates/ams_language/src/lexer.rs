//! Lexer for AMS command lines.
//!
//! The lexer converts command text into a stream of tokens. It is a pull-based,
//! single-pass scanner: [`Lexer::next_token`] hands out one token at a time
//! and ends with a single [`TokenKind::Eof`].

use ams_foundation::{Error, ErrorKind, Result};

use crate::keyword::Keyword;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Starts a comment that runs to the end of the line.
const COMMENT: char = '#';

/// Lexer for AMS command text.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (0-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::starting_at_line(source, 1)
    }

    /// Creates a lexer whose first line is reported as `line`.
    ///
    /// Used when a command is one line out of a larger document.
    #[must_use]
    pub fn starting_at_line(source: &'src str, line: u32) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line,
            column: 0,
        }
    }

    /// Returns the next token from the source.
    ///
    /// # Errors
    /// Returns a lexical error for a character no rule accepts, a malformed
    /// number, or an NBT blob that never closes.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_trivia();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Ok(Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
                false,
            ));
        };

        let kind = match c {
            '\n' => {
                self.advance();
                TokenKind::Newline
            }
            c if c.is_ascii_digit() => self.scan_number()?,
            '-' | '+' if self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number()?
            }
            '.' if self.peek_char_n(1) == Some('.') => self.scan_number()?,
            c if c.is_alphabetic() => self.scan_word(),
            '@' => self.scan_selector(),
            '[' => {
                self.advance();
                TokenKind::AttrBegin
            }
            ']' => {
                self.advance();
                TokenKind::AttrEnd
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            '=' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::Operator("==".into())
                } else {
                    TokenKind::Assign
                }
            }
            '{' => self.scan_nbt()?,
            '<' | '>' | '-' | '+' | '*' | '/' | '%' => self.scan_operator(),
            '!' => {
                self.advance();
                TokenKind::Not
            }
            c => return Err(Error::lexical(c, start_line, start_column)),
        };

        let trailing_whitespace = self.peek_char().is_some_and(char::is_whitespace);
        Ok(Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
            trailing_whitespace,
        ))
    }

    /// Tokenizes all source and returns a vector of tokens ending with `Eof`.
    ///
    /// # Errors
    /// Returns the first lexical error encountered.
    pub fn tokenize_all(source: &str) -> Result<Vec<Token>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters past the next one.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace (except newlines) and comments.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == COMMENT {
                while self.peek_char().is_some_and(|c| c != '\n') {
                    self.advance();
                }
            } else if c.is_whitespace() && c != '\n' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scans an integer, float, or range.
    ///
    /// The separator count decides the kind: none is an integer, one a float,
    /// two a range such as `1..5`, `..5` or `-10..-1`, kept as raw text.
    /// Numbers keep their source spelling next to the parsed value.
    fn scan_number(&mut self) -> Result<TokenKind> {
        let start = self.position;
        let line = self.line;
        let column = self.column;

        if matches!(self.peek_char(), Some('-' | '+')) {
            self.advance();
        }

        let mut separators = 0;
        let mut digits = 0;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                digits += 1;
            } else if c == '.' {
                separators += 1;
            } else if matches!(c, '-' | '+')
                && self.source[..self.position].ends_with("..")
                && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
            {
                // signed upper bound of a range
            } else {
                break;
            }
            self.advance();
        }

        let text = &self.source[start..self.position];
        let invalid = || {
            Error::new(ErrorKind::InvalidNumber {
                text: text.to_string(),
                line,
                column,
            })
        };

        if digits == 0 {
            return Err(invalid());
        }
        match separators {
            0 => text
                .parse()
                .map(|value| TokenKind::Int { value, raw: text.to_string() })
                .map_err(|_| invalid()),
            1 => text
                .parse()
                .map(|value| TokenKind::Float { value, raw: text.to_string() })
                .map_err(|_| invalid()),
            2 => Ok(TokenKind::Range(text.to_string())),
            _ => Err(invalid()),
        }
    }

    /// Scans an identifier or keyword.
    ///
    /// Identifiers may embed resource-location and path punctuation, plus
    /// balanced `[...]` and `{...}` spans such as `stone[facing=north]` or
    /// `Inventory[{Slot:0b}]`.
    fn scan_word(&mut self) -> TokenKind {
        let start = self.position;
        let mut depth = 0usize;
        let mut quote: Option<char> = None;
        let mut previous = '\0';

        while let Some(c) = self.peek_char() {
            if depth > 0 {
                if c == '\n' {
                    break;
                }
                match quote {
                    Some(q) if c == q && previous != '\\' => quote = None,
                    Some(_) => {}
                    None => match c {
                        '"' | '\'' => quote = Some(c),
                        '[' | '{' => depth += 1,
                        ']' | '}' => depth -= 1,
                        _ => {}
                    },
                }
            } else if c == '[' || c == '{' {
                depth += 1;
            } else if !is_word_char(c) {
                break;
            }
            previous = c;
            self.advance();
        }

        let text = &self.source[start..self.position];
        match text {
            "true" => TokenKind::Bool(true),
            "false" => TokenKind::Bool(false),
            _ => match Keyword::lookup(text) {
                Some(keyword) => TokenKind::Command(keyword),
                None => TokenKind::Identifier(text.to_string()),
            },
        }
    }

    /// Scans a target selector such as `@s` or `@e`.
    fn scan_selector(&mut self) -> TokenKind {
        let start = self.position;
        while self
            .peek_char()
            .is_some_and(|c| c.is_alphabetic() || c == '@')
        {
            self.advance();
        }
        TokenKind::Selector(self.source[start..self.position].to_string())
    }

    /// Scans a brace-delimited NBT blob up to its matching `}`.
    ///
    /// A quote opens a string unless preceded by a backslash; braces inside
    /// strings do not count toward nesting.
    fn scan_nbt(&mut self) -> Result<TokenKind> {
        let start = self.position;
        let line = self.line;
        let column = self.column;
        let mut depth = 0usize;
        let mut quote: Option<char> = None;
        let mut previous = '\0';

        loop {
            let Some(c) = self.peek_char() else {
                return Err(Error::new(ErrorKind::UnterminatedNbt { line, column }));
            };
            self.advance();

            match quote {
                Some(q) if c == q && previous != '\\' => quote = None,
                Some(_) => {}
                None => match c {
                    '"' | '\'' => quote = Some(c),
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                },
            }
            previous = c;
        }

        Ok(TokenKind::Nbt(self.source[start..self.position].to_string()))
    }

    /// Scans a one- or two-character operator.
    fn scan_operator(&mut self) -> TokenKind {
        let start = self.position;
        self.advance();
        if matches!(self.peek_char(), Some('<' | '>' | '=')) {
            self.advance();
        }
        TokenKind::Operator(self.source[start..self.position].to_string())
    }
}

/// Returns true if `c` may continue an identifier outside bracket spans.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | ':' | '.' | '/')
}
