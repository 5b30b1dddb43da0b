//! Syntax highlighting for the interactive checker.
//!
//! Coloring is driven by the real lexer, so what is highlighted is exactly
//! what the parser will see. Text after a lexical error is left plain.

use std::borrow::Cow;

use ams_language::{Lexer, TokenClass, TokenKind};

/// Highlighter for command lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandHighlighter;

impl CommandHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut lexer = Lexer::new(line);
        let mut last = 0;

        while let Ok(token) = lexer.next_token() {
            if token.kind == TokenKind::Eof {
                break;
            }
            let span = token.span;
            push_gap(&mut result, &line[last..span.start]);
            match color(token.class()) {
                Some(code) if !span.is_empty() => {
                    result.push_str(code);
                    result.push_str(span.text(line));
                    result.push_str("\x1b[0m");
                }
                _ => result.push_str(span.text(line)),
            }
            last = span.end;
        }

        push_gap(&mut result, &line[last..]);
        if result == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(result)
        }
    }
}

/// Copies inter-token text, dimming comments.
fn push_gap(result: &mut String, gap: &str) {
    match gap.find('#') {
        Some(at) if gap[..at].trim().is_empty() => {
            result.push_str(&gap[..at]);
            result.push_str("\x1b[2;3m"); // dim italic
            result.push_str(&gap[at..]);
            result.push_str("\x1b[0m");
        }
        _ => result.push_str(gap),
    }
}

const fn color(class: TokenClass) -> Option<&'static str> {
    match class {
        TokenClass::Command => Some("\x1b[32m"),                                      // green
        TokenClass::Selector => Some("\x1b[36m"),                                     // cyan
        TokenClass::Int | TokenClass::Float | TokenClass::Range => Some("\x1b[35m"), // magenta
        TokenClass::Nbt => Some("\x1b[33m"),                                          // yellow
        TokenClass::Bool => Some("\x1b[34m"),                                         // blue
        TokenClass::AttrBegin
        | TokenClass::AttrEnd
        | TokenClass::Assign
        | TokenClass::Comma
        | TokenClass::Operator
        | TokenClass::Not => Some("\x1b[1m"), // bold
        TokenClass::Identifier | TokenClass::Newline | TokenClass::Eof => None,
    }
}
