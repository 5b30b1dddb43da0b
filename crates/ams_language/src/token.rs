//! Token types for AMS command lines.
//!
//! Tokens are the output of the lexer and input to the parser.

use std::fmt;

use crate::keyword::Keyword;
use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
    /// Whether whitespace directly follows this token in the source.
    pub trailing_whitespace: bool,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span, trailing_whitespace: bool) -> Self {
        Self {
            kind,
            span,
            trailing_whitespace,
        }
    }

    /// Returns the class of this token.
    #[must_use]
    pub const fn class(&self) -> TokenClass {
        self.kind.class()
    }

    /// Returns true if this token is of the given class.
    #[must_use]
    pub fn is(&self, class: TokenClass) -> bool {
        self.kind.class() == class
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns the word this token spells, for identifiers and keywords.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(name) => Some(name),
            TokenKind::Command(keyword) => Some(keyword.as_str()),
            _ => None,
        }
    }

    /// Returns true if this token ends a command line.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::Newline | TokenKind::Eof)
    }

    /// Returns true if this token is an integer or float.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self.kind, TokenKind::Int { .. } | TokenKind::Float { .. })
    }
}

/// Token types for AMS command lines.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// Generic word: resource locations, names, paths like `minecraft:stone`
    Identifier(String),
    /// Reserved command keyword like `say` or `execute`
    Command(Keyword),
    /// Target selector like `@s` or `@e`
    Selector(String),
    /// Brace-delimited structured data, captured raw: `{Count:1b}`
    Nbt(String),
    /// Integer literal like `42` or `-17`, with its source spelling
    Int {
        /// Parsed value.
        value: i64,
        /// Text as written, such as `+1` or `007`.
        raw: String,
    },
    /// Float literal like `1.5`, with its source spelling
    Float {
        /// Parsed value.
        value: f64,
        /// Text as written, such as `64.50`.
        raw: String,
    },
    /// Range literal like `1..5`, kept as raw text
    Range(String),
    /// `true` or `false`
    Bool(bool),
    /// `[`
    AttrBegin,
    /// `]`
    AttrEnd,
    /// `=`
    Assign,
    /// `,`
    Comma,
    /// Comparison or arithmetic operator like `<`, `>=`, `+=`, `==`
    Operator(String),
    /// `!`
    Not,
    /// End of a command line
    Newline,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the payload-free class of this kind.
    #[must_use]
    pub const fn class(&self) -> TokenClass {
        match self {
            Self::Identifier(_) => TokenClass::Identifier,
            Self::Command(_) => TokenClass::Command,
            Self::Selector(_) => TokenClass::Selector,
            Self::Nbt(_) => TokenClass::Nbt,
            Self::Int { .. } => TokenClass::Int,
            Self::Float { .. } => TokenClass::Float,
            Self::Range(_) => TokenClass::Range,
            Self::Bool(_) => TokenClass::Bool,
            Self::AttrBegin => TokenClass::AttrBegin,
            Self::AttrEnd => TokenClass::AttrEnd,
            Self::Assign => TokenClass::Assign,
            Self::Comma => TokenClass::Comma,
            Self::Operator(_) => TokenClass::Operator,
            Self::Not => TokenClass::Not,
            Self::Newline => TokenClass::Newline,
            Self::Eof => TokenClass::Eof,
        }
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.class().name()
    }
}

/// Source-like text of the token value.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(s)
            | Self::Selector(s)
            | Self::Nbt(s)
            | Self::Range(s)
            | Self::Operator(s)
            | Self::Int { raw: s, .. }
            | Self::Float { raw: s, .. } => f.write_str(s),
            Self::Command(keyword) => write!(f, "{keyword}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::AttrBegin => f.write_str("["),
            Self::AttrEnd => f.write_str("]"),
            Self::Assign => f.write_str("="),
            Self::Comma => f.write_str(","),
            Self::Not => f.write_str("!"),
            Self::Newline => f.write_str("\\n"),
            Self::Eof => Ok(()),
        }
    }
}

/// The payload-free classification of a token, used in expected-kind sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TokenClass {
    Identifier,
    Command,
    Selector,
    Nbt,
    Int,
    Float,
    Range,
    Bool,
    AttrBegin,
    AttrEnd,
    Assign,
    Comma,
    Operator,
    Not,
    Newline,
    Eof,
}

impl TokenClass {
    /// Returns a human-readable name for this class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Command => "command",
            Self::Selector => "selector",
            Self::Nbt => "NBT",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Range => "range",
            Self::Bool => "boolean",
            Self::AttrBegin => "'['",
            Self::AttrEnd => "']'",
            Self::Assign => "'='",
            Self::Comma => "','",
            Self::Operator => "operator",
            Self::Not => "'!'",
            Self::Newline => "newline",
            Self::Eof => "end of input",
        }
    }
}
