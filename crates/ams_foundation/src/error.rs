//! Error types for the AMS compiler.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for AMS operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a lexical error for an unrecognized character.
    #[must_use]
    pub fn lexical(character: char, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::Lexical {
            character,
            line,
            column,
        })
    }

    /// Creates a grammar mismatch error.
    #[must_use]
    pub fn grammar_mismatch(
        expected: Vec<&'static str>,
        found: &'static str,
        value: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self::new(ErrorKind::GrammarMismatch {
            expected,
            found,
            value: value.into(),
            line,
            column,
        })
    }

    /// Creates an unknown-command error.
    #[must_use]
    pub fn unknown_command(keyword: impl Into<String>, line: u32) -> Self {
        Self::new(ErrorKind::UnknownCommand {
            keyword: keyword.into(),
            line,
        })
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl fmt::Display, error: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.to_string(),
            message: error.to_string(),
        })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Returns the 1-based source line this error points at, if any.
    #[must_use]
    pub const fn line(&self) -> Option<u32> {
        match &self.kind {
            ErrorKind::Lexical { line, .. }
            | ErrorKind::InvalidNumber { line, .. }
            | ErrorKind::UnterminatedNbt { line, .. }
            | ErrorKind::GrammarMismatch { line, .. }
            | ErrorKind::UnexpectedWord { line, .. }
            | ErrorKind::UnknownCommand { line, .. } => Some(*line),
            ErrorKind::Io { .. } | ErrorKind::Config(_) => None,
        }
    }

    /// Returns true if this error came from tokenizing or parsing a command.
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        self.line().is_some()
    }
}

/// Categorized error kinds for pattern matching.
///
/// Columns are 0-based offsets within the line; lines are 1-based.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A character no lexical rule accepts.
    #[error("invalid character '{character}' at column {column} in line {line}")]
    Lexical {
        /// The offending character.
        character: char,
        /// Line number (1-indexed).
        line: u32,
        /// Column (0-indexed).
        column: u32,
    },

    /// A digit run that is neither an integer, a float, nor a range.
    #[error("invalid number '{text}' at column {column} in line {line}")]
    InvalidNumber {
        /// The scanned text.
        text: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column (0-indexed).
        column: u32,
    },

    /// An NBT blob whose closing brace never arrives.
    #[error("unterminated NBT blob starting at column {column} in line {line}")]
    UnterminatedNbt {
        /// Line number (1-indexed).
        line: u32,
        /// Column (0-indexed).
        column: u32,
    },

    /// The current token is not among the kinds the grammar requires here.
    #[error(
        "line {line}: expected {}, found {found} '{value}' at column {column}",
        .expected.join(" or ")
    )]
    GrammarMismatch {
        /// Names of the acceptable token kinds.
        expected: Vec<&'static str>,
        /// Name of the kind actually found.
        found: &'static str,
        /// Source text of the token actually found.
        value: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column (0-indexed).
        column: u32,
    },

    /// The grammar requires one of a fixed set of sub-command words.
    #[error(
        "line {line}: expected one of {}, found '{found}' at column {column}",
        .expected.join(", ")
    )]
    UnexpectedWord {
        /// The acceptable words.
        expected: Vec<&'static str>,
        /// The text actually found.
        found: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column (0-indexed).
        column: u32,
    },

    /// A command keyword without a registered grammar rule.
    #[error("line {line}: unknown command '{keyword}'")]
    UnknownCommand {
        /// The unrecognized keyword.
        keyword: String,
        /// Line number (1-indexed).
        line: u32,
    },

    /// Reading or writing a file failed.
    #[error("failed to access {path}: {message}")]
    Io {
        /// The path involved.
        path: String,
        /// The underlying error message.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in the source file.
    pub line: Option<usize>,
    /// The text that was being processed.
    pub text: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the text that was being processed.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "{source}:{line}")?,
            (Some(source), None) => write!(f, "{source}")?,
            (None, Some(line)) => write!(f, "line {line}")?,
            (None, None) => {}
        }
        if let Some(text) = &self.text {
            write!(f, "\n    {text}")?;
        }
        Ok(())
    }
}
