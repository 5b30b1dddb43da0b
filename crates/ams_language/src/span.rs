//! Positions of tokens within a command line.

/// Byte range of a token plus the line and column diagnostics report.
///
/// Lines are 1-based and follow the source line of the leaf that produced
/// the command; columns are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// An empty span on line 1, used for nodes with no tokens.
    #[must_use]
    pub const fn at_start() -> Self {
        Self::new(0, 0, 1, 0)
    }

    /// Extends this span through the end of `last`, keeping its own position.
    #[must_use]
    pub const fn to(self, last: Self) -> Self {
        Self {
            end: last.end,
            ..self
        }
    }

    /// Returns true if the span covers no text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the text this span covers in the given command line.
    #[must_use]
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}
