//! Abstract Syntax Tree for parsed command lines.
//!
//! Each command line parses to at most one [`Ast`]. The tree is used for
//! validation and inspection only; output is never re-emitted from it.

use std::fmt;

use crate::keyword::Keyword;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// The result of parsing one command line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Ast {
    /// A command with its operands.
    Command(Command),
    /// A blank or comment-only line.
    NoOp(Span),
}

impl Ast {
    /// Returns the source span of this node.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Command(command) => command.span(),
            Self::NoOp(span) => *span,
        }
    }

    /// Returns true if this is a blank-line placeholder.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp(_))
    }

    /// Returns the command if this is one.
    #[must_use]
    pub const fn as_command(&self) -> Option<&Command> {
        match self {
            Self::Command(command) => Some(command),
            Self::NoOp(_) => None,
        }
    }
}

/// A command keyword together with the operands its grammar consumed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Command {
    /// The keyword token that selected the grammar rule.
    pub command: Token,
    /// Operands in source order.
    pub operands: Vec<Operand>,
}

impl Command {
    /// Creates a command with no operands yet.
    #[must_use]
    pub const fn new(command: Token) -> Self {
        Self {
            command,
            operands: Vec::new(),
        }
    }

    /// Returns the keyword of this command.
    #[must_use]
    pub const fn keyword(&self) -> Option<Keyword> {
        match self.command.kind {
            TokenKind::Command(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// Returns the span from the keyword to the last operand.
    #[must_use]
    pub fn span(&self) -> Span {
        match self.operands.last() {
            Some(last) => self.command.span.to(last.span()),
            None => self.command.span,
        }
    }
}

/// One argument of a command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operand {
    /// A single token: identifier, number, NBT, sub-command word, ...
    Token(Token),
    /// A selector or player name, possibly with attributes.
    Target(Target),
    /// Three coordinates.
    Location(Location),
    /// Two angles.
    Rotation(Rotation),
    /// A bracketed list literal.
    List(Vec<Operand>),
    /// A nested command, as after `execute ... run`.
    Command(Box<Command>),
}

impl Operand {
    /// Returns the source span of this operand.
    ///
    /// An empty list has no tokens of its own and reports an empty span.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Token(token) => token.span,
            Self::Target(target) => target.selector.span,
            Self::Location(location) => location.x.span.to(location.z.span),
            Self::Rotation(rotation) => rotation.pitch.span.to(rotation.yaw.span),
            Self::List(items) => match (items.first(), items.last()) {
                (Some(first), Some(last)) => first.span().to(last.span()),
                _ => Span::at_start(),
            },
            Self::Command(command) => command.span(),
        }
    }

    /// Returns the token if this is a plain token operand.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Returns the target if this is a target operand.
    #[must_use]
    pub const fn as_target(&self) -> Option<&Target> {
        match self {
            Self::Target(target) => Some(target),
            _ => None,
        }
    }

    /// Returns the nested command if this is one.
    #[must_use]
    pub fn as_command(&self) -> Option<&Command> {
        match self {
            Self::Command(command) => Some(command),
            _ => None,
        }
    }
}

/// A selector or player name with an optional attribute list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Target {
    /// Selector (`@s`) or name token.
    pub selector: Token,
    /// `None` without brackets; `Some(vec![])` for `@s[]`.
    pub attributes: Option<Vec<Attribute>>,
}

impl Target {
    /// Creates a target without an attribute list.
    #[must_use]
    pub const fn bare(selector: Token) -> Self {
        Self {
            selector,
            attributes: None,
        }
    }
}

/// One `key=value` entry in a selector's attribute list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    /// The attribute name.
    pub key: Token,
    /// True for `key=!value`.
    pub negated: bool,
    /// The attribute value.
    pub value: Token,
}

/// A position given as three numbers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub struct Location {
    pub x: Token,
    pub y: Token,
    pub z: Token,
}

impl Location {
    /// Returns the coordinates as written, joined by single spaces.
    #[must_use]
    pub fn raw(&self) -> String {
        format!("{} {} {}", self.x.kind, self.y.kind, self.z.kind)
    }
}

/// A facing given as two numbers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub struct Rotation {
    pub pitch: Token,
    pub yaw: Token,
}

impl Rotation {
    /// Returns the angles as written, joined by a single space.
    #[must_use]
    pub fn raw(&self) -> String {
        format!("{} {}", self.pitch.kind, self.yaw.kind)
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(command) => write!(f, "{command}"),
            Self::NoOp(_) => f.write_str("NoOp"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command({}", self.command.kind)?;
        for operand in &self.operands {
            write!(f, ", {operand}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => write!(f, "{}", token.kind),
            Self::Target(target) => write!(f, "{target}"),
            Self::Location(location) => write!(f, "{location}"),
            Self::Rotation(rotation) => write!(f, "{rotation}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Command(command) => write!(f, "{command}"),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target({}", self.selector.kind)?;
        if let Some(attributes) = &self.attributes {
            f.write_str("[")?;
            for (i, attribute) in attributes.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{attribute}")?;
            }
            f.write_str("]")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not = if self.negated { "!" } else { "" };
        write!(f, "{}={not}{}", self.key.kind, self.value.kind)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.raw())
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation({})", self.raw())
    }
}
