//! Recursive-descent parser for AMS command lines.
//!
//! The parser holds one current token plus a small lookahead buffer. It never
//! backtracks: optional clauses are resolved with [`Parser::accept`] and the
//! few ambiguous positions use a bounded [`Parser::peek`]. Per-command rules
//! live in [`crate::grammar`].

use std::collections::VecDeque;

use ams_foundation::{Error, ErrorKind, Result};

use crate::ast::{Ast, Attribute, Command, Location, Operand, Rotation, Target};
use crate::lexer::Lexer;
use crate::token::{Token, TokenClass, TokenKind};

/// How far past the current token the parser may look.
const MAX_LOOKAHEAD: usize = 2;

/// How deeply list literals and `execute ... run` commands may nest.
pub const MAX_NESTING: usize = 128;

/// Token classes accepted as the value of a selector attribute.
const ATTRIBUTE_VALUES: &[TokenClass] = &[
    TokenClass::Identifier,
    TokenClass::Command,
    TokenClass::Nbt,
    TokenClass::Int,
    TokenClass::Float,
    TokenClass::Range,
    TokenClass::Bool,
];

/// Token classes accepted as a scalar datum.
const SCALARS: &[TokenClass] = &[
    TokenClass::Identifier,
    TokenClass::Int,
    TokenClass::Float,
    TokenClass::Bool,
    TokenClass::Nbt,
];

/// Words that introduce a structured data source.
const STORAGE_KINDS: &[&str] = &["block", "entity", "storage"];

/// Which form [`Parser::data_or_storage`] matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// `block <pos>`, `entity <target>` or `storage <id>`.
    Storage,
    /// A single scalar or list literal.
    Generic,
}

/// Parser for AMS command lines.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token.
    current: Token,
    /// Tokens already pulled from the lexer for [`Parser::peek`].
    lookahead: VecDeque<Token>,
    /// Current list and nested-command depth.
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn new(source: &'src str) -> Result<Self> {
        Self::from_lexer(Lexer::new(source))
    }

    /// Creates a parser whose first line is reported as `line`.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn starting_at_line(source: &'src str, line: u32) -> Result<Self> {
        Self::from_lexer(Lexer::starting_at_line(source, line))
    }

    fn from_lexer(mut lexer: Lexer<'src>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            lookahead: VecDeque::with_capacity(MAX_LOOKAHEAD),
            depth: 0,
        })
    }

    /// Parses newline-separated command lines until end of input.
    ///
    /// # Errors
    /// Returns the first lexical or grammar error.
    pub fn parse(&mut self) -> Result<Vec<Ast>> {
        let mut commands = vec![self.command()?];

        while !self.check(TokenClass::Eof) {
            self.expect(&[TokenClass::Newline])?;
            commands.push(self.command()?);
        }

        Ok(commands)
    }

    /// Parses exactly one command line.
    ///
    /// Trailing newlines are allowed; anything after them is an error.
    ///
    /// # Errors
    /// Returns a lexical or grammar error.
    pub fn parse_command(&mut self) -> Result<Ast> {
        let ast = self.command()?;
        while self.accept(TokenClass::Newline)?.is_some() {}
        if !self.check(TokenClass::Eof) {
            return Err(self.mismatch(&[TokenClass::Eof]));
        }
        Ok(ast)
    }

    /// Parses one command and requires it to end the line.
    fn command(&mut self) -> Result<Ast> {
        match self.current.kind {
            TokenKind::Command(keyword) => {
                let command = self.dispatch(keyword)?;
                if !self.at_end() {
                    return Err(self.mismatch(&[TokenClass::Newline, TokenClass::Eof]));
                }
                Ok(Ast::Command(command))
            }
            TokenKind::Newline | TokenKind::Eof => Ok(Ast::NoOp(self.current.span)),
            _ => Err(self.mismatch(&[TokenClass::Command])),
        }
    }

    // =========================================================================
    // Token stream
    // =========================================================================

    /// Returns the current token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Returns the token `n` positions past the current one (1 or 2).
    pub(crate) fn peek(&mut self, n: usize) -> Result<&Token> {
        debug_assert!((1..=MAX_LOOKAHEAD).contains(&n));
        while self.lookahead.len() < n {
            let token = self.lexer.next_token()?;
            self.lookahead.push_back(token);
        }
        Ok(&self.lookahead[n - 1])
    }

    /// Consumes the current token and returns it.
    pub(crate) fn advance(&mut self) -> Result<Token> {
        let next = match self.lookahead.pop_front() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Returns true if the current token is of the given class.
    pub(crate) fn check(&self, class: TokenClass) -> bool {
        self.current.is(class)
    }

    /// Returns true if the current token is of any of the given classes.
    pub(crate) fn check_any(&self, classes: &[TokenClass]) -> bool {
        classes.contains(&self.current.class())
    }

    /// Returns true if the current token ends the command line.
    pub(crate) const fn at_end(&self) -> bool {
        self.current.is_end()
    }

    /// Consumes the current token if it is one of `expected`.
    pub(crate) fn expect(&mut self, expected: &[TokenClass]) -> Result<Token> {
        if self.check_any(expected) {
            self.advance()
        } else {
            Err(self.mismatch(expected))
        }
    }

    /// Consumes the current token only if it is of the given class.
    pub(crate) fn accept(&mut self, class: TokenClass) -> Result<Option<Token>> {
        if self.check(class) {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Consumes a required token and records it as an operand.
    pub(crate) fn read_into(&mut self, ops: &mut Vec<Operand>, expected: &[TokenClass]) -> Result<()> {
        let token = self.expect(expected)?;
        ops.push(Operand::Token(token));
        Ok(())
    }

    /// Consumes and records a token of the given class if present.
    ///
    /// Returns whether a token was consumed; the stream is untouched otherwise.
    pub(crate) fn accept_into(&mut self, ops: &mut Vec<Operand>, class: TokenClass) -> Result<bool> {
        match self.accept(class)? {
            Some(token) => {
                ops.push(Operand::Token(token));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Builds a mismatch error for the current token.
    pub(crate) fn mismatch(&self, expected: &[TokenClass]) -> Error {
        Error::grammar_mismatch(
            expected.iter().map(|class| class.name()).collect(),
            self.current.kind.name(),
            self.current.kind.to_string(),
            self.current.span.line,
            self.current.span.column,
        )
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Past [`MAX_NESTING`] levels the current token is rejected as a
    /// mismatch against `expected`, so deep input fails instead of
    /// exhausting the stack.
    pub(crate) fn nested<T>(
        &mut self,
        expected: &[TokenClass],
        parse: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.depth >= MAX_NESTING {
            return Err(self.mismatch(expected));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    // =========================================================================
    // Words
    // =========================================================================

    /// Consumes the command keyword and starts its AST node.
    pub(crate) fn head(&mut self) -> Result<Command> {
        let token = self.expect(&[TokenClass::Command])?;
        Ok(Command::new(token))
    }

    /// Consumes an identifier, reading a keyword as a plain word.
    ///
    /// Sub-command words such as `list` or `give` collide with keywords.
    pub(crate) fn word(&mut self) -> Result<Token> {
        let token = self.expect(&[TokenClass::Identifier, TokenClass::Command])?;
        Ok(as_identifier(token))
    }

    /// Consumes one of a fixed set of words, records it, and returns which.
    pub(crate) fn choice(
        &mut self,
        ops: &mut Vec<Operand>,
        words: &[&'static str],
    ) -> Result<&'static str> {
        match self.accept_choice(ops, words)? {
            Some(word) => Ok(word),
            None => Err(Error::new(ErrorKind::UnexpectedWord {
                expected: words.to_vec(),
                found: self.current.kind.to_string(),
                line: self.current.span.line,
                column: self.current.span.column,
            })),
        }
    }

    /// Like [`Parser::choice`], but leaves the stream untouched on no match.
    pub(crate) fn accept_choice(
        &mut self,
        ops: &mut Vec<Operand>,
        words: &[&'static str],
    ) -> Result<Option<&'static str>> {
        let Some(found) = self.current.word() else {
            return Ok(None);
        };
        let Some(&word) = words.iter().find(|&&w| w == found) else {
            return Ok(None);
        };
        let token = self.advance()?;
        ops.push(Operand::Token(as_identifier(token)));
        Ok(Some(word))
    }

    // =========================================================================
    // Structural primitives
    // =========================================================================

    /// Consumes an integer or float.
    pub(crate) fn number(&mut self) -> Result<Token> {
        self.expect(&[TokenClass::Int, TokenClass::Float])
    }

    /// Consumes a number and records it as an operand.
    pub(crate) fn number_into(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        let token = self.number()?;
        ops.push(Operand::Token(token));
        Ok(())
    }

    /// Consumes a number and records it if one is present.
    pub(crate) fn accept_number_into(&mut self, ops: &mut Vec<Operand>) -> Result<bool> {
        if self.current.is_number() {
            self.number_into(ops)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Parses a selector or name with an optional attribute list.
    ///
    /// The list is read only when `[` follows the selector with no whitespace
    /// in between; `@s [tag=a]` leaves the `[` in the stream.
    ///
    /// # Errors
    /// Returns a grammar error if the target or its attributes are malformed.
    pub fn target(&mut self) -> Result<Target> {
        let selector = self.expect(&[TokenClass::Selector, TokenClass::Identifier])?;

        if selector.trailing_whitespace || !self.check(TokenClass::AttrBegin) {
            return Ok(Target::bare(selector));
        }

        self.advance()?;
        let attributes = self.attribute_list()?;
        self.expect(&[TokenClass::AttrEnd])?;

        Ok(Target {
            selector,
            attributes: Some(attributes),
        })
    }

    /// Parses and records a target.
    pub(crate) fn target_into(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        let target = self.target()?;
        ops.push(Operand::Target(target));
        Ok(())
    }

    /// Records a target if the current token can start one.
    pub(crate) fn accept_target_into(&mut self, ops: &mut Vec<Operand>) -> Result<bool> {
        if self.check_any(&[TokenClass::Selector, TokenClass::Identifier]) {
            self.target_into(ops)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Parses comma-separated attributes up to (not including) `]`.
    fn attribute_list(&mut self) -> Result<Vec<Attribute>> {
        let mut attributes = Vec::new();
        if self.check(TokenClass::AttrEnd) {
            return Ok(attributes);
        }

        attributes.push(self.attribute()?);
        while self.accept(TokenClass::Comma)?.is_some() {
            attributes.push(self.attribute()?);
        }

        Ok(attributes)
    }

    /// Parses `key=value` or `key=!value`.
    fn attribute(&mut self) -> Result<Attribute> {
        let key = self.word()?;
        self.expect(&[TokenClass::Assign])?;
        let negated = self.accept(TokenClass::Not)?.is_some();
        let value = as_identifier(self.expect(ATTRIBUTE_VALUES)?);

        Ok(Attribute {
            key,
            negated,
            value,
        })
    }

    /// Parses three numbers as a position.
    ///
    /// # Errors
    /// Returns a grammar error if any coordinate is not a number.
    pub fn location(&mut self) -> Result<Location> {
        let x = self.number()?;
        let y = self.number()?;
        let z = self.number()?;
        Ok(Location { x, y, z })
    }

    /// Parses and records a location.
    pub(crate) fn location_into(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        let location = self.location()?;
        ops.push(Operand::Location(location));
        Ok(())
    }

    /// Parses two numbers as a rotation.
    ///
    /// # Errors
    /// Returns a grammar error if either angle is not a number.
    pub fn rotation(&mut self) -> Result<Rotation> {
        let pitch = self.number()?;
        let yaw = self.number()?;
        Ok(Rotation { pitch, yaw })
    }

    /// Parses and records a rotation.
    pub(crate) fn rotation_into(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        let rotation = self.rotation()?;
        ops.push(Operand::Rotation(rotation));
        Ok(())
    }

    /// Parses a scalar (identifier, number, boolean, NBT) or a list literal.
    ///
    /// # Errors
    /// Returns a grammar error if neither form is present.
    pub fn generic_data(&mut self) -> Result<Operand> {
        if self.check_any(SCALARS) {
            return self.advance().map(Operand::Token);
        }
        if self.check(TokenClass::AttrBegin) {
            return self.nested(SCALARS, Self::list);
        }

        let mut expected = SCALARS.to_vec();
        expected.push(TokenClass::AttrBegin);
        Err(self.mismatch(&expected))
    }

    /// Parses `[item, item, ...]`.
    fn list(&mut self) -> Result<Operand> {
        self.expect(&[TokenClass::AttrBegin])?;

        let mut items = Vec::new();
        if !self.check(TokenClass::AttrEnd) {
            items.push(self.generic_data()?);
            while self.accept(TokenClass::Comma)?.is_some() {
                items.push(self.generic_data()?);
            }
        }

        self.expect(&[TokenClass::AttrEnd])?;
        Ok(Operand::List(items))
    }

    /// Parses `block <pos>`, `entity <target>` or `storage <id>`.
    pub(crate) fn data_storage(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        match self.choice(ops, STORAGE_KINDS)? {
            "block" => self.location_into(ops),
            "entity" => self.target_into(ops),
            _ => self.read_into(ops, &[TokenClass::Identifier]),
        }
    }

    /// Parses either a structured data source or a single datum.
    ///
    /// A storage word is a source only when the next token can start its
    /// operand: a number after `block`, a selector or name after `entity`,
    /// an identifier after `storage`. Anything else (including a bare
    /// `block`) is generic data. Callers use the result to decide whether a
    /// path still follows.
    ///
    /// # Errors
    /// Returns a grammar error if neither form matches.
    pub fn data_or_storage(&mut self, ops: &mut Vec<Operand>) -> Result<DataSource> {
        let operand: &[TokenClass] = match self.current.word() {
            Some("block") => &[TokenClass::Int, TokenClass::Float],
            Some("entity") => &[TokenClass::Selector, TokenClass::Identifier],
            Some("storage") => &[TokenClass::Identifier],
            _ => &[],
        };
        if !operand.is_empty() && operand.contains(&self.peek(1)?.class()) {
            self.data_storage(ops)?;
            return Ok(DataSource::Storage);
        }

        let data = self.generic_data()?;
        ops.push(data);
        Ok(DataSource::Generic)
    }

    /// Consumes an NBT path such as `Inventory[0].Count`.
    ///
    /// Path segments may spell keywords (`list`, `data`), so they are read as words.
    pub(crate) fn path_into(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        let path = self.word()?;
        ops.push(Operand::Token(path));
        Ok(())
    }

    /// Records an NBT path if one is present.
    pub(crate) fn accept_path_into(&mut self, ops: &mut Vec<Operand>) -> Result<bool> {
        if self.check_any(&[TokenClass::Identifier, TokenClass::Command]) {
            self.path_into(ops)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Parses a JSON text component: an NBT-style blob or a list literal.
    pub(crate) fn text_component_into(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        if self.check(TokenClass::AttrBegin) {
            let list = self.list()?;
            ops.push(list);
            Ok(())
        } else {
            self.read_into(ops, &[TokenClass::Nbt])
        }
    }

    /// Consumes the rest of the line as free text, reading selectors as targets.
    pub(crate) fn message_into(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        while !self.at_end() {
            if self.check(TokenClass::Selector) {
                self.target_into(ops)?;
            } else {
                let token = self.advance()?;
                ops.push(Operand::Token(token));
            }
        }
        Ok(())
    }
}

/// Reads a keyword token as the plain identifier it spells.
fn as_identifier(token: Token) -> Token {
    match token.kind {
        TokenKind::Command(keyword) => Token::new(
            TokenKind::Identifier(keyword.as_str().to_string()),
            token.span,
            token.trailing_whitespace,
        ),
        _ => token,
    }
}

/// Parses newline-separated command lines.
///
/// # Errors
/// Returns the first lexical or grammar error.
pub fn parse(source: &str) -> Result<Vec<Ast>> {
    Parser::new(source)?.parse()
}

/// Parses a single command line.
///
/// # Errors
/// Returns a lexical or grammar error.
pub fn parse_command(source: &str) -> Result<Ast> {
    Parser::new(source)?.parse_command()
}
