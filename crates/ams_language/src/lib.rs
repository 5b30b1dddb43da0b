//! Lexer, grammar parser, and command AST for AMS command lines.
//!
//! This crate validates the flat command lines produced by `ams_tree`:
//! - [`Lexer`] - Pull-based tokenization of command text
//! - [`Parser`] - Recursive-descent parsing with per-keyword grammar rules
//! - [`Ast`] - The parsed command, its targets, locations and operands
//!
//! ```
//! use ams_language::parse_command;
//!
//! let ast = parse_command("clear @s[tag=admin] minecraft:stone 128").unwrap();
//! assert_eq!(
//!     ast.to_string(),
//!     "Command(clear, Target(@s[tag=admin]), minecraft:stone, 128)"
//! );
//! assert!(parse_command("clear @s 64").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod grammar;
pub mod keyword;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod span;
pub mod token;


pub use ast::{Ast, Attribute, Command, Location, Operand, Rotation, Target};
pub use keyword::Keyword;
pub use lexer::Lexer;
pub use parser::{DataSource, Parser, parse, parse_command};
pub use span::Span;
pub use token::{Token, TokenClass, TokenKind};
