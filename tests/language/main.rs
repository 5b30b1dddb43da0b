//! Integration tests for Layer 2: Language
//!
//! Tests for the lexer, the grammar parser, and the command AST.

mod lexer;
mod parser;
