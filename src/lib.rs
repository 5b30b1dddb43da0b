//! AMS - Indentation-structured command scripting
//!
//! This crate re-exports all layers of the AMS compiler for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: ams_runtime    — Pipeline driver, config, reporting, CLI, interactive checker
//! Layer 2: ams_language   — Lexer, grammar parser, command AST
//! Layer 1: ams_tree       — Macro tree builder, flattening compiler
//! Layer 0: ams_foundation — Shared error types
//! ```

pub use ams_foundation as foundation;
pub use ams_language as language;
pub use ams_runtime as runtime;
pub use ams_tree as tree;
