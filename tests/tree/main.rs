//! Integration tests for Layer 1: Tree
//!
//! Tests for the macro tree builder and the flattening compiler.

mod builder;
