//! Cross-layer integration tests for AMS
//!
//! Tests that verify correct interaction between multiple crates.

mod end_to_end;
mod validation;
