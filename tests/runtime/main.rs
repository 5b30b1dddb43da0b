//! Integration tests for Layer 3: Runtime
//!
//! Tests for configuration, the pipeline driver, and the interactive checker.

mod checker;
mod config;
mod pipeline;
