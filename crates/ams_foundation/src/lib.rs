//! Shared error types for the AMS compiler.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with optional source context
//! - [`ErrorKind`] - Lexical, grammar and driver failure categories
//! - [`Result`] - Convenience alias used across every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind};

/// Result type alias using the AMS error type.
pub type Result<T> = std::result::Result<T, Error>;
