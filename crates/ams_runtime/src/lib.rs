//! Pipeline driver, configuration, CLI support, and interactive checker for AMS.
//!
//! This crate provides:
//! - [`Pipeline`] - Compile source files and validate the flattened lines
//! - [`Config`] - Settings loaded from `ams.json`
//! - [`Reporter`] - Colored, positioned diagnostics
//! - [`Checker`] - Interactive read-check-print loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod checker;
pub mod config;
pub mod editor;
pub mod highlight;
pub mod pipeline;
pub mod report;

pub use checker::{Checker, Response};
pub use config::Config;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::CommandHighlighter;
pub use pipeline::{Compilation, LineFailure, Pipeline, Report, ValidationReport, check_line};
pub use report::{Reporter, render_report};
