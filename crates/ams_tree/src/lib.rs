//! Indentation macro trees for AMS source.
//!
//! This crate turns nested, indented source lines into a forest of
//! [`MacroNode`]s and flattens that forest into plain command lines:
//!
//! ```text
//! execute if condition1            execute if condition1 run command 1
//!     run command 1          =>    execute if condition1 run command 2
//!     run command 2
//! ```
//!
//! - [`TreeBuilder`] - Scans lines and builds the forest
//! - [`flatten`] - Depth-first, prefix-concatenating traversal
//! - [`compile`] - Both stages, producing newline-terminated output text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod flatten;
pub mod node;

pub use builder::{Forest, TreeBuilder, indentation};
pub use flatten::{flatten, flatten_with_lines, join_lines};
pub use node::{Anomaly, COMMENT_MARKER, MacroNode, NodeKind};

/// Compiles indented source lines into output text, one line per leaf.
///
/// Every emitted line is terminated by `\n`. Never fails: malformed
/// indentation only changes the tree shape, and comment lines with
/// children are reported through [`TreeBuilder`] instead.
#[must_use]
pub fn compile<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let forest = TreeBuilder::build(lines);
    join_lines(&forest.flatten())
}
