//! Builds a [`MacroNode`] forest from indented lines.
//!
//! Indentation depth is the number of leading tab or space characters; a tab
//! and a space both count as one level. A line becomes a child of the nearest
//! preceding line with a strictly smaller depth. Blank lines are skipped.

use std::fmt;

use crate::flatten::{flatten, flatten_with_lines};
use crate::node::{Anomaly, MacroNode};

/// Counts leading indentation characters (tabs and spaces alike).
#[must_use]
pub fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| matches!(c, ' ' | '\t')).count()
}

/// An open node together with the depth it was read at.
struct Frame {
    node: MacroNode,
    depth: usize,
}

/// Incremental forest builder.
///
/// Uses an explicit stack of open nodes instead of recursion, so nesting depth
/// is limited only by memory.
#[derive(Default)]
pub struct TreeBuilder {
    stack: Vec<Frame>,
    roots: Vec<MacroNode>,
    anomalies: Vec<Anomaly>,
    line: usize,
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a forest from a sequence of lines.
    #[must_use]
    pub fn build<I, S>(lines: I) -> Forest
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        for line in lines {
            builder.push_line(line.as_ref());
        }
        builder.finish()
    }

    /// Feeds the next source line.
    pub fn push_line(&mut self, line: &str) {
        self.line += 1;

        let text = line.trim();
        if text.is_empty() {
            return;
        }

        let depth = indentation(line);
        self.close_to(depth);
        self.stack.push(Frame {
            node: MacroNode::from_trimmed(text, self.line),
            depth,
        });
    }

    /// Closes every open node and returns the finished forest.
    #[must_use]
    pub fn finish(mut self) -> Forest {
        self.close_to(0);
        Forest {
            roots: self.roots,
            anomalies: self.anomalies,
        }
    }

    /// Pops every open node at `depth` or deeper, attaching each to its parent.
    fn close_to(&mut self, depth: usize) {
        while self.stack.last().is_some_and(|frame| frame.depth >= depth) {
            if let Some(frame) = self.stack.pop() {
                self.attach(frame.node);
            }
        }
    }

    fn attach(&mut self, node: MacroNode) {
        match self.stack.last_mut() {
            Some(parent) => {
                if let Err(anomaly) = parent.node.add_child(node) {
                    self.anomalies.push(anomaly);
                }
            }
            None => self.roots.push(node),
        }
    }
}

/// The result of building: top-level trees in source order plus anomalies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Forest {
    /// Top-level nodes in source order.
    pub roots: Vec<MacroNode>,
    /// Children dropped because they were indented under a comment.
    pub anomalies: Vec<Anomaly>,
}

impl Forest {
    /// Flattens the forest into one command line per leaf.
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        flatten(&self.roots)
    }

    /// Flattens the forest, pairing each line with its leaf's source line.
    #[must_use]
    pub fn flatten_with_lines(&self) -> Vec<(usize, String)> {
        flatten_with_lines(&self.roots)
    }

    /// Total number of leaves across all trees.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.roots.iter().map(MacroNode::leaf_count).sum()
    }

    /// Returns true if no line produced a node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl fmt::Display for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, root) in self.roots.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{root}")?;
        }
        Ok(())
    }
}
