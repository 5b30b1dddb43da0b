//! Macro nodes: one node per non-blank source line.

use std::fmt;

/// Prefix that marks a comment line.
pub const COMMENT_MARKER: char = '#';

/// What a [`MacroNode`] was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A regular command fragment.
    Command,
    /// A comment line. Markers never hold children.
    Marker,
}

/// One line of indented source with its ordered children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroNode {
    text: String,
    kind: NodeKind,
    line: usize,
    children: Vec<MacroNode>,
}

impl MacroNode {
    /// Creates a command node.
    #[must_use]
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            kind: NodeKind::Command,
            line,
            children: Vec::new(),
        }
    }

    /// Creates a marker (comment) node.
    #[must_use]
    pub fn marker(text: impl Into<String>, line: usize) -> Self {
        let mut node = Self::new(text, line);
        node.kind = NodeKind::Marker;
        node
    }

    /// Creates a node from an already trimmed line, classifying comments.
    #[must_use]
    pub fn from_trimmed(text: &str, line: usize) -> Self {
        if text.starts_with(COMMENT_MARKER) {
            Self::marker(text, line)
        } else {
            Self::new(text, line)
        }
    }

    /// Appends a child.
    ///
    /// # Errors
    /// Markers reject children: the child is dropped and returned inside the
    /// [`Anomaly`] describing the rejected attachment. The marker is unchanged.
    pub fn add_child(&mut self, mut child: MacroNode) -> Result<(), Anomaly> {
        match self.kind {
            NodeKind::Command => {
                self.children.push(child);
                Ok(())
            }
            NodeKind::Marker => Err(Anomaly {
                marker_line: self.line,
                marker_text: self.text.clone(),
                child_line: child.line,
                child_text: std::mem::take(&mut child.text),
            }),
        }
    }

    /// The line text with indentation stripped.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The node kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// 1-based source line this node came from.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Children in source order.
    #[must_use]
    pub fn children(&self) -> &[MacroNode] {
        &self.children
    }

    /// Returns true for comment nodes.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self.kind, NodeKind::Marker)
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Counts the leaves of the subtree rooted here.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if node.is_leaf() {
                count += 1;
            } else {
                pending.extend(node.children.iter());
            }
        }
        count
    }
}

/// Renders the subtree with one tab of indentation per level.
impl fmt::Display for MacroNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(self, 0)];
        let mut first = true;
        while let Some((node, depth)) = pending.pop() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            for _ in 0..depth {
                f.write_str("\t")?;
            }
            f.write_str(&node.text)?;
            pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        Ok(())
    }
}

/// Frees deep chains without recursing once per level.
impl Drop for MacroNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// A child that was indented under a comment line and therefore dropped.
///
/// Non-fatal: compilation continues without the child's subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anomaly {
    /// Line of the comment that rejected the child.
    pub marker_line: usize,
    /// Text of the comment.
    pub marker_text: String,
    /// Line of the dropped child.
    pub child_line: usize,
    /// Text of the dropped child.
    pub child_text: String,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: '{}' is indented under the comment on line {} ('{}') and was dropped",
            self.child_line, self.child_text, self.marker_line, self.marker_text
        )
    }
}
