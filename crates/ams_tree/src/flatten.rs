//! Flattens a macro forest into command lines.
//!
//! Each leaf yields one line: the text of every ancestor, then the leaf's own
//! text, joined by single spaces. Leaf comments pass through unprefixed.

use crate::node::MacroNode;

/// Flattens `roots` depth-first, left to right.
///
/// The number of returned lines always equals the number of leaves.
#[must_use]
pub fn flatten(roots: &[MacroNode]) -> Vec<String> {
    flatten_with_lines(roots)
        .into_iter()
        .map(|(_, line)| line)
        .collect()
}

/// Like [`flatten`], pairing each line with the source line of its leaf.
#[must_use]
pub fn flatten_with_lines(roots: &[MacroNode]) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut prefix = String::new();
    // Remaining siblings at each level, plus the prefix length for that level.
    let mut stack = vec![(roots.iter(), 0)];

    loop {
        let Some((siblings, base)) = stack.last_mut() else {
            break;
        };
        let base = *base;
        let Some(node) = siblings.next() else {
            stack.pop();
            continue;
        };

        prefix.truncate(base);
        if node.is_leaf() {
            let text = if node.is_marker() {
                node.text().to_owned()
            } else {
                format!("{prefix}{}", node.text())
            };
            lines.push((node.line(), text));
        } else {
            prefix.push_str(node.text());
            prefix.push(' ');
            stack.push((node.children().iter(), prefix.len()));
        }
    }

    lines
}

/// Joins lines into output text, terminating every line with `\n`.
#[must_use]
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}
