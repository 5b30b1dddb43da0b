//! Integration tests for building and flattening macro trees

use ams_tree::{MacroNode, NodeKind, TreeBuilder, compile, flatten, join_lines};

// =============================================================================
// End-to-end compile
// =============================================================================

#[test]
fn compile_shared_prefix() {
    assert_eq!(
        compile(["execute if condition1", "\trun command 1", "\trun command 2"]),
        "execute if condition1 run command 1\nexecute if condition1 run command 2\n"
    );
}

#[test]
fn compile_without_nesting() {
    assert_eq!(compile(["say hello"]), "say hello\n");
}

#[test]
fn compile_prefix_chain() {
    assert_eq!(
        compile(["execute if a", "\trun b", "\t\trun c"]),
        "execute if a run b run c\n"
    );
}

#[test]
fn compile_spaces_count_like_tabs() {
    assert_eq!(
        compile(["execute as @a", " run say a", "\trun say b"]),
        "execute as @a run say a\nexecute as @a run say b\n"
    );
}

#[test]
fn compile_dedent_to_shallower_ancestor() {
    let out = compile([
        "execute as @a",
        "\t\tat @s",
        "\t\t\trun say deep",
        "\trun say shallow",
    ]);
    assert_eq!(
        out,
        "execute as @a at @s run say deep\nexecute as @a run say shallow\n"
    );
}

#[test]
fn compile_trims_trailing_whitespace() {
    assert_eq!(compile(["say hi   ", "stop\r"]), "say hi\nstop\n");
}

// =============================================================================
// Comment markers
// =============================================================================

#[test]
fn marker_leaf_passes_through() {
    assert_eq!(compile(["  # just a note  "]), "# just a note\n");
}

#[test]
fn marker_under_command_is_not_prefixed() {
    assert_eq!(
        compile(["execute as @a", "\t# per player", "\trun say hi"]),
        "# per player\nexecute as @a run say hi\n"
    );
}

#[test]
fn marker_children_are_dropped_and_reported() {
    let forest = TreeBuilder::build(["# section", "\tsay lost", "\t\trun deeper", "say kept"]);
    assert_eq!(forest.flatten(), ["# section", "say kept"]);
    assert_eq!(forest.anomalies.len(), 1);
    let anomaly = &forest.anomalies[0];
    assert_eq!((anomaly.marker_line, anomaly.child_line), (1, 2));
    assert_eq!(anomaly.child_text, "say lost");
    assert!(forest.roots[0].is_leaf());
}

// =============================================================================
// Nodes and rendering
// =============================================================================

#[test]
fn node_kinds() {
    assert_eq!(MacroNode::from_trimmed("# x", 1).kind(), NodeKind::Marker);
    assert_eq!(MacroNode::from_trimmed("say x", 1).kind(), NodeKind::Command);
}

#[test]
fn forest_display_is_indented_dump() {
    let forest = TreeBuilder::build(["execute as @a", "\tat @s", "\t\trun stop", "say b"]);
    assert_eq!(
        forest.to_string(),
        "execute as @a\n\tat @s\n\t\trun stop\n\nsay b"
    );
}

#[test]
fn incremental_builder_matches_build() {
    let lines = ["execute as @a", "\trun say a", "", "say b"];
    let mut builder = TreeBuilder::new();
    for line in lines {
        builder.push_line(line);
    }
    assert_eq!(builder.finish(), TreeBuilder::build(lines));
}

#[test]
fn flatten_and_join() {
    let forest = TreeBuilder::build(["a", "\tb", "\tc"]);
    let lines = flatten(&forest.roots);
    assert_eq!(join_lines(&lines), "a b\na c\n");
    assert_eq!(forest.leaf_count(), 2);
}

#[test]
fn flatten_with_lines_points_at_leaves() {
    let forest = TreeBuilder::build(["# top", "execute as @a", "\trun say hi"]);
    assert_eq!(
        forest.flatten_with_lines(),
        [(1, "# top".to_string()), (3, "execute as @a run say hi".to_string())]
    );
}

#[test]
fn blank_input_is_empty() {
    let forest = TreeBuilder::build(["", "   ", "\t\t"]);
    assert!(forest.is_empty());
    assert_eq!(compile(["", " "]), "");
}
