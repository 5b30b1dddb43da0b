//! Compile-then-validate across the tree and language layers

use ams::foundation::ErrorKind;
use ams::runtime::{Config, Pipeline, Reporter};
use proptest::prelude::*;

fn pipeline() -> Pipeline {
    Pipeline::new(Config {
        validate: true,
        color: false,
        ..Config::default()
    })
}

#[test]
fn errors_point_at_the_leaf_line() {
    let source = "execute as @a\n\trun say ok\n\n\trun clear @s 64\n";
    let report = pipeline().run("leaf.ams", source);
    let failure = &report.validation.as_ref().unwrap().failures[0];
    assert_eq!(failure.source_line, 4);
    assert_eq!(failure.output_line, 2);
    assert_eq!(failure.text, "execute as @a run clear @s 64");
    assert!(matches!(failure.error.kind, ErrorKind::GrammarMismatch { line: 4, .. }));

    let rendered = Reporter::new(false).error(&failure.error);
    assert!(rendered.starts_with("Error: leaf.ams: line 4: expected"), "{rendered}");
}

#[test]
fn dropped_children_are_warnings_not_errors() {
    let report = pipeline().run("w.ams", "# header\n\tkill 5\nstop");
    assert!(report.is_valid());
    assert_eq!(report.compilation.anomalies.len(), 1);
    let warning = Reporter::new(false).warning(&report.compilation.anomalies[0]);
    assert!(warning.starts_with("Warning: line 2: 'kill 5'"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Valid leaves under a valid execute prefix always validate.
    #[test]
    fn execute_prefix_keeps_commands_valid(
        selectors in prop::collection::vec("@[aeprs]", 1..4),
        leaves in prop::collection::vec(prop_oneof![
            Just("run say hi"),
            Just("run kill @s"),
            Just("run give @s minecraft:stone 2"),
            Just("run tag @s add seen"),
        ], 1..6),
    ) {
        let mut source = String::from("execute");
        for selector in &selectors {
            source.push_str(&format!(" as {selector}"));
        }
        source.push('\n');
        for leaf in &leaves {
            source.push('\t');
            source.push_str(leaf);
            source.push('\n');
        }

        let report = pipeline().run("gen.ams", &source);
        let validation = report.validation.as_ref().unwrap();
        prop_assert_eq!(validation.checked, leaves.len());
        prop_assert!(validation.is_valid());
    }
}
