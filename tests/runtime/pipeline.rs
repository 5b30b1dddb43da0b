//! Integration tests for the pipeline driver

use std::fs;

use ams_foundation::ErrorKind;
use ams_runtime::{Config, Pipeline, check_line, render_report};

fn validating(fail_on_invalid: bool) -> Pipeline {
    Pipeline::new(Config {
        validate: true,
        fail_on_invalid,
        color: false,
        ..Config::default()
    })
}

const SCRIPT: &str = "\
# Give every live player a reward
execute as @a[tag=alive] at @s
\tif score @s kills matches 10..
\t\trun give @s minecraft:diamond 1
\t\trun say winner
\trun scoreboard players add @s rounds 1
";

#[test]
fn compile_script() {
    let compilation = Pipeline::default().compile_source(SCRIPT);
    assert_eq!(
        compilation.output,
        "# Give every live player a reward\n\
         execute as @a[tag=alive] at @s if score @s kills matches 10.. run give @s minecraft:diamond 1\n\
         execute as @a[tag=alive] at @s if score @s kills matches 10.. run say winner\n\
         execute as @a[tag=alive] at @s run scoreboard players add @s rounds 1\n"
    );
}

#[test]
fn validate_script() {
    let report = validating(false).run("reward.ams", SCRIPT);
    let validation = report.validation.as_ref().expect("validated");
    assert!(validation.is_valid(), "{}", render_report(&report, false));
    assert_eq!(validation.checked, 3);
    assert_eq!(validation.skipped, 1);
}

#[test]
fn one_bad_line_does_not_hide_others() {
    let source = "clear @s 64\nloot spawn 0 0 0\nsay fine\nteleport @s ~ ~ ~\n";
    let report = validating(false).run("bad.ams", source);
    let validation = report.validation.as_ref().expect("validated");
    let lines: Vec<_> = validation.failures.iter().map(|f| f.source_line).collect();
    assert_eq!(lines, [1, 2, 4]);
    assert!(matches!(validation.failures[0].error.kind, ErrorKind::GrammarMismatch { .. }));
    assert!(matches!(validation.failures[1].error.kind, ErrorKind::UnknownCommand { .. }));
    assert!(matches!(validation.failures[2].error.kind, ErrorKind::Lexical { .. }));

    let rendered = render_report(&report, false);
    assert_eq!(rendered.lines().filter(|l| l.starts_with("Error: bad.ams: ")).count(), 3);
}

#[test]
fn strict_compile_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.ams");
    fs::write(&input, "say ok\nclear @s 64\n").unwrap();
    let output = dir.path().join("out.mcfunction");

    let report = validating(true).compile_file(&input, Some(&output)).unwrap();
    assert!(!report.is_valid());
    assert!(report.written.is_none());
    assert!(!output.exists());
}

#[test]
fn lenient_compile_writes_despite_failures() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.ams");
    fs::write(&input, "say ok\nclear @s 64\n").unwrap();

    let report = validating(false).compile_file(&input, None).unwrap();
    assert!(!report.is_valid());
    let written = report.written.expect("written");
    assert_eq!(fs::read_to_string(written).unwrap(), "say ok\nclear @s 64\n");
}

#[test]
fn check_line_uses_source_line() {
    let err = check_line("kill 5", 17).unwrap_err();
    assert_eq!(err.line(), Some(17));
    assert!(check_line("kill @s", 1).is_ok());
}

#[test]
fn deep_line_fails_alone() {
    let deep = format!("data modify storage a:b x set value {}", "[".repeat(100_000));
    let source = format!("say before\n{deep}\nsay after\nkill 5\n");
    let report = validating(false).run("deep.ams", &source);
    let validation = report.validation.expect("validation ran");
    assert_eq!(validation.checked, 4);
    let lines: Vec<_> = validation.failures.iter().map(|f| f.source_line).collect();
    assert_eq!(lines, [2, 4]);
    assert!(matches!(
        validation.failures[0].error.kind,
        ErrorKind::GrammarMismatch { .. }
    ));
}
