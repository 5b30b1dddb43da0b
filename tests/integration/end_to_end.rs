//! Source text in, command lines out

use ams::language::parse_command;
use ams::runtime::Pipeline;
use ams::tree::compile;

#[test]
fn shared_prefix_scenario() {
    assert_eq!(
        compile(["execute if condition1", "\trun command 1", "\trun command 2"]),
        "execute if condition1 run command 1\nexecute if condition1 run command 2\n"
    );
}

#[test]
fn no_nesting_scenario() {
    assert_eq!(compile(["say hello"]), "say hello\n");
}

#[test]
fn compiled_lines_parse() {
    let source = "\
execute as @a
\tat @s
\t\tif entity @e[type=zombie,distance=..8]
\t\t\trun tellraw @s {\"text\":\"Zombie nearby\"}
\t\t\trun effect give @s minecraft:speed 5 1
\trun tag @s add checked
";
    let compilation = Pipeline::default().compile_source(source);
    assert_eq!(compilation.lines.len(), 3);
    for (_, line) in &compilation.lines {
        assert!(parse_command(line).is_ok(), "{line}");
    }
}

#[test]
fn pipeline_and_tree_agree() {
    let lines = ["execute as @a", "  run say a", "  # note", "say b"];
    let joined = lines.join("\n");
    assert_eq!(Pipeline::default().compile_source(&joined).output, compile(lines));
}
