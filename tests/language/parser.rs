//! Integration tests for the grammar parser
//!
//! Tests command parsing, dispatch, and error reporting.

use ams_foundation::ErrorKind;
use ams_language::{
    Ast, DataSource, Keyword, Operand, Parser, TokenClass, TokenKind, grammar, parse, parse_command,
    pretty::pretty_print,
};

fn command(source: &str) -> ams_language::Command {
    match parse_command(source) {
        Ok(Ast::Command(command)) => command,
        other => panic!("{source}: {other:?}"),
    }
}

// =============================================================================
// Documented scenarios
// =============================================================================

#[test]
fn clear_with_selector_item_and_count() {
    let clear = command("clear @s[tag=admin] minecraft:stone 128");
    assert_eq!(clear.keyword(), Some(Keyword::Clear));
    assert_eq!(clear.operands.len(), 3);

    let target = clear.operands[0].as_target().expect("target");
    assert_eq!(target.selector.kind, TokenKind::Selector("@s".into()));
    let attributes = target.attributes.as_ref().expect("attributes");
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].key.word(), Some("tag"));
    assert_eq!(attributes[0].value.word(), Some("admin"));

    assert_eq!(
        clear.operands[1].as_token().map(|t| &t.kind),
        Some(&TokenKind::Identifier("minecraft:stone".into()))
    );
    assert!(matches!(
        clear.operands[2].as_token().map(|t| &t.kind),
        Some(TokenKind::Int { value: 128, .. })
    ));
    assert_eq!(
        clear.to_string(),
        "Command(clear, Target(@s[tag=admin]), minecraft:stone, 128)"
    );
}

#[test]
fn clear_count_without_item_is_a_mismatch() {
    let err = parse_command("clear @s 64").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::GrammarMismatch { found: "integer", ref value, line: 1, .. } if value == "64"
    ));
}

#[test]
fn unregistered_keyword_is_unknown_command() {
    for source in ["loot spawn 0 0 0", "advancement grant @s everything", "spreadplayers 0 0"] {
        let err = parse_command(source).unwrap_err();
        let keyword = source.split(' ').next().unwrap();
        assert!(
            matches!(err.kind, ErrorKind::UnknownCommand { keyword: ref k, .. } if k == keyword),
            "{source}: {err}"
        );
    }
}

#[test]
fn selector_attribute_disambiguation() {
    let mut tight = Parser::new("@s[tag=admin]").unwrap();
    let target = tight.target().unwrap();
    assert_eq!(target.attributes.map(|a| a.len()), Some(1));
    assert!(tight.current().is(TokenClass::Eof));

    let mut spaced = Parser::new("@s [tag=admin]").unwrap();
    let target = spaced.target().unwrap();
    assert!(target.attributes.is_none());
    assert!(spaced.current().is(TokenClass::AttrBegin));
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn every_registered_rule_accepts_a_sample() {
    let samples = [
        "attribute @s minecraft:generic.max_health base set 40",
        "ban Steve griefing",
        "bossbar add mypack:timer {\"text\":\"Timer\"}",
        "clear",
        "data get entity @s Health",
        "defaultgamemode survival",
        "deop Steve",
        "effect give @a minecraft:speed 30 1 true",
        "enchant @p minecraft:sharpness 5",
        "execute as @a at @s run say hi",
        "function mypack:tick",
        "gamemode creative @p",
        "give @p minecraft:diamond 3",
        "help",
        "kick @p afk",
        "kill @e[type=zombie]",
        "list",
        "me waves",
        "msg @p hello there",
        "op Steve",
        "pardon Steve",
        "publish",
        "save-all",
        "save-off",
        "save-on",
        "say hello",
        "scoreboard objectives add kills playerKillCount",
        "setidletimeout 10",
        "setworldspawn 0 64 0",
        "spectate @p",
        "stop",
        "summon zombie 0 64 0",
        "tag @s add admin",
        "team add red",
        "teleport @s 0 64 0",
        "tellraw @a {\"text\":\"hi\"}",
        "title @a clear",
        "whitelist on",
    ];
    for source in samples {
        let parsed = command(source);
        let keyword = parsed.keyword().expect("keyword");
        assert!(grammar::has_rule(keyword), "{source}");
    }
    assert_eq!(samples.len(), Keyword::ALL.iter().filter(|k| grammar::has_rule(**k)).count());
}

#[test]
fn non_keyword_start_expects_command() {
    let err = parse_command("stone 5").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::GrammarMismatch { ref expected, .. } if expected == &["command"]
    ));
}

#[test]
fn trailing_operands_are_rejected() {
    assert!(parse_command("stop now").is_err());
    assert!(parse_command("kill @s @p").is_err());
}

#[test]
fn blank_and_comment_lines_are_noops() {
    assert!(parse_command("").unwrap().is_noop());
    assert!(parse_command("   # note").unwrap().is_noop());
    assert_eq!(pretty_print(&parse_command("").unwrap()), "");
}

// =============================================================================
// Nested and structured operands
// =============================================================================

#[test]
fn execute_run_nests_a_full_command() {
    let execute = command("execute as @a if score @s kills matches 10.. run give @s minecraft:diamond 1");
    let nested = execute
        .operands
        .last()
        .and_then(Operand::as_command)
        .expect("nested command");
    assert_eq!(nested.keyword(), Some(Keyword::Give));
}

#[test]
fn nested_command_errors_surface() {
    assert!(parse_command("execute as @a run clear @s 64").is_err());
    assert!(matches!(
        parse_command("execute as @a run loot spawn").unwrap_err().kind,
        ErrorKind::UnknownCommand { .. }
    ));
}

#[test]
fn data_or_storage_distinguishes_sources() {
    let mut ops = Vec::new();
    let mut parser = Parser::new("storage mypack:state").unwrap();
    assert_eq!(parser.data_or_storage(&mut ops).unwrap(), DataSource::Storage);

    let mut ops = Vec::new();
    let mut parser = Parser::new("[1, 2]").unwrap();
    assert_eq!(parser.data_or_storage(&mut ops).unwrap(), DataSource::Generic);
    assert!(matches!(ops.last(), Some(Operand::List(items)) if items.len() == 2));
}

#[test]
fn generic_data_list_or_scalar() {
    let mut parser = Parser::new("[a, 1, {b:2}]").unwrap();
    assert!(matches!(parser.generic_data().unwrap(), Operand::List(items) if items.len() == 3));

    let mut parser = Parser::new("true").unwrap();
    assert!(matches!(parser.generic_data().unwrap(), Operand::Token(t) if t.is(TokenClass::Bool)));
}

// =============================================================================
// Documents
// =============================================================================

#[test]
fn parse_document_stops_at_first_error() {
    let asts = parse("say a\n\n# c\nstop").unwrap();
    assert_eq!(asts.iter().filter(|a| !a.is_noop()).count(), 2);

    let err = parse("say a\nkill 5\nstop").unwrap_err();
    assert_eq!(err.line(), Some(2));
}

#[test]
fn pretty_print_normalizes() {
    let ast = parse_command("give   @p[ tag = a ]   stone   2").unwrap();
    assert_eq!(pretty_print(&ast), "give @p[tag=a] stone 2");
}

// =============================================================================
// Nesting and number spelling
// =============================================================================

#[test]
fn deep_nesting_is_a_grammar_error() {
    let depth = 20_000;
    let lists = format!(
        "data modify storage a:b x set value {}{}",
        "[".repeat(depth),
        "]".repeat(depth)
    );
    let err = parse_command(&lists).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::GrammarMismatch { found: "'['", .. }));

    let chain = format!("{}say hi", "execute as @a run ".repeat(depth));
    let err = parse_command(&chain).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::GrammarMismatch { found: "command", .. }));
}

#[test]
fn nesting_limit_allows_reasonable_depth() {
    let depth = ams_language::parser::MAX_NESTING;
    let lists = format!(
        "data modify storage a:b x append value {}a{}",
        "[".repeat(depth),
        "]".repeat(depth)
    );
    assert!(parse_command(&lists).is_ok());
    let chain = format!("{}stop", "execute at @s run ".repeat(depth));
    assert!(parse_command(&chain).is_ok());
}

#[test]
fn coordinates_keep_their_spelling() {
    let mut parser = Parser::new("0 64.50 +1").unwrap();
    assert_eq!(parser.location().unwrap().raw(), "0 64.50 +1");

    let teleport = command("teleport @a 0 64.50 +1 +90.0 -05");
    let [_, Operand::Location(location), Operand::Rotation(rotation)] = &teleport.operands[..] else {
        panic!("unexpected operands: {teleport}");
    };
    assert_eq!(location.raw(), "0 64.50 +1");
    assert_eq!(rotation.raw(), "+90.0 -05");
    assert_eq!(
        pretty_print(&parse_command("teleport @a 0 64.50 +1").unwrap()),
        "teleport @a 0 64.50 +1"
    );
}

#[test]
fn ranges_accept_negative_upper_bounds() {
    assert!(parse_command("execute if score @s hp matches ..-1 run kill @s").is_ok());
    assert!(parse_command("execute if score @s hp matches -10..-5 run say low").is_ok());
}
