//! Integration tests for the interactive checker

use std::collections::VecDeque;

use ams_foundation::Result;
use ams_language::{Keyword, TokenKind};
use ams_runtime::{Checker, LineEditor, ReadResult, Response};

/// An editor that replays a fixed script.
#[derive(Default)]
struct ScriptedEditor {
    lines: VecDeque<String>,
    history: Vec<String>,
    keywords: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop_front().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        self.keywords = keywords;
    }
}

#[test]
fn checker_evaluates_commands() {
    let mut checker = Checker::with_editor(ScriptedEditor::default()).without_banner();
    match checker.eval("give @p minecraft:stone 5").unwrap() {
        Response::Ast(ast) => assert!(!ast.is_noop()),
        other => panic!("unexpected {other:?}"),
    }
    assert!(checker.eval("give @p").is_err());
}

#[test]
fn checker_token_directive() {
    let mut checker = Checker::with_editor(ScriptedEditor::default()).without_banner();
    let Response::Tokens(tokens) = checker.eval(":tokens say hi").unwrap() else {
        panic!("expected tokens");
    };
    assert_eq!(tokens[0].kind, TokenKind::Command(Keyword::Say));
}

#[test]
fn checker_runs_script_to_end() {
    let mut checker = Checker::with_editor(ScriptedEditor::new(&[
        "say hi",
        "clear @s 64",
        ":help",
        "summon zombie 0 64 0 {",
        "NoAI:1b}",
    ]))
    .without_banner()
    .with_color(false);
    checker.run().unwrap();
}
