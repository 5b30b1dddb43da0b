//! The interactive command checker.
//!
//! Each entered line is lexed and parsed as one command. Valid commands echo
//! their AST; errors are printed and the loop carries on.

use std::io::{self, Write};

use ams_foundation::{Error, Result};
use ams_language::{Ast, Lexer, Token, TokenKind, parse_command, pretty::pretty_print};

use crate::editor::{LineEditor, ReadResult, RustylineEditor, command_keywords, open_braces};
use crate::report::Reporter;

/// What one input line asked for.
#[derive(Debug)]
pub enum Response {
    /// A parsed command.
    Ast(Ast),
    /// The token stream of `:tokens <command>`.
    Tokens(Vec<Token>),
    /// `:help`
    Help,
    /// `:quit`
    Quit,
}

/// The interactive checker loop.
pub struct Checker<E: LineEditor = RustylineEditor> {
    editor: E,
    reporter: Reporter,
    show_banner: bool,
    prompt: String,
    continuation_prompt: String,
}

impl Checker<RustylineEditor> {
    /// Creates a checker reading from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Checker<E> {
    /// Creates a checker with the given editor.
    pub fn with_editor(mut editor: E) -> Self {
        editor.set_keywords(command_keywords());
        Self {
            editor,
            reporter: Reporter::new(true),
            show_banner: true,
            prompt: "ams> ".to_string(),
            continuation_prompt: "...> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Turns ANSI colors on or off, in the editor as well as the output.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.reporter = Reporter::new(color);
        self.editor.set_color(color);
        self
    }

    /// Runs the loop until end of input or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            println!("{}", self.banner());
            let _ = io::stdout().flush();
        }

        while self.read_check_print()? {}

        println!();
        Ok(())
    }

    /// Executes one read-check-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_check_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Response::Quit) => return Ok(false),
            Ok(response) => {
                if let Some(text) = self.render(&response) {
                    println!("{text}");
                }
            }
            Err(e) => eprintln!("{}", self.reporter.error(&e)),
        }

        Ok(true)
    }

    /// Formats a response for display; `None` when there is nothing to show.
    fn render(&self, response: &Response) -> Option<String> {
        match response {
            Response::Ast(ast) if ast.is_noop() => None,
            Response::Ast(ast) => Some(format!(
                "{}\n{}",
                pretty_print(ast),
                self.reporter.dim(&ast.to_string())
            )),
            Response::Tokens(tokens) => Some(
                tokens
                    .iter()
                    .map(|token| format!("{:<10} {}", token.class().name(), token.kind))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Response::Help => Some(self.help()),
            Response::Quit => None,
        }
    }

    fn help(&self) -> String {
        format!(
            "{}
    <command>           Parse a command line and print its AST
    :tokens <command>   Print the token stream of a command line
    :help               Show this help
    :quit               Exit (or Ctrl+D)
    Ctrl+C              Cancel current input",
            self.reporter.bold("COMMANDS:")
        )
    }

    fn banner(&self) -> String {
        format!(
            "{}\nType a command to check it. :help lists directives, Ctrl+D exits.\n",
            self.reporter
                .heading(&format!("AMS command checker v{}", env!("CARGO_PKG_VERSION")))
        )
    }

    /// Reads one command, continuing while an NBT blob is open.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);
                    if open_braces(&input) <= 0 {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("Input cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    // Let the parser report the open blob.
                    return Ok(Some(input));
                }
            }
        }
    }

    /// Checks one input line.
    ///
    /// Lines starting with `:` are checker directives: `:tokens <command>`,
    /// `:help` and `:quit`.
    ///
    /// # Errors
    ///
    /// Returns the lexical or grammar error for the command, or a
    /// configuration error for an unknown directive.
    #[allow(clippy::unused_self)]
    pub fn eval(&mut self, input: &str) -> Result<Response> {
        let trimmed = input.trim_start();
        let Some(directive) = trimmed.strip_prefix(':') else {
            return parse_command(input).map(Response::Ast);
        };

        let (name, rest) = directive.split_once(char::is_whitespace).unwrap_or((directive, ""));
        match name {
            "tokens" | "t" => {
                let mut tokens = Lexer::tokenize_all(rest)?;
                tokens.retain(|t| t.kind != TokenKind::Eof);
                Ok(Response::Tokens(tokens))
            }
            "help" | "h" => Ok(Response::Help),
            "quit" | "q" => Ok(Response::Quit),
            other => Err(Error::config(format!("unknown directive ':{other}'"))),
        }
    }
}
