//! AMS command line entry point.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ams_foundation::Error;
use ams_language::{Lexer, TokenKind, parse_command, pretty::pretty_print};
use ams_runtime::{Checker, Config, Pipeline, Report, Reporter};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ams", about = "Indentation-structured command compiler", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an indented source file into flat command lines
    Compile {
        /// Source file, or `-` for standard input
        input: PathBuf,
        /// Output file (default: the input with the configured extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Validate every output line
        #[arg(long)]
        check: bool,
        /// Exit non-zero and write nothing when any line is invalid
        #[arg(long)]
        strict: bool,
        /// Configuration file (default: ams.json next to the input)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the macro tree before compiling
        #[arg(short, long)]
        verbose: bool,
    },
    /// Parse one command line and print its AST
    Check {
        /// The command words
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
        /// Print the AST as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the token stream of one command line
    Tokens {
        /// The command words
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Start the interactive command checker
    Repl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter = Reporter::new(!cli.no_color);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", reporter.error(&e));
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the command ran but found invalid input.
fn run(cli: Cli) -> Result<bool, Error> {
    match cli.command {
        Commands::Compile {
            input,
            output,
            check,
            strict,
            config,
            verbose,
        } => {
            let mut settings = load_config(config.as_deref(), &input)?;
            settings.validate |= check || strict;
            settings.fail_on_invalid |= strict;
            settings.show_tree |= verbose;
            settings.color &= !cli.no_color;
            compile(&settings, &input, output.as_deref())
        }
        Commands::Check { command, json } => check(&command.join(" "), json, !cli.no_color),
        Commands::Tokens { command } => {
            for token in Lexer::tokenize_all(&command.join(" "))? {
                if token.kind != TokenKind::Eof {
                    println!("{:<10} {}", token.class().name(), token.kind);
                }
            }
            Ok(true)
        }
        Commands::Repl => {
            Checker::new()?.with_color(!cli.no_color).run()?;
            Ok(true)
        }
    }
}

fn load_config(explicit: Option<&Path>, input: &Path) -> Result<Config, Error> {
    if let Some(path) = explicit {
        return Config::load(path);
    }
    let dir = match input.parent() {
        Some(parent) if input != Path::new("-") && !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Config::discover(dir)
}

fn compile(config: &Config, input: &Path, output: Option<&Path>) -> Result<bool, Error> {
    let pipeline = Pipeline::new(config.clone());
    let reporter = Reporter::new(config.color);

    let report = if input == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| Error::io("<stdin>", &e))?;
        let report = pipeline.run("-", &text);
        show_tree(config, &report);
        if let Some(path) = output {
            if !config.fail_on_invalid || report.is_valid() {
                std::fs::write(path, &report.compilation.output)
                    .map_err(|e| Error::io(path.display(), &e))?;
            }
        } else if !config.fail_on_invalid || report.is_valid() {
            io::stdout()
                .write_all(report.compilation.output.as_bytes())
                .map_err(|e| Error::io("<stdout>", &e))?;
        }
        report
    } else {
        let report = pipeline.compile_file(input, output)?;
        show_tree(config, &report);
        report
    };

    let diagnostics = reporter.render(&report);
    if !diagnostics.is_empty() {
        eprintln!("{diagnostics}");
    }
    if input != Path::new("-") || output.is_some() {
        eprintln!("{}", reporter.summary(&report));
    }

    Ok(!config.fail_on_invalid || report.is_valid())
}

fn show_tree(config: &Config, report: &Report) {
    if config.show_tree {
        eprintln!("{}\n", Reporter::new(config.color).tree(report));
    }
}

fn check(command: &str, json: bool, color: bool) -> Result<bool, Error> {
    let ast = match parse_command(command) {
        Ok(ast) => ast,
        Err(e) => {
            eprintln!("{}", Reporter::new(color).error(&e));
            return Ok(false);
        }
    };
    if json {
        let text = serde_json::to_string_pretty(&ast).map_err(|e| Error::config(e.to_string()))?;
        println!("{text}");
    } else {
        println!("{}", pretty_print(&ast));
        println!("{ast}");
    }
    Ok(true)
}
