//! The compile-and-validate pipeline.
//!
//! Source text goes through the macro tree builder and the flattening
//! compiler; when validation is enabled, each flattened line is then parsed
//! on its own so one bad line never hides the others.

use std::fs;
use std::path::{Path, PathBuf};

use ams_foundation::{Error, ErrorContext, Result};
use ams_language::Parser;
use ams_tree::{Anomaly, COMMENT_MARKER, Forest, TreeBuilder, join_lines};

use crate::config::Config;

/// The output of compiling one source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compilation {
    /// Output text, one newline-terminated line per leaf.
    pub output: String,
    /// Flattened lines paired with the source line of their leaf.
    pub lines: Vec<(usize, String)>,
    /// Children dropped from comment lines.
    pub anomalies: Vec<Anomaly>,
    /// The macro tree the output was flattened from.
    pub forest: Forest,
}

/// A flattened line that failed to parse.
#[derive(Debug)]
pub struct LineFailure {
    /// 1-based position in the output.
    pub output_line: usize,
    /// Source line of the leaf that produced it.
    pub source_line: usize,
    /// The flattened command text.
    pub text: String,
    /// The lexical or grammar error.
    pub error: Error,
}

/// Per-line validation results for one compilation.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Lines handed to the parser.
    pub checked: usize,
    /// Comment lines passed through without parsing.
    pub skipped: usize,
    /// Lines that failed, in output order.
    pub failures: Vec<LineFailure>,
}

impl ValidationReport {
    /// Returns true if no line failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Everything the pipeline learned about one input.
#[derive(Debug)]
pub struct Report {
    /// Display name of the input, `-` for standard input.
    pub source: String,
    /// The compiled output.
    pub compilation: Compilation,
    /// Present when validation ran.
    pub validation: Option<ValidationReport>,
    /// Where the output was written, if it was.
    pub written: Option<PathBuf>,
}

impl Report {
    /// Returns true unless validation ran and found failures.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validation.as_ref().is_none_or(ValidationReport::is_valid)
    }
}

/// Drives compilation according to a [`Config`].
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Creates a pipeline with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the macro tree for `text` and flattens it.
    ///
    /// Never fails: indentation problems only change the tree shape, and
    /// children of comment lines come back as anomalies.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn compile_source(&self, text: &str) -> Compilation {
        let forest = TreeBuilder::build(text.split('\n'));
        let lines = forest.flatten_with_lines();
        let output = join_lines(&lines.iter().map(|(_, line)| line.as_str()).collect::<Vec<_>>());
        let anomalies = forest.anomalies.clone();
        Compilation {
            output,
            lines,
            anomalies,
            forest,
        }
    }

    /// Parses every flattened line independently.
    ///
    /// Comment lines are skipped. Errors report the source line of the leaf
    /// that produced the failing line.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn validate(&self, lines: &[(usize, String)]) -> ValidationReport {
        validate_lines(lines, None)
    }

    /// Compiles `text` and validates it when configured, without writing.
    #[must_use]
    pub fn run(&self, source: &str, text: &str) -> Report {
        let compilation = self.compile_source(text);
        let validation = self
            .config
            .validate
            .then(|| validate_lines(&compilation.lines, Some(source)));
        Report {
            source: source.to_string(),
            compilation,
            validation,
            written: None,
        }
    }

    /// Compiles a file and writes the output.
    ///
    /// The output goes to `output` when given, otherwise next to the input
    /// with the configured extension. With `fail_on_invalid`, nothing is
    /// written if any line fails validation.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing fails, or a configuration
    /// error if the derived output path would overwrite the input.
    pub fn compile_file(&self, input: &Path, output: Option<&Path>) -> Result<Report> {
        let text = fs::read_to_string(input).map_err(|e| Error::io(input.display(), &e))?;
        let destination = output.map_or_else(|| self.config.output_path(input), Path::to_path_buf);
        if destination == input {
            return Err(Error::config(format!(
                "output path {} would overwrite the input",
                destination.display()
            )));
        }

        let mut report = self.run(&input.display().to_string(), &text);
        if self.config.fail_on_invalid && !report.is_valid() {
            return Ok(report);
        }

        fs::write(&destination, &report.compilation.output)
            .map_err(|e| Error::io(destination.display(), &e))?;
        report.written = Some(destination);
        Ok(report)
    }
}

/// Parses each line, attaching `source` as error context when given.
fn validate_lines(lines: &[(usize, String)], source: Option<&str>) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (index, (source_line, text)) in lines.iter().enumerate() {
        if text.starts_with(COMMENT_MARKER) {
            report.skipped += 1;
            continue;
        }
        report.checked += 1;
        if let Err(error) = check_line(text, *source_line) {
            let error = match source {
                Some(source) => error.with_context(
                    ErrorContext::new()
                        .with_source(source)
                        .with_line(*source_line)
                        .with_text(text.clone()),
                ),
                None => error,
            };
            report.failures.push(LineFailure {
                output_line: index + 1,
                source_line: *source_line,
                text: text.clone(),
                error,
            });
        }
    }
    report
}

/// Parses one flattened command line reported at `source_line`.
///
/// # Errors
///
/// Returns the lexical or grammar error for the line.
pub fn check_line(text: &str, source_line: usize) -> Result<()> {
    let line = u32::try_from(source_line).unwrap_or(u32::MAX);
    Parser::starting_at_line(text, line)?.parse_command()?;
    Ok(())
}
