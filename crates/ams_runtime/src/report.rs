//! Human-readable diagnostics.
//!
//! Errors render red, warnings yellow, and the summary green or red,
//! unless color is turned off.

use std::fmt::Write;

use ams_foundation::Error;
use ams_tree::Anomaly;

use crate::pipeline::Report;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const HEADING: &str = "\x1b[1;36m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Renders diagnostics with or without ANSI colors.
#[derive(Clone, Copy, Debug)]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    /// Creates a reporter.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(self, color: &str, text: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Renders an error, prefixed with its source file when known.
    ///
    /// The offending line follows on its own indented line.
    #[must_use]
    pub fn error(self, error: &Error) -> String {
        let mut message = String::from("Error: ");
        let context = error.context.as_ref();
        if let Some(source) = context.and_then(|c| c.source.as_deref()) {
            let _ = write!(message, "{source}: ");
        }
        let _ = write!(message, "{error}");
        let mut rendered = self.paint(RED, &message);
        if let Some(text) = context.and_then(|c| c.text.as_deref()) {
            let _ = write!(rendered, "\n    {text}");
        }
        rendered
    }

    /// Renders a dropped comment child.
    #[must_use]
    pub fn warning(self, anomaly: &Anomaly) -> String {
        self.paint(YELLOW, &format!("Warning: {anomaly}"))
    }

    /// Renders a section heading in bold cyan.
    #[must_use]
    pub fn heading(self, text: &str) -> String {
        self.paint(HEADING, text)
    }

    /// Renders text in bold.
    #[must_use]
    pub fn bold(self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    /// Renders secondary text dimmed.
    #[must_use]
    pub fn dim(self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Renders the macro tree of a report under a heading.
    #[must_use]
    pub fn tree(self, report: &Report) -> String {
        format!(
            "{}\n{}",
            self.heading("=== Macro Tree ==="),
            report.compilation.forest
        )
    }

    /// Renders the closing summary line.
    #[must_use]
    pub fn summary(self, report: &Report) -> String {
        let lines = report.compilation.lines.len();
        let mut text = format!(
            "{}: {lines} line{}",
            report.source,
            if lines == 1 { "" } else { "s" }
        );
        if let Some(validation) = &report.validation {
            let _ = write!(
                text,
                ", {} checked, {} invalid",
                validation.checked,
                validation.failures.len()
            );
        }
        if let Some(path) = &report.written {
            let _ = write!(text, ", written to {}", path.display());
        } else if !report.is_valid() {
            text.push_str(", nothing written");
        }
        let color = if report.is_valid() { GREEN } else { RED };
        self.paint(color, &text)
    }

    /// Renders every warning and failure of a report, one per line.
    #[must_use]
    pub fn render(self, report: &Report) -> String {
        let mut out = Vec::new();
        for anomaly in &report.compilation.anomalies {
            out.push(self.warning(anomaly));
        }
        if let Some(validation) = &report.validation {
            for failure in &validation.failures {
                out.push(self.error(&failure.error));
            }
        }
        out.join("\n")
    }
}

/// Renders the warnings and failures of a report.
#[must_use]
pub fn render_report(report: &Report, color: bool) -> String {
    Reporter::new(color).render(report)
}
