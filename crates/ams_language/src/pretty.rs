//! Pretty-printer for parsed commands.
//!
//! Converts AST nodes back to canonical command text: single spaces between
//! operands, attribute lists without spaces, lists as `[a, b]`.
//!
//! # Example
//!
//! ```
//! use ams_language::{parse_command, pretty::pretty_print};
//!
//! let ast = parse_command("clear   @s[tag = admin]  minecraft:stone").unwrap();
//! assert_eq!(pretty_print(&ast), "clear @s[tag=admin] minecraft:stone");
//! ```

use std::fmt::Write;

use crate::ast::{Ast, Command, Operand, Target};

/// Pretty-print an AST node to a string.
///
/// A `NoOp` prints as the empty string.
#[must_use]
pub fn pretty_print(ast: &Ast) -> String {
    let mut printer = PrettyPrinter::default();
    if let Ast::Command(command) = ast {
        printer.command(command);
    }
    printer.output
}

/// Pretty-print multiple AST nodes, one per line.
#[must_use]
pub fn pretty_print_all(asts: &[Ast]) -> String {
    asts.iter().map(pretty_print).collect::<Vec<_>>().join("\n")
}

#[derive(Default)]
struct PrettyPrinter {
    output: String,
}

impl PrettyPrinter {
    fn command(&mut self, command: &Command) {
        let _ = write!(self.output, "{}", command.command.kind);
        for operand in &command.operands {
            self.output.push(' ');
            self.operand(operand);
        }
    }

    fn operand(&mut self, operand: &Operand) {
        match operand {
            Operand::Token(token) => {
                let _ = write!(self.output, "{}", token.kind);
            }
            Operand::Target(target) => self.target(target),
            Operand::Location(location) => self.output.push_str(&location.raw()),
            Operand::Rotation(rotation) => self.output.push_str(&rotation.raw()),
            Operand::List(items) => {
                self.output.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.operand(item);
                }
                self.output.push(']');
            }
            Operand::Command(command) => self.command(command),
        }
    }

    fn target(&mut self, target: &Target) {
        let _ = write!(self.output, "{}", target.selector.kind);
        if let Some(attributes) = &target.attributes {
            self.output.push('[');
            for (i, attribute) in attributes.iter().enumerate() {
                if i > 0 {
                    self.output.push(',');
                }
                let _ = write!(self.output, "{attribute}");
            }
            self.output.push(']');
        }
    }
}
