//! Data storage, tag and boss bar commands.

use ams_foundation::Result;

use crate::ast::Command;
use crate::parser::{DataSource, Parser};
use crate::token::TokenClass;

const BOSSBAR_COLORS: &[&str] = &["blue", "green", "pink", "purple", "red", "white", "yellow"];
const BOSSBAR_STYLES: &[&str] = &["notched_10", "notched_12", "notched_20", "notched_6", "progress"];

impl Parser<'_> {
    /// `data get <target> [<path> [<scale>]]`
    /// or `data merge <target> <nbt>`
    /// or `data modify <target> <path> <operation> from <source> [<path>]`
    /// or `data modify <target> <path> <operation> value <value>`
    /// or `data remove <target> <path>`
    ///
    /// The `from`/`value` word may be left out, in which case the source is
    /// told apart from a plain value by lookahead.
    pub(super) fn data(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        let operation = self.choice(ops, &["get", "merge", "modify", "remove"])?;
        self.data_storage(ops)?;

        match operation {
            "get" => {
                if self.accept_path_into(ops)? {
                    self.accept_number_into(ops)?;
                }
            }
            "merge" => self.read_into(ops, &[TokenClass::Nbt])?,
            "remove" => self.path_into(ops)?,
            _ => {
                self.path_into(ops)?;
                let mode = self.choice(ops, &["append", "insert", "merge", "prepend", "set"])?;
                if mode == "insert" {
                    self.read_into(ops, &[TokenClass::Int])?;
                }
                match self.accept_choice(ops, &["from", "value"])? {
                    Some("from") => {
                        self.data_storage(ops)?;
                        self.accept_path_into(ops)?;
                    }
                    Some(_) => {
                        let value = self.generic_data()?;
                        ops.push(value);
                    }
                    None => {
                        if self.data_or_storage(ops)? == DataSource::Storage {
                            self.accept_path_into(ops)?;
                        }
                    }
                }
            }
        }
        Ok(command)
    }

    /// `tag <targets> add|remove <name>`, `tag <targets> list`
    pub(super) fn tag(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        self.target_into(ops)?;
        if self.choice(ops, &["add", "list", "remove"])? != "list" {
            self.read_into(ops, &[TokenClass::Identifier])?;
        }
        Ok(command)
    }

    /// `bossbar add <id> <name>`, `bossbar list`, `bossbar remove <id>`
    /// or `bossbar get <id> max|players|value|visible`
    /// or `bossbar set <id> <property> <value>`
    pub(super) fn bossbar(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        let action = self.choice(ops, &["add", "get", "list", "remove", "set"])?;
        if action == "list" {
            return Ok(command);
        }

        self.read_into(ops, &[TokenClass::Identifier])?;
        match action {
            "add" => self.text_component_into(ops)?,
            "get" => {
                self.choice(ops, &["max", "players", "value", "visible"])?;
            }
            "remove" => {}
            _ => match self.choice(
                ops,
                &["color", "max", "name", "players", "style", "value", "visible"],
            )? {
                "color" => {
                    self.choice(ops, BOSSBAR_COLORS)?;
                }
                "style" => {
                    self.choice(ops, BOSSBAR_STYLES)?;
                }
                "max" | "value" => self.read_into(ops, &[TokenClass::Int])?,
                "visible" => self.read_into(ops, &[TokenClass::Bool])?,
                "name" => self.text_component_into(ops)?,
                _ => {
                    self.accept_target_into(ops)?;
                }
            },
        }
        Ok(command)
    }
}
