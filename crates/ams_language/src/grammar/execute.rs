//! The `execute` command.
//!
//! `execute` chains any number of modifier and condition subcommands and may
//! end with `run`, which parses a complete nested command.

use ams_foundation::Result;

use super::ANCHORS;
use crate::ast::{Command, Operand};
use crate::parser::Parser;
use crate::token::{TokenClass, TokenKind};

const SUBCOMMANDS: &[&str] = &[
    "align",
    "anchored",
    "as",
    "at",
    "facing",
    "if",
    "in",
    "positioned",
    "rotated",
    "run",
    "store",
    "unless",
];

const STORE_TYPES: &[&str] = &["byte", "double", "float", "int", "long", "short"];

impl Parser<'_> {
    /// `execute <subcommand>... [run <command>]`
    pub(super) fn execute(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;

        while !self.at_end() {
            match self.choice(ops, SUBCOMMANDS)? {
                "align" => self.read_into(ops, &[TokenClass::Identifier])?,
                "anchored" => {
                    self.choice(ops, ANCHORS)?;
                }
                "as" | "at" => self.target_into(ops)?,
                "facing" => {
                    if self.accept_choice(ops, &["entity"])?.is_some() {
                        self.target_into(ops)?;
                        self.choice(ops, ANCHORS)?;
                    } else {
                        self.location_into(ops)?;
                    }
                }
                "in" => self.read_into(ops, &[TokenClass::Identifier])?,
                "positioned" => {
                    if self.accept_choice(ops, &["as"])?.is_some() {
                        self.target_into(ops)?;
                    } else {
                        self.location_into(ops)?;
                    }
                }
                "rotated" => {
                    if self.accept_choice(ops, &["as"])?.is_some() {
                        self.target_into(ops)?;
                    } else {
                        self.rotation_into(ops)?;
                    }
                }
                "if" | "unless" => self.condition(ops)?,
                "store" => self.store(ops)?,
                _ => {
                    let TokenKind::Command(keyword) = self.current().kind else {
                        return Err(self.mismatch(&[TokenClass::Command]));
                    };
                    let nested = self.nested(&[TokenClass::Newline, TokenClass::Eof], |p| {
                        p.dispatch(keyword)
                    })?;
                    ops.push(Operand::Command(Box::new(nested)));
                    break;
                }
            }
        }
        Ok(command)
    }

    /// `block <pos> <block>`, `blocks <start> <end> <destination> all|masked`,
    /// `data block|entity|storage <source> <path>`, `entity <targets>`,
    /// `predicate <id>`, `score <target> <objective> matches <range>`,
    /// `score <target> <objective> <op> <source> <sourceObjective>`
    fn condition(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        match self.choice(ops, &["block", "blocks", "data", "entity", "predicate", "score"])? {
            "block" => {
                self.location_into(ops)?;
                self.read_into(ops, &[TokenClass::Identifier])?;
            }
            "blocks" => {
                self.location_into(ops)?;
                self.location_into(ops)?;
                self.location_into(ops)?;
                self.choice(ops, &["all", "masked"])?;
            }
            "data" => {
                self.data_storage(ops)?;
                self.path_into(ops)?;
            }
            "entity" => self.target_into(ops)?,
            "predicate" => self.read_into(ops, &[TokenClass::Identifier])?,
            _ => {
                self.target_into(ops)?;
                self.read_into(ops, &[TokenClass::Identifier])?;
                if self.accept_choice(ops, &["matches"])?.is_some() {
                    self.read_into(ops, &[TokenClass::Range, TokenClass::Int])?;
                } else {
                    self.read_into(ops, &[TokenClass::Operator, TokenClass::Assign])?;
                    self.target_into(ops)?;
                    self.read_into(ops, &[TokenClass::Identifier])?;
                }
            }
        }
        Ok(())
    }

    /// `result|success` then `block <pos> <path> <type> <scale>`,
    /// `bossbar <id> max|value`, `entity <target> <path> <type> <scale>`,
    /// `score <targets> <objective>` or `storage <id> <path> <type> <scale>`
    fn store(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        self.choice(ops, &["result", "success"])?;
        match self.choice(ops, &["block", "bossbar", "entity", "score", "storage"])? {
            "bossbar" => {
                self.read_into(ops, &[TokenClass::Identifier])?;
                self.choice(ops, &["max", "value"])?;
            }
            "score" => {
                self.target_into(ops)?;
                self.read_into(ops, &[TokenClass::Identifier])?;
            }
            kind => {
                match kind {
                    "block" => self.location_into(ops)?,
                    "entity" => self.target_into(ops)?,
                    _ => self.read_into(ops, &[TokenClass::Identifier])?,
                }
                self.path_into(ops)?;
                self.choice(ops, STORE_TYPES)?;
                self.number_into(ops)?;
            }
        }
        Ok(())
    }
}
