//! Scoreboard and team commands.

use ams_foundation::Result;

use crate::ast::{Command, Operand};
use crate::parser::Parser;
use crate::token::{TokenClass, TokenKind};

const TEAM_OPTIONS: &[&str] = &[
    "collisionRule",
    "color",
    "deathMessageVisibility",
    "displayName",
    "friendlyFire",
    "nametagVisibility",
    "prefix",
    "seeFriendlyInvisibles",
    "suffix",
];

impl Parser<'_> {
    /// `scoreboard objectives ...` or `scoreboard players ...`
    pub(super) fn scoreboard(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        if self.choice(ops, &["objectives", "players"])? == "objectives" {
            self.objectives(ops)?;
        } else {
            self.players(ops)?;
        }
        Ok(command)
    }

    /// `add <objective> <criteria> [<displayName>]`, `list`, `remove <objective>`,
    /// `modify <objective> displayname <json>`, `modify <objective> rendertype hearts|integer`,
    /// `setdisplay <slot> [<objective>]`
    fn objectives(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        match self.choice(ops, &["add", "list", "modify", "remove", "setdisplay"])? {
            "add" => {
                self.objective_into(ops)?;
                self.read_into(ops, &[TokenClass::Identifier])?;
                if !self.at_end() {
                    self.text_component_into(ops)?;
                }
            }
            "list" => {}
            "modify" => {
                self.objective_into(ops)?;
                if self.choice(ops, &["displayname", "rendertype"])? == "rendertype" {
                    self.choice(ops, &["hearts", "integer"])?;
                } else {
                    self.text_component_into(ops)?;
                }
            }
            "remove" => self.objective_into(ops)?,
            _ => {
                let slot = self.word()?;
                ops.push(Operand::Token(slot));
                if !self.at_end() {
                    self.objective_into(ops)?;
                }
            }
        }
        Ok(())
    }

    /// `add|remove|set <targets> <objective> <score>`, `enable <targets> <objective>`,
    /// `get <target> <objective>`, `list [<target>]`, `reset <targets> [<objective>]`,
    /// `operation <targets> <objective> <op> <source> <sourceObjective>`
    fn players(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        let action = self.choice(
            ops,
            &["add", "enable", "get", "list", "operation", "remove", "reset", "set"],
        )?;

        if action == "list" {
            if !self.at_end() {
                self.score_holder_into(ops)?;
            }
            return Ok(());
        }

        self.score_holder_into(ops)?;
        match action {
            "add" | "remove" | "set" => {
                self.objective_into(ops)?;
                self.read_into(ops, &[TokenClass::Int])?;
            }
            "reset" => {
                if !self.at_end() {
                    self.objective_into(ops)?;
                }
            }
            "operation" => {
                self.objective_into(ops)?;
                self.read_into(ops, &[TokenClass::Operator, TokenClass::Assign])?;
                self.score_holder_into(ops)?;
                self.objective_into(ops)?;
            }
            // enable, get
            _ => self.objective_into(ops)?,
        }
        Ok(())
    }

    /// `team add <team> [<displayName>]`, `team remove|empty <team>`,
    /// `team join <team> [<members>]`, `team leave <members>`, `team list [<team>]`,
    /// `team modify <team> <option> <value>`
    pub(super) fn team(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        let action = self.choice(
            ops,
            &["add", "empty", "join", "leave", "list", "modify", "remove"],
        )?;

        match action {
            "leave" => self.target_into(ops)?,
            "list" => {
                self.accept_into(ops, TokenClass::Identifier)?;
            }
            _ => {
                self.read_into(ops, &[TokenClass::Identifier])?;
                match action {
                    "add" => {
                        if !self.at_end() {
                            self.text_component_into(ops)?;
                        }
                    }
                    "join" => {
                        if !self.at_end() {
                            self.score_holder_into(ops)?;
                        }
                    }
                    "modify" => match self.choice(ops, TEAM_OPTIONS)? {
                        "displayName" | "prefix" | "suffix" => self.text_component_into(ops)?,
                        "friendlyFire" | "seeFriendlyInvisibles" => {
                            self.read_into(ops, &[TokenClass::Bool])?;
                        }
                        _ => {
                            let value = self.word()?;
                            ops.push(Operand::Token(value));
                        }
                    },
                    // empty, remove
                    _ => {}
                }
            }
        }
        Ok(command)
    }

    /// Reads an objective name, which may spell a keyword such as `kill`.
    fn objective_into(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        let objective = self.word()?;
        ops.push(Operand::Token(objective));
        Ok(())
    }

    /// Reads a score holder: a target, or `*` for every tracked holder.
    fn score_holder_into(&mut self, ops: &mut Vec<Operand>) -> Result<()> {
        if matches!(&self.current().kind, TokenKind::Operator(op) if op == "*") {
            let wildcard = self.advance()?;
            ops.push(Operand::Token(wildcard));
            Ok(())
        } else {
            self.target_into(ops)
        }
    }
}
