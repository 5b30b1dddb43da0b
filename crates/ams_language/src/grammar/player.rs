//! Commands acting on players and entities.

use ams_foundation::Result;

use super::{ANCHORS, GAMEMODES};
use crate::ast::Command;
use crate::parser::Parser;
use crate::token::TokenClass;

impl Parser<'_> {
    /// `clear [<targets> [<item> [<maxCount>]]]`
    ///
    /// A count is only read after an item, so `clear @s 64` does not parse.
    pub(super) fn clear(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        if self.accept_target_into(ops)? && self.accept_into(ops, TokenClass::Identifier)? {
            self.accept_into(ops, TokenClass::Int)?;
        }
        Ok(command)
    }

    /// `give <targets> <item> [<count>]`
    pub(super) fn give(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        self.target_into(ops)?;
        self.read_into(ops, &[TokenClass::Identifier])?;
        self.accept_into(ops, TokenClass::Int)?;
        Ok(command)
    }

    /// `kill [<targets>]`
    pub(super) fn kill(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        self.accept_target_into(&mut command.operands)?;
        Ok(command)
    }

    /// `gamemode <mode> [<target>]`
    pub(super) fn gamemode(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        self.choice(ops, GAMEMODES)?;
        self.accept_target_into(ops)?;
        Ok(command)
    }

    /// `effect give <targets> <effect> [<seconds> [<amplifier> [<hideParticles>]]]`
    /// or `effect clear [<targets> [<effect>]]`
    pub(super) fn effect(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        match self.choice(ops, &["clear", "give"])? {
            "give" => {
                self.target_into(ops)?;
                self.read_into(ops, &[TokenClass::Identifier])?;
                if self.accept_into(ops, TokenClass::Int)?
                    && self.accept_into(ops, TokenClass::Int)?
                {
                    self.accept_into(ops, TokenClass::Bool)?;
                }
            }
            _ => {
                if self.accept_target_into(ops)? {
                    self.accept_into(ops, TokenClass::Identifier)?;
                }
            }
        }
        Ok(command)
    }

    /// `enchant <targets> <enchantment> [<level>]`
    pub(super) fn enchant(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        self.target_into(ops)?;
        self.read_into(ops, &[TokenClass::Identifier])?;
        self.accept_into(ops, TokenClass::Int)?;
        Ok(command)
    }

    /// `attribute <target> <attribute> get [<scale>]`
    /// or `... base get [<scale>]` or `... base set <value>`
    /// or `... modifier add <uuid> <name> <value> add|multiply|multiply_base`
    /// or `... modifier remove <uuid>` or `... modifier value get <uuid> [<scale>]`
    pub(super) fn attribute_command(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        self.target_into(ops)?;
        self.read_into(ops, &[TokenClass::Identifier])?;

        match self.choice(ops, &["base", "get", "modifier"])? {
            "get" => {
                self.accept_number_into(ops)?;
            }
            "base" => {
                if self.choice(ops, &["get", "set"])? == "set" {
                    self.number_into(ops)?;
                } else {
                    self.accept_number_into(ops)?;
                }
            }
            _ => match self.choice(ops, &["add", "remove", "value"])? {
                "add" => {
                    self.read_into(ops, &[TokenClass::Identifier])?;
                    self.read_into(ops, &[TokenClass::Identifier])?;
                    self.number_into(ops)?;
                    self.choice(ops, &["add", "multiply", "multiply_base"])?;
                }
                "remove" => self.read_into(ops, &[TokenClass::Identifier])?,
                _ => {
                    self.choice(ops, &["get"])?;
                    self.read_into(ops, &[TokenClass::Identifier])?;
                    self.accept_number_into(ops)?;
                }
            },
        }
        Ok(command)
    }

    /// `spectate [<target> [<player>]]`
    pub(super) fn spectate(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        if self.accept_target_into(ops)? {
            self.accept_target_into(ops)?;
        }
        Ok(command)
    }

    /// `summon <entity> [<pos> [<nbt>]]`
    pub(super) fn summon(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        self.read_into(ops, &[TokenClass::Identifier])?;
        if self.current().is_number() {
            self.location_into(ops)?;
            self.accept_into(ops, TokenClass::Nbt)?;
        }
        Ok(command)
    }

    /// `setworldspawn [<pos> [<angle>]]`
    pub(super) fn setworldspawn(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        if self.current().is_number() {
            self.location_into(ops)?;
            self.accept_number_into(ops)?;
        }
        Ok(command)
    }

    /// `teleport <destination>` or `teleport <pos>`
    /// or `teleport <targets> <destination>`
    /// or `teleport <targets> <pos> [<rotation> | facing <pos> | facing entity <target> [<anchor>]]`
    pub(super) fn teleport(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;

        if self.current().is_number() {
            self.location_into(ops)?;
            return Ok(command);
        }

        self.target_into(ops)?;
        if self.at_end() {
            return Ok(command);
        }

        if !self.current().is_number() {
            self.target_into(ops)?;
            return Ok(command);
        }

        self.location_into(ops)?;
        if self.current().is_number() {
            self.rotation_into(ops)?;
        } else if self.accept_choice(ops, &["facing"])?.is_some() {
            if self.accept_choice(ops, &["entity"])?.is_some() {
                self.target_into(ops)?;
                self.accept_choice(ops, ANCHORS)?;
            } else {
                self.location_into(ops)?;
            }
        }
        Ok(command)
    }
}
