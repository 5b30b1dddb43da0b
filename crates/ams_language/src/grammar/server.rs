//! Server administration commands.

use ams_foundation::Result;

use super::GAMEMODES;
use crate::ast::{Command, Operand};
use crate::parser::Parser;
use crate::token::TokenClass;

impl Parser<'_> {
    /// `stop`, `save-on`, `save-off`
    pub(super) fn no_operands(&mut self) -> Result<Command> {
        self.head()
    }

    /// `op <targets>`, `deop <targets>`
    pub(super) fn single_target(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        self.target_into(&mut command.operands)?;
        Ok(command)
    }

    /// `ban <targets> [<reason>...]`, `kick <targets> [<reason>...]`
    pub(super) fn target_and_reason(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        self.target_into(&mut command.operands)?;
        self.message_into(&mut command.operands)?;
        Ok(command)
    }

    /// `pardon <name>`
    pub(super) fn pardon(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        self.read_into(&mut command.operands, &[TokenClass::Identifier])?;
        Ok(command)
    }

    /// `defaultgamemode <mode>`
    pub(super) fn defaultgamemode(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        self.choice(&mut command.operands, GAMEMODES)?;
        Ok(command)
    }

    /// `function <name>`
    pub(super) fn function(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        self.read_into(&mut command.operands, &[TokenClass::Identifier])?;
        Ok(command)
    }

    /// `help [<command>]`
    pub(super) fn help(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        if !self.at_end() {
            let topic = self.word()?;
            command.operands.push(Operand::Token(topic));
        }
        Ok(command)
    }

    /// `list [uuids]`
    pub(super) fn list_players(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        self.accept_choice(&mut command.operands, &["uuids"])?;
        Ok(command)
    }

    /// `publish [<port>]`
    pub(super) fn publish(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        self.accept_into(&mut command.operands, TokenClass::Int)?;
        Ok(command)
    }

    /// `save-all [flush]`
    pub(super) fn save_all(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        self.accept_choice(&mut command.operands, &["flush"])?;
        Ok(command)
    }

    /// `setidletimeout <minutes>`
    pub(super) fn setidletimeout(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        self.read_into(&mut command.operands, &[TokenClass::Int])?;
        Ok(command)
    }

    /// `whitelist add|remove <targets>`, `whitelist list|off|on|reload`
    pub(super) fn whitelist(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        match self.choice(ops, &["add", "list", "off", "on", "reload", "remove"])? {
            "add" | "remove" => self.target_into(ops)?,
            _ => {}
        }
        Ok(command)
    }
}
