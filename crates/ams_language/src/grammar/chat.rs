//! Chat and text display commands.

use ams_foundation::Result;

use crate::ast::Command;
use crate::parser::Parser;
use crate::token::TokenClass;

impl Parser<'_> {
    /// `say <message>`, `me <action>`
    pub(super) fn say(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        if self.at_end() {
            return Err(self.mismatch(&[TokenClass::Identifier, TokenClass::Selector]));
        }
        self.message_into(&mut command.operands)?;
        Ok(command)
    }

    /// `msg <targets> <message>`
    pub(super) fn msg(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        self.target_into(ops)?;
        if self.at_end() {
            return Err(self.mismatch(&[TokenClass::Identifier, TokenClass::Selector]));
        }
        self.message_into(ops)?;
        Ok(command)
    }

    /// `tellraw <targets> <message>`
    pub(super) fn tellraw(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        self.target_into(ops)?;
        self.text_component_into(ops)?;
        Ok(command)
    }

    /// `title <targets> clear|reset`
    /// or `title <targets> title|subtitle|actionbar <title>`
    /// or `title <targets> times <fadeIn> <stay> <fadeOut>`
    pub(super) fn title(&mut self) -> Result<Command> {
        let mut command = self.head()?;
        let ops = &mut command.operands;
        self.target_into(ops)?;
        match self.choice(
            ops,
            &["actionbar", "clear", "reset", "subtitle", "times", "title"],
        )? {
            "clear" | "reset" => {}
            "times" => {
                for _ in 0..3 {
                    self.read_into(ops, &[TokenClass::Int])?;
                }
            }
            _ => self.text_component_into(ops)?,
        }
        Ok(command)
    }
}
