//! Per-command grammar rules.
//!
//! Every rule is a `Parser` method that starts on the command keyword, consumes
//! exactly its argument shape and returns the [`Command`] node. The caller
//! checks that the line ends afterwards.

mod chat;
mod data;
mod execute;
mod player;
mod scoreboard;
mod server;

use ams_foundation::{Error, Result};

use crate::ast::Command;
use crate::keyword::Keyword;
use crate::parser::Parser;

/// Game mode names shared by `gamemode` and `defaultgamemode`.
pub(crate) const GAMEMODES: &[&str] = &["adventure", "creative", "spectator", "survival"];

/// Entity anchor names.
pub(crate) const ANCHORS: &[&str] = &["eyes", "feet"];

/// Returns true if `keyword` has a grammar rule.
#[must_use]
pub const fn has_rule(keyword: Keyword) -> bool {
    !matches!(
        keyword,
        Keyword::Advancement
            | Keyword::BanIp
            | Keyword::Locate
            | Keyword::LocateBiome
            | Keyword::Loot
            | Keyword::PardonIp
            | Keyword::QuestionMark
            | Keyword::SpreadPlayers
    )
}

impl Parser<'_> {
    /// Runs the grammar rule registered for `keyword`.
    pub(crate) fn dispatch(&mut self, keyword: Keyword) -> Result<Command> {
        match keyword {
            Keyword::Attribute => self.attribute_command(),
            Keyword::Ban | Keyword::Kick => self.target_and_reason(),
            Keyword::Bossbar => self.bossbar(),
            Keyword::Clear => self.clear(),
            Keyword::Data => self.data(),
            Keyword::DefaultGamemode => self.defaultgamemode(),
            Keyword::Deop | Keyword::Op => self.single_target(),
            Keyword::Effect => self.effect(),
            Keyword::Enchant => self.enchant(),
            Keyword::Execute => self.execute(),
            Keyword::Function => self.function(),
            Keyword::Gamemode => self.gamemode(),
            Keyword::Give => self.give(),
            Keyword::Help => self.help(),
            Keyword::Kill => self.kill(),
            Keyword::List => self.list_players(),
            Keyword::Me | Keyword::Say => self.say(),
            Keyword::Msg => self.msg(),
            Keyword::Pardon => self.pardon(),
            Keyword::Publish => self.publish(),
            Keyword::SaveAll => self.save_all(),
            Keyword::SaveOff | Keyword::SaveOn | Keyword::Stop => self.no_operands(),
            Keyword::Scoreboard => self.scoreboard(),
            Keyword::SetIdleTimeout => self.setidletimeout(),
            Keyword::SetWorldSpawn => self.setworldspawn(),
            Keyword::Spectate => self.spectate(),
            Keyword::Summon => self.summon(),
            Keyword::Tag => self.tag(),
            Keyword::Team => self.team(),
            Keyword::Teleport => self.teleport(),
            Keyword::Tellraw => self.tellraw(),
            Keyword::Title => self.title(),
            Keyword::Whitelist => self.whitelist(),
            Keyword::Advancement
            | Keyword::BanIp
            | Keyword::Locate
            | Keyword::LocateBiome
            | Keyword::Loot
            | Keyword::PardonIp
            | Keyword::QuestionMark
            | Keyword::SpreadPlayers => Err(Error::unknown_command(
                keyword.as_str(),
                self.current().span.line,
            )),
        }
    }
}
