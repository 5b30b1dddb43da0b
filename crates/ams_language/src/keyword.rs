//! Reserved command keywords.
//!
//! The keyword table is an immutable mapping from text to [`Keyword`]; the
//! lexer builds a fresh token from the result of every lookup.

use std::fmt;

/// A reserved command keyword of the target command language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub enum Keyword {
    Advancement,
    Attribute,
    Ban,
    BanIp,
    Bossbar,
    Clear,
    Data,
    DefaultGamemode,
    Deop,
    Effect,
    Enchant,
    Execute,
    Function,
    Gamemode,
    Give,
    Help,
    Kick,
    Kill,
    List,
    Locate,
    LocateBiome,
    Loot,
    Me,
    Msg,
    Op,
    Pardon,
    PardonIp,
    Publish,
    /// `?`, an alias of `help` that the lexer never produces.
    QuestionMark,
    SaveAll,
    SaveOff,
    SaveOn,
    Say,
    Scoreboard,
    SetIdleTimeout,
    SetWorldSpawn,
    Spectate,
    SpreadPlayers,
    Stop,
    Summon,
    Tag,
    Team,
    Teleport,
    Tellraw,
    Title,
    Whitelist,
}

impl Keyword {
    /// Every keyword, in table order.
    pub const ALL: [Self; 46] = [
        Self::Advancement,
        Self::Attribute,
        Self::Ban,
        Self::BanIp,
        Self::Bossbar,
        Self::Clear,
        Self::Data,
        Self::DefaultGamemode,
        Self::Deop,
        Self::Effect,
        Self::Enchant,
        Self::Execute,
        Self::Function,
        Self::Gamemode,
        Self::Give,
        Self::Help,
        Self::Kick,
        Self::Kill,
        Self::List,
        Self::Locate,
        Self::LocateBiome,
        Self::Loot,
        Self::Me,
        Self::Msg,
        Self::Op,
        Self::Pardon,
        Self::PardonIp,
        Self::Publish,
        Self::QuestionMark,
        Self::SaveAll,
        Self::SaveOff,
        Self::SaveOn,
        Self::Say,
        Self::Scoreboard,
        Self::SetIdleTimeout,
        Self::SetWorldSpawn,
        Self::Spectate,
        Self::SpreadPlayers,
        Self::Stop,
        Self::Summon,
        Self::Tag,
        Self::Team,
        Self::Teleport,
        Self::Tellraw,
        Self::Title,
        Self::Whitelist,
    ];

    /// Looks up a keyword by its exact source text.
    #[must_use]
    pub fn lookup(text: &str) -> Option<Self> {
        let keyword = match text {
            "advancement" => Self::Advancement,
            "attribute" => Self::Attribute,
            "ban" => Self::Ban,
            "ban-ip" => Self::BanIp,
            "bossbar" => Self::Bossbar,
            "clear" => Self::Clear,
            "data" => Self::Data,
            "defaultgamemode" => Self::DefaultGamemode,
            "deop" => Self::Deop,
            "effect" => Self::Effect,
            "enchant" => Self::Enchant,
            "execute" => Self::Execute,
            "function" => Self::Function,
            "gamemode" => Self::Gamemode,
            "give" => Self::Give,
            "help" => Self::Help,
            "kick" => Self::Kick,
            "kill" => Self::Kill,
            "list" => Self::List,
            "locate" => Self::Locate,
            "locatebiome" => Self::LocateBiome,
            "loot" => Self::Loot,
            "me" => Self::Me,
            "msg" => Self::Msg,
            "op" => Self::Op,
            "pardon" => Self::Pardon,
            "pardon-ip" => Self::PardonIp,
            "publish" => Self::Publish,
            "?" => Self::QuestionMark,
            "save-all" => Self::SaveAll,
            "save-off" => Self::SaveOff,
            "save-on" => Self::SaveOn,
            "say" => Self::Say,
            "scoreboard" => Self::Scoreboard,
            "setidletimeout" => Self::SetIdleTimeout,
            "setworldspawn" => Self::SetWorldSpawn,
            "spectate" => Self::Spectate,
            "spreadplayers" => Self::SpreadPlayers,
            "stop" => Self::Stop,
            "summon" => Self::Summon,
            "tag" => Self::Tag,
            "team" => Self::Team,
            "teleport" => Self::Teleport,
            "tellraw" => Self::Tellraw,
            "title" => Self::Title,
            "whitelist" => Self::Whitelist,
            _ => return None,
        };
        Some(keyword)
    }

    /// Returns the source text of this keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Advancement => "advancement",
            Self::Attribute => "attribute",
            Self::Ban => "ban",
            Self::BanIp => "ban-ip",
            Self::Bossbar => "bossbar",
            Self::Clear => "clear",
            Self::Data => "data",
            Self::DefaultGamemode => "defaultgamemode",
            Self::Deop => "deop",
            Self::Effect => "effect",
            Self::Enchant => "enchant",
            Self::Execute => "execute",
            Self::Function => "function",
            Self::Gamemode => "gamemode",
            Self::Give => "give",
            Self::Help => "help",
            Self::Kick => "kick",
            Self::Kill => "kill",
            Self::List => "list",
            Self::Locate => "locate",
            Self::LocateBiome => "locatebiome",
            Self::Loot => "loot",
            Self::Me => "me",
            Self::Msg => "msg",
            Self::Op => "op",
            Self::Pardon => "pardon",
            Self::PardonIp => "pardon-ip",
            Self::Publish => "publish",
            Self::QuestionMark => "?",
            Self::SaveAll => "save-all",
            Self::SaveOff => "save-off",
            Self::SaveOn => "save-on",
            Self::Say => "say",
            Self::Scoreboard => "scoreboard",
            Self::SetIdleTimeout => "setidletimeout",
            Self::SetWorldSpawn => "setworldspawn",
            Self::Spectate => "spectate",
            Self::SpreadPlayers => "spreadplayers",
            Self::Stop => "stop",
            Self::Summon => "summon",
            Self::Tag => "tag",
            Self::Team => "team",
            Self::Teleport => "teleport",
            Self::Tellraw => "tellraw",
            Self::Title => "title",
            Self::Whitelist => "whitelist",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
