// src/combat/src/combatant.rs

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The four combat attributes, named by their wire keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum StatKind {
    Hp,
    Agi,
    Str,
    Int,
}

/// The four-attribute stat block shared by heroes, enemies and gear.
///
/// `hp` is the only value the resolver mutates; `strength` drives outgoing
/// damage. `agility` and `intellect` are carried but unused by resolution,
/// reserved for future mechanics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    #[serde(rename = "agi")]
    pub agility: u32,
    #[serde(rename = "str")]
    pub strength: u32,
    #[serde(rename = "int")]
    pub intellect: u32,
}

impl StatBlock {
    pub const fn new(hp: u32, agility: u32, strength: u32, intellect: u32) -> Self {
        Self {
            hp,
            agility,
            strength,
            intellect,
        }
    }

    /// Fold a bonus block into this one, attribute by attribute.
    pub fn combine(self, bonus: StatBlock) -> StatBlock {
        StatBlock {
            hp: self.hp.saturating_add(bonus.hp),
            agility: self.agility.saturating_add(bonus.agility),
            strength: self.strength.saturating_add(bonus.strength),
            intellect: self.intellect.saturating_add(bonus.intellect),
        }
    }

    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Agi => self.agility,
            StatKind::Str => self.strength,
            StatKind::Int => self.intellect,
        }
    }
}

/// Optional per-attribute icon references, as served by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatIcons {
    #[serde(default)]
    pub hp: Option<String>,
    #[serde(rename = "agi", default)]
    pub agility: Option<String>,
    #[serde(rename = "str", default)]
    pub strength: Option<String>,
    #[serde(rename = "int", default)]
    pub intellect: Option<String>,
}

/// One side of a fight.
///
/// Name, kind, portrait and icons are display identity only; resolution
/// reads nothing but the stat block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "profile", default)]
    pub portrait: Option<String>,
    pub stats: StatBlock,
    #[serde(default)]
    pub icons: Option<StatIcons>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, stats: StatBlock) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            portrait: None,
            stats,
            icons: None,
        }
    }

    /// Apply damage, flooring hp at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.stats.hp = self.stats.hp.saturating_sub(amount);
    }

    pub fn is_alive(&self) -> bool {
        self.stats.hp > 0
    }

    pub fn hp(&self) -> u32 {
        self.stats.hp
    }

    pub fn strength(&self) -> u32 {
        self.stats.strength
    }
}
