// src/hero/src/class.rs

use combat::StatBlock;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Hero class. Fixes the base stat block and the canonical roster name.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Class {
    #[default]
    Paladin, // durable melee, high strength
    Sorcerer, // fragile caster, high intellect
    Warrior,  // biggest hp pool, balanced attributes
}

impl Class {
    pub fn base_stats(&self) -> StatBlock {
        match self {
            Class::Paladin => StatBlock::new(500, 12, 18, 9),
            Class::Sorcerer => StatBlock::new(450, 12, 9, 18),
            Class::Warrior => StatBlock::new(600, 15, 15, 11),
        }
    }

    /// The roster name for this class.
    pub fn hero_name(&self) -> &'static str {
        match self {
            Class::Paladin => "Omniknight",
            Class::Sorcerer => "Lina",
            Class::Warrior => "Axe",
        }
    }

    /// The attribute the class leans on for damage or future mechanics.
    pub fn primary_attribute(&self) -> crate::Attribute {
        match self {
            Class::Paladin => crate::Attribute::Strength,
            Class::Sorcerer => crate::Attribute::Intellect,
            Class::Warrior => crate::Attribute::Strength,
        }
    }
}
