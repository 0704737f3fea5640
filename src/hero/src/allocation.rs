// src/hero/src/allocation.rs

use error::GameError;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The attributes a player may put points into. Hp is never allocatable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Attribute {
    #[strum(serialize = "agi")]
    Agility,
    #[strum(serialize = "str")]
    Strength,
    #[strum(serialize = "int")]
    Intellect,
}

/// Player-assigned stat points, capped at a fixed budget of 10.
///
/// Refunds are tracked per attribute, so a refund can never push a stat
/// below its class base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatAllocation {
    agility: u32,
    strength: u32,
    intellect: u32,
}

impl StatAllocation {
    /// Total points available to spend.
    pub const BUDGET: u32 = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Agility => self.agility,
            Attribute::Strength => self.strength,
            Attribute::Intellect => self.intellect,
        }
    }

    pub fn spent(&self) -> u32 {
        self.agility + self.strength + self.intellect
    }

    pub fn remaining(&self) -> u32 {
        Self::BUDGET - self.spent()
    }

    /// Put one point into an attribute.
    pub fn spend(&mut self, attribute: Attribute) -> Result<(), GameError> {
        if self.remaining() == 0 {
            return Err(GameError::AllocationExhausted {
                budget: Self::BUDGET,
            });
        }
        *self.slot(attribute) += 1;
        Ok(())
    }

    /// Take one point back out of an attribute.
    pub fn refund(&mut self, attribute: Attribute) -> Result<(), GameError> {
        if self.get(attribute) == 0 {
            return Err(GameError::NothingAllocated {
                attribute: attribute.to_string(),
            });
        }
        *self.slot(attribute) -= 1;
        Ok(())
    }

    /// Drop every spent point, as the screen does when the hero or the
    /// equipped gear changes.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn slot(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Agility => &mut self.agility,
            Attribute::Strength => &mut self.strength,
            Attribute::Intellect => &mut self.intellect,
        }
    }
}
