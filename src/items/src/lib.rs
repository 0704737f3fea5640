//! Equipment: flat stat-bonus gear a hero can carry into a fight.
//!
//! Gear never acts on its own; its bonus block is folded into the hero's
//! stats during finalization and the resolver never sees the item again.

use combat::StatBlock;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Broad weapon category, as tagged by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EquipmentKind {
    Melee,
    Range,
}

/// A piece of gear. The bonus applies to every attribute, hp included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EquipmentKind,
    #[serde(rename = "stats")]
    pub bonus: StatBlock,
    #[serde(rename = "profile", default)]
    pub portrait: Option<String>,
}

impl Equipment {
    pub fn new(name: impl Into<String>, kind: EquipmentKind, bonus: StatBlock) -> Self {
        Self {
            name: name.into(),
            kind,
            bonus,
            portrait: None,
        }
    }

    /// The built-in armory the equipment screen pages through.
    pub fn armory() -> Vec<Equipment> {
        vec![
            Equipment::new("Sword", EquipmentKind::Melee, StatBlock::new(500, 12, 18, 9)),
            Equipment::new("Axe", EquipmentKind::Range, StatBlock::new(450, 12, 9, 18)),
            Equipment::new("Staff", EquipmentKind::Melee, StatBlock::new(600, 15, 15, 11)),
        ]
    }

    /// Look an armory piece up by name, case-insensitively.
    pub fn by_name(name: &str) -> Option<Equipment> {
        Self::armory()
            .into_iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }
}
