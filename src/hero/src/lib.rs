//! Heroes: classes, the built-in roster, stat allocation and the
//! finalization step that turns a picked hero into a [`combat::Combatant`].
//!
//! Finalization is the single place base stats, allocated points and
//! equipment bonuses meet. The resolver downstream treats the result as
//! already baked in.

mod allocation;
pub mod class;

pub use crate::allocation::{Attribute, StatAllocation};
pub use crate::class::Class;

use combat::{Combatant, StatBlock};
use items::Equipment;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A selectable hero: display identity plus class base stats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub class: Class,
    pub base: StatBlock,
    #[serde(default)]
    pub portrait: Option<String>,
}

impl Hero {
    pub fn new(class: Class) -> Self {
        Self {
            name: class.hero_name().to_string(),
            class,
            base: class.base_stats(),
            portrait: None,
        }
    }

    /// The three built-in heroes the selection screen pages through.
    pub fn roster() -> Vec<Hero> {
        Class::iter().map(Hero::new).collect()
    }

    /// Look a roster hero up by name, case-insensitively.
    pub fn by_name(name: &str) -> Option<Hero> {
        Self::roster()
            .into_iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
    }

    /// Fold allocation and equipment into a fight-ready combatant.
    ///
    /// str/agi/int each get base + allocated points + equipment bonus; hp
    /// gets base + equipment bonus only. Allocation never touches hp.
    pub fn finalize(&self, alloc: &StatAllocation, equipment: Option<&Equipment>) -> Combatant {
        let bonus = equipment.map(|e| e.bonus).unwrap_or_default();
        let allocated = StatBlock::new(
            0,
            alloc.get(Attribute::Agility),
            alloc.get(Attribute::Strength),
            alloc.get(Attribute::Intellect),
        );
        let stats = self.base.combine(allocated).combine(bonus);
        let mut combatant = Combatant::new(&self.name, self.class.to_string(), stats);
        combatant.portrait = self.portrait.clone();
        combatant
    }
}
