//! Turn-based combat resolution.
//!
//! One [`Engagement`] pairs a hero with an enemy for the duration of a
//! fight. Each call to [`Engagement::resolve_turn`] is one atomic step:
//! the hero strikes, the enemy counter-attacks only if it survived, and
//! the engagement re-evaluates its phase. All randomness flows through
//! the injected [`DiceRoller`] capability, so fights are replayable and
//! the resolver itself performs no I/O.

pub mod combatant;
pub mod dice;
pub mod engagement;
pub mod log;

pub use crate::combatant::{Combatant, StatBlock, StatIcons, StatKind};
pub use crate::dice::{damage_roll, DiceRoller, FixedDice, SeededDice, ThreadDice};
pub use crate::engagement::{pick_enemy, Engagement, Outcome, Phase, TurnReport};
pub use crate::log::{BattleLog, LogEntry, Side};
