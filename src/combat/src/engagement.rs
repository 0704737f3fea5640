// src/combat/src/engagement.rs

use error::GameError;
use serde::Serialize;

use crate::combatant::Combatant;
use crate::dice::{damage_roll, DiceRoller};
use crate::log::{BattleLog, LogEntry, Side};

/// How a fight ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Engagement lifecycle.
///
/// `Idle` until the first turn, `InProgress` while both sides have hp,
/// `Resolved` is terminal: further turn requests are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    InProgress,
    Resolved(Outcome),
}

impl Phase {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Phase::Resolved(_))
    }
}

/// What one call to [`Engagement::resolve_turn`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub hero_damage: u32,
    /// `None` when the hero's strike dropped the enemy to 0 and the
    /// counter-attack was skipped.
    pub counter_damage: Option<u32>,
    pub phase: Phase,
}

/// Draw one enemy from the pool by independent uniform index.
///
/// An empty pool is a setup error, reported distinctly so callers can tell
/// "fix the data" from "fetch still loading".
pub fn pick_enemy<'a, D: DiceRoller>(
    pool: &'a [Combatant],
    dice: &mut D,
) -> Result<&'a Combatant, GameError> {
    if pool.is_empty() {
        return Err(GameError::EmptyEnemyPool);
    }
    let index = (dice.roll_unit() * pool.len() as f64).floor() as usize;
    Ok(&pool[index])
}

/// One hero paired with one enemy for the duration of a fight.
///
/// Exclusively owned by its caller; discarding it is the only cleanup.
#[derive(Clone, Debug, Serialize)]
pub struct Engagement {
    hero: Combatant,
    enemy: Combatant,
    log: BattleLog,
    phase: Phase,
    turn: u32,
}

impl Engagement {
    /// Pair a finalized hero with a drawn enemy. Stats are taken as-is:
    /// allocation and equipment bonuses are already folded in upstream.
    pub fn new(hero: Combatant, enemy: Combatant) -> Self {
        Self {
            hero,
            enemy,
            log: BattleLog::new(),
            phase: Phase::Idle,
            turn: 0,
        }
    }

    pub fn hero(&self) -> &Combatant {
        &self.hero
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Resolve one turn: hero strike, conditional counter-attack, phase
    /// re-evaluation. Victory is checked strictly before defeat; the
    /// counter is skipped once the enemy is down, so both cannot land in
    /// the same turn.
    pub fn resolve_turn<D: DiceRoller>(&mut self, dice: &mut D) -> Result<TurnReport, GameError> {
        if self.phase.is_resolved() {
            return Err(GameError::EngagementResolved);
        }
        self.turn += 1;

        let hero_damage = damage_roll(dice, self.hero.stats.strength);
        self.enemy.take_damage(hero_damage);
        self.log.push(LogEntry {
            turn: self.turn,
            side: Side::Hero,
            attacker: self.hero.name.clone(),
            defender: self.enemy.name.clone(),
            damage: hero_damage,
            hero_hp: self.hero.hp(),
            enemy_hp: self.enemy.hp(),
        });

        let mut counter_damage = None;
        if self.enemy.is_alive() {
            let damage = damage_roll(dice, self.enemy.stats.strength);
            self.hero.take_damage(damage);
            counter_damage = Some(damage);
            self.log.push(LogEntry {
                turn: self.turn,
                side: Side::Enemy,
                attacker: self.enemy.name.clone(),
                defender: self.hero.name.clone(),
                damage,
                hero_hp: self.hero.hp(),
                enemy_hp: self.enemy.hp(),
            });
        }

        self.phase = if !self.enemy.is_alive() {
            Phase::Resolved(Outcome::Victory)
        } else if !self.hero.is_alive() {
            Phase::Resolved(Outcome::Defeat)
        } else {
            Phase::InProgress
        };

        Ok(TurnReport {
            hero_damage,
            counter_damage,
            phase: self.phase,
        })
    }
}
