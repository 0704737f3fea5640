// src/combat/src/log.rs

use std::fmt;

use serde::Serialize;
use strum_macros::Display;

/// Which side struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
pub enum Side {
    Hero,
    Enemy,
}

/// One strike, immutable once appended.
///
/// `hero_hp` and `enemy_hp` are the values *after* this strike landed; for
/// a hero entry that means the hero's hp before any counter-attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub turn: u32,
    pub side: Side,
    pub attacker: String,
    pub defender: String,
    pub damage: u32,
    pub hero_hp: u32,
    pub enemy_hp: u32,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Side::Hero => write!(
                f,
                "Hero deals {} damage to {} (Enemy HP: {}, Hero HP: {})",
                self.damage, self.defender, self.enemy_hp, self.hero_hp
            ),
            Side::Enemy => write!(
                f,
                "{} deals {} damage to Hero (Hero HP: {}, Enemy HP: {})",
                self.attacker, self.damage, self.hero_hp, self.enemy_hp
            ),
        }
    }
}

/// Append-only battle history, insertion-ordered.
///
/// Display wants newest-first; storage stays in insertion order so tests
/// and replays can walk the fight as it happened.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries newest-first, the order the history panel shows them.
    pub fn newest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
