//! Enemy and equipment catalogs: the backend's read-only collections,
//! loaded from JSON into typed documents.
//!
//! The resolver never fetches anything itself; it consumes a pool handed
//! over through the [`EnemySource`] capability. A static [`Roster`] is the
//! in-repo implementation; an application talking to the live backend
//! would implement the same trait over its HTTP client.

use std::fs;
use std::path::Path;

use combat::{Combatant, StatBlock, StatIcons};
use error::GameError;
use items::Equipment;
use serde::{Deserialize, Serialize};

/// One document from the `heroes` or `characters` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterDoc {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub profile: Option<String>,
    pub stats: StatBlock,
    #[serde(default)]
    pub icons: Option<StatIcons>,
}

impl From<CharacterDoc> for Combatant {
    fn from(doc: CharacterDoc) -> Self {
        Combatant {
            name: doc.name,
            kind: doc.kind,
            portrait: doc.profile,
            stats: doc.stats,
            icons: doc.icons,
        }
    }
}

/// Anything that can yield the enemy pool for an engagement.
///
/// The pool is handed off complete and immutable before a fight starts; a
/// failed fetch is surfaced to the caller, never retried here.
pub trait EnemySource {
    fn fetch_enemies(&self) -> Result<Vec<Combatant>, GameError>;
}

/// An ordered, in-memory collection of character documents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    docs: Vec<CharacterDoc>,
}

impl Roster {
    /// Parse a collection from its JSON wire form (an array of documents).
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let docs: Vec<CharacterDoc> = serde_json::from_str(json)?;
        tracing::debug!(count = docs.len(), "loaded roster");
        Ok(Self { docs })
    }

    /// Load a collection from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// The enemy pool shipped with the game.
    pub fn builtin() -> Result<Self, GameError> {
        Self::from_json(include_str!("../data/characters.json"))
    }

    pub fn docs(&self) -> &[CharacterDoc] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Materialize every document as a combatant template.
    pub fn combatants(&self) -> Vec<Combatant> {
        self.docs.iter().cloned().map(Combatant::from).collect()
    }
}

impl EnemySource for Roster {
    fn fetch_enemies(&self) -> Result<Vec<Combatant>, GameError> {
        Ok(self.combatants())
    }
}

/// Parse the `equipment` collection. The document shape matches
/// [`items::Equipment`] directly.
pub fn equipment_from_json(json: &str) -> Result<Vec<Equipment>, GameError> {
    let gear: Vec<Equipment> = serde_json::from_str(json)?;
    tracing::debug!(count = gear.len(), "loaded equipment");
    Ok(gear)
}
