//! Mission catalog: the flavor-text tasks handed out with each target.
//!
//! Missions have an id for bookkeeping, but *identity for conflict checks
//! is the description text*. Two catalog entries with the same wording are
//! the same mission as far as the exchange rules are concerned.

mod catalog;

pub use catalog::builtin_missions;

use serde::{Deserialize, Serialize};

/// Catalog identifier for a mission. Bookkeeping only; gameplay compares
/// descriptions, not ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionId(pub u16);

impl MissionId {
    /// Create a mission ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

/// A single mission entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Catalog id.
    pub id: MissionId,
    /// The task text assigned to players.
    pub description: String,
}

impl Mission {
    /// Create a mission.
    pub fn new(id: MissionId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

/// A static list of missions to draw from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionCatalog {
    missions: Vec<Mission>,
}

impl MissionCatalog {
    /// The built-in party mission list.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            missions: builtin_missions(),
        }
    }

    /// Catalog from custom entries.
    pub fn from_missions(missions: impl IntoIterator<Item = Mission>) -> Self {
        Self {
            missions: missions.into_iter().collect(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// Check whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &Mission> {
        self.missions.iter()
    }

    /// Access the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Mission] {
        &self.missions
    }
}

impl Default for MissionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
