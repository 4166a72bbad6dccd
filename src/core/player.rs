//! Player identity and per-player game state.
//!
//! ## PlayerId
//!
//! Opaque identifier for a player. Ids are allocated by an [`IdSource`]
//! (see [`crate::core::registry`]) and never reused within a session.
//!
//! ## Player
//!
//! The full per-player record the engine operates on. Every field is part
//! of the persistence shape: external storage serializes players verbatim.
//!
//! Invariants maintained by the engine operations:
//! - `target` never points at the player itself
//! - among active players, `target` links form exactly one cycle
//! - `kills` never decreases
//! - `mission_changes <= MAX_MISSION_CHANGES`
//!
//! [`IdSource`]: crate::core::registry::IdSource

use serde::{Deserialize, Serialize};

/// Maximum number of times a player may swap their mission.
pub const MAX_MISSION_CHANGES: u8 = 2;

/// Unique identifier for a player.
///
/// Opaque to the engine: ids are compared for equality and hashed, never
/// interpreted. The raw value is allocation order, which is incidental.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a player ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Per-player state.
///
/// `target` and `mission` are `None` until the assignment engine runs.
/// `last_counter_kill_ms` is a wall-clock timestamp in milliseconds since
/// the Unix epoch, recorded when the player last used a counter-kill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id, allocated at creation.
    pub id: PlayerId,

    /// Display name, unique within the roster.
    pub name: String,

    /// The player this player must eliminate. `None` before assignment.
    pub target: Option<PlayerId>,

    /// Flavor-text task legitimizing the elimination. Conflict identity is
    /// the description text, not the catalog id.
    pub mission: Option<String>,

    /// Eliminated players stay in the roster but leave the target cycle.
    pub eliminated: bool,

    /// Timestamp (ms) of the last counter-kill, for the cooldown gate.
    pub last_counter_kill_ms: Option<u64>,

    /// How many mission swaps this player has used (0..=2).
    pub mission_changes: u8,

    /// Confirmed eliminations, counter-kills included.
    pub kills: u32,
}

impl Player {
    /// Create a fresh player with no target, mission, or history.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            target: None,
            mission: None,
            eliminated: false,
            last_counter_kill_ms: None,
            mission_changes: 0,
            kills: 0,
        }
    }

    /// Check whether the player is still in the game.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }
}
