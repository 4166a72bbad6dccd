//! # killer-engine
//!
//! State-transition engine for a "last player standing" elimination party
//! game: circular target assignment, kill-chain inheritance, a
//! rate-limited counter-kill defense, bounded mission swaps, and win
//! detection.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation maps an immutable roster
//!    snapshot to a new one. Inputs are never mutated; callers persist or
//!    render whichever snapshot they hold.
//!
//! 2. **Injected effects**: randomness ([`GameRng`]), wall-clock time
//!    ([`Clock`]), and id allocation ([`IdSource`]) all come from outside,
//!    so tests seed exact outcomes instead of asserting statistically.
//!
//! 3. **No-ops over errors**: illegal in-game actions (wrong target,
//!    cooldown running, ineligible swap) return unchanged state or `None`.
//!    The only hard error is setup validation.
//!
//! The engine owns data shape only — persistence, presentation, and
//! networking are external collaborators.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) roster snapshots via `im-rs`.
//!
//! - **Single-writer**: fully synchronous, no internal locking; serialize
//!   mutations per session if shared.
//!
//! ## Modules
//!
//! - `core`: player data, roster, RNG, clock, id allocation
//! - `missions`: the mission catalog
//! - `engine`: pure operations — assignment, elimination, counter-kill,
//!   mission exchange, completion
//! - `session`: session lifecycle and the orchestrating controller

pub mod core;
pub mod engine;
pub mod missions;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Clock, FixedClock, GameRng, GameRngState, IdSource, Player, PlayerId, PlayerRegistry, Roster,
    SequentialIds, SystemClock, MAX_MISSION_CHANGES,
};

pub use crate::missions::{Mission, MissionCatalog, MissionId};

pub use crate::engine::{
    can_change_mission, can_counter_kill, change_mission, check_completion, eliminate,
    execute_counter_kill, initialize_assignment, ValidationError, COUNTER_KILL_COOLDOWN_MS,
};

pub use crate::session::{GameSession, GameStatus, SessionController};
