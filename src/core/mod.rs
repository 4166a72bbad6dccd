//! Core engine types: players, roster, RNG, clock, id allocation.
//!
//! These are the building blocks the engine operations are written over.
//! Nothing here knows about game rules.

pub mod clock;
pub mod player;
pub mod registry;
pub mod rng;
pub mod roster;

pub use clock::{Clock, FixedClock, SystemClock};
pub use player::{Player, PlayerId, MAX_MISSION_CHANGES};
pub use registry::{IdSource, PlayerRegistry, SequentialIds};
pub use rng::{GameRng, GameRngState};
pub use roster::Roster;
