//! Engine operations: pure state transitions over the roster.
//!
//! Every operation takes a roster snapshot (plus whatever context it
//! needs: catalog, RNG, current time) and returns a new snapshot. Inputs
//! are never mutated.
//!
//! ## Error contract
//!
//! The engine has exactly one fatal failure mode: startup validation
//! (fewer than two players, duplicate names). Everything that can go
//! wrong *during* a game — wrong target, cooldown still running,
//! ineligible mission swap — is a routine outcome the UI drives into, and
//! is reported as an unchanged snapshot or `None`, never an error. Callers
//! can also pre-check with the `can_*` predicates.

pub mod assignment;
pub mod completion;
pub mod counter_kill;
pub mod elimination;
pub mod exchange;

pub use assignment::initialize_assignment;
pub use completion::check_completion;
pub use counter_kill::{can_counter_kill, execute_counter_kill, COUNTER_KILL_COOLDOWN_MS};
pub use elimination::eliminate;
pub use exchange::{can_change_mission, change_mission};

/// Setup-time validation failures.
///
/// The only errors the crate ever returns; see the module docs for why
/// in-game illegal actions are not represented here.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A game needs at least two players.
    #[error("at least 2 players are required to start a game (got {got})")]
    NotEnoughPlayers {
        /// How many players were supplied.
        got: usize,
    },

    /// Display names must be unique within the roster.
    #[error("player name {0:?} is already taken")]
    DuplicateName(String),

    /// Roster edits and re-starts are only legal before the game begins.
    #[error("game has already started")]
    GameAlreadyStarted,
}
