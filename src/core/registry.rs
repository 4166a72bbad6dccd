//! Player creation: id allocation and the registry factory.
//!
//! The engine never invents ids on its own. An [`IdSource`] is injected
//! wherever players are created, which keeps tests deterministic and lets
//! embedders bring their own identity scheme.

use super::player::{Player, PlayerId};

/// Supplier of unique player ids.
///
/// Implementations must never hand out the same id twice within a session.
pub trait IdSource {
    /// Allocate the next id.
    fn next_id(&mut self) -> PlayerId;
}

/// Monotonic id allocation starting from zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    /// Create a source that starts at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source that starts at the given id.
    ///
    /// Used when restoring a session: start above the highest id already
    /// in the roster.
    #[must_use]
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> PlayerId {
        let id = PlayerId::new(self.next);
        self.next += 1;
        id
    }
}

/// Factory for new players.
#[derive(Clone, Debug, Default)]
pub struct PlayerRegistry<S = SequentialIds> {
    ids: S,
}

impl PlayerRegistry<SequentialIds> {
    /// Registry with sequential ids from zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: IdSource> PlayerRegistry<S> {
    /// Registry backed by a custom id source.
    pub fn with_ids(ids: S) -> Self {
        Self { ids }
    }

    /// Create a player with a freshly allocated id.
    pub fn create(&mut self, name: impl Into<String>) -> Player {
        Player::new(self.ids.next_id(), name)
    }
}
