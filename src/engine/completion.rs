//! Win detection: last player standing.

use crate::core::{PlayerId, Roster};

/// Return the winner's id when exactly one active player remains.
///
/// Zero or two-plus active players means the game goes on (`None`).
/// A zero-active roster is unreachable while the cycle invariant holds,
/// but a caller replaying arbitrary persisted state could construct one;
/// that case logs a warning and still returns `None` rather than
/// escalating, keeping the no-op contract uniform.
#[must_use]
pub fn check_completion(players: &Roster) -> Option<PlayerId> {
    let mut active = players.active();
    match (active.next(), active.next()) {
        (Some(survivor), None) => Some(survivor.id),
        (None, _) => {
            if !players.is_empty() {
                tracing::warn!(
                    roster_size = players.len(),
                    "roster has no active players; reporting no winner"
                );
            }
            None
        }
        _ => None,
    }
}
