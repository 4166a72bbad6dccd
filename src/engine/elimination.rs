//! Elimination and kill-chain inheritance.
//!
//! When a player takes out their target, the victim's own target and
//! mission pass to the eliminator. That closes the gap the victim leaves
//! in the ring, so the single-cycle invariant keeps holding over the
//! smaller active set.

use crate::core::{PlayerId, Roster};

/// Apply a kill.
///
/// Legal only when both ids exist and the eliminator's current target is
/// `target_id`; anything else returns the input snapshot unchanged. A
/// mismatched target is an expected outcome of UI-driven play, not a
/// failure.
#[must_use]
pub fn eliminate(players: &Roster, eliminator_id: PlayerId, target_id: PlayerId) -> Roster {
    let valid = match (players.get(eliminator_id), players.get(target_id)) {
        (Some(eliminator), Some(_)) => eliminator.target == Some(target_id),
        _ => false,
    };
    if !valid {
        return players.clone();
    }

    apply_elimination(players, eliminator_id, target_id)
}

/// The inheritance effect, without the target-match precondition.
///
/// Shared with the counter-kill path, which eliminates the presumed
/// attacker regardless of who the defender was hunting. Unknown ids make
/// this a no-op.
pub(crate) fn apply_elimination(
    players: &Roster,
    eliminator_id: PlayerId,
    target_id: PlayerId,
) -> Roster {
    let Some(target) = players.get(target_id) else {
        return players.clone();
    };
    if !players.contains(eliminator_id) {
        return players.clone();
    }

    let inherited_target = target.target;
    let inherited_mission = target.mission.clone();

    players
        .with_player(target_id, |p| p.eliminated = true)
        .with_player(eliminator_id, |p| {
            p.target = inherited_target;
            p.mission = inherited_mission;
            p.kills += 1;
        })
}
