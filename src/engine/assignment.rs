//! Initial target cycle and mission draw.
//!
//! ## Target cycle
//!
//! A uniform random permutation of the roster (Fisher-Yates via
//! [`GameRng::shuffle`]) is read as a ring: each player targets the next
//! one in the permutation, the last wraps to the first. This yields
//! exactly one cycle of length N touching every player — no self-targets
//! and no partial cycles, by construction. N=2 is a valid 2-cycle
//! (mutual targeting).
//!
//! ## Mission draw
//!
//! Independent of targeting. A working pool starts as a shuffled copy of
//! the catalog; each player draws one entry uniformly at random and the
//! entry leaves the pool. If the pool empties while players still need
//! missions, it refills from the full catalog — so once the roster is
//! larger than the catalog, duplicate descriptions across players are
//! possible. An empty catalog assigns no missions at all.

use crate::core::{GameRng, PlayerId, Roster};
use crate::missions::MissionCatalog;

use super::ValidationError;

/// Assign targets and missions to every player in the roster.
///
/// Fails with [`ValidationError::NotEnoughPlayers`] when the roster has
/// fewer than two players; a one-player ring would be a self-target.
pub fn initialize_assignment(
    players: &Roster,
    catalog: &MissionCatalog,
    rng: &mut GameRng,
) -> Result<Roster, ValidationError> {
    if players.len() < 2 {
        return Err(ValidationError::NotEnoughPlayers {
            got: players.len(),
        });
    }

    let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();

    let mut order: Vec<usize> = (0..ids.len()).collect();
    rng.shuffle(&mut order);

    let mut result = players.clone();
    for (i, &idx) in order.iter().enumerate() {
        let target = ids[order[(i + 1) % order.len()]];
        result = result.with_player(ids[idx], |p| p.target = Some(target));
    }

    if !catalog.is_empty() {
        let mut pool: Vec<&str> = catalog.iter().map(|m| m.description.as_str()).collect();
        rng.shuffle(&mut pool);

        for (drawn, &id) in ids.iter().enumerate() {
            let pick = rng.gen_range_usize(0..pool.len());
            let description = pool.swap_remove(pick).to_string();
            result = result.with_player(id, |p| p.mission = Some(description));

            // Refill only when more players still need a draw.
            if pool.is_empty() && drawn < ids.len() - 1 {
                pool = catalog.iter().map(|m| m.description.as_str()).collect();
            }
        }
    }

    Ok(result)
}
