//! Bounded, conflict-free mission swap.
//!
//! The swap is a courtesy for players who have not scored yet: once you
//! have a kill you keep whatever mission you inherited, and nobody gets
//! more than two swaps. Conflict checks compare description text, so the
//! replacement is guaranteed not to duplicate any mission currently held
//! in the roster.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{GameRng, Player, PlayerId, Roster, MAX_MISSION_CHANGES};
use crate::missions::MissionCatalog;

/// Check swap eligibility: active, under the swap cap, no kills yet.
#[must_use]
pub fn can_change_mission(player: &Player) -> bool {
    player.is_active() && player.mission_changes < MAX_MISSION_CHANGES && player.kills == 0
}

/// Swap a player's mission for a fresh one from the catalog.
///
/// Returns `None` — a routine "nothing happened", not an error — when the
/// player is missing or ineligible, or when no catalog entry differs from
/// the player's current mission and is unheld by everyone else. Otherwise
/// picks uniformly among the candidates and bumps the swap counter.
#[must_use]
pub fn change_mission(
    players: &Roster,
    player_id: PlayerId,
    catalog: &MissionCatalog,
    rng: &mut GameRng,
) -> Option<Roster> {
    let player = players.get(player_id)?;
    if !can_change_mission(player) {
        return None;
    }

    let held: FxHashSet<&str> = players
        .iter()
        .filter(|p| p.id != player_id)
        .filter_map(|p| p.mission.as_deref())
        .collect();

    let candidates: SmallVec<[&str; 8]> = catalog
        .iter()
        .map(|m| m.description.as_str())
        .filter(|text| Some(*text) != player.mission.as_deref())
        .filter(|text| !held.contains(text))
        .collect();

    let chosen = (*rng.choose(&candidates)?).to_string();

    Some(players.with_player(player_id, |p| {
        p.mission = Some(chosen);
        p.mission_changes += 1;
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::missions::{Mission, MissionId};

    fn player(id: u32, mission: Option<&str>) -> Player {
        let mut p = Player::new(PlayerId::new(id), format!("P{id}"));
        p.mission = mission.map(str::to_string);
        p
    }

    fn catalog(texts: &[&str]) -> MissionCatalog {
        MissionCatalog::from_missions(
            texts
                .iter()
                .enumerate()
                .map(|(i, t)| Mission::new(MissionId::new(i as u16), *t)),
        )
    }

    #[test]
    fn test_eligibility() {
        let mut p = player(0, Some("sing"));
        assert!(can_change_mission(&p));

        p.mission_changes = MAX_MISSION_CHANGES;
        assert!(!can_change_mission(&p));

        p.mission_changes = 0;
        p.kills = 1;
        assert!(!can_change_mission(&p));

        p.kills = 0;
        p.eliminated = true;
        assert!(!can_change_mission(&p));
    }

    #[test]
    fn test_swap_avoids_held_descriptions() {
        let players: Roster = [
            player(0, Some("sing")),
            player(1, Some("dance")),
            player(2, Some("mime")),
        ]
        .into_iter()
        .collect();
        let catalog = catalog(&["sing", "dance", "mime", "juggle"]);

        // Only "juggle" is neither held nor the current mission.
        let mut rng = GameRng::new(1);
        let after = change_mission(&players, PlayerId::new(0), &catalog, &mut rng).unwrap();

        let p = after.get(PlayerId::new(0)).unwrap();
        assert_eq!(p.mission.as_deref(), Some("juggle"));
        assert_eq!(p.mission_changes, 1);
    }

    #[test]
    fn test_no_duplicate_right_after_swap() {
        let players: Roster = [player(0, Some("sing")), player(1, Some("dance"))]
            .into_iter()
            .collect();
        let catalog = catalog(&["sing", "dance", "mime", "juggle", "yodel"]);

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let after = change_mission(&players, PlayerId::new(0), &catalog, &mut rng).unwrap();
            let chosen = after.get(PlayerId::new(0)).unwrap().mission.clone().unwrap();
            assert_ne!(chosen, "sing");
            assert_ne!(chosen, "dance");
        }
    }

    #[test]
    fn test_killer_cannot_swap() {
        let mut killer = player(0, Some("sing"));
        killer.kills = 2;
        let players: Roster = [killer, player(1, Some("dance"))].into_iter().collect();
        let catalog = catalog(&["mime"]);

        let mut rng = GameRng::new(1);
        assert!(change_mission(&players, PlayerId::new(0), &catalog, &mut rng).is_none());
    }

    #[test]
    fn test_no_candidates_returns_none() {
        let players: Roster = [player(0, Some("sing")), player(1, Some("dance"))]
            .into_iter()
            .collect();
        // Everything is either held or current.
        let catalog = catalog(&["sing", "dance"]);

        let mut rng = GameRng::new(1);
        assert!(change_mission(&players, PlayerId::new(0), &catalog, &mut rng).is_none());
    }

    #[test]
    fn test_missing_player_returns_none() {
        let players: Roster = [player(0, Some("sing")), player(1, None)].into_iter().collect();
        let catalog = catalog(&["mime"]);

        let mut rng = GameRng::new(1);
        assert!(change_mission(&players, PlayerId::new(9), &catalog, &mut rng).is_none());
    }

    #[test]
    fn test_eliminated_holders_still_block() {
        // "By any other player in the collection" includes eliminated
        // ones; an inherited mission may live on with the eliminator.
        let mut out = player(1, Some("dance"));
        out.eliminated = true;
        let players: Roster = [player(0, Some("sing")), out].into_iter().collect();
        let catalog = catalog(&["dance"]);

        let mut rng = GameRng::new(1);
        assert!(change_mission(&players, PlayerId::new(0), &catalog, &mut rng).is_none());
    }

    #[test]
    fn test_input_unchanged() {
        let players: Roster = [player(0, Some("sing")), player(1, Some("dance"))]
            .into_iter()
            .collect();
        let catalog = catalog(&["mime"]);

        let mut rng = GameRng::new(1);
        let _ = change_mission(&players, PlayerId::new(0), &catalog, &mut rng).unwrap();

        assert_eq!(players.get(PlayerId::new(0)).unwrap().mission.as_deref(), Some("sing"));
        assert_eq!(players.get(PlayerId::new(0)).unwrap().mission_changes, 0);
    }
}
