//! Counter-kill: a rate-limited defensive reversal.
//!
//! A player about to be eliminated may instead take out the presumed
//! attacker, absorbing their target and mission exactly as in a normal
//! kill. The 20-minute cooldown keeps counter-kills defensive; without
//! it they would be a strictly better primary strategy than hunting your
//! own target.
//!
//! Time comes in as a millisecond timestamp from the caller's [`Clock`];
//! the cooldown is checked lazily at call time, there is no countdown.
//!
//! [`Clock`]: crate::core::Clock

use crate::core::{Player, PlayerId, Roster};

use super::elimination::apply_elimination;

/// Cooldown between counter-kills: 20 minutes, boundary inclusive.
pub const COUNTER_KILL_COOLDOWN_MS: u64 = 20 * 60 * 1000;

/// Check whether a player's counter-kill is off cooldown.
///
/// A player who has never counter-killed may always do so. Exactly
/// 20 minutes elapsed counts as ready.
#[must_use]
pub fn can_counter_kill(player: &Player, now_ms: u64) -> bool {
    match player.last_counter_kill_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) >= COUNTER_KILL_COOLDOWN_MS,
    }
}

/// Execute a counter-kill.
///
/// No-op (unchanged snapshot) unless the defender exists and is off
/// cooldown. The attacker's existence is not separately validated: the
/// cooldown timestamp is stamped first, then the inheritance effect runs
/// with the defender as eliminator — so a bogus attacker id still spends
/// the defender's cooldown.
#[must_use]
pub fn execute_counter_kill(
    players: &Roster,
    defender_id: PlayerId,
    attacker_id: PlayerId,
    now_ms: u64,
) -> Roster {
    let Some(defender) = players.get(defender_id) else {
        return players.clone();
    };
    if !can_counter_kill(defender, now_ms) {
        return players.clone();
    }

    let stamped = players.with_player(defender_id, |p| p.last_counter_kill_ms = Some(now_ms));
    apply_elimination(&stamped, defender_id, attacker_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_of_three() -> Roster {
        (0..3u32)
            .map(|i| {
                let mut p = Player::new(PlayerId::new(i), format!("P{i}"));
                p.target = Some(PlayerId::new((i + 1) % 3));
                p.mission = Some(format!("mission {i}"));
                p
            })
            .collect()
    }

    #[test]
    fn test_cooldown_boundaries() {
        let mut p = Player::new(PlayerId::new(0), "A");
        assert!(can_counter_kill(&p, 0));

        p.last_counter_kill_ms = Some(1_000);

        // 19m59s after: still locked.
        assert!(!can_counter_kill(&p, 1_000 + COUNTER_KILL_COOLDOWN_MS - 1_000));
        // Exactly 20m: ready again (inclusive boundary).
        assert!(can_counter_kill(&p, 1_000 + COUNTER_KILL_COOLDOWN_MS));
        assert!(can_counter_kill(&p, 1_000 + COUNTER_KILL_COOLDOWN_MS + 1));
    }

    #[test]
    fn test_counter_kill_reverses_the_attack() {
        // P2 hunts P0; P0 counter-kills P2. Inheritance follows the
        // victim's pointer, which in a ring points back at the defender.
        let players = ring_of_three();
        let defender = PlayerId::new(0);
        let attacker = PlayerId::new(2);

        let after = execute_counter_kill(&players, defender, attacker, 5_000);

        assert!(after.get(attacker).unwrap().eliminated);
        let d = after.get(defender).unwrap();
        assert_eq!(d.last_counter_kill_ms, Some(5_000));
        assert_eq!(d.target, Some(defender));
        assert_eq!(d.mission.as_deref(), Some("mission 2"));
        assert_eq!(d.kills, 1);
    }

    #[test]
    fn test_cooldown_blocks_everything() {
        let players = ring_of_three();
        let defender = PlayerId::new(0);

        let first = execute_counter_kill(&players, defender, PlayerId::new(2), 1_000);
        assert!(first.get(PlayerId::new(2)).unwrap().eliminated);

        // Second attempt inside the window changes nothing, timestamp
        // included.
        let second = execute_counter_kill(&first, defender, PlayerId::new(1), 2_000);
        assert_eq!(second, first);
        assert_eq!(
            second.get(defender).unwrap().last_counter_kill_ms,
            Some(1_000)
        );
    }

    #[test]
    fn test_unknown_defender_is_noop() {
        let players = ring_of_three();
        let after = execute_counter_kill(&players, PlayerId::new(99), PlayerId::new(0), 1_000);
        assert_eq!(after, players);
    }

    #[test]
    fn test_unknown_attacker_still_stamps_cooldown() {
        let players = ring_of_three();
        let defender = PlayerId::new(0);

        let after = execute_counter_kill(&players, defender, PlayerId::new(99), 1_000);

        assert_eq!(after.get(defender).unwrap().last_counter_kill_ms, Some(1_000));
        assert_eq!(after.get(defender).unwrap().kills, 0);
        assert_eq!(after.active_count(), 3);
    }
}
