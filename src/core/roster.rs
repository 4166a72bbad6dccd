//! The roster: a persistent collection of players.
//!
//! Backed by `im::Vector` so that every engine operation can hand back a
//! fresh snapshot in O(1)-ish time while the caller keeps the old one.
//! Insertion order is preserved but carries no gameplay meaning.
//!
//! Mutating methods (`add`, `remove`) exist for the setup phase, where the
//! controller owns the only copy. Once a game is running, state changes go
//! through [`with_player`](Roster::with_player), which leaves the input
//! untouched and returns the updated snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};

/// Persistent player collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vector<Player>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from existing players.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            players: players.into_iter().collect(),
        }
    }

    /// Number of players, eliminated ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Check whether a player with this id exists.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// Check whether any player already uses this display name.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Iterate over all players in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over active (non-eliminated) players.
    pub fn active(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    /// Count of active players.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    // === Setup-phase mutation ===

    /// Add a player to the roster.
    pub fn add(&mut self, player: Player) {
        self.players.push_back(player);
    }

    /// Remove a player by id. Returns true if a player was removed.
    ///
    /// Only legal before the game starts; the session controller enforces
    /// that, the roster itself does not.
    pub fn remove(&mut self, id: PlayerId) -> bool {
        if let Some(idx) = self.players.iter().position(|p| p.id == id) {
            self.players.remove(idx);
            true
        } else {
            false
        }
    }

    // === Snapshot updates ===

    /// Return a new roster with one player updated in place.
    ///
    /// The input roster is unchanged. If the id is unknown the snapshot is
    /// an identical clone.
    #[must_use]
    pub fn with_player(&self, id: PlayerId, update: impl FnOnce(&mut Player)) -> Self {
        let mut players = self.players.clone();
        if let Some(idx) = players.iter().position(|p| p.id == id) {
            let mut player = players[idx].clone();
            update(&mut player);
            players.set(idx, player);
        }
        Self { players }
    }
}

impl FromIterator<Player> for Roster {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self::from_players(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(names: &[&str]) -> Roster {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::new(i as u32), *name))
            .collect()
    }

    #[test]
    fn test_lookup() {
        let roster = roster_of(&["Alice", "Bob"]);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(PlayerId::new(1)).unwrap().name, "Bob");
        assert!(roster.get(PlayerId::new(9)).is_none());
        assert!(roster.contains(PlayerId::new(0)));
        assert!(roster.contains_name("Alice"));
        assert!(!roster.contains_name("Carol"));
    }

    #[test]
    fn test_add_remove() {
        let mut roster = roster_of(&["Alice", "Bob"]);
        roster.add(Player::new(PlayerId::new(2), "Carol"));
        assert_eq!(roster.len(), 3);

        assert!(roster.remove(PlayerId::new(0)));
        assert_eq!(roster.len(), 2);
        assert!(!roster.contains(PlayerId::new(0)));

        assert!(!roster.remove(PlayerId::new(0)));
    }

    #[test]
    fn test_with_player_leaves_input_unchanged() {
        let roster = roster_of(&["Alice", "Bob"]);

        let updated = roster.with_player(PlayerId::new(0), |p| p.kills += 1);

        assert_eq!(roster.get(PlayerId::new(0)).unwrap().kills, 0);
        assert_eq!(updated.get(PlayerId::new(0)).unwrap().kills, 1);
        assert_eq!(updated.get(PlayerId::new(1)).unwrap().kills, 0);
    }

    #[test]
    fn test_with_player_unknown_id_is_identity() {
        let roster = roster_of(&["Alice", "Bob"]);
        let updated = roster.with_player(PlayerId::new(42), |p| p.kills += 1);
        assert_eq!(roster, updated);
    }

    #[test]
    fn test_active_iteration() {
        let mut roster = roster_of(&["Alice", "Bob", "Carol"]);
        let snapshot = roster.with_player(PlayerId::new(1), |p| p.eliminated = true);
        roster = snapshot;

        assert_eq!(roster.active_count(), 2);
        let names: Vec<_> = roster.active().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_serialization_is_plain_array() {
        let roster = roster_of(&["Alice"]);
        let value: serde_json::Value = serde_json::to_value(&roster).unwrap();
        assert!(value.is_array());

        let roundtrip: Roster = serde_json::from_value(value).unwrap();
        assert_eq!(roster, roundtrip);
    }
}
