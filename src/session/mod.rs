//! Game session lifecycle and orchestration.
//!
//! [`GameSession`] is the full persistence shape: status, roster, winner.
//! External storage serializes it after every mutation; the engine itself
//! performs no I/O.
//!
//! [`SessionController`] is the state holder the caller owns. It wires the
//! pure engine operations to an injected clock, RNG, and id source, and
//! runs the completion evaluator after every mutating action. The
//! controller holds no locks: expose it to concurrent callers only behind
//! single-writer discipline.
//!
//! ## Lifecycle
//!
//! `NotStarted -> Setup -> InProgress -> Completed`. Players join and
//! leave the roster during setup only; once the game is running the roster
//! shrinks logically (eliminations) but never physically. `Completed` is
//! terminal — restarting means resetting or discarding the session.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    Clock, GameRng, Player, PlayerId, PlayerRegistry, Roster, SequentialIds, SystemClock,
};
use crate::engine;
use crate::engine::ValidationError;
use crate::missions::MissionCatalog;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Fresh session, nobody has joined yet.
    NotStarted,
    /// Roster is being assembled.
    Setup,
    /// Targets assigned, eliminations running.
    InProgress,
    /// A winner stands; terminal.
    Completed,
}

/// Serializable session state: the engine's persistence contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Lifecycle position.
    pub status: GameStatus,
    /// All players, eliminated ones included.
    pub players: Roster,
    /// Winner id once the session completes.
    pub winner: Option<PlayerId>,
}

impl GameSession {
    /// An empty, not-yet-started session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: GameStatus::NotStarted,
            players: Roster::new(),
            winner: None,
        }
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// The player a given player is hunting, if assigned.
    #[must_use]
    pub fn target_of(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(self.players.get(id)?.target?)
    }

    /// The winning player, once the session completed.
    #[must_use]
    pub fn winner_player(&self) -> Option<&Player> {
        self.players.get(self.winner?)
    }

    /// Players still in the game.
    pub fn remaining_players(&self) -> impl Iterator<Item = &Player> {
        self.players.active()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns a session and drives the engine operations over it.
///
/// Generic over the [`Clock`] so tests can pin time; production code uses
/// the [`SystemClock`] default.
#[derive(Debug)]
pub struct SessionController<C: Clock = SystemClock> {
    session: GameSession,
    catalog: MissionCatalog,
    rng: GameRng,
    clock: C,
    registry: PlayerRegistry<SequentialIds>,
}

impl SessionController<SystemClock> {
    /// Controller with the builtin catalog, OS-seeded RNG, and system
    /// clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(MissionCatalog::builtin(), GameRng::from_entropy(), SystemClock)
    }

    /// One-shot setup per the classic flow: create players from names and
    /// start immediately.
    ///
    /// Fails with [`ValidationError::NotEnoughPlayers`] for fewer than two
    /// names and [`ValidationError::DuplicateName`] on repeats.
    pub fn initialize_game<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut controller = Self::new();
        for name in names {
            controller.add_player(name)?;
        }
        controller.start_game()?;
        Ok(controller)
    }
}

impl Default for SessionController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionController<C> {
    /// Controller from explicit parts. The deterministic entry point for
    /// tests and embedders that manage their own seeds.
    pub fn with_parts(catalog: MissionCatalog, rng: GameRng, clock: C) -> Self {
        Self {
            session: GameSession::new(),
            catalog,
            rng,
            clock,
            registry: PlayerRegistry::new(),
        }
    }

    /// Restore a controller around a previously persisted session.
    ///
    /// The id source resumes above the highest id in the roster so later
    /// additions stay unique.
    pub fn resume(session: GameSession, catalog: MissionCatalog, rng: GameRng, clock: C) -> Self {
        let next = session
            .players
            .iter()
            .map(|p| p.id.raw() + 1)
            .max()
            .unwrap_or(0);
        Self {
            session,
            catalog,
            rng,
            clock,
            registry: PlayerRegistry::with_ids(SequentialIds::starting_at(next)),
        }
    }

    /// Current session state (the shape to persist).
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Capture the RNG state alongside the session for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> crate::core::GameRngState {
        self.rng.state()
    }

    // === Setup ===

    /// Add a player to the roster. Setup only.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, ValidationError> {
        if !matches!(
            self.session.status,
            GameStatus::NotStarted | GameStatus::Setup
        ) {
            return Err(ValidationError::GameAlreadyStarted);
        }

        let name = name.into();
        if self.session.players.contains_name(&name) {
            return Err(ValidationError::DuplicateName(name));
        }

        let player = self.registry.create(name);
        let id = player.id;
        self.session.players.add(player);
        self.session.status = GameStatus::Setup;
        Ok(id)
    }

    /// Remove a player during setup. Returns false once the game started
    /// or when the id is unknown.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        if !matches!(
            self.session.status,
            GameStatus::NotStarted | GameStatus::Setup
        ) {
            return false;
        }
        self.session.players.remove(id)
    }

    /// Run the assignment engine and move to `InProgress`.
    pub fn start_game(&mut self) -> Result<(), ValidationError> {
        if matches!(
            self.session.status,
            GameStatus::InProgress | GameStatus::Completed
        ) {
            return Err(ValidationError::GameAlreadyStarted);
        }

        let assigned =
            engine::initialize_assignment(&self.session.players, &self.catalog, &mut self.rng)?;
        self.session.players = assigned;
        self.session.status = GameStatus::InProgress;
        self.session.winner = None;

        info!(players = self.session.players.len(), "game started");
        Ok(())
    }

    // === In-game actions ===

    /// Apply a kill. Returns true when the state changed.
    pub fn eliminate(&mut self, eliminator: PlayerId, target: PlayerId) -> bool {
        if self.session.status != GameStatus::InProgress {
            return false;
        }

        let after = engine::eliminate(&self.session.players, eliminator, target);
        let changed = after != self.session.players;
        if changed {
            info!(%eliminator, %target, "player eliminated");
            self.session.players = after;
            self.evaluate_completion();
        } else {
            debug!(%eliminator, %target, "elimination rejected");
        }
        changed
    }

    /// Apply a counter-kill. Returns true when the state changed.
    pub fn counter_kill(&mut self, defender: PlayerId, attacker: PlayerId) -> bool {
        if self.session.status != GameStatus::InProgress {
            return false;
        }

        let now_ms = self.clock.now_ms();
        let after =
            engine::execute_counter_kill(&self.session.players, defender, attacker, now_ms);
        let changed = after != self.session.players;
        if changed {
            info!(%defender, %attacker, "counter-kill executed");
            self.session.players = after;
            self.evaluate_completion();
        } else {
            debug!(%defender, %attacker, "counter-kill rejected");
        }
        changed
    }

    /// Swap a player's mission. Returns true when the state changed.
    pub fn change_mission(&mut self, player: PlayerId) -> bool {
        if self.session.status != GameStatus::InProgress {
            return false;
        }

        match engine::change_mission(&self.session.players, player, &self.catalog, &mut self.rng) {
            Some(after) => {
                debug!(%player, "mission changed");
                self.session.players = after;
                self.evaluate_completion();
                true
            }
            None => false,
        }
    }

    /// Whether a player may counter-kill right now.
    #[must_use]
    pub fn can_counter_kill(&self, player: PlayerId) -> bool {
        self.session
            .players
            .get(player)
            .is_some_and(|p| engine::can_counter_kill(p, self.clock.now_ms()))
    }

    /// Whether a player is eligible for a mission swap.
    #[must_use]
    pub fn can_change_mission(&self, player: PlayerId) -> bool {
        self.session
            .players
            .get(player)
            .is_some_and(engine::can_change_mission)
    }

    // === Reset ===

    /// Return to `NotStarted`, keeping the roster as-is.
    pub fn reset_game(&mut self) {
        self.session.status = GameStatus::NotStarted;
        self.session.winner = None;
    }

    /// Clear the roster entirely.
    pub fn reset_players(&mut self) {
        self.session.players = Roster::new();
    }

    fn evaluate_completion(&mut self) {
        if let Some(winner) = engine::check_completion(&self.session.players) {
            info!(%winner, "game completed");
            self.session.winner = Some(winner);
            self.session.status = GameStatus::Completed;
        }
    }
}
