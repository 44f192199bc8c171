//! Single-writer game sessions.
//!
//! A `GameSession` owns one game's state and RNG and serializes every
//! change through `apply`. Each successful action bumps a version number;
//! callers pass the version they last saw, and a mismatch is refused as
//! stale instead of being applied on top of a state the caller never saw.
//!
//! `SessionRegistry` holds many sessions keyed by `GameId`.
//!
//! Nothing here performs I/O. `SessionSnapshot` can be encoded to bytes
//! for a host that wants to ship or park a game elsewhere.

pub mod registry;

pub use registry::{GameId, SessionRegistry};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Action, GameConfig, GameError, GameRng, GameRngState, GameState, Result};
use crate::rules::{dispatch, game_result, legal_actions, GameResult};

/// One game, its dice, and its version counter.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    rng: GameRng,
    version: u64,
}

impl GameSession {
    /// Start a session on the setup screen.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let state = GameState::with_config(config)?;
        info!(seed, players = state.player_count(), "session created");
        Ok(Self::with_rng(state, GameRng::new(seed)))
    }

    /// Wrap an existing state and RNG at version 0.
    #[must_use]
    pub fn with_rng(state: GameState, rng: GameRng) -> Self {
        Self {
            state,
            rng,
            version: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of actions applied so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Actions the current state accepts.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        legal_actions(&self.state)
    }

    /// Final standings, if the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        game_result(&self.state)
    }

    /// Apply `action` if the caller has seen the current version.
    ///
    /// On success the new state is stored and the version bumps by one.
    /// On any failure nothing changes.
    pub fn apply(&mut self, expected_version: u64, action: &Action) -> Result<&GameState> {
        if expected_version != self.version {
            warn!(
                expected = expected_version,
                actual = self.version,
                ?action,
                "stale action rejected"
            );
            return Err(GameError::StaleState {
                expected: expected_version,
                actual: self.version,
            });
        }

        let next = dispatch(&self.state, action, &mut self.rng).map_err(|err| {
            warn!(%err, ?action, version = self.version, "action rejected");
            err
        })?;

        self.state = next;
        self.version += 1;

        if matches!(action, Action::NewGame) {
            info!(version = self.version, "new game");
        }
        debug!(
            ?action,
            version = self.version,
            player = self.state.player,
            phase = ?self.state.phase,
            screen = ?self.state.screen,
            "action applied"
        );

        Ok(&self.state)
    }

    /// Capture state, RNG position, and version.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            version: self.version,
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session from a snapshot. Rolls continue exactly where the
    /// snapshotted session would have.
    #[must_use]
    pub fn restore(snapshot: SessionSnapshot) -> Self {
        Self {
            rng: GameRng::from_state(&snapshot.rng),
            state: snapshot.state,
            version: snapshot.version,
        }
    }
}

/// Serializable copy of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u64,
    pub state: GameState,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Encode as compact bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
