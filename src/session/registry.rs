//! Many sessions keyed by game id.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Action, GameConfig, GameError, GameRng, GameState, Result};

use super::GameSession;

/// Identifier for a game held by a `SessionRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Active sessions, each with its own RNG stream derived from one base
/// seed.
///
/// ```
/// use stars_engine::core::{Action, GameConfig};
/// use stars_engine::session::SessionRegistry;
///
/// let mut registry = SessionRegistry::new(GameConfig::default(), 7).unwrap();
/// let id = registry.create().unwrap();
///
/// registry.apply(id, 0, &Action::StartGame).unwrap();
/// assert_eq!(registry.get(id).unwrap().version(), 1);
/// ```
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: FxHashMap<GameId, GameSession>,
    base: GameRng,
    config: GameConfig,
    next_id: u64,
}

impl SessionRegistry {
    /// Create an empty registry. Every game uses `config`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sessions: FxHashMap::default(),
            base: GameRng::new(seed),
            config,
            next_id: 0,
        })
    }

    /// Open a new game on the setup screen.
    pub fn create(&mut self) -> Result<GameId> {
        let id = GameId(self.next_id);
        let state = GameState::with_config(self.config)?;
        let rng = self.base.for_context(&id.to_string());
        info!(%id, seed = rng.seed(), "game opened");

        self.next_id += 1;
        self.sessions.insert(id, GameSession::with_rng(state, rng));
        Ok(id)
    }

    /// Look up a game.
    pub fn get(&self, id: GameId) -> Result<&GameSession> {
        self.sessions.get(&id).ok_or(GameError::UnknownGame(id))
    }

    /// Apply an action to one game; see `GameSession::apply`.
    pub fn apply(&mut self, id: GameId, expected_version: u64, action: &Action) -> Result<&GameState> {
        self.sessions
            .get_mut(&id)
            .ok_or(GameError::UnknownGame(id))?
            .apply(expected_version, action)
    }

    /// Close a game, handing back its session.
    pub fn remove(&mut self, id: GameId) -> Result<GameSession> {
        let session = self.sessions.remove(&id).ok_or(GameError::UnknownGame(id))?;
        info!(%id, version = session.version(), "game closed");
        Ok(session)
    }

    /// Ids of open games, ascending.
    #[must_use]
    pub fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<_> = self.sessions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of open games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Are there no open games?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
