//! # stars-engine
//!
//! The state machine behind "Stars", a dice-and-tiles game: players roll
//! eight dice, bank one face at a time, and spend the total on numbered
//! tiles worth star points.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every action takes a `GameState` and returns a
//!    new one. Nothing is mutated in place and a refused action changes
//!    nothing.
//!
//! 2. **Injected randomness**: rolls draw from a `FaceSource`, so tests can
//!    script exact dice and sessions can replay from a seed.
//!
//! 3. **No presentation**: rendering, routing and transport belong to the
//!    host. The engine exposes state plus queries to decide what is
//!    enabled.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so
//!   returning a fresh state per action stays cheap.
//!
//! - **Reducer dispatch**: `rules::dispatch` gates each `Action` by screen
//!   and phase before applying it.
//!
//! - **Optimistic concurrency**: `session::GameSession` versions every
//!   change and refuses actions based on a stale view.
//!
//! ## Modules
//!
//! - `core`: tiles, dice, players, state, actions, errors, RNG, configuration
//! - `rules`: queries, transitions, dispatch, legal actions, playouts
//! - `session`: single-writer sessions and a registry of games

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord,
    Face, Faces, FaceSource, GameRng, GameRngState, ScriptedFaces,
    GameConfig, GameError, GameState, Phase, Screen,
    Player, PlayerId, PlayerScore, Tile,
};

pub use crate::rules::{
    available_tiles, dispatch, game_result, is_action_allowed, legal_actions, player_scores,
    random_playout, selectable_faces, selectable_tiles, sum_chosen, GameResult, Playout,
};

pub use crate::session::{GameId, GameSession, SessionRegistry, SessionSnapshot};
