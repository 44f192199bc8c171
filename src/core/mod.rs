//! Core engine types: tiles, dice, players, state, actions, RNG, configuration.
//!
//! This module holds the data. Queries and transitions over it live in
//! `rules`.

pub mod tile;
pub mod dice;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use tile::{score_of, Tile};
pub use dice::{has_star, sum_faces, Face, Faces};
pub use player::{Player, PlayerId, PlayerScore};
pub use rng::{FaceSource, GameRng, GameRngState, ScriptedFaces};
pub use config::{GameConfig, MAX_DICE};
pub use action::{Action, ActionKind, ActionRecord};
pub use error::{GameError, Result};
pub use state::{GameState, Phase, Screen};
