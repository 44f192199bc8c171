//! Engine errors.
//!
//! Every rejected transition is reported as a `GameError`; the input state
//! is never modified on failure.

use thiserror::Error;

use super::action::ActionKind;
use super::dice::Face;
use super::player::PlayerId;
use super::state::{Phase, Screen};
use super::tile::Tile;
use crate::session::GameId;

/// Reasons a transition is refused.
#[derive(Debug, Error)]
pub enum GameError {
    /// `pick` with a face that is not in `selectable_faces`.
    #[error("face {0} is not selectable")]
    FaceNotSelectable(Face),

    /// The tile cannot be claimed with the current dice.
    #[error("tile {0} is not selectable")]
    TileNotSelectable(Tile),

    /// A turn cannot advance with nobody at the table.
    #[error("the game has no players")]
    NoPlayers,

    #[error("player index {index} out of range for {count} players")]
    PlayerIndexOutOfRange { index: usize, count: usize },

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("{0} has no tiles")]
    EmptyTileStack(PlayerId),

    #[error("a player cannot steal from themselves")]
    CannotStealFromSelf,

    #[error("the table is full ({0} players)")]
    TooManyPlayers(usize),

    /// The action is not in the PHASES table for the current phase.
    #[error("{action:?} is not allowed during {phase:?}")]
    ActionNotAllowed { action: ActionKind, phase: Phase },

    #[error("expected screen {expected:?}, game is on {actual:?}")]
    WrongScreen { expected: Screen, actual: Screen },

    /// Optimistic concurrency check failed.
    #[error("stale state: client saw version {expected}, current is {actual}")]
    StaleState { expected: u64, actual: u64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown game {0}")]
    UnknownGame(GameId),

    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;
