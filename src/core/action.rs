//! Action representation: what a player (or the setup screen) asks for.
//!
//! `Action` is the input to `rules::dispatch`. In-game actions map onto an
//! `ActionKind`, the vocabulary of the PHASES table that decides which
//! actions each phase accepts:
//!
//! | Phase  | Allowed kinds                  |
//! |--------|--------------------------------|
//! | `Roll` | `Roll`, `PickTile`, `StealTile`|
//! | `Pick` | `Pick`                         |
//! | `Dead` | `Next`                         |
//!
//! Setup actions (`AddPlayer`, `RenamePlayer`, `RemovePlayer`,
//! `StartGame`) and `NewGame` have no kind; they are gated by screen.

use serde::{Deserialize, Serialize};

use super::dice::Face;
use super::player::PlayerId;
use super::tile::Tile;

/// In-game action categories used by the PHASES table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Roll,
    Pick,
    PickTile,
    StealTile,
    Next,
}

/// A complete request to change the game.
///
/// ## Example
///
/// ```
/// use stars_engine::core::{Action, ActionKind, Face};
///
/// let pick = Action::Pick(Face::Star);
/// assert_eq!(pick.kind(), Some(ActionKind::Pick));
/// assert_eq!(Action::AddPlayer.kind(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Setup: add an empty seat.
    AddPlayer,
    /// Setup: rename the seat at `index`.
    RenamePlayer { index: usize, name: String },
    /// Setup: remove a seat.
    RemovePlayer(PlayerId),
    /// Setup: leave the setup screen and begin play.
    StartGame,
    /// Throw every die not yet chosen.
    Roll,
    /// Bank every thrown die showing this face.
    Pick(Face),
    /// Claim a tile from the pool.
    PickTile(Tile),
    /// Take the top tile of another player's stack.
    StealTile(PlayerId),
    /// Accept a dead turn: lose the top tile and pass play on.
    Next,
    /// Reset everything back to setup.
    NewGame,
}

impl Action {
    /// Category for the PHASES table, or `None` for setup/reset actions.
    #[must_use]
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Action::Roll => Some(ActionKind::Roll),
            Action::Pick(_) => Some(ActionKind::Pick),
            Action::PickTile(_) => Some(ActionKind::PickTile),
            Action::StealTile(_) => Some(ActionKind::StealTile),
            Action::Next => Some(ActionKind::Next),
            Action::AddPlayer
            | Action::RenamePlayer { .. }
            | Action::RemovePlayer(_)
            | Action::StartGame
            | Action::NewGame => None,
        }
    }

    /// Is this a setup-screen action?
    #[must_use]
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            Action::AddPlayer | Action::RenamePlayer { .. } | Action::RemovePlayer(_) | Action::StartGame
        )
    }
}

/// A recorded in-game action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
