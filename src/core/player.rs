//! Players, their tile stacks, and score summaries.
//!
//! ## PlayerId
//!
//! Stable identity for a player. Ids are never reused within a game, so a
//! player keeps its id while others are added or removed during setup.
//!
//! ## Player
//!
//! A name plus a stack of tiles. The head of the stack (index 0) is the
//! most recently acquired tile and the only one other players can steal.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{score_of, Tile};

/// Unique player identifier within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity.
    pub id: PlayerId,

    /// Display name. May be empty; see `display_name`.
    pub name: String,

    /// Tile stack, most recent first.
    pub tiles: Vector<Tile>,
}

impl Player {
    /// Create a player with an empty name and no tiles.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: String::new(),
            tiles: Vector::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the tile stack (most recent first).
    #[must_use]
    pub fn with_tiles(mut self, tiles: impl IntoIterator<Item = Tile>) -> Self {
        self.tiles = tiles.into_iter().collect();
        self
    }

    /// The most recently acquired tile, if any.
    #[must_use]
    pub fn top_tile(&self) -> Option<Tile> {
        self.tiles.front().copied()
    }

    /// Does this player own `tile` anywhere in their stack?
    #[must_use]
    pub fn owns(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Star points across the whole stack.
    #[must_use]
    pub fn score(&self) -> u32 {
        score_of(&self.tiles)
    }

    /// Name to show for the player at `index`, falling back to "Player N".
    #[must_use]
    pub fn display_name(&self, index: usize) -> String {
        if self.name.is_empty() {
            format!("Player {}", index + 1)
        } else {
            self.name.clone()
        }
    }
}

/// Scoreboard row for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    /// Seat index.
    pub index: usize,

    /// Name with the "Player N" fallback applied.
    pub display_name: String,

    /// Tile stack, most recent first.
    pub tiles: Vector<Tile>,

    /// Star points.
    pub score: u32,
}
