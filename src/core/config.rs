//! Game configuration.
//!
//! The rules are fixed, but a few table settings are not: how many dice
//! are thrown, how many seats a new game starts with, and how many seats
//! setup allows. Configure them with the builder methods and call
//! `validate` (or let `GameState::with_config` do it).

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Dice in the game. A turn never throws more than this.
pub const MAX_DICE: usize = 8;

/// Table settings for one game.
///
/// ```
/// use stars_engine::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_initial_players(3)
///     .with_max_players(6);
///
/// assert_eq!(config.dice_count, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Dice thrown on the first roll of a turn.
    pub dice_count: usize,

    /// Empty seats a new game starts with.
    pub initial_players: usize,

    /// Upper bound on seats during setup.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice_count: 8,
            initial_players: 2,
            max_players: 8,
        }
    }
}

impl GameConfig {
    /// Create the default configuration: 8 dice, 2 seats, at most 8 seats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of dice.
    #[must_use]
    pub fn with_dice_count(mut self, count: usize) -> Self {
        self.dice_count = count;
        self
    }

    /// Set the number of seats a new game starts with.
    #[must_use]
    pub fn with_initial_players(mut self, count: usize) -> Self {
        self.initial_players = count;
        self
    }

    /// Set the seat limit.
    #[must_use]
    pub fn with_max_players(mut self, count: usize) -> Self {
        self.max_players = count;
        self
    }

    /// Check the settings are playable.
    pub fn validate(&self) -> Result<()> {
        if self.dice_count == 0 {
            return Err(GameError::InvalidConfig("dice_count must be at least 1".into()));
        }
        if self.dice_count > MAX_DICE {
            return Err(GameError::InvalidConfig(format!(
                "dice_count ({}) exceeds {MAX_DICE}",
                self.dice_count
            )));
        }
        if self.initial_players == 0 {
            return Err(GameError::InvalidConfig("initial_players must be at least 1".into()));
        }
        if self.initial_players > self.max_players {
            return Err(GameError::InvalidConfig(format!(
                "initial_players ({}) exceeds max_players ({})",
                self.initial_players, self.max_players
            )));
        }
        Ok(())
    }
}
