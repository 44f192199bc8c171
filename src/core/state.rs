//! The root game state value.
//!
//! ## GameState
//!
//! Everything a presentation layer needs to render the table:
//! - Screen (setup, game, end-game) and phase (roll, pick, dead)
//! - Players and their tile stacks
//! - The current turn's thrown and chosen dice
//! - Tiles removed from the game
//! - Action history
//!
//! Uses `im` persistent data structures so every transition can return a
//! fresh value while sharing structure with the previous one. Transitions
//! live in `rules`; this module only holds the data and small accessors.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::GameConfig;
use super::dice::Faces;
use super::error::Result;
use super::player::{Player, PlayerId};
use super::tile::Tile;

/// Turn phase. Restricts which in-game actions are legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Roll again, or claim/steal a tile.
    #[default]
    Roll,
    /// Bank one face from the last throw.
    Pick,
    /// Nothing can be banked or claimed; the player must take the penalty.
    Dead,
}

/// Which view the game is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Setup,
    Game,
    EndGame,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Configuration ===
    pub config: GameConfig,

    // === Table ===
    /// Seats in turn order.
    pub players: Vector<Player>,

    /// Index into `players` of whoever is acting.
    pub player: usize,

    /// Current screen.
    pub screen: Screen,

    /// Current phase.
    pub phase: Phase,

    // === Turn State ===
    /// Faces from the most recent roll that have not been banked.
    pub thrown: Faces,

    /// Faces banked this turn.
    pub chosen: Faces,

    // === Tile Pool ===
    /// Tiles permanently out of the game.
    pub removed_tiles: OrdSet<Tile>,

    // === Bookkeeping ===
    /// Next id handed out by `alloc_player_id`.
    next_player_id: u32,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Action sequence within turn.
    pub action_sequence: u32,

    /// In-game actions applied so far.
    pub history: Vector<ActionRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::fresh(GameConfig::default())
    }
}

impl GameState {
    /// Create a new game with the default configuration.
    ///
    /// ## Defaults
    ///
    /// - two unnamed players with no tiles
    /// - `Screen::Setup`, `Phase::Roll`, player 0
    /// - 8 dice, all 16 tiles available
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new game with a custom configuration.
    pub fn with_config(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    /// Initial state for an already validated configuration.
    pub(crate) fn fresh(config: GameConfig) -> Self {
        let mut state = Self {
            config,
            players: Vector::new(),
            player: 0,
            screen: Screen::Setup,
            phase: Phase::Roll,
            thrown: Faces::new(),
            chosen: Faces::new(),
            removed_tiles: OrdSet::new(),
            next_player_id: 0,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
        };
        for _ in 0..config.initial_players {
            let id = state.alloc_player_id();
            state.players.push_back(Player::new(id));
        }
        state
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.player)
    }

    /// Find a player by id.
    #[must_use]
    pub fn find_player(&self, id: PlayerId) -> Option<(usize, &Player)> {
        self.players.iter().enumerate().find(|(_, p)| p.id == id)
    }

    /// Every tile some player owns, anywhere in any stack.
    pub fn owned_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.players.iter().flat_map(|p| p.tiles.iter().copied())
    }

    /// Allocate a fresh player id.
    pub fn alloc_player_id(&mut self) -> PlayerId {
        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        id
    }

    // === Turn Advancement ===

    /// Clear the turn state and bump the turn counter.
    pub fn clear_turn(&mut self) {
        self.thrown.clear();
        self.chosen.clear();
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Face};

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.screen, Screen::Setup);
        assert_eq!(state.phase, Phase::Roll);
        assert_eq!(state.player, 0);
        assert!(state.thrown.is_empty());
        assert!(state.chosen.is_empty());
        assert!(state.removed_tiles.is_empty());
        assert_eq!(state.turn_number, 1);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_default_players_have_unique_ids() {
        let state = GameState::new();
        assert_ne!(state.players[0].id, state.players[1].id);
        assert!(state.players.iter().all(|p| p.name.is_empty() && p.tiles.is_empty()));
    }

    #[test]
    fn test_with_config() {
        let state = GameState::with_config(GameConfig::new().with_initial_players(4)).unwrap();
        assert_eq!(state.player_count(), 4);

        assert!(GameState::with_config(GameConfig::new().with_dice_count(0)).is_err());
        assert!(GameState::with_config(GameConfig::new().with_dice_count(9)).is_err());
    }

    #[test]
    fn test_alloc_player_id_never_repeats() {
        let mut state = GameState::new();
        let a = state.alloc_player_id();
        let b = state.alloc_player_id();

        assert_ne!(a, b);
        assert!(state.find_player(a).is_none());
        assert_eq!(state.find_player(state.players[1].id).map(|(i, _)| i), Some(1));
    }

    #[test]
    fn test_clear_turn() {
        let mut state = GameState::new();
        state.thrown.push(Face::One);
        state.chosen.push(Face::Star);
        state.next_sequence();

        state.clear_turn();

        assert!(state.thrown.is_empty());
        assert!(state.chosen.is_empty());
        assert_eq!(state.turn_number, 2);
        assert_eq!(state.action_sequence, 0);
    }

    #[test]
    fn test_history() {
        let mut state = GameState::new();
        let seq = state.next_sequence();
        let id = state.players[0].id;
        state.record_action(ActionRecord::new(id, Action::Roll, state.turn_number, seq));

        assert_eq!(state.history.len(), 1);
        assert_eq!(state.next_sequence(), 1);
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
