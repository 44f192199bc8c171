//! Random playouts.
//!
//! Plays uniformly random legal actions until the game ends. Handy for
//! exercising the state machine end to end and for benchmarks.

use crate::core::{GameRng, GameState, Result, Screen};

use super::actions::start_game;
use super::engine::{dispatch, legal_actions};

/// Outcome of a playout.
#[derive(Clone, Debug)]
pub struct Playout {
    /// State after the last action.
    pub state: GameState,
    /// Actions dispatched.
    pub actions: usize,
}

impl Playout {
    /// Did the game reach the end-game screen?
    #[must_use]
    pub fn finished(&self) -> bool {
        self.state.screen == Screen::EndGame
    }
}

/// Play random legal actions from `state` until the game ends or
/// `max_actions` have been dispatched (0 = no limit).
///
/// A state still on the setup screen is started first. `rng` picks the
/// actions and rolls the dice, so the same seed replays the same game.
pub fn random_playout(state: &GameState, rng: &mut GameRng, max_actions: usize) -> Result<Playout> {
    let mut state = match state.screen {
        Screen::Setup => start_game(state)?,
        Screen::Game | Screen::EndGame => state.clone(),
    };
    let mut actions = 0;

    while state.screen == Screen::Game {
        if max_actions > 0 && actions >= max_actions {
            break;
        }

        let legal = legal_actions(&state);
        let Some(action) = rng.choose(&legal).cloned() else {
            break;
        };
        state = dispatch(&state, &action, rng)?;
        actions += 1;
    }

    Ok(Playout { state, actions })
}
