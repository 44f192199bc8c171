//! Reducer-style dispatch, legal action enumeration, and final standings.
//!
//! `dispatch` is the single entry point a host needs: it checks the screen
//! and the PHASES table, applies the matching transition from `actions`,
//! and records in-game actions in the state's history.

use tracing::trace;

use crate::core::{
    Action, ActionKind, ActionRecord, FaceSource, GameError, GameState, PlayerId, Result, Screen,
};

use super::actions::{
    add_player, lose_tile, new_game, pick, pick_tile, remove_player, rename_player, roll,
    start_game, steal_tile,
};
use super::queries::{
    allowed_actions, available_tiles, is_action_allowed, selectable_faces, selectable_tiles,
    stealable_players,
};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Nobody holds a tile.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Screen an action must be issued from, or `None` if any screen will do.
fn required_screen(action: &Action) -> Option<Screen> {
    match action {
        Action::NewGame => None,
        a if a.is_setup() => Some(Screen::Setup),
        _ => Some(Screen::Game),
    }
}

/// Apply `action` to `state`, returning the next state.
///
/// Refuses actions issued from the wrong screen (`WrongScreen`) and
/// in-game actions the current phase does not accept (`ActionNotAllowed`)
/// before delegating to the matching transition. `source` is only drawn
/// from by `Action::Roll`.
pub fn dispatch<S: FaceSource + ?Sized>(
    state: &GameState,
    action: &Action,
    source: &mut S,
) -> Result<GameState> {
    trace!(?action, phase = ?state.phase, screen = ?state.screen, "dispatch");

    if let Some(expected) = required_screen(action) {
        if state.screen != expected {
            return Err(GameError::WrongScreen {
                expected,
                actual: state.screen,
            });
        }
    }
    if let Some(kind) = action.kind() {
        if !is_action_allowed(state, kind) {
            return Err(GameError::ActionNotAllowed {
                action: kind,
                phase: state.phase,
            });
        }
    }

    let mut next = match action {
        Action::AddPlayer => add_player(state)?,
        Action::RenamePlayer { index, name } => rename_player(state, name.as_str(), *index)?,
        Action::RemovePlayer(id) => remove_player(state, *id)?,
        Action::StartGame => start_game(state)?,
        Action::Roll => roll(state, source),
        Action::Pick(face) => pick(state, *face)?,
        Action::PickTile(tile) => pick_tile(state, *tile)?,
        Action::StealTile(from) => steal_tile(state, *from)?,
        Action::Next => lose_tile(state)?,
        Action::NewGame => return Ok(new_game(state)),
    };

    if let (Some(_), Some(actor)) = (action.kind(), state.current_player()) {
        let record = ActionRecord::new(actor.id, action.clone(), state.turn_number, state.action_sequence);
        if next.turn_number == state.turn_number {
            next.next_sequence();
        }
        next.record_action(record);
    }

    Ok(next)
}

/// Every in-game action `dispatch` would accept right now.
///
/// Empty outside the game screen. On the game screen there is always at
/// least one: `Roll` in the roll phase, a face in the pick phase, `Next`
/// in the dead phase.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    if state.screen != Screen::Game {
        return Vec::new();
    }

    let mut actions = Vec::new();
    for kind in allowed_actions(state.phase) {
        match kind {
            ActionKind::Roll => actions.push(Action::Roll),
            ActionKind::Pick => {
                actions.extend(selectable_faces(state).into_iter().map(Action::Pick));
            }
            ActionKind::PickTile => {
                let available = available_tiles(state);
                actions.extend(
                    selectable_tiles(state)
                        .into_iter()
                        .filter(|t| available.contains(t))
                        .map(Action::PickTile),
                );
            }
            ActionKind::StealTile => {
                actions.extend(stealable_players(state).into_iter().map(Action::StealTile));
            }
            ActionKind::Next => actions.push(Action::Next),
        }
    }
    actions
}

/// Final standings, once the game has reached the end-game screen.
///
/// Highest score wins, ties broken by the highest single tile held. Tiles
/// are unique, so anyone holding a tile has a distinct ranking; a table
/// where nobody holds a tile is a draw.
#[must_use]
pub fn game_result(state: &GameState) -> Option<GameResult> {
    if state.screen != Screen::EndGame {
        return None;
    }

    let best = state
        .players
        .iter()
        .filter_map(|p| p.tiles.iter().max().map(|top| (p.score(), *top, p.id)))
        .max();

    Some(match best {
        Some((_, _, id)) => GameResult::Winner(id),
        None => GameResult::Draw,
    })
}
