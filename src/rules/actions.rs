//! State transitions.
//!
//! Every function takes the current state by reference and returns the
//! next one; the input is never touched. Functions that can be refused
//! return `Result` and leave nothing half-applied on failure.

use crate::core::{
    Face, FaceSource, Faces, GameError, GameState, Phase, Player, PlayerId, Result, Screen, Tile,
};

use super::queries::{
    available_tiles, highest_available_tile, selectable_faces, selectable_tiles,
};

// === Setup ===

/// Append an unnamed player with no tiles.
pub fn add_player(state: &GameState) -> Result<GameState> {
    if state.player_count() >= state.config.max_players {
        return Err(GameError::TooManyPlayers(state.config.max_players));
    }

    let mut next = state.clone();
    let id = next.alloc_player_id();
    next.players.push_back(Player::new(id));
    Ok(next)
}

/// Set the name of the player at `index`.
pub fn rename_player(state: &GameState, name: impl Into<String>, index: usize) -> Result<GameState> {
    let count = state.player_count();
    let mut next = state.clone();
    let player = next
        .players
        .get_mut(index)
        .ok_or(GameError::PlayerIndexOutOfRange { index, count })?;
    player.name = name.into();
    Ok(next)
}

/// Remove the player with the given id.
///
/// The current-player index keeps pointing at the same seat when an
/// earlier seat is removed, and wraps to 0 if it falls off the end.
pub fn remove_player(state: &GameState, id: PlayerId) -> Result<GameState> {
    let (index, _) = state.find_player(id).ok_or(GameError::UnknownPlayer(id))?;

    let mut next = state.clone();
    next.players.remove(index);
    if index < next.player {
        next.player -= 1;
    }
    if next.player >= next.player_count() {
        next.player = 0;
    }
    Ok(next)
}

/// Leave setup and begin play with the first seat.
pub fn start_game(state: &GameState) -> Result<GameState> {
    if state.players.is_empty() {
        return Err(GameError::NoPlayers);
    }

    let mut next = state.clone();
    next.screen = Screen::Game;
    next.phase = Phase::Roll;
    next.player = 0;
    next.thrown.clear();
    next.chosen.clear();
    Ok(next)
}

/// Reset to a brand new game, keeping the configuration.
#[must_use]
pub fn new_game(state: &GameState) -> GameState {
    GameState::fresh(state.config)
}

// === Turn Flow ===

/// Assign the phase directly.
///
/// The turn transitions below settle their phase through this; hosts can
/// use it the same way.
#[must_use]
pub fn set_phase(state: &GameState, phase: Phase) -> GameState {
    let mut next = state.clone();
    next.phase = phase;
    next
}

/// Move to the end-game screen once the pool is empty.
#[must_use]
pub fn check_end_game(state: &GameState) -> GameState {
    if available_tiles(state).is_empty() {
        let mut next = state.clone();
        next.screen = Screen::EndGame;
        next
    } else {
        state.clone()
    }
}

/// Pass play to the next seat with a fresh turn.
pub fn next_turn(state: &GameState) -> Result<GameState> {
    let count = state.player_count();
    if count == 0 {
        return Err(GameError::NoPlayers);
    }

    let mut next = state.clone();
    next.player = (state.player + 1) % count;
    next.clear_turn();
    Ok(check_end_game(&set_phase(&next, Phase::Roll)))
}

/// Throw every die that has not been banked this turn.
///
/// The turn is dead when the throw shows nothing that isn't already
/// banked; otherwise the player moves on to picking.
pub fn roll<S: FaceSource + ?Sized>(state: &GameState, source: &mut S) -> GameState {
    let count = state.config.dice_count.saturating_sub(state.chosen.len());
    let thrown: Faces = (0..count).map(|_| source.next_face()).collect();

    let mut next = state.clone();
    next.thrown = thrown;
    let phase = if selectable_faces(&next).is_empty() {
        Phase::Dead
    } else {
        Phase::Pick
    };
    set_phase(&next, phase)
}

/// Bank every thrown die showing `face`.
///
/// Refused with `FaceNotSelectable` when the face was not thrown or is
/// already banked. With every die banked and no tile claimable the turn
/// is dead; otherwise play returns to the roll phase.
pub fn pick(state: &GameState, face: Face) -> Result<GameState> {
    if !selectable_faces(state).contains(&face) {
        return Err(GameError::FaceNotSelectable(face));
    }

    let (picked, kept): (Faces, Faces) = state.thrown.iter().copied().partition(|&f| f == face);

    let mut next = state.clone();
    next.thrown = kept;
    next.chosen.extend(picked);
    let phase = if next.chosen.len() >= next.config.dice_count && selectable_tiles(&next).is_empty() {
        Phase::Dead
    } else {
        Phase::Roll
    };
    Ok(set_phase(&next, phase))
}

// === Tiles ===

/// Dead-turn penalty.
///
/// The current player's top tile goes back to the pool and the highest
/// tile that was in the pool beforehand leaves the game. Then the turn
/// passes.
pub fn lose_tile(state: &GameState) -> Result<GameState> {
    let index = current_index(state)?;
    let penalty = highest_available_tile(state);

    let mut next = state.clone();
    next.players[index].tiles.pop_front();
    if let Some(tile) = penalty {
        next.removed_tiles.insert(tile);
    }
    next_turn(&next)
}

/// Claim `tile` from the pool, then pass the turn.
///
/// The tile must be in the pool and claimable with the banked dice.
pub fn pick_tile(state: &GameState, tile: Tile) -> Result<GameState> {
    if !available_tiles(state).contains(&tile) || !selectable_tiles(state).contains(&tile) {
        return Err(GameError::TileNotSelectable(tile));
    }
    award_tile(state, tile)
}

/// Take the top tile of `from`'s stack, then pass the turn.
///
/// The banked dice must be able to claim that exact tile.
pub fn steal_tile(state: &GameState, from: PlayerId) -> Result<GameState> {
    let index = current_index(state)?;
    let (from_index, victim) = state.find_player(from).ok_or(GameError::UnknownPlayer(from))?;
    if from_index == index {
        return Err(GameError::CannotStealFromSelf);
    }
    let tile = victim.top_tile().ok_or(GameError::EmptyTileStack(from))?;
    if !selectable_tiles(state).contains(&tile) {
        return Err(GameError::TileNotSelectable(tile));
    }

    let mut next = state.clone();
    next.players[from_index].tiles.pop_front();
    award_tile(&next, tile)
}

fn award_tile(state: &GameState, tile: Tile) -> Result<GameState> {
    let index = current_index(state)?;
    let mut next = state.clone();
    next.players[index].tiles.push_front(tile);
    next_turn(&next)
}

fn current_index(state: &GameState) -> Result<usize> {
    let count = state.player_count();
    if count == 0 {
        return Err(GameError::NoPlayers);
    }
    if state.player >= count {
        return Err(GameError::PlayerIndexOutOfRange {
            index: state.player,
            count,
        });
    }
    Ok(state.player)
}
