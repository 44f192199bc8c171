//! Read-only questions about a `GameState`.
//!
//! Nothing here mutates; the presentation layer calls these to decide what
//! to render and which controls to enable.

use im::{OrdSet, Vector};

use crate::core::{
    has_star, sum_faces, ActionKind, Face, GameState, Phase, Player, PlayerId, PlayerScore, Tile,
};

/// In-game actions each phase accepts.
#[must_use]
pub const fn allowed_actions(phase: Phase) -> &'static [ActionKind] {
    match phase {
        Phase::Roll => &[ActionKind::Roll, ActionKind::PickTile, ActionKind::StealTile],
        Phase::Pick => &[ActionKind::Pick],
        Phase::Dead => &[ActionKind::Next],
    }
}

/// Is `kind` legal in the current phase?
#[must_use]
pub fn is_action_allowed(state: &GameState, kind: ActionKind) -> bool {
    allowed_actions(state.phase).contains(&kind)
}

/// Sum of the banked faces, with `Star` worth 5.
#[must_use]
pub fn sum_chosen(chosen: &[Face]) -> u32 {
    sum_faces(chosen)
}

/// Tiles still in the shared pool, ascending.
///
/// The full pool minus every owned tile (anywhere in any stack) minus the
/// removed tiles.
#[must_use]
pub fn available_tiles(state: &GameState) -> OrdSet<Tile> {
    let mut pool = Tile::full_pool();
    for tile in state.owned_tiles() {
        pool.remove(&tile);
    }
    for tile in &state.removed_tiles {
        pool.remove(tile);
    }
    pool
}

/// Highest tile still in the pool.
#[must_use]
pub fn highest_available_tile(state: &GameState) -> Option<Tile> {
    available_tiles(state).get_max().copied()
}

/// Tiles the current dice could claim.
///
/// Without a banked `Star` nothing is claimable. With one, every available
/// tile up to the sum is claimable, plus the tile equal to the sum itself
/// whether or not it is still in the pool (that is how an exact match on
/// another player's top tile becomes stealable).
#[must_use]
pub fn selectable_tiles(state: &GameState) -> OrdSet<Tile> {
    if !has_star(&state.chosen) {
        return OrdSet::new();
    }

    let sum = sum_chosen(&state.chosen);
    let mut tiles: OrdSet<Tile> = available_tiles(state)
        .into_iter()
        .filter(|t| u32::from(t.value()) <= sum)
        .collect();
    if let Some(exact) = Tile::from_sum(sum) {
        tiles.insert(exact);
    }
    tiles
}

/// Faces from the last throw that have not been banked yet this turn.
///
/// Multiplicity collapses: a face thrown three times appears once.
#[must_use]
pub fn selectable_faces(state: &GameState) -> OrdSet<Face> {
    state
        .thrown
        .iter()
        .copied()
        .filter(|f| !state.chosen.contains(f))
        .collect()
}

/// Other players whose top tile the current dice could take.
#[must_use]
pub fn stealable_players(state: &GameState) -> Vec<PlayerId> {
    let selectable = selectable_tiles(state);
    if selectable.is_empty() {
        return Vec::new();
    }

    state
        .players
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != state.player)
        .filter_map(|(_, p)| p.top_tile().filter(|t| selectable.contains(t)).map(|_| p.id))
        .collect()
}

/// Scoreboard rows in seat order.
#[must_use]
pub fn player_scores(players: &Vector<Player>) -> Vec<PlayerScore> {
    players
        .iter()
        .enumerate()
        .map(|(index, p)| PlayerScore {
            index,
            display_name: p.display_name(index),
            tiles: p.tiles.clone(),
            score: p.score(),
        })
        .collect()
}
