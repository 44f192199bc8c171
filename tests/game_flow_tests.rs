//! End-to-end game flow tests.
//!
//! These drive the engine through `dispatch` with scripted dice, the same
//! way a presentation layer would.

use stars_engine::core::{
    Action, Face, GameConfig, GameError, GameState, Phase, Screen, ScriptedFaces, Tile,
};
use stars_engine::rules::{
    available_tiles, dispatch, game_result, lose_tile, pick_tile, player_scores, selectable_faces,
    selectable_tiles, start_game, GameResult,
};

use Face::{Five, Four, One, Star, Three, Two};

fn tile(v: u8) -> Tile {
    Tile::new(v).unwrap()
}

fn apply(state: &GameState, action: Action, dice: &mut ScriptedFaces) -> GameState {
    dispatch(state, &action, dice).unwrap_or_else(|e| panic!("{action:?} refused: {e}"))
}

/// Roll, bank stars, roll again, bank threes, claim 21.
#[test]
fn test_claim_first_tile() {
    let mut dice = ScriptedFaces::new(vec![
        Star, Star, Star, Four, Four, One, One, One, // first roll: 8 dice
        Three, Three, One, One, One, // second roll: 5 dice
    ]);

    let state = apply(&GameState::new(), Action::StartGame, &mut dice);
    assert_eq!(state.screen, Screen::Game);
    assert_eq!(state.player_count(), 2);

    let state = apply(&state, Action::Roll, &mut dice);
    assert_eq!(state.thrown.len(), 8);
    assert_eq!(state.phase, Phase::Pick);

    let state = apply(&state, Action::Pick(Star), &mut dice);
    assert_eq!(state.chosen.len(), 3);
    assert_eq!(state.phase, Phase::Roll);
    assert!(selectable_tiles(&state).is_empty()); // 15 is not enough

    let state = apply(&state, Action::Roll, &mut dice);
    assert_eq!(state.thrown.len(), 5);
    assert_eq!(state.chosen.len() + state.thrown.len(), 8);

    let state = apply(&state, Action::Pick(Three), &mut dice);
    assert!(selectable_tiles(&state).contains(&tile(21)));

    let state = apply(&state, Action::PickTile(tile(21)), &mut dice);
    assert!(!available_tiles(&state).contains(&tile(21)));
    assert_eq!(state.players[0].top_tile(), Some(tile(21)));
    assert_eq!(state.player, 1);
    assert_eq!(state.phase, Phase::Roll);
    assert!(state.thrown.is_empty());
    assert!(state.chosen.is_empty());
    assert_eq!(state.history.len(), 5);
}

/// A roll showing only faces already banked kills the turn.
#[test]
fn test_dead_roll_costs_a_tile() {
    let mut dice = ScriptedFaces::new(vec![
        Two, Two, Two, Two, Two, Two, Two, Five, // first roll
        Two, // second roll: a lone two, already banked
    ]);

    let mut state = start_game(&GameState::new()).unwrap();
    state.players[0].tiles.push_front(tile(25));

    let state = apply(&state, Action::Roll, &mut dice);
    let state = apply(&state, Action::Pick(Two), &mut dice);
    assert_eq!(state.chosen.len(), 7);

    let state = apply(&state, Action::Roll, &mut dice);
    assert_eq!(state.thrown.as_slice(), &[Two]);
    assert!(selectable_faces(&state).is_empty());
    assert_eq!(state.phase, Phase::Dead);

    // Only Next is accepted now
    assert!(matches!(
        dispatch(&state, &Action::Roll, &mut dice),
        Err(GameError::ActionNotAllowed { .. })
    ));

    let state = apply(&state, Action::Next, &mut dice);
    assert!(state.players[0].tiles.is_empty());
    assert!(state.removed_tiles.contains(&tile(36)));
    assert!(available_tiles(&state).contains(&tile(25)));
    assert_eq!(state.player, 1);
    assert_eq!(state.phase, Phase::Roll);
}

/// Banking all eight dice without a star is dead too.
#[test]
fn test_all_dice_banked_without_star_is_dead() {
    let mut dice = ScriptedFaces::new(vec![
        Five, Five, Five, Five, Four, Four, Four, Four, // first roll
        Four, Four, Four, Four, // second roll
    ]);

    let state = start_game(&GameState::new()).unwrap();
    let state = apply(&state, Action::Roll, &mut dice);
    let state = apply(&state, Action::Pick(Five), &mut dice);
    let state = apply(&state, Action::Roll, &mut dice);
    let state = apply(&state, Action::Pick(Four), &mut dice);

    assert_eq!(state.chosen.len(), 8);
    assert_eq!(state.phase, Phase::Dead);
}

#[test]
fn test_pick_unselectable_face_is_refused() {
    let mut dice = ScriptedFaces::new(vec![One, Two]);

    let state = start_game(&GameState::new()).unwrap();
    let rolled = apply(&state, Action::Roll, &mut dice);

    let refused = dispatch(&rolled, &Action::Pick(Star), &mut dice);
    assert!(matches!(refused, Err(GameError::FaceNotSelectable(Star))));
    assert_eq!(rolled.phase, Phase::Pick);
    assert_eq!(rolled.history.len(), 1);
}

#[test]
fn test_steal_top_tile() {
    let mut dice = ScriptedFaces::new(vec![
        Star, Star, Star, Star, Three, One, One, One, // 20 in stars
        Three, One, One, One, // then a single three
    ]);

    let mut state = start_game(&GameState::new()).unwrap();
    let victim = state.players[1].id;
    state.players[1].tiles = [tile(23), tile(29)].into_iter().collect();

    let state = apply(&state, Action::Roll, &mut dice);
    let state = apply(&state, Action::Pick(Star), &mut dice);
    let state = apply(&state, Action::Roll, &mut dice);
    let state = apply(&state, Action::Pick(Three), &mut dice);

    let state = apply(&state, Action::StealTile(victim), &mut dice);
    assert_eq!(state.players[0].top_tile(), Some(tile(23)));
    assert_eq!(state.players[1].top_tile(), Some(tile(29)));
    assert_eq!(state.player, 1);
}

#[test]
fn test_last_tile_ends_the_game() {
    let mut state = start_game(&GameState::new()).unwrap();
    state.removed_tiles = Tile::all().filter(|t| t.value() != 21).collect();
    state.chosen = [Star, Star, Star, Star, One].into_iter().collect();

    let state = pick_tile(&state, tile(21)).unwrap();
    assert!(available_tiles(&state).is_empty());
    assert_eq!(state.screen, Screen::EndGame);

    let winner = state.players[0].id;
    assert_eq!(game_result(&state), Some(GameResult::Winner(winner)));
}

#[test]
fn test_dead_turn_on_last_tile_ends_the_game() {
    let mut state = start_game(&GameState::new()).unwrap();
    state.removed_tiles = Tile::all().filter(|t| t.value() != 30).collect();
    state.phase = Phase::Dead;

    let state = lose_tile(&state).unwrap();
    assert_eq!(state.screen, Screen::EndGame);
    assert_eq!(game_result(&state), Some(GameResult::Draw));
}

#[test]
fn test_setup_then_new_game() {
    let mut dice = ScriptedFaces::default();

    let state = GameState::with_config(GameConfig::new().with_max_players(3)).unwrap();
    let state = apply(&state, Action::AddPlayer, &mut dice);
    let state = apply(&state, Action::RenamePlayer { index: 0, name: "Ada".into() }, &mut dice);
    let removed = state.players[1].id;
    let state = apply(&state, Action::RemovePlayer(removed), &mut dice);

    let scores = player_scores(&state.players);
    let names: Vec<_> = scores.iter().map(|s| s.display_name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Player 2"]);

    assert!(matches!(
        dispatch(&state, &Action::StartGame, &mut dice).map(|s| s.screen),
        Ok(Screen::Game)
    ));

    let reset = apply(&state, Action::NewGame, &mut dice);
    assert_eq!(reset.player_count(), 2);
    assert!(reset.players.iter().all(|p| p.name.is_empty()));
    assert_eq!(reset.config.max_players, 3);
}

#[test]
fn test_turns_rotate_through_every_player() {
    let config = GameConfig::new().with_initial_players(4);
    let mut state = start_game(&GameState::with_config(config).unwrap()).unwrap();
    state.phase = Phase::Dead;

    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(state.player);
        state = lose_tile(&state).unwrap();
        state.phase = Phase::Dead;
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 0]);
}
