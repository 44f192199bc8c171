//! Game rules: queries, transitions, dispatch.
//!
//! - `queries`: derived facts (available tiles, selectable faces, scores)
//! - `actions`: pure state transitions, one per game action
//! - `engine`: `dispatch`, legal action enumeration, final standings
//! - `playout`: random games for testing and benchmarks

pub mod queries;
pub mod actions;
pub mod engine;
pub mod playout;

pub use queries::{
    allowed_actions, available_tiles, highest_available_tile, is_action_allowed, player_scores,
    selectable_faces, selectable_tiles, stealable_players, sum_chosen,
};
pub use actions::{
    add_player, check_end_game, lose_tile, new_game, next_turn, pick, pick_tile, remove_player,
    rename_player, roll, set_phase, start_game, steal_tile,
};
pub use engine::{dispatch, game_result, legal_actions, GameResult};
pub use playout::{random_playout, Playout};
