//! Engine module: the 4x4 grid value, the slide/merge moves, the
//! legality and win queries, and random tile spawning.
//!
//! - `Grid` is the tile matrix with convenience methods.
//! - Free functions mirror the methods when convenient (e.g., `shift`).
//! - Everything here is pure except spawning, which takes the RNG as an argument.

mod ops;
pub mod state;

pub use state::{
    new_game, spawn_tile, Grid, GridError, Move, Rows, Tile, MAX_TILE, SIZE, TARGET_TILE,
};

pub use ops::{
    apply_move, boards_equal, count_empty, has_legal_move, has_reached_target, highest_tile,
    move_down, move_left, move_right, move_up, reduce_line, shift, transpose, Line,
};
