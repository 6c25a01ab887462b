//! Engine module: compact 2048 board, fast slide/merge ops, and
//! precomputed lookup tables. Public API stays small and ergonomic.
//!
//! - `Board` is the packed 4x4 state with useful methods.
//! - Free functions mirror the methods when convenient (e.g., `slide`).
//! - Internals (tables and hot ops) live in submodules to keep things tidy.

mod ops;
pub mod state;
mod tables;

pub use state::{Board, GameState, Move, MoveResult, Score, Tile, TileSpawn};

pub use ops::{
    can_shift, classify, count_empty, get_highest_tile_val, get_tile_val, line_to_vec, shift,
    slide,
};

/// Initialize internal precomputed tables on first use.
/// Safe to call multiple times; every op also initializes lazily on demand,
/// so this is a warm-up hook, not a correctness requirement.
pub fn new() {
    tables::init();
}
