//! Fixed presentation palette and score labels.
//!
//! A renderer reads the board and maps each tile value through these
//! lookups; the engine itself never touches them.

use crate::engine::{GameState, Score};

/// Background color for a tile value. Unknown values render white.
pub fn tile_background(value: u16) -> &'static str {
    match value {
        2 => "#eee4da",
        4 => "#ede0c8",
        8 => "#f2b179",
        16 => "#f59563",
        32 => "#f67c5f",
        64 => "#f65e3b",
        128 => "#edcf72",
        256 => "#edcc61",
        512 => "#9c0",
        1024 => "#33b5e5",
        2048 => "#09c",
        4096 => "#a6c",
        8192 => "#93c",
        _ => "#ffffff",
    }
}

/// Text color for a tile value: dark on the pale low tiles, black above.
pub fn tile_foreground(value: u16) -> &'static str {
    if value <= 4 {
        "#776e65"
    } else {
        "#000000"
    }
}

/// What the score display shows: the score itself while the game runs, a
/// label once it is decided.
pub fn score_text(state: GameState, score: Score) -> String {
    match state {
        GameState::Won => String::from("Success!"),
        GameState::Lost => String::from("Game Over!"),
        GameState::Ongoing => score.to_string(),
    }
}
