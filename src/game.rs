//! Game session: one board, one cumulative score, and the per-move control
//! flow (slide, then spawn only if something moved, then classify).
//!
//! `Game` is exclusively owned by one session and every operation runs to
//! completion, so callers need no locking; they only have to keep the
//! slide/spawn ordering per move, which `step` does for them.

use rand::Rng;

use crate::engine::{Board, GameState, Move, MoveResult, Score, TileSpawn};

/// A running 2048 game: board plus cumulative score.
///
/// The score only ever grows within a game; `best_score` carries the session
/// high-water mark across resets.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use twenty48_core::engine::Move;
/// use twenty48_core::game::Game;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut game = Game::new(&mut rng);
/// assert_eq!(game.board().count_empty(), 14);
/// assert_eq!(game.score(), 0);
///
/// let result = game.step(Move::Left, &mut rng);
/// if result.moved {
///     // A new tile spawned after the slide.
///     assert!(game.board().count_empty() <= 14);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    score: Score,
    best_score: Score,
}

impl Game {
    /// Start a fresh game: empty board, zero score, two spawned tiles.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut game = Game {
            board: Board::EMPTY,
            score: 0,
            best_score: 0,
        };
        game.reset(rng);
        game
    }

    /// Restart: zero the board and score, spawn two tiles. The session best
    /// score is kept.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board = Board::EMPTY;
        self.score = 0;
        self.spawn_random_tile(rng);
        self.spawn_random_tile(rng);
    }

    /// The current board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Cumulative score of this game.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Highest score reached by any game in this session.
    pub fn best_score(&self) -> Score {
        self.best_score
    }

    /// Terminal-state classification of the current board.
    pub fn state(&self) -> GameState {
        self.board.classify()
    }

    /// Apply a directional slide. If nothing can move, the board and score
    /// are left untouched and the result says so; callers should skip the
    /// tile spawn in that case (or use `step`, which does).
    pub fn slide(&mut self, direction: Move) -> MoveResult {
        let result = self.board.slide(direction);
        if result.moved {
            self.board = result.board;
            self.score += result.score_delta;
            if self.score > self.best_score {
                self.best_score = self.score;
            }
        }
        result
    }

    /// Spawn a 2 or 4 (even odds) in a uniformly random empty cell.
    /// Returns `None` when the board is full.
    pub fn spawn_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<TileSpawn> {
        let (board, spawn) = self.board.with_random_tile(rng)?;
        self.board = board;
        Some(spawn)
    }

    /// One full move: slide, then spawn a tile only if the slide changed the
    /// board. The returned result describes the slide; read `board()` for
    /// the post-spawn grid.
    pub fn step<R: Rng + ?Sized>(&mut self, direction: Move, rng: &mut R) -> MoveResult {
        let result = self.slide(direction);
        if result.moved {
            self.spawn_random_tile(rng);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_game_has_two_tiles_and_zero_score() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = Game::new(&mut rng);
        assert_eq!(game.board().count_empty(), 14);
        assert_eq!(game.score(), 0);
        assert_eq!(game.state(), GameState::Ongoing);
    }

    #[test]
    fn slide_accumulates_merge_points() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = Game::new(&mut rng);
        // Bottom row [0, 2, 0, 2]: merges into a 4 worth 4 points.
        game.board = Board::from_raw(0x0101);
        let result = game.slide(Move::Left);
        assert!(result.moved);
        assert_eq!(game.board(), Board::from_raw(0x2000));
        assert_eq!(game.score(), 4);
        assert_eq!(game.best_score(), 4);
    }

    #[test]
    fn illegal_slide_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::new(&mut rng);
        game.board = Board::from_raw(0x1000);
        game.score = 12;
        let result = game.slide(Move::Left);
        assert!(!result.moved);
        assert_eq!(game.board(), Board::from_raw(0x1000));
        assert_eq!(game.score(), 12);
    }

    #[test]
    fn step_spawns_only_after_a_real_move() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = Game::new(&mut rng);

        // Single tile in the bottom-right corner; left both moves and spawns.
        game.board = Board::from_raw(0x0001);
        let result = game.step(Move::Left, &mut rng);
        assert!(result.moved);
        assert_eq!(game.board().count_empty(), 14);

        // Already packed left and down: stepping left again is a no-op,
        // so no tile spawns either.
        game.board = Board::from_raw(0x1000);
        let result = game.step(Move::Left, &mut rng);
        assert!(!result.moved);
        assert_eq!(game.board().count_empty(), 15);
    }

    #[test]
    fn reset_clears_score_but_keeps_session_best() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = Game::new(&mut rng);
        game.board = Board::from_raw(0x0101);
        game.slide(Move::Left);
        assert_eq!(game.score(), 4);

        game.reset(&mut rng);
        assert_eq!(game.score(), 0);
        assert_eq!(game.best_score(), 4);
        assert_eq!(game.board().count_empty(), 14);
    }

    #[test]
    fn spawn_fills_the_single_remaining_cell() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut game = Game::new(&mut rng);
        // Full checkerboard except the bottom-right cell.
        game.board = Board::from_raw(0x1212212112122120);
        let spawn = game.spawn_random_tile(&mut rng).unwrap();
        assert_eq!(spawn.idx, 15);
        assert!(spawn.value == 2 || spawn.value == 4);
        assert_eq!(game.board().count_empty(), 0);
        assert!(game.spawn_random_tile(&mut rng).is_none());
    }

    #[test]
    fn terminal_states_classify_through_the_session() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = Game::new(&mut rng);

        game.board = Board::from_raw(0xB000000000000000);
        assert_eq!(game.state(), GameState::Won);

        game.board = Board::from_raw(0x1212212112122121);
        assert_eq!(game.state(), GameState::Lost);

        game.board = Board::from_raw(0x1212212112122122);
        assert_eq!(game.state(), GameState::Ongoing);
    }

    #[test]
    fn score_never_decreases_over_a_seeded_game() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut game = Game::new(&mut rng);
        let mut last = 0;
        let seq = [Move::Left, Move::Down, Move::Right, Move::Up];
        for i in 0..200 {
            if game.state() != GameState::Ongoing {
                break;
            }
            game.step(seq[i % seq.len()], &mut rng);
            assert!(game.score() >= last);
            last = game.score();
        }
    }
}
