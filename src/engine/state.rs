use rand::Rng;
use std::fmt;

use super::ops;
use serde::{Deserialize, Serialize};

// Internal type aliases for packed representation
pub(crate) type BoardRaw = u64;
pub(crate) type Line = u64;

/// Actual tile value (0 for empty, otherwise a power of two >= 2).
pub type Tile = u64;
/// Cumulative or per-move score in merge points.
pub type Score = u64;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions, in the order the terminal-state check probes them.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
}

/// Terminal-state classification of a board.
///
/// `Won` as soon as a 2048 tile exists, `Lost` when the board is full and no
/// direction can change it, `Ongoing` otherwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameState {
    Ongoing,
    Won,
    Lost,
}

/// Outcome of a directional slide: the resulting board, whether any tile
/// moved or merged, and the merge points gained.
///
/// When `moved` is false, `board` is the input board and `score_delta` is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    pub moved: bool,
    pub score_delta: Score,
}

/// A freshly spawned tile: its row-major cell index (0..16) and value (2 or 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpawn {
    pub idx: usize,
    pub value: Tile,
}

/// Packed 4x4 2048 board as 16 4-bit nibbles in a `u64`.
///
/// Each nibble stores the tile's exponent (0 = empty, n = tile 2^n), so every
/// cell is 0 or a power of two by construction. Public methods provide
/// ergonomic, safe operations while preserving an escape hatch to the raw
/// packed representation for advanced use.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board(pub(crate) BoardRaw);

impl Board {
    /// A constant empty board (all zeros).
    pub const EMPTY: Board = Board(0);

    /// Construct a `Board` from its raw packed representation.
    #[inline]
    pub fn from_raw(raw: BoardRaw) -> Self {
        Board(raw)
    }

    /// Consume this `Board`, returning the raw packed `u64`.
    #[inline]
    pub fn into_raw(self) -> BoardRaw {
        self.0
    }

    /// Borrow the raw packed `u64` for this `Board`.
    #[inline]
    pub fn raw(&self) -> BoardRaw {
        self.0
    }

    /// Return the board resulting from sliding/merging tiles in `dir` (no
    /// randomness, no score bookkeeping).
    ///
    /// Example
    /// ```
    /// use twenty48_core::engine::{Board, Move};
    /// assert_eq!(Board::EMPTY.shift(Move::Left), Board::EMPTY);
    /// ```
    #[inline]
    pub fn shift(self, dir: Move) -> Self {
        ops::shift(self, dir)
    }

    /// Slide/merge tiles in `dir`, reporting whether anything moved and the
    /// merge points gained. A destination cell merges at most once per slide.
    ///
    /// ```
    /// use twenty48_core::engine::{Board, Move};
    /// // Bottom row [0, 2, 0, 2], everything else empty.
    /// let result = Board::from_raw(0x0101).slide(Move::Left);
    /// assert!(result.moved);
    /// assert_eq!(result.board.raw(), 0x2000);
    /// assert_eq!(result.score_delta, 4);
    /// ```
    #[inline]
    pub fn slide(self, dir: Move) -> MoveResult {
        ops::slide(self, dir)
    }

    /// True iff sliding in `dir` would change the board. Agrees exactly with
    /// `slide(dir).moved`; use it to suppress no-op moves.
    ///
    /// ```
    /// use twenty48_core::engine::{Board, Move};
    /// assert!(!Board::EMPTY.can_shift(Move::Left));
    /// ```
    #[inline]
    pub fn can_shift(self, dir: Move) -> bool {
        ops::can_shift(self, dir)
    }

    /// Classify this board as `Won`, `Lost`, or `Ongoing`.
    ///
    /// ```
    /// use twenty48_core::engine::{Board, GameState};
    /// assert_eq!(Board::EMPTY.classify(), GameState::Ongoing);
    /// ```
    #[inline]
    pub fn classify(self) -> GameState {
        ops::classify(self)
    }

    /// Insert a random 2 or 4 tile (even odds) into a uniformly random empty
    /// cell, using the provided RNG. Returns the new board and where the tile
    /// landed, or `None` when the board has no empty cell.
    ///
    /// Deterministic example using a seeded RNG:
    /// ```
    /// use twenty48_core::engine::Board;
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let (board, spawn) = Board::EMPTY.with_random_tile(&mut rng).unwrap();
    /// assert_eq!(board.count_empty(), 15);
    /// assert!(spawn.value == 2 || spawn.value == 4);
    /// ```
    pub fn with_random_tile<R: Rng + ?Sized>(self, rng: &mut R) -> Option<(Self, TileSpawn)> {
        let empty = ops::count_empty(self);
        if empty == 0 {
            return None;
        }
        let target = rng.gen_range(0..empty) as usize;
        let idx = (0..16usize)
            .filter(|&i| (self.0 >> (60 - 4 * i)) & 0xf == 0)
            .nth(target)?;
        let rank = ops::random_tile_rank(rng);
        let board = Board(self.0 | (rank << (60 - 4 * idx)));
        Some((board, TileSpawn { idx, value: 1 << rank }))
    }

    /// Return the highest tile value (e.g., 2048) present on the board, or 0
    /// for an empty board.
    #[inline]
    pub fn highest_tile(self) -> Tile {
        ops::get_highest_tile_val(self)
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn count_empty(self) -> u64 {
        ops::count_empty(self)
    }

    /// Get the actual value at index (2^exponent stored at nibble).
    ///
    /// Index runs 0..16 row-major.
    #[inline]
    pub fn tile_value(self, idx: usize) -> u16 {
        ops::get_tile_val(self, idx)
    }

    /// Iterate over tile exponents (nibbles) in row-major order.
    /// Returns 0 for empty, 1 for 2, 2 for 4, etc.
    #[inline]
    pub fn tiles(self) -> TilesIter {
        TilesIter { raw: self.0, idx: 0 }
    }

    /// Convenience: collect tile exponents into a `Vec<u8>`.
    #[inline]
    pub fn to_vec(self) -> Vec<u8> {
        self.tiles().collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:#018x})", self.0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board: Vec<_> = self.tiles().map(|n| super::ops::format_val(&n)).collect();
        write!(
            f,
            "\n{}|{}|{}|{}\n--------------------------------\n{}|{}|{}|{}\n--------------------------------\n{}|{}|{}|{}\n--------------------------------\n{}|{}|{}|{}\n",
            board[0],
            board[1],
            board[2],
            board[3],
            board[4],
            board[5],
            board[6],
            board[7],
            board[8],
            board[9],
            board[10],
            board[11],
            board[12],
            board[13],
            board[14],
            board[15]
        )
    }
}

impl From<BoardRaw> for Board {
    fn from(v: BoardRaw) -> Self {
        Board::from_raw(v)
    }
}
impl From<Board> for BoardRaw {
    fn from(b: Board) -> Self {
        b.into_raw()
    }
}

/// Iterator over board tiles (exponents) in row-major order.
pub struct TilesIter {
    pub raw: BoardRaw,
    pub idx: usize,
}

impl Iterator for TilesIter {
    type Item = u8;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= 16 {
            return None;
        }
        let n = ((self.raw >> (60 - (4 * self.idx))) & 0xf) as u8;
        self.idx += 1;
        Some(n)
    }
}

impl IntoIterator for Board {
    type Item = u8;
    type IntoIter = TilesIter;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.tiles()
    }
}

impl IntoIterator for &Board {
    type Item = u8;
    type IntoIter = TilesIter;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.tiles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn raw_round_trip() {
        let b = Board::from_raw(0x1234133220021002);
        assert_eq!(b.raw(), 0x1234133220021002);
        assert_eq!(BoardRaw::from(b), b.into_raw());
    }

    #[test]
    fn tiles_iterate_row_major_from_top_left() {
        let b = Board::from_raw(0x1234000000000000);
        let exps = b.to_vec();
        assert_eq!(&exps[..4], &[1, 2, 3, 4]);
        assert!(exps[4..].iter().all(|&e| e == 0));
    }

    #[test]
    fn with_random_tile_only_fills_an_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        // Four empty cells to fill.
        let mut board = Board::from_raw(0x1234133220021002);
        for _ in 0..4 {
            let (next, spawn) = board.with_random_tile(&mut rng).unwrap();
            assert_eq!(board.tile_value(spawn.idx), 0);
            assert_eq!(next.tile_value(spawn.idx) as Tile, spawn.value);
            assert!(spawn.value == 2 || spawn.value == 4);
            assert_eq!(next.count_empty(), board.count_empty() - 1);
            board = next;
        }
        assert_eq!(board.count_empty(), 0);
        assert!(board.with_random_tile(&mut rng).is_none());
    }

    #[test]
    fn move_serializes_as_plain_variant_name() {
        assert_eq!(serde_json::to_string(&Move::Left).unwrap(), "\"Left\"");
        let m: Move = serde_json::from_str("\"Up\"").unwrap();
        assert_eq!(m, Move::Up);
        assert_eq!(
            serde_json::to_string(&GameState::Ongoing).unwrap(),
            "\"Ongoing\""
        );
    }
}
