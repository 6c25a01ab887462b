//! twenty48-core: a 2048 board-state engine
//!
//! This crate provides:
//! - A compact `Board` type with ergonomic methods (`slide`, `can_shift`,
//!   `classify`, `with_random_tile`, ...)
//! - A `Game` session that owns the cumulative score and the per-move
//!   slide-then-spawn control flow (`game` module)
//! - The fixed tile palette and score labels a renderer consumes (`theme`
//!   module)
//!
//! Rendering, animation, and input capture live in the caller; the engine is
//! synchronous and immediately consistent, so any scheduling strategy works
//! on top of it.
//!
//! Quick start:
//! ```
//! use twenty48_core::engine::{self as GameEngine, GameState, Move};
//! use twenty48_core::game::Game;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // One-time table warm-up (ops also initialize lazily on first use)
//! GameEngine::new();
//!
//! // Deterministic game with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = Game::new(&mut rng);
//!
//! let seq = [Move::Left, Move::Down, Move::Right, Move::Up];
//! let mut moves = 0;
//! while game.state() == GameState::Ongoing && moves < 4 {
//!     game.step(seq[moves % seq.len()], &mut rng);
//!     moves += 1;
//! }
//! assert!(game.board().count_empty() < 16);
//! ```
//!
//! Board-level ops are pure and deterministic; the example row below is
//! `[0, 2, 0, 2]`, which packs into a single 4 worth 4 points:
//! ```
//! use twenty48_core::engine::{Board, Move};
//!
//! let result = Board::from_raw(0x0101).slide(Move::Left);
//! assert!(result.moved);
//! assert_eq!(result.board.raw(), 0x2000);
//! assert_eq!(result.score_delta, 4);
//! assert!(!result.board.can_shift(Move::Left));
//! ```
//!
//! Note: For convenience, there are also free functions mirroring the
//! `Board` methods (e.g., `engine::slide`, `engine::classify`). Randomized
//! operations always take an explicit `&mut impl Rng`, so seeded runs
//! reproduce exactly.

pub mod engine;
pub mod game;
pub mod theme;
