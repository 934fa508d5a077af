//! Core board model for sliding-tile puzzles.
//!
//! This crate provides the pure, deterministic heart of a generalized
//! 15-puzzle: an N×N board holding a permutation of tile values, slide-move
//! validation, solved-state detection, and the classical permutation-parity
//! solvability test. It performs no I/O and contains no randomness; board
//! generation and game-session bookkeeping live in companion crates.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Grid geometry** - [`grid_size`]: the [`GridSize`] type and row-major
//!    index arithmetic (row, column, orthogonal adjacency).
//! 2. **Board state** - [`board`]: the [`Board`] value object, a permutation
//!    of `0..N²-1` with a cached blank-tile index that is updated
//!    transactionally on every mutation.
//! 3. **Solvability** - [`solvability`]: inversion counting and the parity
//!    rule deciding whether a permutation is reachable from the solved
//!    arrangement by legal slides.
//!
//! # Examples
//!
//! ```
//! use slidepuzzle_core::{Board, GridSize};
//!
//! let size = GridSize::new(3);
//! let mut board = Board::solved(size);
//! assert!(board.is_solved());
//! assert!(board.is_solvable());
//!
//! // Slide the tile left of the blank into the blank slot.
//! board.slide(8, 7).unwrap();
//! assert_eq!(board.blank_index(), 7);
//! assert_eq!(board.tiles()[8], 7);
//! assert!(!board.is_solved());
//! ```

pub mod board;
pub mod grid_size;
pub mod solvability;

pub use self::{
    board::{Board, BoardError, MoveError},
    grid_size::GridSize,
};
