//! Game-session layer for sliding-tile puzzles.
//!
//! A [`Game`] owns the live board, an immutable snapshot of the shuffle it
//! started from, and a move counter. It applies moves with a distinguished
//! rejection result, restores the original shuffle on restart, and answers
//! the solved query. The [`save`] module persists a session (plus an opaque
//! caller-supplied tag, typically an image identifier) in a line-oriented
//! text format, loading it back all-or-nothing.
//!
//! The session is single-threaded by design: one caller (usually a UI event
//! loop) owns the `Game` exclusively and serializes all calls. Solved-ness is
//! a derived predicate the caller checks after each successful move; the
//! engine keeps no solved flag and never freezes input itself.
//!
//! # Examples
//!
//! ```
//! use slidepuzzle_core::GridSize;
//! use slidepuzzle_game::Game;
//! use slidepuzzle_generator::BoardGenerator;
//!
//! let generator = BoardGenerator::new(GridSize::new(4));
//! let mut game = Game::new(generator.generate());
//! assert_eq!(game.move_count(), 0);
//!
//! // Slide some tile next to the blank, then take it back with a restart.
//! let blank = game.blank_index();
//! let dest = if blank % 4 > 0 { blank - 1 } else { blank + 1 };
//! game.apply_move(blank, dest).unwrap();
//! assert_eq!(game.move_count(), 1);
//! game.restart();
//! assert_eq!(game.move_count(), 0);
//! ```

pub mod game;
pub mod save;

pub use self::{
    game::Game,
    save::{SaveData, SaveError},
};
