//! The puzzle game session.

use std::path::Path;

use slidepuzzle_core::{Board, GridSize, MoveError};
use slidepuzzle_generator::GeneratedBoard;

use crate::save::{SaveData, SaveError};

/// A sliding-tile puzzle session.
///
/// Owns the current board, an immutable snapshot of the board as generated
/// (for [`Game::restart`]), and the count of successful moves. The snapshot
/// is never mutated; it is only replaced wholesale when a new game is
/// created.
///
/// # Example
///
/// ```
/// use slidepuzzle_core::GridSize;
/// use slidepuzzle_game::Game;
/// use slidepuzzle_generator::BoardGenerator;
///
/// let generator = BoardGenerator::new(GridSize::new(3));
/// let game = Game::new(generator.generate());
/// assert!(game.board().is_solvable());
/// assert_eq!(game.move_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    original: Board,
    move_count: u32,
}

impl Game {
    /// Creates a new session from a generated board.
    ///
    /// The generated board becomes both the live board and the restart
    /// snapshot.
    #[must_use]
    pub fn new(generated: GeneratedBoard) -> Self {
        let GeneratedBoard { board, seed: _ } = generated;
        Self {
            original: board.clone(),
            board,
            move_count: 0,
        }
    }

    /// Reassembles a session from previously saved parts.
    ///
    /// Used by [`SaveData`] when loading; both boards have already been
    /// validated as permutations of the same size at that point.
    pub(crate) fn from_parts(board: Board, original: Board, move_count: u32) -> Self {
        Self {
            board,
            original,
            move_count,
        }
    }

    /// Returns a read-only view of the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the restart snapshot taken when the session was created.
    #[must_use]
    pub fn original_board(&self) -> &Board {
        &self.original
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.board.size()
    }

    /// Returns the flat index of the blank slot on the current board.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.board.blank_index()
    }

    /// Returns the number of successful moves since the last new game or
    /// restart.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns whether the current board is in the solved arrangement.
    ///
    /// The engine keeps no solved flag; callers evaluate this after each
    /// successful move and decide themselves whether to stop accepting input.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Slides the tile at `dest` into the blank slot at `start`.
    ///
    /// `start` must be the blank's current position and `dest` an adjacent
    /// index; see [`Board::slide`] for the exact contract. On success the
    /// move counter increments.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] rejection unchanged, with the session left
    /// untouched. Rejections are routine (a tile dropped on a non-adjacent
    /// slot snaps back), not exceptional.
    pub fn apply_move(&mut self, start: usize, dest: usize) -> Result<(), MoveError> {
        self.board.slide(start, dest)?;
        self.move_count += 1;
        log::debug!(
            "move {count}: [{start}] -> [{dest}]",
            count = self.move_count
        );
        Ok(())
    }

    /// Restores the board to the original shuffle and zeroes the move count.
    ///
    /// The snapshot itself and the grid size are unchanged. No re-validation
    /// is needed: the snapshot was solvable when it was taken.
    pub fn restart(&mut self) {
        log::debug!("restarting after {count} move(s)", count = self.move_count);
        self.board = self.original.clone();
        self.move_count = 0;
    }

    /// Captures the session and an opaque tag as serializable save data.
    ///
    /// The tag (e.g. an associated image identifier) is meaningless to the
    /// engine and passes through unchanged.
    #[must_use]
    pub fn save_data(&self, tag: impl Into<String>) -> SaveData {
        SaveData::snapshot(self, tag)
    }

    /// Writes the session and tag to a save file.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Io`] if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>, tag: &str) -> Result<(), SaveError> {
        self.save_data(tag).write_to(path)
    }

    /// Loads a session and its tag from a save file.
    ///
    /// The load is all-or-nothing: on any failure no session is produced and
    /// nothing existing is mutated.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] if the file is missing, unreadable, or
    /// malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, String), SaveError> {
        SaveData::read_from(path)?.into_game()
    }
}

#[cfg(test)]
mod tests {
    use slidepuzzle_generator::{BoardGenerator, BoardSeed};

    use super::*;

    fn solved_game(n: u8) -> Game {
        let board = Board::solved(GridSize::new(n));
        Game::from_parts(board.clone(), board, 0)
    }

    fn scrambled_game(n: u8) -> Game {
        let generator = BoardGenerator::new(GridSize::new(n));
        Game::new(generator.generate_with_seed(BoardSeed::from_phrase("test game")))
    }

    #[test]
    fn test_apply_move_from_identity() {
        let mut game = solved_game(3);
        assert_eq!(game.blank_index(), 8);

        game.apply_move(8, 7).unwrap();
        assert_eq!(game.blank_index(), 7);
        assert_eq!(game.board().tiles()[8], 7);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_apply_move_rejection_changes_nothing() {
        let mut game = solved_game(3);
        let before = game.clone();

        // Distance 2 within a row is not adjacent.
        assert!(game.apply_move(8, 6).is_err());
        assert_eq!(game, before);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_solved_only_for_identity() {
        let mut game = solved_game(3);
        assert!(game.is_solved());
        game.apply_move(8, 5).unwrap();
        assert!(!game.is_solved());
        game.apply_move(5, 8).unwrap();
        assert!(game.is_solved());
    }

    #[test]
    fn test_restart_restores_original_shuffle() {
        let mut game = scrambled_game(4);
        let original = game.original_board().clone();

        // Walk the blank around a bit.
        for _ in 0..10 {
            let blank = game.blank_index();
            let dest = if blank % 4 > 0 { blank - 1 } else { blank + 1 };
            game.apply_move(blank, dest).unwrap();
        }
        assert_eq!(game.move_count(), 10);
        assert_ne!(game.board(), &original);

        game.restart();
        assert_eq!(game.board(), &original);
        assert_eq!(game.original_board(), &original);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_new_game_starts_at_zero_moves() {
        let game = scrambled_game(3);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.board(), game.original_board());
    }
}
