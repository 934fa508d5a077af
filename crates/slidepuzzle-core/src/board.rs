//! The sliding-tile board value object.

use std::fmt::{self, Display};

use crate::{GridSize, solvability};

/// An N×N sliding-tile board.
///
/// The board owns a permutation of the tile values `0..N²-1` in row-major
/// order, where the highest value `N²-1` is the blank slot. The blank's
/// position is cached and updated in the same operation as every mutation, so
/// it is never stale; [`Board::blank_index`] is always the unique index `i`
/// with `tiles()[i] == size().blank_tile()`.
///
/// Callers receive read-only views of the tiles; all mutation goes through
/// [`Board::slide`], which rejects illegal moves without touching state.
///
/// # Examples
///
/// ```
/// use slidepuzzle_core::{Board, GridSize, MoveError};
///
/// let mut board = Board::solved(GridSize::new(3));
/// assert_eq!(board.blank_index(), 8);
///
/// // Tile 7 sits left of the blank and may slide into it.
/// board.slide(8, 7).unwrap();
/// assert_eq!(board.tiles()[8], 7);
///
/// // Index 5 is diagonal to the new blank slot at 7; the slide is rejected.
/// assert!(matches!(board.slide(7, 5), Err(MoveError::NotAdjacent { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: GridSize,
    tiles: Vec<u16>,
    blank: usize,
}

impl Board {
    /// Creates the solved (identity) board for the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidepuzzle_core::{Board, GridSize};
    ///
    /// let board = Board::solved(GridSize::new(2));
    /// assert_eq!(board.tiles(), &[0, 1, 2, 3]);
    /// assert_eq!(board.blank_index(), 3);
    /// ```
    #[must_use]
    pub fn solved(size: GridSize) -> Self {
        #[expect(clippy::cast_possible_truncation)]
        let tiles = (0..size.tile_count()).map(|i| i as u16).collect();
        Self {
            size,
            tiles,
            blank: size.tile_count() - 1,
        }
    }

    /// Creates a board from an explicit tile sequence.
    ///
    /// The sequence must be a permutation of `0..N²-1` for the given size.
    /// The blank's position is derived from the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongTileCount`] if the sequence length is not
    /// N², or [`BoardError::NotAPermutation`] if any value is out of range or
    /// repeated.
    pub fn from_tiles(size: GridSize, tiles: Vec<u16>) -> Result<Self, BoardError> {
        let count = size.tile_count();
        if tiles.len() != count {
            return Err(BoardError::WrongTileCount {
                expected: count,
                actual: tiles.len(),
            });
        }
        let mut seen = vec![false; count];
        for &tile in &tiles {
            match seen.get_mut(usize::from(tile)) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(BoardError::NotAPermutation { value: tile }),
            }
        }
        let blank = tiles
            .iter()
            .position(|&tile| tile == size.blank_tile())
            .unwrap_or_else(|| unreachable!("permutation contains the blank tile"));
        Ok(Self { size, tiles, blank })
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns a read-only view of the tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Returns the flat index of the blank slot.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Returns whether the board is in the solved (identity) arrangement.
    ///
    /// Solved means `tiles()[i] == i` for every index, which places the blank
    /// in the bottom-right corner.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, &tile)| usize::from(tile) == i)
    }

    /// Returns whether the current arrangement is solvable.
    ///
    /// See [`solvability::is_solvable`] for the parity rule.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        solvability::is_solvable(self.size, &self.tiles, self.blank)
    }

    /// Counts the inversions in the current arrangement, ignoring the blank.
    #[must_use]
    pub fn inversions(&self) -> usize {
        solvability::count_inversions(self.size, &self.tiles)
    }

    /// Slides the tile at `dest` into the blank slot at `start`.
    ///
    /// `start` must be the blank's current position and `dest` an orthogonally
    /// adjacent index. On success the two values are swapped and the blank
    /// cache moves to `dest`.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing the rejection; the board is left
    /// unchanged. A rejected move is a routine outcome (e.g. the player
    /// dropped a tile on a non-adjacent slot), not a fault.
    pub fn slide(&mut self, start: usize, dest: usize) -> Result<(), MoveError> {
        let count = self.size.tile_count();
        for index in [start, dest] {
            if index >= count {
                return Err(MoveError::OutOfBounds { index, count });
            }
        }
        if self.tiles[start] != self.size.blank_tile() {
            return Err(MoveError::BlankNotAtStart { start });
        }
        if !self.size.are_adjacent(start, dest) {
            return Err(MoveError::NotAdjacent { start, dest });
        }
        self.tiles.swap(start, dest);
        self.blank = dest;
        Ok(())
    }
}

impl Display for Board {
    /// Renders the board as a grid, one row per line, with the blank as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.blank_tile().to_string().len();
        for (i, &tile) in self.tiles.iter().enumerate() {
            if tile == self.size.blank_tile() {
                write!(f, "{:>width$}", ".")?;
            } else {
                write!(f, "{tile:>width$}")?;
            }
            if self.size.column(i) + 1 == usize::from(self.size.get()) {
                writeln!(f)?;
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

/// Errors from constructing a board out of an explicit tile sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The sequence length does not match the grid size.
    #[display("expected {expected} tiles, got {actual}")]
    WrongTileCount {
        /// Number of tiles required by the grid size, N².
        expected: usize,
        /// Number of tiles actually supplied.
        actual: usize,
    },
    /// A value is out of range or appears more than once.
    #[display("tile value {value} is out of range or repeated")]
    NotAPermutation {
        /// The offending tile value.
        value: u16,
    },
}

/// Reasons a slide request is rejected.
///
/// All variants are the same routine outcome from the caller's point of view:
/// the move did not happen and the board is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// An index lies outside the board.
    #[display("index {index} is outside the {count}-tile board")]
    OutOfBounds {
        /// The offending flat index.
        index: usize,
        /// Total number of tiles on the board.
        count: usize,
    },
    /// The `start` index does not hold the blank.
    #[display("slot {start} does not hold the blank")]
    BlankNotAtStart {
        /// The supplied start index.
        start: usize,
    },
    /// The two indices are not orthogonally adjacent.
    #[display("slots {start} and {dest} are not adjacent")]
    NotAdjacent {
        /// The blank's index.
        start: usize,
        /// The requested destination index.
        dest: usize,
    },
}
