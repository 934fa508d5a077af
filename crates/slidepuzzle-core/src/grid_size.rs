//! Grid dimensions and row-major index arithmetic.

use std::fmt::{self, Display};

/// The side length N of an N×N puzzle grid.
///
/// Boards are stored as flat sequences in row-major order: the flat index `i`
/// maps to column `i % N` and row `i / N`. All index arithmetic for a board of
/// this size goes through this type.
///
/// # Examples
///
/// ```
/// use slidepuzzle_core::GridSize;
///
/// let size = GridSize::new(4);
/// assert_eq!(size.get(), 4);
/// assert_eq!(size.tile_count(), 16);
/// assert_eq!(size.blank_tile(), 15);
///
/// // Index 6 of a 4×4 grid is column 2, row 1.
/// assert_eq!(size.column(6), 2);
/// assert_eq!(size.row(6), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize(u8);

impl GridSize {
    /// Creates a grid size from a side length.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero. Use [`GridSize::try_new`] for values that come
    /// from external input.
    #[must_use]
    pub fn new(n: u8) -> Self {
        Self::try_new(n).unwrap_or_else(|| panic!("grid size must be at least 1"))
    }

    /// Creates a grid size from a side length, returning `None` for zero.
    #[must_use]
    pub const fn try_new(n: u8) -> Option<Self> {
        if n == 0 { None } else { Some(Self(n)) }
    }

    /// Returns the side length N.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the total number of tiles on the board, N².
    #[must_use]
    pub fn tile_count(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }

    /// Returns the value of the blank tile, N²-1.
    ///
    /// The blank is the highest-valued tile; it marks the empty slot players
    /// slide pieces into.
    #[must_use]
    pub fn blank_tile(self) -> u16 {
        u16::from(self.0) * u16::from(self.0) - 1
    }

    /// Returns the row (counted from the top, 0-based) of a flat index.
    #[must_use]
    pub fn row(self, index: usize) -> usize {
        index / usize::from(self.0)
    }

    /// Returns the column (0-based) of a flat index.
    #[must_use]
    pub fn column(self, index: usize) -> usize {
        index % usize::from(self.0)
    }

    /// Returns the row of a flat index counted from the bottom of the grid,
    /// where 0 is the bottom row.
    #[must_use]
    pub fn row_from_bottom(self, index: usize) -> usize {
        usize::from(self.0) - 1 - self.row(index)
    }

    /// Returns whether two flat indices are orthogonally adjacent on the grid.
    ///
    /// Adjacent means same row with column distance 1, or same column with row
    /// distance 1 (a flat-index distance of exactly N in row-major layout).
    ///
    /// # Examples
    ///
    /// ```
    /// use slidepuzzle_core::GridSize;
    ///
    /// let size = GridSize::new(3);
    /// assert!(size.are_adjacent(4, 5)); // same row
    /// assert!(size.are_adjacent(4, 1)); // same column
    /// assert!(!size.are_adjacent(2, 3)); // wraps across a row boundary
    /// assert!(!size.are_adjacent(0, 2)); // distance 2
    /// ```
    #[must_use]
    pub fn are_adjacent(self, a: usize, b: usize) -> bool {
        let n = usize::from(self.0);
        let offset = a.abs_diff(b);
        (offset == 1 && self.row(a) == self.row(b))
            || (offset == n && self.column(a) == self.column(b))
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{n}x{n}", n = self.0)
    }
}
