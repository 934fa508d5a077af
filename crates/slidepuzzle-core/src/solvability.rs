//! Permutation-parity solvability test for sliding-tile boards.
//!
//! A board is *solvable* when it can be transformed into the identity
//! arrangement (`tiles[i] == i` for all `i`) by legal slide moves. Whether
//! that is possible is decided entirely by the parity of the permutation's
//! inversion count, together with the blank's row on even-width grids:
//!
//! - `N² ≤ 2`: every arrangement is solvable.
//! - `N` odd: solvable iff the inversion count is even.
//! - `N` even: solvable iff the inversion count and the blank's row counted
//!   from the bottom (0 = bottom row) have the same parity.
//!
//! Both functions here are pure; [`Board`](crate::Board) exposes them as
//! convenience methods on live state.

use crate::GridSize;

/// Counts the inversions in a tile sequence, ignoring the blank tile.
///
/// An inversion is a pair of non-blank tiles whose relative order is reversed
/// compared to the solved sequence: positions `(i, j)` with `i < j` but
/// `tiles[i] > tiles[j]`.
///
/// The identity arrangement has zero inversions:
///
/// ```
/// use slidepuzzle_core::{GridSize, solvability};
///
/// let size = GridSize::new(3);
/// assert_eq!(solvability::count_inversions(size, &[0, 1, 2, 3, 4, 5, 6, 7, 8]), 0);
/// assert_eq!(solvability::count_inversions(size, &[1, 0, 2, 3, 4, 5, 6, 7, 8]), 1);
/// ```
#[must_use]
pub fn count_inversions(size: GridSize, tiles: &[u16]) -> usize {
    let blank = size.blank_tile();
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != blank)
        .map(|(i, &tile)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&later| later != blank && later < tile)
                .count()
        })
        .sum()
}

/// Returns whether a tile arrangement is solvable.
///
/// `tiles` must hold a permutation of `0..N²-1` for the given size and
/// `blank_index` must be the position of the blank tile (`N²-1`) within it;
/// these are debug-asserted, not re-derived.
///
/// # Examples
///
/// ```
/// use slidepuzzle_core::{GridSize, solvability};
///
/// let size = GridSize::new(3);
/// // Identity: zero inversions, solvable.
/// assert!(solvability::is_solvable(size, &[0, 1, 2, 3, 4, 5, 6, 7, 8], 8));
/// // Swapping two non-blank tiles flips the parity: unsolvable.
/// assert!(!solvability::is_solvable(size, &[1, 0, 2, 3, 4, 5, 6, 7, 8], 8));
/// ```
#[must_use]
pub fn is_solvable(size: GridSize, tiles: &[u16], blank_index: usize) -> bool {
    debug_assert_eq!(tiles.len(), size.tile_count());
    debug_assert_eq!(tiles.get(blank_index), Some(&size.blank_tile()));

    if size.tile_count() <= 2 {
        return true;
    }

    let inversions = count_inversions(size, tiles);
    if size.get() % 2 == 1 {
        inversions % 2 == 0
    } else {
        inversions % 2 == size.row_from_bottom(blank_index) % 2
    }
}
