//! Vote grid construction and neighbor accumulation.
//!
//! The vote grid is the visible window padded by one ring of cells on every
//! side. Grid index (r, c) corresponds to lattice cell (r - 1, c - 1), so a
//! living cell on the window edge can deposit votes without bounds checks.
//!
//! Each living cell adds [`NEIGHBOR_WEIGHT`] to its eight neighbors and
//! [`SELF_WEIGHT`] to itself. A grid value therefore packs
//! `10 * neighbors + self_alive`, which is decodable because at most eight
//! neighbors exist.

use super::coord::{AliveSet, Coordinate};
use crate::error::{LifeError, Result};

/// Vote added to each of the eight neighbors of a living cell.
pub const NEIGHBOR_WEIGHT: u8 = 10;

/// Vote a living cell adds to its own position.
pub const SELF_WEIGHT: u8 = 1;

/// Per-cell packed votes over the padded window, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteGrid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl VoteGrid {
    /// Zeroed grid for a `rows x cols` window.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        let height = rows + 2;
        let width = cols + 2;
        VoteGrid {
            height,
            width,
            cells: vec![0; height * width],
        }
    }

    /// Padded height (`rows + 2`).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Padded width (`cols + 2`).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn visible_rows(&self) -> usize {
        self.height - 2
    }

    #[inline]
    pub fn visible_cols(&self) -> usize {
        self.width - 2
    }

    /// Linear index of padded grid position (r, c).
    #[inline]
    pub fn index_of(&self, r: usize, c: usize) -> usize {
        r * self.width + c
    }

    /// Packed value at padded position (r, c), or `None` past the padding.
    pub fn get(&self, r: usize, c: usize) -> Option<u8> {
        if r < self.height && c < self.width {
            Some(self.cells[self.index_of(r, c)])
        } else {
            None
        }
    }

    /// Raw row-major buffer including the padding ring.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Deposit the 3x3 vote block of a living cell anchored at padded (r, c).
    fn deposit(&mut self, r: usize, c: usize) {
        for dr in 0..3 {
            let base = self.index_of(r + dr - 1, c - 1);
            for dc in 0..3 {
                self.cells[base + dc] += if dr == 1 && dc == 1 {
                    SELF_WEIGHT
                } else {
                    NEIGHBOR_WEIGHT
                };
            }
        }
    }
}

/// Check if a lattice coordinate lies in a `rows x cols` window.
#[inline]
pub fn in_bounds(coord: Coordinate, rows: usize, cols: usize) -> bool {
    coord.row >= 0
        && coord.col >= 0
        && (coord.row as usize) < rows
        && (coord.col as usize) < cols
}

/// Build the vote grid for `alive` over a `rows x cols` window.
///
/// # Errors
/// [`LifeError::OutOfRange`] if any living cell lies outside the window.
/// Such cells are never clamped: their votes would land outside the padding
/// ring and break the packed encoding.
pub fn accumulate(alive: &AliveSet, rows: usize, cols: usize) -> Result<VoteGrid> {
    if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
        return Err(LifeError::WindowTooLarge { rows, cols });
    }
    let mut grid = VoteGrid::zeroed(rows, cols);

    for &coord in alive {
        if !in_bounds(coord, rows, cols) {
            return Err(LifeError::OutOfRange {
                row: coord.row,
                col: coord.col,
                rows,
                cols,
            });
        }
        grid.deposit(coord.row as usize + 1, coord.col as usize + 1);
    }

    Ok(grid)
}

/// Split a packed vote value into (alive neighbor count, self alive).
#[inline]
pub fn decode(value: u8) -> (u8, bool) {
    (value / NEIGHBOR_WEIGHT, value % NEIGHBOR_WEIGHT == SELF_WEIGHT)
}
