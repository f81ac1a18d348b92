//! Lattice coordinates and the sparse set of living cells.

use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;

/// A cell on the integer lattice, addressed as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Coordinate { row, col }
    }

    /// Shift by the given offset, `None` if either axis overflows.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Coordinate {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The set of living cells. Membership means alive, absence means dead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliveSet {
    cells: HashSet<Coordinate>,
}

impl AliveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        AliveSet {
            cells: HashSet::with_capacity(capacity),
        }
    }

    /// Returns true if the cell was not already alive.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        self.cells.insert(coord)
    }

    /// Returns true if the cell was alive.
    pub fn remove(&mut self, coord: Coordinate) -> bool {
        self.cells.remove(&coord)
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Coordinate> {
        self.cells.iter()
    }

    /// Row-major listing, for stable output.
    pub fn sorted(&self) -> Vec<Coordinate> {
        let mut cells: Vec<Coordinate> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }
}

impl FromIterator<Coordinate> for AliveSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        AliveSet {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coordinate> for AliveSet {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a AliveSet {
    type Item = &'a Coordinate;
    type IntoIter = hash_set::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
