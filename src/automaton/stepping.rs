//! Generation stepping with B3/S23 rules.
//!
//! Classification reads only the packed vote value of each interior cell:
//! - 21: two neighbors, alive (survival)
//! - 31: three neighbors, alive (survival)
//! - 30: three neighbors, dead (birth)
//!
//! Every other value is dead in the next generation.

use rayon::prelude::*;

use super::coord::{AliveSet, Coordinate};
use super::grid::{accumulate, VoteGrid};
use crate::error::Result;

/// Packed vote values that are alive in the next generation.
pub const ALIVE_VOTES: [u8; 3] = [21, 31, 30];

/// B3/S23 lookup on a packed vote value.
#[inline]
pub fn is_alive_next(value: u8) -> bool {
    matches!(value, 21 | 31 | 30)
}

/// Live/dead verdict for every cell of the visible window, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdicts {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Verdicts {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of entries, always `rows * cols`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Verdict for a visible cell, `None` outside the window.
    pub fn get(&self, coord: Coordinate) -> Option<bool> {
        if coord.row < 0 || coord.col < 0 {
            return None;
        }
        let (row, col) = (coord.row as usize, coord.col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Every visible cell with its verdict, row-major.
    ///
    /// `accumulate` only builds windows whose dimensions fit in `i32`, so the
    /// coordinate casts are lossless.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, bool)> + '_ {
        let cols = self.cols.max(1);
        self.cells.iter().enumerate().map(move |(i, &alive)| {
            let coord = Coordinate::new((i / cols) as i32, (i % cols) as i32);
            (coord, alive)
        })
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }
}

/// The outcome of one step: the next alive set and its verdicts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub alive: AliveSet,
    pub verdicts: Verdicts,
}

/// Classify every interior cell of `votes`.
///
/// Rows are classified in parallel on the current rayon pool; the padding
/// ring is never classified.
pub fn step(votes: &VoteGrid) -> Generation {
    let width = votes.width();
    let rows = votes.visible_rows();
    let cols = votes.visible_cols();

    let interior = &votes.as_slice()[width..width * (rows + 1)];
    let classified: Vec<Vec<bool>> = interior
        .par_chunks(width)
        .map(|row| {
            row[1..width - 1]
                .iter()
                .map(|&v| is_alive_next(v))
                .collect::<Vec<bool>>()
        })
        .collect();

    let cells: Vec<bool> = classified.into_iter().flatten().collect();
    let verdicts = Verdicts { rows, cols, cells };

    let mut alive = AliveSet::with_capacity(verdicts.alive_count());
    alive.extend(
        verdicts
            .iter()
            .filter(|&(_, alive)| alive)
            .map(|(coord, _)| coord),
    );

    Generation { alive, verdicts }
}

/// Runs accumulation and classification on a dedicated rayon pool.
pub struct Stepper {
    thread_pool: rayon::ThreadPool,
}

impl Stepper {
    /// Create a stepper with the given pool size. Zero means one thread.
    pub fn new(num_threads: usize) -> Result<Self> {
        let num_threads = if num_threads == 0 { 1 } else { num_threads };
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("life-step-{}", i))
            .build()?;

        Ok(Stepper { thread_pool })
    }

    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Compute the next generation of `alive` within a `rows x cols` window.
    pub fn advance(&self, alive: &AliveSet, rows: usize, cols: usize) -> Result<Generation> {
        let votes = accumulate(alive, rows, cols)?;
        Ok(self.thread_pool.install(|| step(&votes)))
    }
}
