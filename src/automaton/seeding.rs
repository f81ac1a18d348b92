//! Initial populations: Bernoulli random fill and preset patterns.

use rand::Rng;
use tracing::debug;

use super::coord::Coordinate;
use crate::error::{LifeError, Result};
use crate::state::Board;

/// Fraction of cells a random fill makes alive unless configured otherwise.
pub const DEFAULT_FILL_DENSITY: f64 = 0.2;

/// A named set of cells, relative to the pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Bounding box as (rows, cols).
    pub fn extent(&self) -> (i32, i32) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, GLIDER, TOAD, BEACON, R_PENTOMINO];

/// Look up a preset by name, ignoring case.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Clear the board, then make each visible cell alive with probability `density`.
pub fn random_fill<R: Rng + ?Sized>(board: &mut Board, density: f64, rng: &mut R) -> Result<()> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity(density));
    }

    board.clear();
    for row in 0..board.rows() as i32 {
        for col in 0..board.cols() as i32 {
            if rng.random_bool(density) {
                board.set_alive(Coordinate::new(row, col), true)?;
            }
        }
    }

    debug!(density, population = board.population(), "random fill");
    Ok(())
}

/// Place a pattern with its top-left corner at `origin`.
///
/// Nothing is placed unless every cell fits in the window.
pub fn stamp(board: &mut Board, pattern: &Pattern, origin: Coordinate) -> Result<()> {
    let placed: Option<Vec<Coordinate>> = pattern
        .cells
        .iter()
        .map(|&(r, c)| origin.offset(r, c).filter(|&cell| board.in_bounds(cell)))
        .collect();
    let Some(placed) = placed else {
        return Err(LifeError::PatternOutOfRange {
            name: pattern.name,
            row: origin.row,
            col: origin.col,
        });
    };

    for cell in placed {
        board.set_alive(cell, true)?;
    }
    Ok(())
}
