//! The board: the single owner of the alive set between steps.

use tracing::{debug, trace, warn};

use crate::automaton::coord::{AliveSet, Coordinate};
use crate::automaton::grid::in_bounds;
use crate::automaton::stepping::{Stepper, Verdicts};
use crate::error::{LifeError, Result};

/// The living cells of a fixed `rows x cols` window and its generation count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    alive: AliveSet,
    generation: u64,
}

/// What a single step produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Generation number after the step.
    pub generation: u64,
    /// Living cells after the step.
    pub population: usize,
    /// Cells that were dead and are now alive.
    pub births: usize,
    /// Cells that were alive and are now dead.
    pub deaths: usize,
    /// Verdict for every visible cell.
    pub verdicts: Verdicts,
}

impl Board {
    /// Empty board for a `rows x cols` window.
    ///
    /// Both dimensions must fit in `i32` so every visible cell has a
    /// [`Coordinate`].
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
            return Err(LifeError::WindowTooLarge { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            alive: AliveSet::new(),
            generation: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn alive(&self) -> &AliveSet {
        &self.alive
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        in_bounds(coord, self.rows, self.cols)
    }

    /// Dead for any cell outside the window.
    pub fn is_alive(&self, coord: Coordinate) -> bool {
        self.alive.contains(coord)
    }

    fn check(&self, coord: Coordinate) -> Result<()> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            warn!(%coord, rows = self.rows, cols = self.cols, "edit outside window rejected");
            Err(LifeError::OutOfRange {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Set a cell alive or dead. Returns whether the board changed.
    pub fn set_alive(&mut self, coord: Coordinate, alive: bool) -> Result<bool> {
        self.check(coord)?;
        let changed = if alive {
            self.alive.insert(coord)
        } else {
            self.alive.remove(coord)
        };
        trace!(%coord, alive, changed, "set cell");
        Ok(changed)
    }

    /// Invert a cell. Returns its new state.
    pub fn toggle(&mut self, coord: Coordinate) -> Result<bool> {
        let alive = !self.is_alive(coord);
        self.set_alive(coord, alive)?;
        Ok(alive)
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.alive.clear();
        self.generation = 0;
        trace!("board cleared");
    }

    /// Step one generation, replacing the alive set wholesale.
    pub fn advance(&mut self, stepper: &Stepper) -> Result<StepReport> {
        let next = stepper.advance(&self.alive, self.rows, self.cols)?;

        let survivors = next
            .alive
            .iter()
            .filter(|&&coord| self.alive.contains(coord))
            .count();
        let births = next.alive.len() - survivors;
        let deaths = self.alive.len() - survivors;

        self.alive = next.alive;
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.alive.len(),
            births,
            deaths,
            "stepped"
        );

        Ok(StepReport {
            generation: self.generation,
            population: self.alive.len(),
            births,
            deaths,
            verdicts: next.verdicts,
        })
    }
}
