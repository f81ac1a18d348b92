//! Life Stepper - Conway's Game of Life state-transition engine
//!
//! The engine keeps a sparse set of living cells inside a fixed visible
//! window. Each step folds the set into a padded vote grid, classifies every
//! visible cell with the B3/S23 rule, and returns the next set along with a
//! live/dead verdict for every visible cell. Growth past the window edge is
//! dropped, not wrapped.
//!
//! Hosts drive it either from Rust through [`Session`] and [`Ticker`], or
//! through the C ABI in [`ffi`].

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod session;
pub mod state;

pub use automaton::{accumulate, step, AliveSet, Coordinate, Generation, Stepper, Verdicts, VoteGrid};
pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use session::{Session, Ticker, VerdictSink};
pub use state::{Board, StepReport};

#[cfg(test)]
mod tests;
