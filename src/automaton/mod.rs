//! Core automaton logic.
//!
//! This module contains the sparse alive set, neighbor accumulation onto the
//! padded vote grid, generation stepping, and initial populations.
//! The board, session, and FFI layers call these functions.

pub mod coord;
pub mod grid;
pub mod seeding;
pub mod stepping;

pub use coord::{AliveSet, Coordinate};
pub use grid::{accumulate, decode, in_bounds, VoteGrid, NEIGHBOR_WEIGHT, SELF_WEIGHT};
pub use seeding::{random_fill, stamp, Pattern, PATTERNS};
pub use stepping::{is_alive_next, step, Generation, Stepper, Verdicts};
