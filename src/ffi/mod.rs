//! C FFI layer for non-Rust hosts.
//!
//! This module exports C ABI functions over an opaque [`LifeHandle`].
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `state` and `automaton`. These functions are thin
//! wrappers that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;

pub use grid::{
    gol_clear, gol_get_cell, gol_random_fill, gol_set_cell, gol_step, gol_toggle_cell,
};
pub use lifecycle::{gol_create, gol_destroy, gol_get_generation, gol_population, LifeHandle};
