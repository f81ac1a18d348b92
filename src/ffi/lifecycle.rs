//! Handle creation, destruction, and generation queries.

use crate::automaton::stepping::Stepper;
use crate::state::Board;

/// Opaque handle: a board and the stepper that advances it.
pub struct LifeHandle {
    pub board: Board,
    pub stepper: Stepper,
}

/// Creates an empty `rows x cols` board and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new handle, or null if either dimension is negative or
/// the stepping pool cannot be started.
///
/// # Safety
/// The returned pointer must eventually be freed with `gol_destroy()`.
#[no_mangle]
pub extern "C" fn gol_create(rows: i32, cols: i32) -> *mut LifeHandle {
    if rows < 0 || cols < 0 {
        return std::ptr::null_mut();
    }
    match (Board::new(rows as usize, cols as usize), Stepper::new(1)) {
        (Ok(board), Ok(stepper)) => Box::into_raw(Box::new(LifeHandle { board, stepper })),
        _ => std::ptr::null_mut(),
    }
}

/// Destroys a handle and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gol_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_destroy(ptr: *mut LifeHandle) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter of a board.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeHandle, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_get_generation(ptr: *const LifeHandle) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).board.generation()
}

/// Gets the number of living cells.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeHandle, or null
///
/// # Returns
/// The population, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_population(ptr: *const LifeHandle) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).board.population() as u64
}
