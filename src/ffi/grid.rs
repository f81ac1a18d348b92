//! Cell edits, seeding, and stepping.
//!
//! Status codes: 0 on success, 1 for a null handle, 2 for an out-of-window
//! cell or invalid argument. `gol_step` returns the same failures negated so
//! they cannot be mistaken for a verdict count.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::lifecycle::LifeHandle;
use crate::automaton::coord::Coordinate;
use crate::automaton::seeding;

const OK: i32 = 0;
const NULL_HANDLE: i32 = 1;
const INVALID: i32 = 2;

/// Sets a cell alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeHandle, or null
#[no_mangle]
pub unsafe extern "C" fn gol_set_cell(ptr: *mut LifeHandle, row: i32, col: i32, alive: u8) -> i32 {
    if ptr.is_null() {
        return NULL_HANDLE;
    }

    let handle = &mut *ptr;
    match handle.board.set_alive(Coordinate::new(row, col), alive != 0) {
        Ok(_) => OK,
        Err(_) => INVALID,
    }
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeHandle, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn gol_get_cell(ptr: *const LifeHandle, row: i32, col: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    u8::from((*ptr).board.is_alive(Coordinate::new(row, col)))
}

/// Inverts a cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeHandle, or null
///
/// # Returns
/// The new state (0 or 1), or -1 on a null pointer or out-of-window cell.
#[no_mangle]
pub unsafe extern "C" fn gol_toggle_cell(ptr: *mut LifeHandle, row: i32, col: i32) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    let handle = &mut *ptr;
    match handle.board.toggle(Coordinate::new(row, col)) {
        Ok(alive) => i32::from(alive),
        Err(_) => -1,
    }
}

/// Kills every cell and resets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeHandle, or null
#[no_mangle]
pub unsafe extern "C" fn gol_clear(ptr: *mut LifeHandle) {
    if ptr.is_null() {
        return;
    }

    (*ptr).board.clear();
}

/// Clears the board and makes each cell alive with probability `density`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeHandle, or null
#[no_mangle]
pub unsafe extern "C" fn gol_random_fill(ptr: *mut LifeHandle, density: f64, seed: u64) -> i32 {
    if ptr.is_null() {
        return NULL_HANDLE;
    }

    let handle = &mut *ptr;
    let mut rng = StdRng::seed_from_u64(seed);
    match seeding::random_fill(&mut handle.board, density, &mut rng) {
        Ok(()) => OK,
        Err(_) => INVALID,
    }
}

/// Advances one generation and writes the verdict of every visible cell.
///
/// # Layout
/// `out_buf` receives `rows * cols` bytes in row-major order, 1 = alive,
/// 0 = dead. A null `out_buf` skips the copy but still steps.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeHandle, or null
/// - `out_buf` must be null or valid for writes of `buf_len` bytes
///
/// # Returns
/// The number of verdicts produced (`rows * cols`) once the board has
/// stepped, whether or not they were copied. `-1` for a null handle and `-2`
/// for a short buffer or a failed step; in both cases the board is not
/// stepped.
#[no_mangle]
pub unsafe extern "C" fn gol_step(ptr: *mut LifeHandle, out_buf: *mut u8, buf_len: u64) -> i64 {
    if ptr.is_null() {
        return -i64::from(NULL_HANDLE);
    }

    let handle = &mut *ptr;
    let needed = handle.board.rows() * handle.board.cols();
    if !out_buf.is_null() && buf_len < needed as u64 {
        return -i64::from(INVALID);
    }

    let report = match handle.board.advance(&handle.stepper) {
        Ok(report) => report,
        Err(_) => return -i64::from(INVALID),
    };

    if !out_buf.is_null() {
        let out = std::slice::from_raw_parts_mut(out_buf, needed);
        for (dst, &alive) in out.iter_mut().zip(report.verdicts.as_slice()) {
            *dst = u8::from(alive);
        }
    }
    needed as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_set_and_get_cell() {
        unsafe {
            let handle = lifecycle::gol_create(8, 8);

            assert_eq!(gol_set_cell(handle, 0, 0, 1), 0);
            assert_eq!(gol_get_cell(handle, 0, 0), 1);

            assert_eq!(gol_set_cell(handle, 0, 0, 0), 0);
            assert_eq!(gol_get_cell(handle, 0, 0), 0);

            lifecycle::gol_destroy(handle);
        }
    }

    #[test]
    fn test_out_of_bounds_access() {
        unsafe {
            let handle = lifecycle::gol_create(4, 4);

            assert_eq!(gol_get_cell(handle, -1, 0), 0);
            assert_eq!(gol_get_cell(handle, 4, 0), 0);
            assert_eq!(gol_set_cell(handle, -1, 0, 1), 2);
            assert_eq!(gol_set_cell(handle, 4, 0, 1), 2);
            assert_eq!(gol_toggle_cell(handle, 0, 4), -1);
            assert_eq!(lifecycle::gol_population(handle), 0);

            lifecycle::gol_destroy(handle);
        }
    }

    #[test]
    fn test_toggle_and_clear() {
        unsafe {
            let handle = lifecycle::gol_create(4, 4);

            assert_eq!(gol_toggle_cell(handle, 1, 2), 1);
            assert_eq!(gol_toggle_cell(handle, 2, 2), 1);
            assert_eq!(gol_toggle_cell(handle, 1, 2), 0);
            assert_eq!(lifecycle::gol_population(handle), 1);

            gol_clear(handle);
            assert_eq!(lifecycle::gol_population(handle), 0);

            lifecycle::gol_destroy(handle);
        }
    }

    #[test]
    fn test_step_writes_verdicts() {
        unsafe {
            let handle = lifecycle::gol_create(5, 5);

            // Horizontal blinker through the center
            gol_set_cell(handle, 2, 1, 1);
            gol_set_cell(handle, 2, 2, 1);
            gol_set_cell(handle, 2, 3, 1);

            let mut buf = [0xFFu8; 25];
            let written = gol_step(handle, buf.as_mut_ptr(), buf.len() as u64);
            assert_eq!(written, 25);
            assert_eq!(lifecycle::gol_get_generation(handle), 1);

            let alive: Vec<usize> = (0..25).filter(|&i| buf[i] == 1).collect();
            assert_eq!(alive, vec![7, 12, 17]);
            assert!(buf.iter().all(|&b| b <= 1));

            lifecycle::gol_destroy(handle);
        }
    }

    #[test]
    fn test_step_short_buffer_does_not_step() {
        unsafe {
            let handle = lifecycle::gol_create(4, 4);
            let mut buf = [0u8; 8];
            assert_eq!(gol_step(handle, buf.as_mut_ptr(), buf.len() as u64), -2);
            assert_eq!(lifecycle::gol_get_generation(handle), 0);

            lifecycle::gol_destroy(handle);
        }
    }

    #[test]
    fn test_step_without_buffer_reports_count() {
        unsafe {
            let handle = lifecycle::gol_create(4, 4);
            gol_set_cell(handle, 1, 1, 1);

            // Null buffer steps without copying and still reports the count
            assert_eq!(gol_step(handle, ptr::null_mut(), 0), 16);
            assert_eq!(lifecycle::gol_get_generation(handle), 1);
            assert_eq!(lifecycle::gol_population(handle), 0);

            // An empty window steps successfully with zero verdicts
            let empty = lifecycle::gol_create(0, 3);
            assert_eq!(gol_step(empty, ptr::null_mut(), 0), 0);
            assert_eq!(lifecycle::gol_get_generation(empty), 1);
            lifecycle::gol_destroy(empty);

            lifecycle::gol_destroy(handle);
        }
    }

    #[test]
    fn test_random_fill() {
        unsafe {
            let handle = lifecycle::gol_create(10, 10);
            assert_eq!(gol_random_fill(handle, 1.0, 5), 0);
            assert_eq!(lifecycle::gol_population(handle), 100);
            assert_eq!(gol_random_fill(handle, 3.0, 5), 2);

            lifecycle::gol_destroy(handle);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            assert_eq!(gol_set_cell(ptr::null_mut(), 0, 0, 1), 1);
            assert_eq!(gol_get_cell(ptr::null(), 0, 0), 0);
            assert_eq!(gol_toggle_cell(ptr::null_mut(), 0, 0), -1);
            gol_clear(ptr::null_mut()); // Should not crash
            assert_eq!(gol_random_fill(ptr::null_mut(), 0.5, 0), 1);
            assert_eq!(gol_step(ptr::null_mut(), ptr::null_mut(), 0), -1);
        }
    }
}
