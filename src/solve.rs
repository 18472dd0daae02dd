//! Row-by-row backtracking search.

use crate::attacks::is_legal;
use crate::board::{Board, Solution};

/// Observation hook for the search.
///
/// All methods default to no-ops. Implementations receive shared references
/// only, so a hook can render or count but never steer the search or touch
/// its state. The CLI's per-step trace is built on this; tests run with
/// [`NoObserver`].
pub trait SearchObserver {
    /// Called after a queen has been placed at `(row, col)`.
    fn queen_placed(&mut self, _board: &Board, _row: u16, _col: u16) {}

    /// Called after the queen at `(row, col)` has been removed again.
    fn queen_removed(&mut self, _board: &Board, _row: u16, _col: u16) {}

    /// Called when a completed board has been captured. `total` is the
    /// number of solutions found so far in this run.
    fn solution_found(&mut self, _solution: &Solution, _total: usize) {}
}

/// The silent observer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl SearchObserver for NoObserver {}

/// Fill rows `start_row..` of `board` with one queen each, collecting every
/// completed placement into `solutions` in discovery order.
///
/// The board must be no taller than it is wide; taller boards go through
/// [`Puzzle`](crate::puzzle::Puzzle), which transposes around this call.
/// Columns are tried in increasing order, which fixes the discovery order.
///
/// With `stop_after_first`, the stop condition is checked on entry of every
/// call, so once a solution has been recorded all pending sibling branches
/// unwind without exploring further and `solutions` gains exactly one entry.
///
/// The board is mutated in place, one trial at a time, and every trial is
/// rolled back unconditionally: by the time the top-level call returns the
/// board is bit-for-bit back in its pre-call state. Recursion depth equals
/// the number of rows, so boards thousands of rows tall could exhaust a
/// constrained stack; a documented limit rather than a handled case.
pub fn search(
    board: &mut Board,
    start_row: u16,
    solutions: &mut Vec<Solution>,
    stop_after_first: bool,
    observer: &mut dyn SearchObserver,
) {
    debug_assert!(board.rows() <= board.cols(), "board taller than wide");

    if stop_after_first && !solutions.is_empty() {
        return;
    }
    if start_row == board.rows() {
        let solution = board.snapshot();
        observer.solution_found(&solution, solutions.len() + 1);
        solutions.push(solution);
        return;
    }

    for col in 0..board.cols() {
        if !is_legal(board, start_row, col) {
            continue;
        }
        board.place(start_row, col);
        observer.queen_placed(board, start_row, col);
        search(board, start_row + 1, solutions, stop_after_first, observer);
        board.remove(start_row, col);
        observer.queen_removed(board, start_row, col);
    }
}
