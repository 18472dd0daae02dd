//! Puzzle configuration and the solving entry point.

use log::debug;
use thiserror::Error;

use crate::board::{Board, Solution};
use crate::solve::{search, SearchObserver};

/// Rejected board dimensions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DimensionError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    Zero { rows: u16, cols: u16 },
}

/// Validated board dimensions: both axes positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    rows: u16,
    cols: u16,
}

impl Dimensions {
    pub fn new(rows: u16, cols: u16) -> Result<Self, DimensionError> {
        if rows == 0 || cols == 0 {
            return Err(DimensionError::Zero { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u16 {
        self.cols
    }
}

/// One puzzle-solving run over a rectangular board.
///
/// The search core only handles boards no taller than they are wide. A
/// taller board is solved in the swapped orientation and every solution is
/// transposed back before it is handed out, so callers always receive
/// boards in the orientation they asked for. Note that a per-step observer
/// sees the board in its search orientation.
#[derive(Clone, Debug)]
pub struct Puzzle {
    dims: Dimensions,
    first_only: bool,
}

impl Puzzle {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            first_only: false,
        }
    }

    /// Stop after the first solution instead of enumerating all of them.
    pub fn with_first_only(mut self, first_only: bool) -> Self {
        self.first_only = first_only;
        self
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Enumerate solutions in discovery order.
    ///
    /// An empty vector means the board has no solution. Each call builds a
    /// fresh board and solution set, so repeated calls are independent of
    /// each other and of call order.
    pub fn solve(&self, observer: &mut dyn SearchObserver) -> Vec<Solution> {
        let (rows, cols) = (self.dims.rows, self.dims.cols);
        let swapped = rows > cols;
        let (m, n) = if swapped { (cols, rows) } else { (rows, cols) };

        let mut board = Board::new(m, n);
        let mut solutions = Vec::new();
        search(&mut board, 0, &mut solutions, self.first_only, observer);
        debug_assert!(board.is_empty(), "search must restore the board");

        if swapped {
            solutions = solutions.iter().map(Board::transposed).collect();
        }
        debug!(
            "{rows}x{cols} board: {} solution(s){}",
            solutions.len(),
            if self.first_only {
                " (stopped after first)"
            } else {
                ""
            }
        );
        solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::NoObserver;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Dimensions::new(0, 5),
            Err(DimensionError::Zero { rows: 0, cols: 5 })
        );
        assert_eq!(
            Dimensions::new(3, 0),
            Err(DimensionError::Zero { rows: 3, cols: 0 })
        );
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn single_cell_board_has_the_trivial_solution() {
        let puzzle = Puzzle::new(Dimensions::new(1, 1).unwrap());
        let solutions = puzzle.solve(&mut NoObserver);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].queens(), vec![(0, 0)]);
    }

    #[test]
    fn tall_one_column_board_solves_in_transposed_orientation() {
        // 3x1 swaps to a 1x3 search: one queen, three placements, handed
        // back as 3x1 boards.
        let puzzle = Puzzle::new(Dimensions::new(3, 1).unwrap());
        let solutions = puzzle.solve(&mut NoObserver);
        assert_eq!(solutions.len(), 3);
        for (i, s) in solutions.iter().enumerate() {
            assert_eq!(s.rows(), 3);
            assert_eq!(s.cols(), 1);
            assert_eq!(s.queens(), vec![(i as u16, 0)]);
        }
    }

    #[test]
    fn first_only_limits_the_solution_set() {
        let puzzle = Puzzle::new(Dimensions::new(4, 4).unwrap()).with_first_only(true);
        assert_eq!(puzzle.solve(&mut NoObserver).len(), 1);
    }
}
