use mn_queens::board::Board;

/// Independent validity re-check: no two queens share a row, column, or
/// diagonal. Deliberately not implemented in terms of the crate's own
/// attack predicate.
pub fn assert_non_attacking(board: &Board) {
    let queens = board.queens();
    for (i, &(r1, c1)) in queens.iter().enumerate() {
        for &(r2, c2) in &queens[i + 1..] {
            assert_ne!(r1, r2, "queens share row {r1}");
            assert_ne!(c1, c2, "queens share column {c1}");
            let dr = (i32::from(r1) - i32::from(r2)).abs();
            let dc = (i32::from(c1) - i32::from(c2)).abs();
            assert_ne!(
                dr, dc,
                "queens at ({r1},{c1}) and ({r2},{c2}) share a diagonal"
            );
        }
    }
}

/// The column of each row's queen, top to bottom. Asserts that every row
/// holds exactly one queen.
pub fn solution_cols(board: &Board) -> Vec<u16> {
    let mut cols = Vec::with_capacity(board.rows() as usize);
    for r in 0..board.rows() {
        let in_row: Vec<u16> = (0..board.cols()).filter(|&c| board.get(r, c)).collect();
        assert_eq!(in_row.len(), 1, "row {r} should hold exactly one queen");
        cols.push(in_row[0]);
    }
    cols
}
