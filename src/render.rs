//! Text rendering of boards.
//!
//! Pure string producers; nothing here writes to stdout, so the search core
//! and its observers stay testable headlessly.

use crate::board::Board;

/// Widest board that still gets a file-letter footer.
const MAX_LETTERED_COLS: u16 = 26;

/// One horizontal line of the board frame: `n + 1` border characters joined
/// by three spacers.
///
/// `grid_line(3, ' ', '|')` is `"|   |   |   |"` and
/// `grid_line(3, '-', '+')` is `"+---+---+---+"`.
fn grid_line(n: u16, spacer: char, border: char) -> String {
    let mut line = String::with_capacity(4 * n as usize + 1);
    line.push(border);
    for _ in 0..n {
        for _ in 0..3 {
            line.push(spacer);
        }
        line.push(border);
    }
    line
}

/// Overwrite the cell at `col` in an empty rank line with a queen.
fn put_queen(line: &mut String, col: u16) {
    let at = 4 * col as usize + 2;
    line.replace_range(at..at + 1, "Q");
}

/// Render a board as a bordered grid with chess-style rank numbers counting
/// down to 1 at the bottom and, for boards up to 26 columns wide, file
/// letters underneath.
pub fn render(board: &Board) -> String {
    let (m, n) = (board.rows(), board.cols());
    let rule = format!("     {}", grid_line(n, '-', '+'));

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for r in 0..m {
        let mut line = grid_line(n, ' ', '|');
        for c in 0..n {
            if board.get(r, c) {
                put_queen(&mut line, c);
            }
        }
        out.push_str(&format!(" {:>3} {line}\n", m - r));
        out.push_str(&rule);
        out.push('\n');
    }
    if n <= MAX_LETTERED_COLS {
        let files: Vec<String> = (0..n)
            .map(|c| char::from(b'a' + c as u8).to_string())
            .collect();
        out.push_str(&format!("       {}\n", files.join("   ")));
    }
    out
}
