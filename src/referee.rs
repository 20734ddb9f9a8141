//! Detection of finished positions: four-in-a-row and full-board draws.

use crate::board::{Board, Cell, Side};
use crate::{COLS, ROWS};

/// Score of a position the maximizing side has won.
pub const WIN_SCORE: i32 = 1000;
/// Score of a position the minimizing side has won.
pub const LOSS_SCORE: i32 = -1000;
/// Score of a drawn (full, no winner) position.
pub const DRAW_SCORE: i32 = 0;

// walk four cells from (row, column) along (row_step, column_step);
// the caller picks origins so every index stays on the board
fn four_in_line(
    board: &Board,
    target: Cell,
    row: usize,
    column: usize,
    row_step: isize,
    column_step: isize,
) -> bool {
    (0..4).all(|i| {
        let r = (row as isize + i * row_step) as usize;
        let c = (column as isize + i * column_step) as usize;
        board.get(r, c) == target
    })
}

/// True when `side` owns four consecutive cells in any orientation.
///
/// Every 4-cell window on the board is considered, not just those
/// around a known last move, so the check is valid for arbitrary
/// hypothetical positions reached during search.
pub fn has_four_in_row(board: &Board, side: Side) -> bool {
    let target = side.cell();

    // horizontal
    for row in 0..ROWS {
        for column in 0..=COLS - 4 {
            if four_in_line(board, target, row, column, 0, 1) {
                return true;
            }
        }
    }

    // vertical
    for column in 0..COLS {
        for row in 0..=ROWS - 4 {
            if four_in_line(board, target, row, column, 1, 0) {
                return true;
            }
        }
    }

    // diagonal, rising left to right
    for row in 0..=ROWS - 4 {
        for column in 0..=COLS - 4 {
            if four_in_line(board, target, row, column, 1, 1) {
                return true;
            }
        }
    }

    // diagonal, falling left to right
    for row in 0..=ROWS - 4 {
        for column in 3..COLS {
            if four_in_line(board, target, row, column, 1, -1) {
                return true;
            }
        }
    }

    false
}

/// The exact score of a finished position, or `None` while play continues.
///
/// Consulted at every search node: a forced win or loss found above the
/// depth horizon must cut the search there instead of falling through to
/// the heuristic.
pub fn terminal_score(board: &Board, engine_side: Side) -> Option<i32> {
    if has_four_in_row(board, engine_side) {
        return Some(WIN_SCORE);
    }
    if has_four_in_row(board, engine_side.opponent()) {
        return Some(LOSS_SCORE);
    }
    if board.is_full() {
        return Some(DRAW_SCORE);
    }
    None
}
