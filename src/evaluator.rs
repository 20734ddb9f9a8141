//! Static evaluation of live positions for the depth horizon of the search.
//!
//! The weights are a tuned heuristic, not derived values: the block
//! penalty outweighs the symmetric offensive threat on purpose, biasing
//! the engine toward defense. Changing any constant changes playing
//! strength.

use crate::board::{Board, Cell, Side};
use crate::{COLS, ROWS};

/// Bonus per maximizing-side piece in the center column.
const CENTER_BONUS: i32 = 3;

// per-window contributions, keyed by piece counts
const WINDOW_FOUR: i32 = 100;
const WINDOW_THREE: i32 = 5;
const WINDOW_TWO: i32 = 2;
const WINDOW_BLOCK: i32 = -10;

/// Scores a 4-cell window by its piece counts.
///
/// A window holding pieces of both sides can no longer be completed by
/// either and contributes nothing.
pub(crate) fn score_window(own: u32, opponent: u32, empty: u32) -> i32 {
    if own > 0 && opponent > 0 {
        return 0;
    }
    if own == 4 {
        WINDOW_FOUR
    } else if own == 3 && empty == 1 {
        WINDOW_THREE
    } else if own == 2 && empty == 2 {
        WINDOW_TWO
    } else if opponent == 3 && empty == 1 {
        WINDOW_BLOCK
    } else {
        0
    }
}

fn window_counts(
    board: &Board,
    own: Cell,
    row: usize,
    column: usize,
    row_step: isize,
    column_step: isize,
) -> (u32, u32, u32) {
    let mut own_count = 0;
    let mut opponent_count = 0;
    let mut empty_count = 0;
    for i in 0..4 {
        let r = (row as isize + i * row_step) as usize;
        let c = (column as isize + i * column_step) as usize;
        match board.get(r, c) {
            Cell::Empty => empty_count += 1,
            cell if cell == own => own_count += 1,
            _ => opponent_count += 1,
        }
    }
    (own_count, opponent_count, empty_count)
}

/// Heuristic score of a live position from `side`'s point of view.
///
/// Sums the contributions of every 4-cell window in all four
/// orientations plus the center-column bonus. Only meaningful for
/// non-terminal positions; the search consults
/// [`terminal_score`](crate::referee::terminal_score) first.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let own = side.cell();
    let mut score = 0;

    // center-column control
    let center = COLS / 2;
    for row in 0..ROWS {
        if board.get(row, center) == own {
            score += CENTER_BONUS;
        }
    }

    // horizontal windows
    for row in 0..ROWS {
        for column in 0..=COLS - 4 {
            let (own_count, opponent_count, empty_count) =
                window_counts(board, own, row, column, 0, 1);
            score += score_window(own_count, opponent_count, empty_count);
        }
    }

    // vertical windows
    for column in 0..COLS {
        for row in 0..=ROWS - 4 {
            let (own_count, opponent_count, empty_count) =
                window_counts(board, own, row, column, 1, 0);
            score += score_window(own_count, opponent_count, empty_count);
        }
    }

    // rising diagonal windows
    for row in 0..=ROWS - 4 {
        for column in 0..=COLS - 4 {
            let (own_count, opponent_count, empty_count) =
                window_counts(board, own, row, column, 1, 1);
            score += score_window(own_count, opponent_count, empty_count);
        }
    }

    // falling diagonal windows
    for row in 0..=ROWS - 4 {
        for column in 3..COLS {
            let (own_count, opponent_count, empty_count) =
                window_counts(board, own, row, column, 1, -1);
            score += score_window(own_count, opponent_count, empty_count);
        }
    }

    score
}
