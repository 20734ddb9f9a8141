//! The move-selection engine: depth-limited minimax with alpha-beta pruning.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::board::{Board, Side};
use crate::difficulty::Difficulty;
use crate::error::EngineError;
use crate::{evaluator, referee, COLS};

// column/row pairs for every non-saturated column, left to right
fn legal_moves(board: &Board) -> Vec<(usize, usize)> {
    (0..COLS)
        .filter_map(|column| {
            board
                .lowest_empty_row(column)
                .ok()
                .flatten()
                .map(|row| (column, row))
        })
        .collect()
}

/// An agent that picks columns for one side of a Connect 4 game
///
/// # Notes
/// The agent explores the game tree to a fixed depth, scoring the
/// horizon with a hand-tuned positional heuristic, and may substitute a
/// uniformly random legal move with the probability its difficulty
/// prescribes. It borrows the caller's board for the duration of one
/// call, plays hypothetical moves in place and reverts every one of
/// them, so the board is returned bit-for-bit unchanged.
///
/// # Scoring
/// Decided positions score +1000 (win for the engine's side), -1000
/// (loss) or 0 (draw); live positions at the depth horizon take the
/// static evaluation. A forced result found above the horizon
/// short-circuits deeper search at that node.
#[derive(Clone)]
pub struct Engine {
    side: Side,
    difficulty: Difficulty,
    rng: SmallRng,

    /// The number of nodes searched by the last top-level call (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    /// Creates an engine playing `side`, with an entropy-seeded random source.
    pub fn new(side: Side, difficulty: Difficulty) -> Self {
        Self {
            side,
            difficulty,
            rng: SmallRng::from_entropy(),
            node_count: 0,
        }
    }

    /// Creates an engine with a fixed random seed, so the random-move
    /// branch becomes reproducible.
    pub fn with_seed(side: Side, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            side,
            difficulty,
            rng: SmallRng::seed_from_u64(seed),
            node_count: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Picks a column for the engine's side on the given board.
    ///
    /// The board is mutated during the search and restored before the
    /// call returns. Fails with [`EngineError::NoLegalMove`] when every
    /// column is saturated; the caller must guarantee at least one legal
    /// column exists.
    pub fn choose_move(&mut self, board: &mut Board) -> Result<usize, EngineError> {
        self.node_count = 0;

        let legal = legal_moves(board);
        if legal.is_empty() {
            return Err(EngineError::NoLegalMove);
        }

        // difficulty may trade the searched move for a random one
        if self.rng.gen::<f64>() < self.difficulty.random_factor {
            let (column, _) = legal[self.rng.gen_range(0..legal.len())];
            return Ok(column);
        }

        let depth = self.difficulty.depth.saturating_sub(1);
        let mut best_score = i32::MIN;
        let mut best_column = COLS / 2;

        for &(column, row) in &legal {
            board.place(row, column, self.side);
            // each root move gets a full window, the opponent replies next
            let score = self.search(board, depth, i32::MIN, i32::MAX, false);
            board.remove(row, column);

            // strict comparison, so the leftmost best column wins ties
            if score > best_score {
                best_score = score;
                best_column = column;
            }
        }

        Ok(best_column)
    }

    /// [`choose_move`] with the root columns scored in parallel.
    ///
    /// Every branch searches an independent copy of the position, never
    /// the caller's buffer, and the results are combined in column order
    /// afterwards; the selected column is identical to the sequential
    /// driver's.
    ///
    /// [`choose_move`]: #method.choose_move
    pub fn choose_move_parallel(&mut self, board: &Board) -> Result<usize, EngineError> {
        self.node_count = 0;

        let legal = legal_moves(board);
        if legal.is_empty() {
            return Err(EngineError::NoLegalMove);
        }

        if self.rng.gen::<f64>() < self.difficulty.random_factor {
            let (column, _) = legal[self.rng.gen_range(0..legal.len())];
            return Ok(column);
        }

        let depth = self.difficulty.depth.saturating_sub(1);
        let worker = self.clone();

        let scored: Vec<(usize, i32, usize)> = legal
            .par_iter()
            .map(|&(column, row)| {
                let mut branch = worker.clone();
                branch.node_count = 0;
                let mut scratch = *board;
                scratch.place(row, column, branch.side);
                let score = branch.search(&mut scratch, depth, i32::MIN, i32::MAX, false);
                (column, score, branch.node_count)
            })
            .collect();

        self.node_count = scored.iter().map(|&(_, _, nodes)| nodes).sum();

        let mut best_score = i32::MIN;
        let mut best_column = COLS / 2;
        for &(column, score, _) in &scored {
            if score > best_score {
                best_score = score;
                best_column = column;
            }
        }

        Ok(best_column)
    }

    /// Performs game tree search below one hypothetical move
    ///
    /// Returns the minimax score of the position with alpha-beta
    /// pruning; pruning narrows the columns visited but never the score
    /// of the node.
    pub(crate) fn search(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.node_count += 1;

        // a decided position outranks the depth cutoff
        if let Some(score) = referee::terminal_score(board, self.side) {
            return score;
        }
        if depth == 0 {
            return evaluator::evaluate(board, self.side);
        }

        if maximizing {
            let mut max_score = i32::MIN;
            for column in 0..COLS {
                // saturated columns contribute no branch
                let row = match board.lowest_empty_row(column) {
                    Ok(Some(row)) => row,
                    _ => continue,
                };
                board.place(row, column, self.side);
                let score = self.search(board, depth - 1, alpha, beta, false);
                board.remove(row, column);

                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = i32::MAX;
            for column in 0..COLS {
                let row = match board.lowest_empty_row(column) {
                    Ok(Some(row)) => row,
                    _ => continue,
                };
                board.place(row, column, self.side.opponent());
                let score = self.search(board, depth - 1, alpha, beta, true);
                board.remove(row, column);

                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }
}
