use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use fourline_ai::{referee, Board, Cell, Side, COLS, ROWS};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Playing,
    HumanWin,
    EngineWin,
    Draw,
}

struct Move {
    row: usize,
    column: usize,
}

/// The authoritative table state: board, turn order, move history and
/// session scores. The engine only ever borrows the board.
pub struct Game {
    board: Board,
    current: Side,
    history: Vec<Move>,
    outcome: Outcome,
    pub human_score: u32,
    pub engine_score: u32,
}

impl Game {
    pub const HUMAN: Side = Side::PlayerOne;
    pub const ENGINE: Side = Side::PlayerTwo;

    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Self::HUMAN,
            history: Vec::new(),
            outcome: Outcome::Playing,
            human_score: 0,
            engine_score: 0,
        }
    }

    /// Starts a fresh game; the session scores carry over.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = Self::HUMAN;
        self.history.clear();
        self.outcome = Outcome::Playing;
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Side {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Drops a piece for the side to move. Returns false when the column
    /// is full and the move must be re-entered.
    pub fn play(&mut self, column: usize) -> Result<bool> {
        let row = match self.board.lowest_empty_row(column)? {
            Some(row) => row,
            None => return Ok(false),
        };
        let side = self.current;
        self.board.place(row, column, side);
        self.history.push(Move { row, column });

        if referee::has_four_in_row(&self.board, side) {
            if side == Self::HUMAN {
                self.outcome = Outcome::HumanWin;
                self.human_score += 1;
            } else {
                self.outcome = Outcome::EngineWin;
                self.engine_score += 1;
            }
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
        } else {
            self.current = side.opponent();
        }
        Ok(true)
    }

    /// Takes back the last moves: the engine reply and the human move
    /// together when the human is to move, the lone human move otherwise.
    pub fn undo(&mut self) {
        if self.outcome != Outcome::Playing || self.history.is_empty() {
            return;
        }
        if self.current == Self::HUMAN {
            for _ in 0..2 {
                if let Some(last) = self.history.pop() {
                    self.board.remove(last.row, last.column);
                }
            }
        } else {
            if let Some(last) = self.history.pop() {
                self.board.remove(last.row, last.column);
            }
            self.current = Self::HUMAN;
        }
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let header: String = (1..=COLS).map(|column| column.to_string()).collect();
        stdout.queue(PrintStyledContent(style(header + "\n")))?;

        for row in (0..ROWS).rev() {
            for column in 0..COLS {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match self.board.get(row, column) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
