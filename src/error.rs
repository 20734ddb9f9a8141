use thiserror::Error;

use crate::COLS;

/// Errors reported across the engine's caller contract.
///
/// Both variants indicate a caller bug rather than a recoverable
/// condition: the engine never retries and never substitutes a
/// different column.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum EngineError {
    /// A column outside `0..COLS` was passed to a board query.
    #[error("column {0} is out of range, columns must be below {cols}", cols = COLS)]
    InvalidColumn(usize),

    /// A move was requested on a board with every column saturated.
    #[error("no legal move, every column is full")]
    NoLegalMove,
}
