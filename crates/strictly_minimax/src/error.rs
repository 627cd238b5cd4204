//! Error types for checked board operations.

use crate::position::Position;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates are outside the 3x3 board.
    #[display("Position ({}, {}) is outside the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The engine was asked to move on a board with no empty square.
    #[display("No moves available")]
    NoMovesAvailable,
}

impl std::error::Error for MoveError {}

/// Error returned when a board cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongSquareCount(usize),
}

impl std::error::Error for ParseBoardError {}
