//! The 3x3 board.

use crate::error::{MoveError, ParseBoardError};
use crate::position::Position;
use crate::rules;
use crate::types::{Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// The board holds no history and no turn information; whoever owns the
/// turn mutates it in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from integer-encoded rows (`0`, `1`, `-1`).
    ///
    /// Returns `None` if any cell holds another value.
    pub fn from_values(rows: [[i8; 3]; 3]) -> Option<Self> {
        let mut board = Self::new();
        for (pos, value) in Position::ALL.into_iter().zip(rows.into_iter().flatten()) {
            board.set(pos, Square::from_value(value)?);
        }
        Some(board)
    }

    /// Integer-encoded rows of the board.
    pub fn to_values(&self) -> [[i8; 3]; 3] {
        let mut rows = [[0; 3]; 3];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = self.get(pos).value();
        }
        rows
    }

    /// Returns the square at `(row, col)`.
    ///
    /// Coordinates outside the board read as [`Square::Empty`].
    pub fn get_value(&self, row: usize, col: usize) -> Square {
        Position::checked(row, col)
            .map(|pos| self.get(pos))
            .unwrap_or(Square::Empty)
    }

    /// Writes `square` at `(row, col)`.
    ///
    /// Coordinates outside the board are ignored. Occupied squares are
    /// overwritten; use [`Board::place`] for a checked write.
    pub fn set_value(&mut self, row: usize, col: usize, square: Square) {
        if let Some(pos) = Position::checked(row, col) {
            self.set(pos, square);
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places `player`'s mark, refusing to overwrite an occupied square.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(player));
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_empty()).count()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.len() - self.empty_count()
    }

    /// Classifies the board: a completed line, a full board, or neither.
    ///
    /// Lines are scanned rows first, then columns, then the two diagonals;
    /// the first complete line decides.
    pub fn check_win(&self) -> Outcome {
        if let Some(winner) = rules::check_winner(self) {
            Outcome::Won(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }
}

/// Renders empty squares as their cell number (1-9) and separates rows
/// with `-+-+-`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Position::SIZE {
            for col in 0..Position::SIZE {
                let index = row * Position::SIZE + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine squares in row-major order.
///
/// `X`/`O` (either case) are marks; `.`, `_` and digits are empty squares;
/// `|`, `-`, `+`, `/` and whitespace are separators. The [`Display`]
/// output of a board parses back to the same board.
///
/// [`Display`]: std::fmt::Display
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' => Square::Empty,
                c if c.is_ascii_digit() => Square::Empty,
                '|' | '-' | '+' | '/' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::UnexpectedChar(c)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|rest: Vec<Square>| ParseBoardError::WrongSquareCount(rest.len()))?;
        Ok(Self { squares })
    }
}
