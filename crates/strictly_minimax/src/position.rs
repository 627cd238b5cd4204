//! Board coordinates for tic-tac-toe moves.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, addressed by row and column (each 0-2).
///
/// The derived ordering compares `row` first, so sorting positions or
/// keying an ordered map by them yields row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Number of rows and columns.
    pub const SIZE: usize = 3;

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, rejecting coordinates outside the board.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= Self::SIZE || col >= Self::SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a position if the coordinates are on the board.
    pub fn checked(row: usize, col: usize) -> Option<Self> {
        Self::new(row, col).ok()
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// Converts position to row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self.row() * Self::SIZE + self.col()
    }

    /// Creates position from row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }

    /// Parses user input: a cell number `1`-`9` as shown on the rendered
    /// board, a `row,col` pair (0-based), or a label such as `center`.
    #[instrument]
    pub fn parse(s: &str) -> Option<Position> {
        let s = s.trim();

        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse::<usize>().ok()?;
            let col = col.trim().parse::<usize>().ok()?;
            return Self::checked(row, col);
        }

        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let s_lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}
