//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};

/// The 8 winning lines as row-major indices, in scan order:
/// rows top to bottom, columns left to right, main diagonal, anti-diagonal.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order, or
/// `None` if no line is complete. On boards that could not arise in play
/// (both players holding a line) the scan order decides.
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(player)
        }
        _ => None,
    })
}
