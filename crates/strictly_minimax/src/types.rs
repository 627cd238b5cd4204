//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// `X` is the side the human plays (encoded `+1`), `O` is the automated
/// side (encoded `-1`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (the engine's side).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Integer encoding of this player's mark.
    pub fn value(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Integer encoding: `0` empty, `+1` for X, `-1` for O.
    pub fn value(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.value(),
        }
    }

    /// Decodes the integer encoding. Returns `None` for anything but `-1`, `0`, `1`.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            0 => Some(Square::Empty),
            1 => Some(Square::Occupied(Player::X)),
            -1 => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        Square::Occupied(player)
    }
}

/// Terminal status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No complete line and at least one empty square.
    Ongoing,
    /// A player completed a line.
    Won(Player),
    /// Board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Integer encoding: `+1` X wins, `-1` O wins, `2` draw, `0` ongoing.
    pub fn code(self) -> i8 {
        match self {
            Outcome::Ongoing => 0,
            Outcome::Won(player) => player.value(),
            Outcome::Draw => 2,
        }
    }

    /// Checks if the game has ended.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_square_encoding() {
        for square in [
            Square::Empty,
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
        ] {
            assert_eq!(Square::from_value(square.value()), Some(square));
        }
        assert_eq!(Square::from_value(2), None);
        assert_eq!(Square::from_value(-2), None);
    }

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::Ongoing.code(), 0);
        assert_eq!(Outcome::Won(Player::X).code(), 1);
        assert_eq!(Outcome::Won(Player::O).code(), -1);
        assert_eq!(Outcome::Draw.code(), 2);
    }
}
