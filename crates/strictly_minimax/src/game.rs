//! Turn-taking game flow around the board and the engine.
//!
//! A [`Game`] validates every move before applying it, re-checks the board
//! after each mark, and in [`Mode::PlayerVsEngine`] lets the engine answer
//! as soon as the human has moved. Front ends only submit positions and
//! react to the returned [`Outcome`].

use crate::board::Board;
use crate::engine::SearchEngine;
use crate::error::MoveError;
use crate::position::Position;
use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who sits on the O side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// A human plays X, the engine answers as O.
    #[default]
    PlayerVsEngine,
    /// Two humans alternate, X first.
    PlayerVsPlayer,
}

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Tic-tac-toe game with an optional engine opponent.
#[derive(Debug, Clone)]
pub struct Game {
    mode: Mode,
    board: Board,
    to_move: Player,
    status: Outcome,
    history: Vec<Move>,
    engine: SearchEngine,
}

impl Game {
    /// Creates a new game; X moves first.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            board: Board::new(),
            to_move: Player::X,
            status: Outcome::Ongoing,
            history: Vec::new(),
            engine: SearchEngine::new(),
        }
    }

    /// Clears the board for another round in the same mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current status.
    pub fn status(&self) -> Outcome {
        self.status
    }

    /// Moves applied so far, engine replies included.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Plays `pos` for the player to move.
    ///
    /// In [`Mode::PlayerVsEngine`] the engine replies immediately unless
    /// the human's move ended the game. Returns the status after all
    /// resulting moves.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended and
    /// [`MoveError::SquareOccupied`] if `pos` is taken. The board is left
    /// unchanged in both cases.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        self.apply(pos)?;

        if self.mode == Mode::PlayerVsEngine && !self.is_over() {
            self.engine_reply()?;
        }

        Ok(self.status)
    }

    fn engine_reply(&mut self) -> Result<(), MoveError> {
        let pos = self
            .engine
            .decide(&self.board)
            .map(|decision| decision.position)
            .ok_or(MoveError::NoMovesAvailable)?;
        debug!(position = %pos, "Engine replies");
        self.apply(pos)
    }

    fn apply(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        self.board.place(pos, player)?;
        self.history.push(Move::new(player, pos));
        self.status = self.board.check_win();
        self.to_move = player.opponent();

        if self.is_over() {
            info!(status = %self.status, moves = self.history.len(), "Game over");
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
