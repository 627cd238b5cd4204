//! Strictly Minimax - a tic-tac-toe opponent that never loses.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid with cell access and terminal-state checks
//! - **Game tree**: recursive nodes that own one child per legal move
//! - **Search engine**: exhaustive tree build plus alpha-beta minimax
//! - **Game**: turn-taking flow with the engine as the O player
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Player, SearchEngine, Square};
//!
//! let mut board = Board::new();
//! board.set_value(0, 0, Square::Occupied(Player::X));
//! board.set_value(0, 1, Square::Occupied(Player::X));
//!
//! let engine = SearchEngine::new();
//! let played = engine.make_move(&mut board).unwrap();
//! assert_eq!((played.row(), played.col()), (0, 2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod game;
mod position;
pub mod rules;
mod tree;
mod types;

pub use board::Board;
pub use engine::{Decision, SearchEngine, SearchStats, WIN_SCORE};
pub use error::{MoveError, ParseBoardError};
pub use game::{Game, Mode, Move};
pub use position::Position;
pub use tree::GameTreeNode;
pub use types::{Outcome, Player, Square};
