//! Minimax search with alpha-beta pruning.
//!
//! The engine always plays [`Player::O`] and treats it as the maximizing
//! side. A decision builds the complete game tree below the current board,
//! backs up scores with [`SearchEngine::minimax`], and picks the best root
//! move. Nothing survives between decisions.

use crate::board::Board;
use crate::position::Position;
use crate::tree::GameTreeNode;
use crate::types::{Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Utility of a board on which a line is complete.
pub const WIN_SCORE: i32 = 1000;

/// Counters collected while searching one decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes created below the root while building the tree.
    pub nodes_built: usize,
    /// Nodes the minimax pass scored, root included.
    pub nodes_visited: usize,
    /// Times a node stopped early because `alpha >= beta`.
    pub cutoffs: usize,
    /// Child subtrees skipped by those cutoffs.
    pub pruned_children: usize,
}

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Chosen move.
    pub position: Position,
    /// Backed-up score of the chosen move.
    pub score: i32,
    /// Score of every root move in row-major order.
    ///
    /// Moves searched after a better one may carry an upper bound rather
    /// than their exact value; the bound never exceeds the best score.
    pub move_scores: Vec<(Position, i32)>,
    /// Search counters.
    pub stats: SearchStats,
}

/// The automated opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchEngine;

impl SearchEngine {
    /// The side the engine plays and maximizes for.
    pub const SIDE: Player = Player::O;

    /// Creates a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Static utility of `board` for the engine.
    ///
    /// `+WIN_SCORE` if O holds a complete line, `-WIN_SCORE` if X does,
    /// `0` for draws and unfinished boards.
    pub fn evaluate(&self, board: &Board) -> i32 {
        match board.check_win() {
            Outcome::Won(player) if player == Self::SIDE => WIN_SCORE,
            Outcome::Won(_) => -WIN_SCORE,
            Outcome::Ongoing | Outcome::Draw => 0,
        }
    }

    /// Expands `node` exhaustively with `to_move` placing the next mark.
    ///
    /// Children are created for every empty square in row-major order and
    /// expanded in turn with the players alternating. Won and full boards
    /// are not expanded. Returns the number of nodes created.
    pub fn build_tree(&self, node: &mut GameTreeNode, to_move: Player) -> usize {
        if node.is_terminal() {
            return 0;
        }

        let moves = node.board().empty_positions();
        let mut children = Vec::with_capacity(moves.len());
        let mut built = 0;
        for pos in moves {
            let mut child = GameTreeNode::child_of(node.board(), pos, to_move);
            built += 1 + self.build_tree(&mut child, to_move.opponent());
            children.push((pos, child));
        }
        node.set_children(children);
        built
    }

    /// Backs up scores from the leaves of `node`'s subtree.
    ///
    /// Terminal nodes, unexpanded nodes and nodes reached with `depth == 0`
    /// score their board with [`SearchEngine::evaluate`], moved toward zero
    /// by one point per ply below `node`; a terminal `node` itself therefore
    /// scores exactly `evaluate`. Every scored node keeps its score.
    pub fn minimax(
        &self,
        node: &mut GameTreeNode,
        alpha: i32,
        beta: i32,
        maximizing: bool,
        depth: usize,
    ) -> i32 {
        let mut stats = SearchStats::default();
        self.search(node, alpha, beta, maximizing, depth, 0, &mut stats)
    }

    #[allow(clippy::too_many_arguments)]
    fn search(
        &self,
        node: &mut GameTreeNode,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        depth: usize,
        ply: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes_visited += 1;

        if node.is_terminal() || depth == 0 || node.is_leaf() {
            let score = self.leaf_score(node.board(), ply);
            node.set_score(score);
            return score;
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let child_count = node.children().len();
        for (searched, child) in node.children_mut().enumerate() {
            let score = self.search(child, alpha, beta, !maximizing, depth - 1, ply + 1, stats);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta {
                stats.cutoffs += 1;
                stats.pruned_children += child_count - searched - 1;
                break;
            }
        }

        node.set_score(best);
        best
    }

    fn leaf_score(&self, board: &Board, ply: i32) -> i32 {
        let score = self.evaluate(board);
        score - score.signum() * ply
    }

    /// Searches `board` with O to move and reports the best move.
    ///
    /// Ties between equally scored moves go to the first in row-major
    /// order. Returns `None` if the board is already won or full.
    #[instrument(skip(self, board), fields(empty = board.empty_count()))]
    pub fn decide(&self, board: &Board) -> Option<Decision> {
        if board.check_win().is_terminal() {
            debug!("Board is terminal, no move to make");
            return None;
        }

        let mut root = GameTreeNode::new(board.clone());
        let nodes_built = self.build_tree(&mut root, Self::SIDE);
        let mut stats = SearchStats {
            nodes_built,
            ..SearchStats::default()
        };
        let depth = board.empty_count();
        let score = self.search(&mut root, i32::MIN, i32::MAX, true, depth, 0, &mut stats);

        let move_scores: Vec<(Position, i32)> = root
            .children()
            .iter()
            .filter_map(|(pos, child)| child.score().map(|s| (*pos, s)))
            .collect();

        let (position, best) = move_scores.iter().copied().fold(
            None,
            |best: Option<(Position, i32)>, (pos, s)| match best {
                Some((_, best_score)) if best_score >= s => best,
                _ => Some((pos, s)),
            },
        )?;
        debug_assert_eq!(best, score);

        debug!(
            position = %position,
            score = best,
            nodes_built = stats.nodes_built,
            nodes_visited = stats.nodes_visited,
            cutoffs = stats.cutoffs,
            "Search complete"
        );

        Some(Decision {
            position,
            score: best,
            move_scores,
            stats,
        })
    }

    /// Plays the engine's best move on `board` in place.
    ///
    /// Exactly one empty square receives an O. Returns the square played,
    /// or `None` (leaving the board untouched) if the game is already over.
    #[instrument(skip(self, board))]
    pub fn make_move(&self, board: &mut Board) -> Option<Position> {
        let decision = self.decide(board)?;
        let pos = decision.position;
        board.set_value(pos.row(), pos.col(), Square::Occupied(Self::SIDE));
        debug!(position = %pos, "Engine moved");
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [[i8; 3]; 3]) -> Board {
        Board::from_values(rows).unwrap()
    }

    #[test]
    fn test_leaf_score_moves_toward_zero() {
        let engine = SearchEngine::new();
        let won = board([[-1, -1, -1], [1, 1, 0], [0, 0, 0]]);
        let lost = board([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]);
        assert_eq!(engine.leaf_score(&won, 0), WIN_SCORE);
        assert_eq!(engine.leaf_score(&won, 3), WIN_SCORE - 3);
        assert_eq!(engine.leaf_score(&lost, 2), -WIN_SCORE + 2);
        assert_eq!(engine.leaf_score(&Board::new(), 5), 0);
    }

    #[test]
    fn test_build_tree_counts_match_size() {
        let engine = SearchEngine::new();
        let mut root = GameTreeNode::new(board([[1, -1, 1], [0, -1, 0], [0, 1, 0]]));
        let built = engine.build_tree(&mut root, Player::X);
        assert_eq!(built + 1, root.size());
    }

    #[test]
    fn test_cutoffs_recorded() {
        let engine = SearchEngine::new();
        let decision = engine.decide(&board([[1, 0, 0], [0, 0, 0], [0, 0, 0]])).unwrap();
        assert!(decision.stats.cutoffs > 0);
        assert!(decision.stats.pruned_children > 0);
        assert!(decision.stats.nodes_visited <= decision.stats.nodes_built + 1);
    }
}
