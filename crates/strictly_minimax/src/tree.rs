//! Game tree nodes for the minimax search.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Player, Square};

/// One reachable board configuration in the search tree.
///
/// A node exclusively owns its children, each paired with the move that
/// leads to it. Children stay in the order moves were enumerated
/// (row-major) and no move appears twice. The tree has no parent links and
/// is dropped as a whole once a move has been chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTreeNode {
    board: Board,
    mover: Option<Player>,
    children: Vec<(Position, GameTreeNode)>,
    score: Option<i32>,
}

impl GameTreeNode {
    /// Creates a root node for `board`.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            mover: None,
            children: Vec::new(),
            score: None,
        }
    }

    /// Creates the node reached by `player` marking `pos` on this node's board.
    pub(crate) fn child_of(parent: &Board, pos: Position, player: Player) -> Self {
        let mut board = parent.clone();
        board.set(pos, Square::Occupied(player));
        Self {
            board,
            mover: Some(player),
            children: Vec::new(),
            score: None,
        }
    }

    /// Board configuration this node represents.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark produced this node; `None` for a root.
    pub fn mover(&self) -> Option<Player> {
        self.mover
    }

    /// Child nodes paired with their moves, in row-major order.
    pub fn children(&self) -> &[(Position, GameTreeNode)] {
        &self.children
    }

    /// Moves leading to the expanded children, in row-major order.
    pub fn moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.children.iter().map(|(pos, _)| *pos)
    }

    /// Child reached by playing `pos`, if expanded.
    pub fn child(&self, pos: Position) -> Option<&GameTreeNode> {
        self.children
            .iter()
            .find(|(candidate, _)| *candidate == pos)
            .map(|(_, child)| child)
    }

    pub(crate) fn set_children(&mut self, children: Vec<(Position, GameTreeNode)>) {
        self.children = children;
    }

    pub(crate) fn children_mut(&mut self) -> impl Iterator<Item = &mut GameTreeNode> + '_ {
        self.children.iter_mut().map(|(_, child)| child)
    }

    /// Backed-up score, or `None` if the search never reached this node.
    pub fn score(&self) -> Option<i32> {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: i32) {
        self.score = Some(score);
    }

    /// Checks if the board is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.board.check_win().is_terminal()
    }

    /// Checks if the node has no expanded children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.size())
            .sum::<usize>()
    }

    /// Length of the longest path from this node to a leaf, in plies.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|(_, child)| 1 + child.height())
            .max()
            .unwrap_or(0)
    }
}
