//! Nodes of the exhaustive search tree

use bumpalo::{collections::Vec, Bump};

use crate::core::{Board, Loc, Side};
use crate::heuristics::Heuristic;

pub struct SearchNode<'a> {
    pub board: Board,
    /// Move that produced this node from its parent
    pub last_move: Option<Loc>,
    /// Side due to move by alternation
    pub side_to_move: Side,
    /// Side that actually moves here after a forced pass; `None` at a leaf
    pub mover: Option<Side>,
    /// Plies below the root
    pub depth: usize,
    /// Heuristic score of `board` alone
    pub local: f64,
    /// Backed-up value
    pub value: f64,
    pub children: Vec<'a, SearchNode<'a>>,
}

impl<'a> SearchNode<'a> {
    pub fn new(
        board: Board,
        side_to_move: Side,
        depth: usize,
        last_move: Option<Loc>,
        arena: &'a Bump,
    ) -> Self {
        Self {
            board,
            last_move,
            side_to_move,
            mover: None,
            depth,
            local: 0.0,
            value: 0.0,
            children: Vec::new_in(arena),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Side that moves from this board: the side to move, or its opponent
    /// when the side to move is forced to pass. A pass does not cost a ply.
    fn resolve_mover(&self) -> Option<Side> {
        [self.side_to_move, !self.side_to_move]
            .into_iter()
            .find(|&side| self.board.has_move(side))
    }

    /// Grow the full subtree down to `level` plies below the root.
    /// Returns the number of nodes created beneath this one.
    pub fn expand(&mut self, arena: &'a Bump, level: usize) -> u64 {
        if self.depth >= level {
            return 0;
        }

        let Some(mover) = self.resolve_mover() else {
            return 0;
        };
        self.mover = Some(mover);

        let mut created = 0;
        for loc in self.board.legal_moves(mover) {
            let board = self.board.apply_move(loc, mover);
            let mut child = SearchNode::new(board, !mover, self.depth + 1, Some(loc), arena);

            created += 1 + child.expand(arena, level);
            self.children.push(child);
        }

        created
    }

    /// Score the subtree and return this node's value.
    ///
    /// A leaf is worth its own score. Above that the score of the node is
    /// added to the best child value for the side that moves here: the
    /// maximum for the machine, the minimum for the human.
    pub fn back_up<H: Heuristic>(&mut self, heuristic: &mut H) -> f64 {
        self.local = heuristic.score(&self.board);

        self.value = if self.is_leaf() {
            self.local
        } else {
            let child_values = self.children
                .iter_mut()
                .map(|child| child.back_up(heuristic));

            let extremum = match self.mover {
                Some(Side::Machine) => child_values.fold(f64::NEG_INFINITY, f64::max),
                Some(Side::Human) => child_values.fold(f64::INFINITY, f64::min),
                None => unreachable!("node with children has a mover"),
            };

            self.local + extremum
        };

        self.value
    }
}
