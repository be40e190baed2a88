//! Search for the best machine move

use crate::core::{Board, GameConfig, GameState, Loc, MoveFault, Side};
use crate::heuristics::Heuristic;

use super::node::SearchNode;

use bumpalo::Bump;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Chosen placement, `None` when the machine must pass
    pub best_move: Option<Loc>,
    /// Board after the chosen placement
    pub board: Option<Board>,
    /// Backed-up value of the chosen placement
    pub eval: Option<f64>,
    /// Every candidate with its backed-up value, in row-major order
    pub candidates: Vec<(Loc, f64)>,
    pub nodes_explored: u64,
}

/// Exhaustive minimax tree over machine replies.
///
/// All nodes live in `arena` and are freed together with it.
pub struct SearchTree<'a> {
    pub arena: &'a Bump,
    pub root: &'a mut SearchNode<'a>,
    pub level: usize,
    pub nodes_explored: u64,
}

impl<'a> SearchTree<'a> {
    /// Root is the current board with the machine to move
    pub fn new(board: Board, level: usize, arena: &'a Bump) -> Self {
        debug_assert!(level >= 1, "search level must be at least 1");

        let root = arena.alloc(SearchNode::new(board, Side::Machine, 0, None, arena));

        Self {
            arena,
            root,
            level,
            nodes_explored: 0,
        }
    }

    /// Build every machine placement and the full tree below each of them
    pub fn expand(&mut self) {
        if !self.root.board.has_move(Side::Machine) {
            return;
        }

        self.nodes_explored = self.root.expand(self.arena, self.level);
    }

    /// Back up every candidate. The root itself is never scored.
    pub fn back_up<H: Heuristic>(&mut self, heuristic: &mut H) {
        for child in self.root.children.iter_mut() {
            child.back_up(heuristic);
            debug!(
                candidate = %child.last_move.map_or_else(String::new, |loc| loc.to_string()),
                local = child.local,
                value = child.value,
                "scored machine candidate"
            );
        }
    }

    /// Candidate with the greatest value; ties go to the first in row-major order
    pub fn best(&self) -> Option<&SearchNode<'a>> {
        self.root.children
            .iter()
            .fold(None, |best: Option<&SearchNode<'a>>, child| match best {
                Some(b) if b.value >= child.value => Some(b),
                _ => Some(child),
            })
    }

    pub fn result(&self) -> SearchResult {
        let best = self.best();

        SearchResult {
            best_move: best.and_then(|node| node.last_move),
            board: best.map(|node| node.board),
            eval: best.map(|node| node.value),
            candidates: self.root.children
                .iter()
                .filter_map(|child| child.last_move.map(|loc| (loc, child.value)))
                .collect(),
            nodes_explored: self.nodes_explored,
        }
    }
}

/// Run a complete search from `board` with the machine to move
pub fn search<H: Heuristic>(board: &Board, level: usize, heuristic: &mut H) -> SearchResult {
    let arena = Bump::new();
    let mut tree = SearchTree::new(*board, level, &arena);

    tree.expand();
    tree.back_up(heuristic);

    tree.result()
}

/// Machine move on `state`, searched to the depth set in `config`.
///
/// Faults once the game is over, or when it is the human's turn and the
/// human can play. When the machine has no placement the board is returned
/// unchanged with the turn handed to the human.
pub fn machine_move<H: Heuristic>(
    state: &GameState,
    config: &GameConfig,
    heuristic: &mut H,
) -> Result<GameState, MoveFault> {
    state.ensure_machine_turn()?;

    let result = search(&state.board, config.level(), heuristic);
    Ok(apply_result(state, &result))
}

/// Successor state described by a finished search
pub fn apply_result(state: &GameState, result: &SearchResult) -> GameState {
    match result.board {
        Some(board) => state.after(board, Side::Machine),
        None => state.with_turn(Side::Human),
    }
}
