//! A fixed-depth minimax agent for Connect 4

use rand::{rngs::SmallRng, Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use std::time::Instant;

use crate::{board::*, evaluation::score, win::detect_win, DEPTH};

/// The value of a position the maximizing player has won
pub const WIN_VALUE: i32 = 1_000_000_000;
/// The value of a position the minimizing player has won
pub const LOSS_VALUE: i32 = -WIN_VALUE;
/// The value of a full board with no winner
pub const DRAW_VALUE: i32 = 0;

/// How to pick between columns that reach the same best value
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TieBreak {
    /// The lowest column
    First,
    /// The highest column
    Last,
    /// A uniformly random column, reproducible for a given seed
    Random { seed: u64 },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchConfig {
    /// Plies searched by [`Minimax::search`]
    pub depth: usize,
    /// The side whose wins are positive and whose heuristic scores cut-off positions
    pub maximizer: Player,
    pub tie_break: TieBreak,
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_maximizer(mut self, maximizer: Player) -> Self {
        self.maximizer = maximizer;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEPTH,
            maximizer: Player::Ai,
            tie_break: TieBreak::First,
        }
    }
}

/// The outcome of searching a position
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    /// The chosen 1-indexed column, `None` if the search stopped at this position
    pub column: Option<usize>,
    pub value: i32,
    /// The number of positions visited, this one included
    pub nodes: usize,
}

/// The best (column, value) pair seen so far at a node
///
/// Every child result is offered through [`Incumbent::challenge`] one at a
/// time, so the column and the value always come from the same child.
struct Incumbent {
    maximizing: bool,
    value: i32,
    // every column reaching `value`, in the order they were offered
    columns: Vec<usize>,
}

impl Incumbent {
    fn new(default_column: usize, maximizing: bool) -> Self {
        Self {
            maximizing,
            value: if maximizing { i32::MIN } else { i32::MAX },
            columns: vec![default_column],
        }
    }

    fn challenge(&mut self, column: usize, value: i32) {
        let improves = if self.maximizing {
            value > self.value
        } else {
            value < self.value
        };
        if improves {
            self.value = value;
            self.columns.clear();
            self.columns.push(column);
        } else if value == self.value {
            self.columns.push(column);
        }
    }

    fn resolve(self, tie_break: TieBreak) -> (usize, i32) {
        let column = match tie_break {
            TieBreak::First => self.columns[0],
            TieBreak::Last => self.columns[self.columns.len() - 1],
            TieBreak::Random { seed } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                self.columns[rng.gen_range(0..self.columns.len())]
            }
        };
        (column, self.value)
    }
}

/// An agent choosing Connect 4 moves by exhaustive minimax search
///
/// # Notes
/// Every position is expanded to exactly `depth` plies with no pruning,
/// ordering or memoization. The children of each position are searched in
/// parallel on independent board copies and their results reduced in column
/// order.
///
/// # Position Values
/// A position won by the maximizer is worth [`WIN_VALUE`], one won by its
/// opponent [`LOSS_VALUE`], and a full board [`DRAW_VALUE`]. Positions where
/// the depth runs out are scored with [`score`] from the maximizer's point of
/// view, whichever side is to move.
#[derive(Clone, Debug)]
pub struct Minimax {
    config: SearchConfig,

    /// The number of nodes searched by this `Minimax` so far (for diagnostics only)
    pub node_count: usize,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            node_count: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches the configured number of plies with the maximizer to move
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.search_with(board, self.config.depth, true)
    }

    /// Searches `plies` plies with either side to move
    pub fn search_with(&mut self, board: &Board, plies: usize, maximizing: bool) -> SearchResult {
        let start = Instant::now();
        let result = self.node(board, plies, maximizing, self.config.tie_break);
        self.node_count += result.nodes;

        debug!(
            plies,
            maximizing,
            column = ?result.column,
            value = result.value,
            nodes = result.nodes,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "search complete"
        );
        result
    }

    /// Value of a position the search cannot expand, or `None` if it can
    fn leaf_value(&self, board: &Board, plies: usize) -> Option<i32> {
        let maximizer = self.config.maximizer;

        // the minimizer's win is checked first
        if detect_win(board, maximizer.opponent()) {
            return Some(LOSS_VALUE);
        }
        if detect_win(board, maximizer) {
            return Some(WIN_VALUE);
        }
        if board.is_full() {
            return Some(DRAW_VALUE);
        }
        if plies == 0 {
            return Some(score(board, maximizer));
        }
        None
    }

    fn node(&self, board: &Board, plies: usize, maximizing: bool, tie_break: TieBreak) -> SearchResult {
        if let Some(value) = self.leaf_value(board, plies) {
            return SearchResult {
                column: None,
                value,
                nodes: 1,
            };
        }

        let mover = if maximizing {
            self.config.maximizer
        } else {
            self.config.maximizer.opponent()
        };

        // not full, so there is at least one candidate
        let candidates = board.valid_locations();
        let children: Vec<(usize, SearchResult)> = candidates
            .par_iter()
            .map(|&column| {
                let next = board.clone_and_place_piece(mover, column);
                // only the root reports a column, so deeper ties keep the cheap policy
                (column, self.node(&next, plies - 1, !maximizing, TieBreak::First))
            })
            .collect();

        let mut incumbent = Incumbent::new(candidates[0], maximizing);
        let mut nodes = 1;
        for (column, child) in children {
            nodes += child.nodes;
            incumbent.challenge(column, child.value);
        }

        let (column, value) = incumbent.resolve(tie_break);
        SearchResult {
            column: Some(column),
            value,
            nodes,
        }
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Searches `plies` plies with the default configuration
pub fn minimax(board: &Board, plies: usize, maximizing: bool) -> SearchResult {
    Minimax::default().search_with(board, plies, maximizing)
}
