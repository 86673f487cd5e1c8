//! Depth-limited minimax over the full game tree.
//!
//! The value of a node is defined by the plain recursion in
//! [`evaluate_exhaustive`]: a leaf is a node at depth zero, or a node whose side
//! to move has no legal move, valued with [`crate::score::Score::signed`]
//! (positive favors White); every other node takes the maximum of its children when the side to
//! move is the perspective color and the minimum otherwise. There is no pruning
//! and no move ordering.
//!
//! Captures and ko let lines revisit positions, so the tree below a 3x3
//! position grows without bound in depth. [`evaluate`] therefore computes the
//! same values layer by layer over the graph of reachable `(position, to_move)`
//! nodes: layer `d` holds every node's depth-`d` value and is derived from
//! layer `d - 1`. Once a layer repeats an earlier one the sequence is periodic
//! and the requested layer is read off without computing further.

use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use tracing::{debug, trace};

use crate::board::Color;
use crate::constants::SEARCH_DEPTH;
use crate::position::{GameState, children};
use crate::score::score;

/// Counters collected while searching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct `(position, to_move)` nodes reachable from the roots
    pub positions: u64,
    /// Value layers computed before the answer was known
    pub layers: u64,
}

/// Reachable nodes, their successors and their leaf values.
struct Graph {
    index: HashMap<(GameState, Color), usize>,
    nodes: Vec<(GameState, Color)>,
    kids: Vec<Vec<usize>>,
    leaf: Vec<i32>,
}

impl Graph {
    /// Collect every node reachable from `roots`, each with `to_move` to play.
    fn build(roots: &[GameState], to_move: Color) -> (Graph, Vec<usize>) {
        let mut graph = Graph {
            index: HashMap::new(),
            nodes: Vec::new(),
            kids: Vec::new(),
            leaf: Vec::new(),
        };
        let root_ids: Vec<usize> = roots.iter().map(|&s| graph.intern(s, to_move)).collect();

        let mut next = 0;
        while next < graph.nodes.len() {
            let (state, color) = graph.nodes[next];
            let successors = children(&state, color);
            if !successors.is_empty() {
                let opponent = color.opponent();
                let ids = successors
                    .into_iter()
                    .map(|child| graph.intern(child, opponent))
                    .collect();
                graph.kids[next] = ids;
            }
            next += 1;
        }

        (graph, root_ids)
    }

    fn intern(&mut self, state: GameState, to_move: Color) -> usize {
        if let Some(&id) = self.index.get(&(state, to_move)) {
            return id;
        }
        let id = self.nodes.len();
        self.index.insert((state, to_move), id);
        self.nodes.push((state, to_move));
        self.kids.push(Vec::new());
        self.leaf.push(score(&state).signed());
        id
    }

    /// Layer `d` from layer `d - 1`.
    fn advance(&self, prev: &[i32], perspective: Color) -> Vec<i32> {
        (0..self.nodes.len())
            .map(|i| {
                let kids = &self.kids[i];
                if kids.is_empty() {
                    return self.leaf[i];
                }
                let values = kids.iter().map(|&k| prev[k]);
                let best = if self.nodes[i].1 == perspective {
                    values.max()
                } else {
                    values.min()
                };
                best.unwrap_or(self.leaf[i])
            })
            .collect()
    }

    /// Every node's value at `depth`.
    fn values_at(&self, depth: u32, perspective: Color, stats: &mut SearchStats) -> Vec<i32> {
        let depth = depth as usize;
        let hasher = RandomState::new();
        let mut history = vec![self.leaf.clone()];
        let mut seen: HashMap<u64, usize> = HashMap::from([(hasher.hash_one(&self.leaf), 0)]);

        for d in 1..=depth {
            let layer = self.advance(&history[d - 1], perspective);
            stats.layers += 1;

            let h = hasher.hash_one(&layer);
            if let Some(&earlier) = seen.get(&h) {
                if history[earlier] == layer {
                    let period = d - earlier;
                    let target = earlier + (depth - earlier) % period;
                    trace!(depth, repeat_at = d, period, "value layers became periodic");
                    return history.swap_remove(target);
                }
            }
            seen.insert(h, d);
            history.push(layer);
        }

        history.swap_remove(depth)
    }
}

/// Minimax value of `state` with `to_move` to play.
///
/// The maximizing side is whichever color equals `perspective`. Always equal
/// to [`evaluate_exhaustive`] for the same arguments.
pub fn evaluate(state: &GameState, depth: u32, to_move: Color, perspective: Color) -> i32 {
    evaluate_with_stats(state, depth, to_move, perspective, &mut SearchStats::default())
}

/// Same as [`evaluate`], accumulating counters into `stats`.
pub fn evaluate_with_stats(
    state: &GameState,
    depth: u32,
    to_move: Color,
    perspective: Color,
    stats: &mut SearchStats,
) -> i32 {
    let (graph, roots) = Graph::build(&[*state], to_move);
    stats.positions += graph.nodes.len() as u64;
    graph.values_at(depth, perspective, stats)[roots[0]]
}

/// Minimax by direct recursion over the tree.
///
/// Cost grows exponentially with `depth`; meant for shallow depths.
pub fn evaluate_exhaustive(state: &GameState, depth: u32, to_move: Color, perspective: Color) -> i32 {
    let kids = children(state, to_move);
    if kids.is_empty() || depth == 0 {
        return score(state).signed();
    }

    let next = to_move.opponent();
    let values = kids
        .iter()
        .map(|child| evaluate_exhaustive(child, depth - 1, next, perspective));

    let best = if to_move == perspective {
        values.max()
    } else {
        values.min()
    };
    best.unwrap_or_else(|| score(state).signed())
}

/// Turn selection with a fixed search depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Solver {
    pub depth: u32,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SEARCH_DEPTH)
    }
}

impl Solver {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }

    /// Pick the next position for `color`, or return `state` unchanged if it has no move.
    ///
    /// Each child is valued with `color` both to move and as the maximizing
    /// side, and the child with the lowest value is played whichever color is
    /// moving. Ties go to the earliest child in generation order.
    pub fn choose_move(&self, state: &GameState, color: Color) -> GameState {
        self.choose_move_with_stats(state, color).0
    }

    /// [`Solver::choose_move`] plus the chosen child's value and the search counters.
    ///
    /// The value is `None` when there was no move to choose.
    pub fn choose_move_with_stats(
        &self,
        state: &GameState,
        color: Color,
    ) -> (GameState, Option<i32>, SearchStats) {
        let mut stats = SearchStats::default();
        let kids = children(state, color);
        trace!(%color, candidates = kids.len(), "generated candidate moves");
        if kids.is_empty() {
            debug!(%color, "no legal move");
            return (*state, None, stats);
        }

        // All candidates share one graph: each is a node with `color` to move.
        let (graph, roots) = Graph::build(&kids, color);
        stats.positions = graph.nodes.len() as u64;
        let values = graph.values_at(self.depth, color, &mut stats);

        let mut best: Option<(GameState, i32)> = None;
        for (child, &id) in kids.into_iter().zip(&roots) {
            let v = values[id];
            trace!(%color, value = v, "candidate valued");
            if best.is_none_or(|(_, min)| v < min) {
                best = Some((child, v));
            }
        }

        match best {
            Some((child, value)) => {
                debug!(
                    %color,
                    value,
                    positions = stats.positions,
                    layers = stats.layers,
                    "selected move"
                );
                (child, Some(value), stats)
            }
            None => (*state, None, stats),
        }
    }
}

/// [`Solver::choose_move`] at the default depth.
pub fn make_turn(state: &GameState, color: Color) -> GameState {
    Solver::default().choose_move(state, color)
}
