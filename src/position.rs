//! Game state, group connectivity and move generation.
//!
//! This module provides the rules engine:
//! - [`GameState`]: board, prisoner counts and the ko points for the next move
//! - [`group`]: liberty count and members of a connected group
//! - [`children`]: every legal successor state for a color to move
//!
//! Legality is the simple self-capture prohibition: a placement must leave its
//! own group with a liberty *before* any opponent stones are removed.

use crate::board::{Board, Color, Point};
use crate::constants::HEIGHT;

/// A set of board points, one bit per cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointSet(u16);

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn bit((x, y): Point) -> u16 {
        1 << (x * HEIGHT + y)
    }

    pub fn insert(&mut self, pt: Point) {
        self.0 |= Self::bit(pt);
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.0 & Self::bit(pt) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        Board::points().filter(move |&p| self.contains(p))
    }
}

/// A position together with everything needed to generate the next move.
///
/// States are values: moves produce new states and never modify their parent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    /// White stones held as prisoners by Black
    pub white_prisoners: u32,
    /// Black stones held as prisoners by White
    pub black_prisoners: u32,
    /// Points that may not be played on the next move
    pub ko: PointSet,
}

impl GameState {
    /// A fresh game: empty board, no prisoners, no ko.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    pub fn lookup(&self, pt: Point) -> Color {
        self.board.get(pt)
    }

    pub fn group(&self, pt: Point) -> Group {
        group(&self.board, pt)
    }

    pub fn liberties(&self, pt: Point) -> usize {
        group(&self.board, pt).liberties
    }

    pub fn can_place(&self, pt: Point, color: Color) -> bool {
        can_place(&self.board, pt, color)
    }

    pub fn children(&self, color: Color) -> Vec<GameState> {
        children(self, color)
    }
}

/// A connected group of same-colored stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Number of distinct empty cells adjacent to the group
    pub liberties: usize,
    /// Member stones, in discovery order starting from the queried point
    pub stones: Vec<Point>,
}

/// Compute the group containing the stone at `start`.
///
/// Depth-first over 4-adjacency. Each cell is visited at most once, so every
/// liberty is counted once even when several members touch it.
pub fn group(board: &Board, start: Point) -> Group {
    let color = board.get(start);
    debug_assert!(color.is_stone(), "group() called on an empty point {start:?}");

    let mut visited = PointSet::new();
    let mut stack = vec![start];
    let mut stones = Vec::new();
    let mut liberties = 0;
    visited.insert(start);

    while let Some(pt) = stack.pop() {
        stones.push(pt);
        for n in Board::neighbors(pt) {
            if visited.contains(n) {
                continue;
            }
            let c = board.get(n);
            if c == color {
                visited.insert(n);
                stack.push(n);
            } else if c == Color::Empty {
                visited.insert(n);
                liberties += 1;
            }
        }
    }

    Group { liberties, stones }
}

/// Check whether `color` may play at `pt`.
///
/// The point must be empty and the stone, once placed, must have at least one
/// liberty. Opponent groups are not captured before this check.
pub fn can_place(board: &Board, pt: Point, color: Color) -> bool {
    if board.get(pt) != Color::Empty {
        return false;
    }
    let mut scratch = *board;
    scratch.set(pt, color);
    group(&scratch, pt).liberties != 0
}

/// Place `color` at `pt` and resolve captures, producing the successor state.
///
/// The caller is responsible for legality. Every group left without liberties
/// is removed; each removed single stone becomes a ko point of the new state.
/// Prisoner counts carry over unchanged.
pub fn apply_move(state: &GameState, pt: Point, color: Color) -> GameState {
    let mut child = *state;
    child.ko = PointSet::new();
    child.board.set(pt, color);

    for p in Board::points() {
        if !child.board.get(p).is_stone() {
            continue;
        }
        let g = group(&child.board, p);
        if g.liberties != 0 {
            continue;
        }
        for &s in &g.stones {
            child.board.set(s, Color::Empty);
        }
        if g.stones.len() == 1 {
            child.ko.insert(p);
        }
    }

    child
}

/// Every legal successor of `state` with `color` to move.
///
/// Points are tried column-major, row-minor, ascending. Ko points of `state`
/// are skipped outright. An empty result means `color` has no move.
pub fn children(state: &GameState, color: Color) -> Vec<GameState> {
    Board::points()
        .filter(|&pt| !state.ko.contains(pt))
        .filter(|&pt| can_place(&state.board, pt, color))
        .map(|pt| apply_move(state, pt, color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(layout: &str) -> GameState {
        GameState::from_board(layout.parse().unwrap())
    }

    #[test]
    fn point_set_basics() {
        let mut set = PointSet::new();
        assert!(set.is_empty());
        set.insert((2, 1));
        set.insert((0, 0));
        set.insert((2, 1));
        assert_eq!(set.len(), 2);
        assert!(set.contains((2, 1)));
        assert!(!set.contains((1, 2)));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn liberties_of_lone_stones() {
        for (pt, expected) in [((0, 0), 2), ((0, 1), 3), ((1, 1), 4), ((2, 1), 3)] {
            let mut s = GameState::new();
            s.board.set(pt, Color::Black);
            assert_eq!(s.liberties(pt), expected, "stone at {pt:?}");
        }
    }

    #[test]
    fn group_collects_connected_stones() {
        let s = state("BB+/W++/+++");
        let g = s.group((0, 0));
        assert_eq!(g.liberties, 2);
        let mut stones = g.stones.clone();
        stones.sort();
        assert_eq!(stones, vec![(0, 0), (0, 1)]);

        let w = s.group((1, 0));
        assert_eq!(w.stones, vec![(1, 0)]);
        assert_eq!(w.liberties, 2);
    }

    #[test]
    fn shared_liberty_counted_once() {
        // (1,1) touches both black stones.
        let s = state("+B+/B++/+++");
        assert_eq!(s.liberties((0, 1)), 3);
        let mut s = state("BB+/B++/+++");
        assert_eq!(s.liberties((0, 0)), 3);
        s.board.set((1, 1), Color::White);
        assert_eq!(s.liberties((0, 0)), 2);
    }

    #[test]
    fn self_capture_is_illegal() {
        let s = state("+W+/W++/+++");
        assert!(!s.can_place((0, 0), Color::Black));
        assert!(s.can_place((0, 0), Color::White));
        assert!(!s.can_place((0, 1), Color::Black));
    }

    #[test]
    fn capturing_without_own_liberty_is_illegal() {
        let s = state("+WB/WB+/B++");
        assert!(!s.can_place((0, 0), Color::Black));
        let kids = s.children(Color::Black);
        assert!(kids.iter().all(|k| k.lookup((0, 0)) == Color::Empty));
    }

    #[test]
    fn empty_board_has_nine_children() {
        let kids = GameState::new().children(Color::Black);
        assert_eq!(kids.len(), 9);
        assert_eq!(kids[0].lookup((0, 0)), Color::Black);
        assert_eq!(kids[1].lookup((0, 1)), Color::Black);
        assert_eq!(kids[8].lookup((2, 2)), Color::Black);
        assert!(kids.iter().all(|k| k.board.stone_count() == 1 && k.ko.is_empty()));
    }

    #[test]
    fn single_capture_marks_ko() {
        let s = state("B++/W++/+++");
        let child = apply_move(&s, (0, 1), Color::White);
        assert_eq!(child.lookup((0, 0)), Color::Empty);
        assert_eq!(child.ko.iter().collect::<Vec<_>>(), vec![(0, 0)]);
        assert_eq!(child.black_prisoners, 0);
    }

    #[test]
    fn multi_stone_capture_leaves_no_ko() {
        let s = state("BB+/WW+/+++");
        let child = apply_move(&s, (0, 2), Color::White);
        assert_eq!(child.lookup((0, 0)), Color::Empty);
        assert_eq!(child.lookup((0, 1)), Color::Empty);
        assert!(child.ko.is_empty());
    }

    #[test]
    fn ko_point_is_skipped_for_next_move() {
        let s = state("B++/W++/+++");
        let child = apply_move(&s, (0, 1), Color::White);

        // Without the ko, White could fill (0,0).
        let free = GameState { ko: PointSet::new(), ..child };
        assert!(free.children(Color::White).iter().any(|k| k.lookup((0, 0)) == Color::White));

        for color in [Color::White, Color::Black] {
            assert!(
                child.children(color).iter().all(|k| k.lookup((0, 0)) == Color::Empty),
                "{color} played the ko point"
            );
        }
    }

    #[test]
    fn ko_lasts_one_move() {
        let s = state("B++/W++/+++");
        let child = apply_move(&s, (0, 1), Color::White);
        for grandchild in child.children(Color::Black) {
            assert!(grandchild.ko.is_empty());
        }
    }

    #[test]
    fn no_moves_when_all_points_are_eyes() {
        let s = state("BBB/B+B/BBB");
        assert!(s.children(Color::White).is_empty());
        assert!(s.children(Color::Black).is_empty());
    }

    #[test]
    fn parent_is_not_modified() {
        let s = state("B++/W++/+++");
        let before = s;
        let _ = s.children(Color::White);
        assert_eq!(s, before);
    }
}
