//! Territory scoring.
//!
//! Each empty region belongs to the one color that borders it, or to no one
//! when it touches both colors (or no stones at all). Stones on the board are
//! not counted. A side's score is its territory plus the opponent stones it
//! holds as prisoners.

use std::fmt;

use crate::board::{Board, Color, Point};
use crate::position::{GameState, PointSet};

/// Outcome of a scored position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Winner {
    White,
    Black,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::White => write!(f, "White"),
            Winner::Black => write!(f, "Black"),
            Winner::Tie => write!(f, "Tie"),
        }
    }
}

/// Winner and the winning total. Ties carry the shared total.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Score {
    pub winner: Winner,
    pub points: u32,
}

impl Score {
    /// Leaf value for minimax: positive favors White, negated for a Black win.
    pub fn signed(self) -> i32 {
        match self.winner {
            Winner::Black => -(self.points as i32),
            Winner::White | Winner::Tie => self.points as i32,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.winner, self.points)
    }
}

/// Area owned by each side, and the empty area owned by no one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Territory {
    pub white: u32,
    pub black: u32,
    pub neutral: u32,
}

/// Flood the empty region containing `start`, marking it in `visited`.
///
/// Returns the region size and its owner (`Color::Empty` for no one).
fn explore_region(board: &Board, start: Point, visited: &mut PointSet) -> (u32, Color) {
    let mut size = 0;
    let mut border: Option<Color> = None;
    let mut mixed = false;
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(pt) = stack.pop() {
        size += 1;
        for n in Board::neighbors(pt) {
            match board.get(n) {
                Color::Empty => {
                    if !visited.contains(n) {
                        visited.insert(n);
                        stack.push(n);
                    }
                }
                stone => match border {
                    None => border = Some(stone),
                    Some(c) if c != stone => mixed = true,
                    Some(_) => {}
                },
            }
        }
    }

    let owner = match border {
        Some(c) if !mixed => c,
        _ => Color::Empty,
    };
    (size, owner)
}

/// Classify every empty cell of the board.
pub fn territory(state: &GameState) -> Territory {
    let mut visited = PointSet::new();
    let mut t = Territory::default();

    for pt in Board::points() {
        if visited.contains(pt) || state.board.get(pt).is_stone() {
            continue;
        }
        let (size, owner) = explore_region(&state.board, pt, &mut visited);
        match owner {
            Color::White => t.white += size,
            Color::Black => t.black += size,
            Color::Empty => t.neutral += size,
        }
    }

    t
}

/// Score a position: territory plus prisoners, higher total wins.
pub fn score(state: &GameState) -> Score {
    let t = territory(state);
    let white = t.white + state.black_prisoners;
    let black = t.black + state.white_prisoners;

    if white > black {
        Score { winner: Winner::White, points: white }
    } else if black > white {
        Score { winner: Winner::Black, points: black }
    } else {
        Score { winner: Winner::Tie, points: black }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(layout: &str) -> GameState {
        GameState::from_board(layout.parse().unwrap())
    }

    #[test]
    fn empty_board_is_neutral() {
        let s = GameState::new();
        assert_eq!(territory(&s), Territory { white: 0, black: 0, neutral: 9 });
        assert_eq!(score(&s), Score { winner: Winner::Tie, points: 0 });
    }

    #[test]
    fn lone_stone_owns_the_rest() {
        let s = state("+++/+B+/+++");
        assert_eq!(score(&s), Score { winner: Winner::Black, points: 8 });
        assert_eq!(score(&s).signed(), -8);
    }

    #[test]
    fn mixed_border_is_no_ones() {
        let s = state("+B+/BW+/+++");
        assert_eq!(territory(&s), Territory { white: 0, black: 1, neutral: 5 });
        assert_eq!(score(&s), Score { winner: Winner::Black, points: 1 });
    }

    #[test]
    fn white_wall_splits_board() {
        let s = state("+W+/+W+/+W+");
        let t = territory(&s);
        assert_eq!(t.white, 6);
        assert_eq!(score(&s), Score { winner: Winner::White, points: 6 });
        assert_eq!(score(&s).signed(), 6);
    }

    #[test]
    fn prisoners_count_for_the_capturer() {
        let mut s = GameState::new();
        s.black_prisoners = 3;
        assert_eq!(score(&s), Score { winner: Winner::White, points: 3 });

        s.white_prisoners = 3;
        assert_eq!(score(&s), Score { winner: Winner::Tie, points: 3 });
        assert_eq!(score(&s).signed(), 3);
    }

    #[test]
    fn full_board_scores_zero() {
        let s = state("WBW/BWB/WBW");
        assert_eq!(score(&s), Score { winner: Winner::Tie, points: 0 });
    }

    #[test]
    fn scoring_is_repeatable() {
        let s = state("+B+/BW+/++W");
        assert_eq!(score(&s), score(&s));
        assert_eq!(territory(&s), territory(&s));
    }

    #[test]
    fn display_pairs_winner_and_points() {
        let s = Score { winner: Winner::Black, points: 4 };
        assert_eq!(s.to_string(), "Black 4");
    }
}
