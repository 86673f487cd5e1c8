//! Turn loop driving the solver against itself.
//!
//! Each iteration renders the board, waits for one line of input (its content
//! is ignored), and lets the side to move play the solver's choice. The game
//! ends when a turn leaves the board unchanged, and the final score is printed.
//!
//! ## Example
//!
//! ```
//! use tiny_go_solver::game::Game;
//! use tiny_go_solver::search::Solver;
//!
//! let mut game = Game::new(Solver::new(1));
//! let mut out = Vec::new();
//! let result = game.run(std::io::empty(), &mut out, Some(2)).unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with(&format!("{result}\n")));
//! ```

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::board::Color;
use crate::position::GameState;
use crate::score::{Score, score};
use crate::search::Solver;

/// The current position and whose turn it is.
pub struct Game {
    pub state: GameState,
    pub to_move: Color,
    solver: Solver,
    turns: usize,
}

impl Game {
    /// A fresh game with Black to move first.
    pub fn new(solver: Solver) -> Self {
        Self::from_state(GameState::new(), Color::Black, solver)
    }

    pub fn from_state(state: GameState, to_move: Color, solver: Solver) -> Self {
        Self {
            state,
            to_move,
            solver,
            turns: 0,
        }
    }

    /// Number of turns that changed the board.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Play one turn. Returns `false` when the board did not change.
    pub fn step(&mut self) -> bool {
        let next = self.solver.choose_move(&self.state, self.to_move);
        if next.board == self.state.board {
            return false;
        }
        self.state = next;
        self.to_move = self.to_move.opponent();
        self.turns += 1;
        true
    }

    /// Run the loop until the board stops changing or `max_turns` turns were played.
    ///
    /// End of input does not stop the game; it only stops the waiting.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        max_turns: Option<usize>,
    ) -> io::Result<Score> {
        let mut line = String::new();
        loop {
            write!(output, "{}", self.state.board)?;
            output.flush()?;

            if max_turns.is_some_and(|max| self.turns >= max) {
                info!(turns = self.turns, "turn limit reached");
                break;
            }

            line.clear();
            input.read_line(&mut line)?;

            if !self.step() {
                break;
            }
        }

        let result = score(&self.state);
        info!(turns = self.turns, %result, "game over");
        writeln!(output, "{result}")?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_alternates_colors() {
        let mut game = Game::new(Solver::new(1));
        assert!(game.step());
        assert_eq!(game.to_move, Color::White);
        assert_eq!(game.state.board.stone_count(), 1);
        assert_eq!(game.turns(), 1);
    }

    #[test]
    fn stuck_position_ends_immediately() {
        let state = GameState::from_board("BBB/B+B/BBB".parse().unwrap());
        let mut game = Game::from_state(state, Color::White, Solver::new(4));
        let mut out = Vec::new();
        let result = game.run(io::empty(), &mut out, None).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "BBB\nB+B\nBBB\nBlack 1\n");
        assert_eq!(result, score(&state));
        assert_eq!(game.turns(), 0);
    }

    #[test]
    fn turn_limit_stops_the_loop() {
        let mut game = Game::new(Solver::new(1));
        let mut out = Vec::new();
        game.run(io::empty(), &mut out, Some(3)).unwrap();
        assert_eq!(game.turns(), 3);
        // Initial board plus one board per turn, then the score line.
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4 * 3 + 1);
    }

    #[test]
    fn reads_one_line_per_turn() {
        let mut input = io::Cursor::new("one\ntwo\nthree\nfour\nfive\n");
        let mut game = Game::new(Solver::new(1));
        game.run(&mut input, io::sink(), Some(3)).unwrap();
        assert_eq!(game.turns(), 3);
        assert_eq!(input.position(), "one\ntwo\nthree\n".len() as u64);
    }

    #[test]
    fn final_turn_still_waits_for_input() {
        let state = GameState::from_board("BBB/B+B/BBB".parse().unwrap());
        let mut input = io::Cursor::new("go\nagain\n");
        let mut game = Game::from_state(state, Color::Black, Solver::new(2));
        game.run(&mut input, io::sink(), None).unwrap();
        assert_eq!(input.position(), "go\n".len() as u64);
    }
}
