//! Tiny-Go-Solver: perfect play for Go on a 3x3 board.
//!
//! This crate plays a miniature game of Go by searching the complete game
//! tree with plain minimax and scoring the leaves by territory.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, search depth and glyphs
//! - [`board`] - Cell colors and the 3x3 grid
//! - [`position`] - Game state, liberties, captures, ko and move generation
//! - [`score`] - Territory scoring
//! - [`search`] - Exhaustive minimax and turn selection
//! - [`playout`] - Random games for exercising the rules
//! - [`game`] - The turn loop used by the binary
//!
//! ## Example
//!
//! ```
//! use tiny_go_solver::board::Color;
//! use tiny_go_solver::position::GameState;
//! use tiny_go_solver::score::score;
//! use tiny_go_solver::search::Solver;
//!
//! let state = GameState::new();
//! let next = Solver::new(2).choose_move(&state, Color::Black);
//! assert_eq!(next.board.stone_count(), 1);
//! println!("{}{}", next.board, score(&next));
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod playout;
pub mod position;
pub mod score;
pub mod search;
