//! Random playouts (random game simulation).
//!
//! A playout starts from an empty board and lets each side pick a uniformly
//! random legal successor until the side to move has none or the game length
//! limit is reached. Playouts reach positions the solver does not choose, which
//! makes them useful for exercising the rules engine.

use fastrand::Rng;

use crate::board::Color;
use crate::position::{GameState, children};

/// Play a random game and return every position, starting with the empty board.
pub fn random_game(rng: &mut Rng, first: Color, max_turns: usize) -> Vec<GameState> {
    let mut state = GameState::new();
    let mut to_move = first;
    let mut history = vec![state];

    for _ in 0..max_turns {
        let kids = children(&state, to_move);
        if kids.is_empty() {
            break;
        }
        state = kids[rng.usize(..kids.len())];
        history.push(state);
        to_move = to_move.opponent();
    }

    history
}
