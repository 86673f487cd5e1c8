//! Tiny-Go-Solver: exhaustive minimax for Go on a 3x3 board.
//!
//! ## Usage
//!
//! - `tiny-go-solver` - Play the solver against itself, one turn per Enter
//! - `tiny-go-solver play` - Same as above, with search options
//! - `tiny-go-solver solve --board B++/+W+/+++ --to-move black` - Pick one move
//! - `tiny-go-solver random` - Print a random game

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tiny_go_solver::board::{Board, Color};
use tiny_go_solver::constants::{MAX_GAME_LEN, SEARCH_DEPTH};
use tiny_go_solver::game::Game;
use tiny_go_solver::playout::random_game;
use tiny_go_solver::position::GameState;
use tiny_go_solver::score::score;
use tiny_go_solver::search::Solver;

/// Tiny-Go-Solver: perfect play for Go on a 3x3 board
#[derive(Parser)]
#[command(name = "tiny-go-solver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log search decisions to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the solver against itself, waiting for Enter before each turn
    Play {
        /// Search depth in plies
        #[arg(long, default_value_t = SEARCH_DEPTH)]
        depth: u32,
        /// Stop after this many turns even if moves remain
        #[arg(long)]
        max_turns: Option<usize>,
    },
    /// Choose one move from a given position
    Solve {
        /// Board layout, one line per column separated by '/', using W, B and +
        #[arg(long)]
        board: String,
        /// Side to move
        #[arg(long, value_enum)]
        to_move: Side,
        /// Search depth in plies
        #[arg(long, default_value_t = SEARCH_DEPTH)]
        depth: u32,
    },
    /// Print a random game
    Random {
        /// Random seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Game length limit
        #[arg(long, default_value_t = MAX_GAME_LEN)]
        max_turns: usize,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "tiny_go_solver=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Play { depth, max_turns }) => run_play(depth, max_turns),
        None => run_play(SEARCH_DEPTH, None),
        Some(Commands::Solve {
            board,
            to_move,
            depth,
        }) => run_solve(&board, to_move.into(), depth),
        Some(Commands::Random { seed, max_turns }) => {
            run_random(seed, max_turns);
            Ok(())
        }
    }
}

fn run_play(depth: u32, max_turns: Option<usize>) -> Result<()> {
    let mut game = Game::new(Solver::new(depth));
    game.run(io::stdin().lock(), io::stdout().lock(), max_turns)
        .context("game loop failed")?;
    Ok(())
}

fn run_solve(layout: &str, color: Color, depth: u32) -> Result<()> {
    let board: Board = layout
        .parse()
        .with_context(|| format!("invalid board layout {layout:?}"))?;
    let state = GameState::from_board(board);
    let solver = Solver::new(depth);

    println!("{}", state.board);

    let (next, value, stats) = solver.choose_move_with_stats(&state, color);
    match value {
        Some(v) => {
            println!("{color} plays (value {v}, {} positions searched):", stats.positions);
            print!("{}", next.board);
        }
        None => println!("{color} has no legal move"),
    }
    println!("Score: {}", score(&next));
    Ok(())
}

fn run_random(seed: u64, max_turns: usize) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let game = random_game(&mut rng, Color::Black, max_turns);
    for state in &game {
        println!("{}", state.board);
    }
    if let Some(last) = game.last() {
        println!("{} turns, score: {}", game.len() - 1, score(last));
    }
}
