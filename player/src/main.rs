//! uct-play - play board games against the UCT search engine
//!
//! A short-lived command line program that:
//! 1. Loads settings from config.toml, `UCT_*` env vars and flags
//! 2. Sets up the chosen game (tic-tac-toe or reversi)
//! 3. Alternates engine moves with moves typed on stdin, or lets the engine
//!    play both sides
//! 4. Prints the board after every move and the final result

use std::io;

use anyhow::Result;
use engine_games::{games_reversi, games_tictactoe, GameKind};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;

mod config;
mod session;

use crate::config::Config;
use crate::session::{play, PlayOptions};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Keep stdout for the board
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    // Parse and validate configuration
    let config = Config::load();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let kind = config.game_kind()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let options = PlayOptions {
        search: config.uct_config(),
        human_side: config.human_player()?,
        max_turns: config.max_turns,
        move_hint: kind.move_hint(),
    };

    info!(
        game = kind.display_name(),
        mode = %config.mode,
        iterations = config.iterations,
        seed,
        "Starting game"
    );

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let parse = |s: &str| kind.parse_action(s);

    let summary = match kind {
        GameKind::TicTacToe => play(
            games_tictactoe::State::new(),
            &options,
            parse,
            &mut rng,
            &mut input,
            &mut out,
        )?,
        GameKind::Reversi => play(
            games_reversi::State::new(),
            &options,
            parse,
            &mut rng,
            &mut input,
            &mut out,
        )?,
    };

    info!(
        moves = summary.moves.len(),
        stop = ?summary.stop,
        "Game finished"
    );

    Ok(())
}
