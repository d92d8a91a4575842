//! Configuration for the uct-play driver
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use engine_games::GameKind;
use mcts::UctConfig;
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_game() -> String {
    CENTRAL_CONFIG.common.game.clone()
}

fn default_mode() -> String {
    CENTRAL_CONFIG.play.mode.clone()
}

fn default_human_side() -> u8 {
    CENTRAL_CONFIG.play.human_side
}

fn default_iterations() -> u32 {
    CENTRAL_CONFIG.search.iterations
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.search.exploration_constant
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

/// Who controls the moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Engine plays both sides
    SelfPlay,
    /// Engine plays against moves read from stdin
    Human,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "self-play" | "selfplay" | "self" => Ok(Mode::SelfPlay),
            "human" => Ok(Mode::Human),
            other => Err(anyhow!(
                "unknown mode '{other}', expected 'human' or 'self-play'"
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::SelfPlay => "self-play",
            Mode::Human => "human",
        })
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "uct-play")]
#[command(about = "Play tic-tac-toe or reversi against a UCT search engine")]
#[command(
    long_about = "Plays a game to completion with the UCT engine, either against itself
or against moves typed on stdin. The board is printed after every move.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Game to play (tictactoe, reversi)
    #[arg(long, default_value_t = default_game())]
    pub game: String,

    /// Play mode (human, self-play)
    #[arg(long, default_value_t = default_mode())]
    pub mode: String,

    /// Player number the human controls in human mode (1 moves first)
    #[arg(long, default_value_t = default_human_side())]
    pub human_side: u8,

    /// UCT iterations per engine move
    #[arg(long, default_value_t = default_iterations())]
    pub iterations: u32,

    /// Exploration constant c in the UCT formula
    #[arg(long, default_value_t = default_exploration())]
    pub exploration_constant: f64,

    /// Abort random playouts after this many plies
    #[arg(long)]
    pub max_playout_plies: Option<u32>,

    /// Seed for the search RNG (random if unset)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop the game after this many moves
    #[arg(long)]
    pub max_turns: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    /// Parse the command line and fill unset optional flags from config.toml.
    pub fn load() -> Self {
        Self::parse().with_fallbacks(&CENTRAL_CONFIG)
    }

    /// Fill optional settings the command line left unset.
    pub fn with_fallbacks(mut self, central: &CentralConfig) -> Self {
        self.max_playout_plies = self.max_playout_plies.or(central.search.max_playout_plies);
        self.seed = self.seed.or(central.search.seed);
        self.max_turns = self.max_turns.or(central.play.max_turns);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.game_kind()?;
        self.play_mode()?;

        if !(1..=2).contains(&self.human_side) {
            return Err(anyhow!(
                "human_side must be 1 or 2, got {}",
                self.human_side
            ));
        }

        self.uct_config()
            .validate()
            .map_err(|e| anyhow!("invalid search settings: {e}"))?;

        if self.max_turns == Some(0) {
            return Err(anyhow!("max_turns must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn game_kind(&self) -> Result<GameKind> {
        Ok(self.game.parse::<GameKind>()?)
    }

    pub fn play_mode(&self) -> Result<Mode> {
        self.mode.parse()
    }

    /// The side read from stdin, if any.
    pub fn human_player(&self) -> Result<Option<u8>> {
        Ok(match self.play_mode()? {
            Mode::Human => Some(self.human_side),
            Mode::SelfPlay => None,
        })
    }

    pub fn uct_config(&self) -> UctConfig {
        UctConfig::default()
            .with_iterations(self.iterations)
            .with_exploration_constant(self.exploration_constant as f32)
            .with_max_playout_plies(self.max_playout_plies)
    }
}
