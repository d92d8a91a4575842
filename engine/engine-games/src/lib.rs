//! Game catalogue for the UCT engine
//!
//! This crate provides a single place that maps game names (as used on the
//! command line and in `config.toml`) to the game implementations.
//!
//! # Usage
//!
//! ```rust
//! use engine_games::GameKind;
//!
//! let kind: GameKind = "reversi".parse().unwrap();
//! assert_eq!(kind, GameKind::Reversi);
//! assert_eq!(kind.to_string(), "reversi");
//! ```

use std::fmt;
use std::str::FromStr;

use engine_core::ActionId;

// Re-export the game crates for callers that only depend on the catalogue
pub use games_reversi;
pub use games_tictactoe;

/// Games known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    TicTacToe,
    Reversi,
}

impl GameKind {
    /// Every available game, in display order.
    pub const ALL: [GameKind; 2] = [GameKind::TicTacToe, GameKind::Reversi];

    /// Identifier used on the command line and in configuration files.
    pub fn id(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tictactoe",
            GameKind::Reversi => "reversi",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic-Tac-Toe",
            GameKind::Reversi => "Reversi",
        }
    }

    /// Parse a move typed by a human for this game.
    pub fn parse_action(self, input: &str) -> Option<ActionId> {
        match self {
            GameKind::TicTacToe => games_tictactoe::State::parse_action(input),
            GameKind::Reversi => games_reversi::State::parse_action(input),
        }
    }

    /// Short description of the expected move syntax.
    pub fn move_hint(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "square 0-8 or `row col`",
            GameKind::Reversi => "`row col`, square 0-63, or `pass`",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a game name is not in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown game '{0}', expected one of: tictactoe, reversi")]
pub struct UnknownGame(pub String);

impl FromStr for GameKind {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "tictactoe" => Ok(GameKind::TicTacToe),
            "reversi" | "othello" => Ok(GameKind::Reversi),
            _ => Err(UnknownGame(s.to_string())),
        }
    }
}

/// List the identifiers of all available games.
pub fn list_games() -> Vec<&'static str> {
    GameKind::ALL.iter().map(|kind| kind.id()).collect()
}
