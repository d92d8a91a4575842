//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared by the
//! UCT engine and the `uct-play` driver.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Command line flags (applied by the driver)
//! 2. Environment variables (`UCT_<SECTION>_<KEY>`)
//! 3. config.toml file
//! 4. Built-in defaults (config.defaults.toml)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! UCT_<SECTION>_<KEY>=value
//!
//! Examples:
//!     UCT_COMMON_GAME=tictactoe
//!     UCT_SEARCH_ITERATIONS=1000
//!     UCT_SEARCH_SEED=42
//!     UCT_PLAY_MODE=self-play
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, CONFIG_PATH_ENV, CONFIG_SEARCH_PATHS,
};
pub use structs::*;

#[cfg(test)]
mod tests;
