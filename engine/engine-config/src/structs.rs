//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_game() -> String {
    defaults::game().into()
}
fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_iterations() -> u32 {
    defaults::iterations()
}
fn d_exploration() -> f64 {
    defaults::exploration_constant()
}
fn d_max_playout_plies() -> Option<u32> {
    defaults::max_playout_plies()
}
fn d_seed() -> Option<u64> {
    defaults::seed()
}
fn d_mode() -> String {
    defaults::mode().into()
}
fn d_human_side() -> u8 {
    defaults::human_side()
}
fn d_max_turns() -> Option<u32> {
    defaults::max_turns()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub play: PlayConfig,
}

/// Settings shared by every component
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_game")]
    pub game: String,
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            game: d_game(),
            log_level: d_log_level(),
        }
    }
}

/// UCT search parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(default = "d_iterations")]
    pub iterations: u32,
    #[serde(default = "d_exploration")]
    pub exploration_constant: f64,
    #[serde(default = "d_max_playout_plies")]
    pub max_playout_plies: Option<u32>,
    #[serde(default = "d_seed")]
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: d_iterations(),
            exploration_constant: d_exploration(),
            max_playout_plies: d_max_playout_plies(),
            seed: d_seed(),
        }
    }
}

/// Game loop settings for the uct-play driver
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayConfig {
    #[serde(default = "d_mode")]
    pub mode: String,
    #[serde(default = "d_human_side")]
    pub human_side: u8,
    #[serde(default = "d_max_turns")]
    pub max_turns: Option<u32>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: d_mode(),
            human_side: d_human_side(),
            max_turns: d_max_turns(),
        }
    }
}
