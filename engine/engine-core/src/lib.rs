//! Core traits and types for the UCT game engine
//!
//! This crate provides the abstractions shared by the search engine and the
//! game implementations:
//! - `Game`: the four capabilities a position must offer to be searched
//! - `GameError`: rule violations reported by a game
//! - `game_utils`: winner bookkeeping shared by two-player games

pub mod game_utils;
pub mod typed;

// Re-export main types for convenience
pub use game_utils::Outcome;
pub use typed::{ActionId, Game, GameError};
