//! Upper Confidence bounds applied to Trees (UCT) for two-player games.
//!
//! This crate provides a game-agnostic Monte Carlo Tree Search that works with
//! any game implementing the `engine-core` [`Game`](engine_core::Game) trait.
//! No evaluation function is needed: positions are judged by random playouts.
//!
//! # Overview
//!
//! The search builds a tree by running iterations. Each iteration consists of
//! four phases:
//!
//! 1. **Selection**: Traverse the tree using UCT to balance exploration and
//!    exploitation, stopping at a node that is unexpanded or terminal
//! 2. **Expansion**: Add one child per legal action and pick one at random
//! 3. **Simulation**: Play uniformly random moves to the end of the game
//! 4. **Backpropagation**: Update visit counts and rewards along the path from
//!    the simulated node to the root, negating the reward at each level
//!
//! After the last iteration the root child with the highest mean value is
//! chosen. Only visited children are considered.
//!
//! # Usage
//!
//! ```rust
//! use mcts::{search, run_uct, UctConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! // X X _ / O O _ / _ _ _ with X to move
//! let state = games_tictactoe::State::from_moves(&[0, 3, 1, 4]).unwrap();
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! let action = search(state, 1000, &mut rng).unwrap();
//! assert_eq!(action, 2);
//!
//! // Same search with full statistics
//! let config = UctConfig::default().with_iterations(500);
//! let result = run_uct(state, config, &mut rng).unwrap();
//! println!("Best action: {} (value {:.3})", result.action, result.value);
//! ```
//!
//! # Configuration
//!
//! The [`UctConfig`] struct controls search behavior:
//!
//! - `iterations`: Number of iterations per search (default: 1000)
//! - `exploration_constant`: `c` in the UCT formula (default: `1/sqrt(2)`)
//! - `max_playout_plies`: Optional cap on random playout length
//!
//! # Architecture
//!
//! ```text
//! +-------------------------------------------------------------+
//! |                          UctSearch                          |
//! +-------------------------------------------------------------+
//! |  +--------------------+   +----------------------------+    |
//! |  |   SearchTree<G>    |   |   policy (UCT, pure fns)   |    |
//! |  |  (arena of nodes)  |   |                            |    |
//! |  +---------+----------+   +-------------+--------------+    |
//! |            |                            |                   |
//! |            v                            v                   |
//! |  +-----------------------------------------------------+   |
//! |  |    select -> expand -> simulate -> backpropagate    |   |
//! |  +-----------------------------------------------------+   |
//! +-------------------------------------------------------------+
//! ```
//!
//! # Reward convention
//!
//! A node's `total_reward` is expressed from the perspective of the player to
//! move at its parent, i.e. the player who chose the node's action. Playout
//! rewards lie in `[0, 1]` and are negated once per level on the way up, so
//! stored means lie in `[-1, 1]`.

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::UctConfig;
pub use node::{NodeId, SearchNode};
pub use policy::{uct_value, DEFAULT_EXPLORATION};
pub use search::{run_uct, search, SearchError, SearchResult, UctSearch};
pub use tree::{ChildStats, SearchTree, TreeStats};
