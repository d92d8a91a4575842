//! UCT search implementation.
//!
//! Each iteration runs four phases:
//! 1. Selection: Traverse the tree with UCT until an unexpanded or terminal node
//! 2. Expansion: Add one child per legal action, then pick one at random
//! 3. Simulation: Random playout from the picked node to the end of the game
//! 4. Backpropagation: Update statistics along the path, negating per level

use engine_core::{ActionId, Game, GameError};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::UctConfig;
use crate::tree::{ChildStats, SearchTree};

/// Errors that can occur during UCT search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Playout exceeded {0} plies without reaching a terminal state")]
    PlayoutLimit(u32),
}

/// Result of a UCT search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best action to take
    pub action: ActionId,

    /// Mean value of the chosen child, from the root player's perspective
    pub value: f32,

    /// Number of iterations performed
    pub iterations: u32,

    /// Visit statistics of every root child
    pub children: Vec<ChildStats>,
}

/// UCT search state.
///
/// Owns the whole tree; dropping the search releases every node, including
/// after an iteration failed part-way.
#[derive(Debug)]
pub struct UctSearch<G> {
    tree: SearchTree<G>,
    config: UctConfig,
}

impl<G: Game> UctSearch<G> {
    /// Create a new search rooted at `state`.
    ///
    /// Fails if the configuration is unusable or the root has no move to
    /// choose from.
    pub fn new(state: G, config: UctConfig) -> Result<Self, SearchError> {
        config.validate()?;

        if state.is_terminal() || state.legal_actions().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        Ok(Self {
            tree: SearchTree::new(state),
            config,
        })
    }

    /// Run the configured number of iterations and pick the best root action.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<SearchResult, SearchError> {
        for _ in 0..self.config.iterations {
            self.iterate(rng)?;
        }

        let (action, value) = self.tree.best_action().ok_or(SearchError::NoLegalMoves)?;
        let stats = self.tree.stats();

        debug!(
            action,
            value,
            iterations = self.config.iterations,
            nodes = stats.total_nodes,
            max_depth = stats.max_depth,
            "UCT search complete"
        );

        Ok(SearchResult {
            action,
            value,
            iterations: self.config.iterations,
            children: self.tree.root_children(),
        })
    }

    /// Run a single iteration (select -> expand -> simulate -> backpropagate).
    pub fn iterate<R: Rng>(&mut self, rng: &mut R) -> Result<(), SearchError> {
        // Selection: traverse to a leaf
        let mut path = self.tree.select(self.config.exploration_constant);
        let leaf = *path.last().ok_or_else(|| {
            SearchError::InvalidState("selection returned an empty path".into())
        })?;

        // Expansion: grow the leaf and step into a random child
        let node = self.tree.get(leaf);
        let target = if node.is_terminal || node.is_expanded() {
            leaf
        } else {
            self.tree.expand(leaf)?;
            let child = self.tree.choose_playout_child(leaf, rng);
            if child != leaf {
                path.push(child);
            }
            child
        };

        // Simulation
        let reward = self
            .tree
            .simulate(target, rng, self.config.max_playout_plies)?;

        // Backpropagation
        self.tree.backpropagate(&path, reward);

        trace!(
            leaf = target.0,
            path_len = path.len(),
            reward,
            "UCT iteration complete"
        );

        Ok(())
    }

    /// Get the search tree (for debugging/analysis).
    pub fn tree(&self) -> &SearchTree<G> {
        &self.tree
    }

    pub fn config(&self) -> &UctConfig {
        &self.config
    }
}

/// Run a full UCT search with the given configuration.
pub fn run_uct<G, R>(state: G, config: UctConfig, rng: &mut R) -> Result<SearchResult, SearchError>
where
    G: Game,
    R: Rng,
{
    UctSearch::new(state, config)?.run(rng)
}

/// Pick a move for `state` after `iterations` UCT iterations with the
/// default exploration constant.
pub fn search<G, R>(state: G, iterations: u32, rng: &mut R) -> Result<ActionId, SearchError>
where
    G: Game,
    R: Rng,
{
    let config = UctConfig::default().with_iterations(iterations);
    run_uct(state, config, rng).map(|result| result.action)
}
