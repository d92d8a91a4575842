//! UCT search tree with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices.
//! Children are allocated after their parent, so index order is a valid
//! topological order of the tree. Dropping the tree drops every node and
//! every game state it holds, whether or not the search completed.

use engine_core::{ActionId, Game};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::node::{NodeId, SearchNode};
use crate::policy::{self, ChildView};
use crate::search::SearchError;

/// UCT tree with arena-based node storage.
#[derive(Debug, Clone)]
pub struct SearchTree<G> {
    /// Arena storing all nodes
    nodes: Vec<SearchNode<G>>,

    /// Root node index (always 0)
    root: NodeId,
}

impl<G: Game> SearchTree<G> {
    /// Create a new tree holding only the root position.
    pub fn new(root_state: G) -> Self {
        Self {
            nodes: vec![SearchNode::new_root(root_state)],
            root: NodeId::ROOT,
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode<G> {
        &self.nodes[id.index()]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<G> {
        &mut self.nodes[id.index()]
    }

    fn allocate(&mut self, node: SearchNode<G>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[SearchNode<G>] {
        &self.nodes
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, action: ActionId, state: G) -> NodeId {
        let child_id = self.allocate(SearchNode::new_child(parent_id, action, state));
        self.get_mut(parent_id).children.push((action, child_id));
        child_id
    }

    /// Select the child of `node_id` to descend into using UCT.
    /// Returns `None` if the node has no children.
    pub fn select_child(&self, node_id: NodeId, c: f32) -> Option<NodeId> {
        let node = self.get(node_id);
        let views = node.children.iter().map(|(_, id)| {
            let child = self.get(*id);
            ChildView {
                visits: child.visits,
                total_reward: child.total_reward,
            }
        });

        policy::select(node.visits, views, c).map(|index| node.children[index].1)
    }

    /// Descend from the root while the current node is expanded and not
    /// terminal. Returns the path from root to the reached leaf, inclusive.
    pub fn select(&self, c: f32) -> Vec<NodeId> {
        let mut path = vec![self.root];
        let mut current = self.root;

        while !self.get(current).is_leaf() {
            match self.select_child(current, c) {
                Some(child) => {
                    path.push(child);
                    current = child;
                }
                None => break,
            }
        }

        path
    }

    /// Create one child per legal action of `node_id`, in legal-action order.
    ///
    /// Returns the number of children created. Terminal nodes and nodes
    /// without legal actions stay unexpanded and yield 0. Expanding a node a
    /// second time is an error.
    pub fn expand(&mut self, node_id: NodeId) -> Result<usize, SearchError> {
        let node = self.get(node_id);
        if node.expanded {
            return Err(SearchError::InvalidState(format!(
                "node {} is already expanded",
                node_id.0
            )));
        }
        if node.is_terminal {
            return Ok(0);
        }

        let actions = node.state.legal_actions();
        if has_duplicates(&actions) {
            return Err(SearchError::InvalidState(format!(
                "duplicate legal actions at node {}: {actions:?}",
                node_id.0
            )));
        }

        // Build every child state before touching the arena
        let children = actions
            .iter()
            .map(|&action| node.state.apply(action).map(|state| (action, state)))
            .collect::<Result<Vec<_>, _>>()?;

        let count = children.len();
        for (action, state) in children {
            self.add_child(node_id, action, state);
        }
        if count > 0 {
            self.get_mut(node_id).expanded = true;
        }

        Ok(count)
    }

    /// Pick the node to simulate from after expanding `node_id`:
    /// a uniformly random child, or the node itself if it has none.
    pub fn choose_playout_child<R: Rng>(&self, node_id: NodeId, rng: &mut R) -> NodeId {
        self.get(node_id)
            .children
            .choose(rng)
            .map_or(node_id, |(_, id)| *id)
    }

    /// Play uniformly random moves from a copy of the node's state until the
    /// game ends. The node itself is never modified.
    ///
    /// The returned reward is expressed for the player who moved into
    /// `node_id`: [`Game::score`] reports the last mover's result, so an odd
    /// number of playout plies flips it to `1 - score`.
    pub fn simulate<R: Rng>(
        &self,
        node_id: NodeId,
        rng: &mut R,
        max_plies: Option<u32>,
    ) -> Result<f32, SearchError> {
        let node = self.get(node_id);
        if node.expanded {
            return Err(SearchError::InvalidState(format!(
                "cannot simulate from expanded node {}",
                node_id.0
            )));
        }

        let mut state = node.state.clone();
        let mut plies = 0u32;

        while !state.is_terminal() {
            if max_plies.is_some_and(|cap| plies >= cap) {
                return Err(SearchError::PlayoutLimit(plies));
            }

            let actions = state.legal_actions();
            let action = *actions.choose(rng).ok_or(SearchError::NoLegalMoves)?;
            state.step(action)?;
            plies += 1;
        }

        let score = state.score();
        Ok(if plies % 2 == 0 { score } else { 1.0 - score })
    }

    /// Add `reward` to the last node of `path`, then walk back towards the
    /// root negating the reward at each level (opponent's perspective).
    pub fn backpropagate(&mut self, path: &[NodeId], reward: f32) {
        debug_assert!(
            path.windows(2)
                .all(|pair| self.get(pair[1]).parent == Some(pair[0])),
            "backpropagation path is not a parent chain"
        );

        let mut current = reward;
        for &node_id in path.iter().rev() {
            self.get_mut(node_id).update(current);
            current = -current;
        }
    }

    /// The root action whose child has the highest mean value.
    ///
    /// Unvisited children are skipped and ties keep the earliest child.
    /// Returns `(action, mean_value)` or `None` if no child was visited.
    pub fn best_action(&self) -> Option<(ActionId, f32)> {
        let mut best: Option<(ActionId, f32)> = None;
        let mut threshold = f32::NEG_INFINITY;

        for &(action, id) in &self.get(self.root).children {
            if let Some(value) = self.get(id).mean_value() {
                if value > threshold {
                    threshold = value;
                    best = Some((action, value));
                }
            }
        }

        best
    }

    /// Per-child statistics of the root, in legal-action order.
    pub fn root_children(&self) -> Vec<ChildStats> {
        self.get(self.root)
            .children
            .iter()
            .map(|&(action, id)| {
                let child = self.get(id);
                ChildStats {
                    action,
                    visits: child.visits,
                    mean_value: child.mean_value(),
                }
            })
            .collect()
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_value: root.mean_value(),
            max_depth: self.compute_max_depth(),
        }
    }

    fn compute_max_depth(&self) -> u32 {
        // Parents always precede their children in the arena
        let mut depths = vec![0u32; self.nodes.len()];
        for (index, node) in self.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                depths[index] = depths[parent.index()] + 1;
            }
        }
        depths.into_iter().max().unwrap_or(0)
    }
}

fn has_duplicates(actions: &[ActionId]) -> bool {
    let mut sorted = actions.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).any(|pair| pair[0] == pair[1])
}

/// Visit statistics of one root child.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildStats {
    pub action: ActionId,
    pub visits: u32,
    pub mean_value: Option<f32>,
}

/// Statistics about a search tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: Option<f32>,
    pub max_depth: u32,
}
