//! Search tree node representation.
//!
//! Each node owns a snapshot of the game position reached by taking an action
//! from its parent, plus the visit/reward statistics used by the tree policy.

use engine_core::{ActionId, Game};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root is always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode<G> {
    /// Parent node index (`None` for root). Never an ownership edge.
    pub parent: Option<NodeId>,

    /// Action that led to this node from parent (`None` for root)
    pub action: Option<ActionId>,

    /// Owned copy of the game position at this node
    pub state: G,

    /// Whether the position is terminal, cached at creation
    pub is_terminal: bool,

    /// Children: Vec of (action, NodeId) pairs in legal-action order.
    /// Empty until node is expanded.
    pub children: Vec<(ActionId, NodeId)>,

    /// Set once when children are populated, never reverted
    pub expanded: bool,

    /// Number of iterations whose path went through this node
    pub visits: u32,

    /// Sum of rewards backpropagated through this node, from the perspective
    /// of the player to move at the parent. Accumulated in `f32`, so sums
    /// beyond 2^24 lose integer precision.
    pub total_reward: f32,
}

impl<G: Game> SearchNode<G> {
    /// Create a new root node.
    pub fn new_root(state: G) -> Self {
        Self::new(None, None, state)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: ActionId, state: G) -> Self {
        Self::new(Some(parent), Some(action), state)
    }

    fn new(parent: Option<NodeId>, action: Option<ActionId>, state: G) -> Self {
        let is_terminal = state.is_terminal();
        Self {
            parent,
            action,
            state,
            is_terminal,
            children: Vec::new(),
            expanded: false,
            visits: 0,
            total_reward: 0.0,
        }
    }
}

impl<G> SearchNode<G> {
    /// Empirical value `total_reward / visits`.
    /// Returns `None` if never visited.
    #[inline]
    pub fn mean_value(&self) -> Option<f32> {
        (self.visits > 0).then(|| self.total_reward / self.visits as f32)
    }

    /// Record one backpropagated reward.
    #[inline]
    pub fn update(&mut self, reward: f32) {
        self.visits += 1;
        self.total_reward += reward;
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visits > 0
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Check if this is a leaf of the expanded tree (terminal or not expanded).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_terminal || !self.expanded
    }

    /// Look up the child reached by `action`.
    pub fn child(&self, action: ActionId) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, id)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_tictactoe::State;

    #[test]
    fn test_new_root() {
        let node = SearchNode::new_root(State::new());

        assert!(node.parent.is_none());
        assert!(node.action.is_none());
        assert_eq!(node.visits, 0);
        assert!(!node.is_terminal);
        assert!(!node.expanded);
        assert!(node.children.is_empty());
        assert_eq!(node.state, State::new());
    }

    #[test]
    fn test_new_child_caches_terminal() {
        let state = State::from_moves(&[0, 3, 1, 4, 2]).unwrap();
        let node = SearchNode::new_child(NodeId::ROOT, 2, state);

        assert_eq!(node.parent, Some(NodeId::ROOT));
        assert_eq!(node.action, Some(2));
        assert!(node.is_terminal);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_mean_value() {
        let mut node = SearchNode::new_root(State::new());

        // Unvisited
        assert_eq!(node.mean_value(), None);
        assert!(!node.is_visited());

        // After visits
        node.update(1.0);
        node.update(0.0);
        node.update(-1.0);
        node.update(1.0);
        assert_eq!(node.visits, 4);
        assert!((node.mean_value().unwrap() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_is_leaf() {
        let mut node = SearchNode::new_root(State::new());

        // Initially a leaf (not expanded)
        assert!(node.is_leaf());

        node.children.push((0, NodeId(1)));
        node.expanded = true;
        assert!(!node.is_leaf());
        assert!(node.is_expanded());
    }

    #[test]
    fn test_child_lookup() {
        let mut node = SearchNode::new_root(State::new());
        node.children.push((4, NodeId(1)));
        node.children.push((8, NodeId(2)));

        assert_eq!(node.child(8), Some(NodeId(2)));
        assert_eq!(node.child(0), None);
    }

    #[test]
    fn test_node_id_index() {
        assert_eq!(NodeId::ROOT.index(), 0);
        assert_eq!(NodeId(17).index(), 17);
    }
}
