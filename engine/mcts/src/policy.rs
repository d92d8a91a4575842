//! UCT tree policy.
//!
//! Pure functions deciding which child to descend into. They only see sibling
//! statistics, never the tree itself.

/// Default exploration constant `c = 1/sqrt(2)`.
pub const DEFAULT_EXPLORATION: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Statistics of one sibling as seen by the tree policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildView {
    pub visits: u32,
    pub total_reward: f32,
}

/// Upper confidence bound of a visited child.
///
/// `uct = total_reward / visits + c * sqrt(2 * ln(parent_visits) / visits)`
///
/// `visits` must be non-zero; unvisited children are handled by [`select`]
/// before any score is computed.
#[inline]
pub fn uct_value(total_reward: f32, visits: u32, parent_visits: u32, c: f32) -> f32 {
    debug_assert!(visits > 0, "UCT is undefined for unvisited children");
    let visits = visits as f32;
    let exploitation = total_reward / visits;
    let exploration = c * (2.0 * (parent_visits as f32).ln() / visits).sqrt();
    exploitation + exploration
}

/// Pick the index of the child to descend into.
///
/// The first child with zero visits wins immediately. Otherwise the child with
/// the strictly greatest UCT value is chosen, so ties keep the earliest child.
/// Returns `None` when there are no children.
pub fn select<I>(parent_visits: u32, children: I, c: f32) -> Option<usize>
where
    I: IntoIterator<Item = ChildView>,
{
    let mut best: Option<(usize, f32)> = None;

    for (index, child) in children.into_iter().enumerate() {
        if child.visits == 0 {
            return Some(index);
        }

        let value = uct_value(child.total_reward, child.visits, parent_visits, c);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((index, value)),
        }
    }

    best.map(|(index, _)| index)
}
