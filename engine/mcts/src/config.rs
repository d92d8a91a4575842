//! UCT search configuration parameters.

use crate::policy::DEFAULT_EXPLORATION;
use crate::search::SearchError;

/// Configuration for UCT search.
#[derive(Debug, Clone, PartialEq)]
pub struct UctConfig {
    /// Number of select/expand/simulate/backpropagate iterations per search.
    pub iterations: u32,

    /// Exploration constant `c` in the UCT formula.
    /// Higher values encourage exploration, lower values favor exploitation.
    /// `1/sqrt(2)` is the classic choice for rewards in `[0, 1]`.
    pub exploration_constant: f32,

    /// Abort a random playout after this many plies.
    /// `None` trusts the game to terminate on its own.
    pub max_playout_plies: Option<u32>,
}

impl Default for UctConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration_constant: DEFAULT_EXPLORATION,
            max_playout_plies: None,
        }
    }
}

impl UctConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 200,
            max_playout_plies: Some(1_000),
            ..Self::default()
        }
    }

    /// Builder pattern: set number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: set exploration constant.
    pub fn with_exploration_constant(mut self, c: f32) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Builder pattern: cap playout length.
    pub fn with_max_playout_plies(mut self, plies: Option<u32>) -> Self {
        self.max_playout_plies = plies;
        self
    }

    /// Reject settings the search cannot run with.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.iterations == 0 {
            return Err(SearchError::InvalidConfig(
                "iterations must be at least 1".into(),
            ));
        }
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }
        if self.max_playout_plies == Some(0) {
            return Err(SearchError::InvalidConfig(
                "max playout plies must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UctConfig::default();
        assert_eq!(config.iterations, 1000);
        assert!((config.exploration_constant - 0.707_106_8).abs() < 1e-6);
        assert_eq!(config.max_playout_plies, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = UctConfig::default()
            .with_iterations(100)
            .with_exploration_constant(1.4)
            .with_max_playout_plies(Some(64));

        assert_eq!(config.iterations, 100);
        assert!((config.exploration_constant - 1.4).abs() < 1e-6);
        assert_eq!(config.max_playout_plies, Some(64));
    }

    #[test]
    fn test_testing_config() {
        let config = UctConfig::for_testing();
        assert_eq!(config.iterations, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = UctConfig::default().with_iterations(0);
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_exploration_rejected() {
        for c in [f32::NAN, f32::INFINITY, -0.5] {
            let config = UctConfig::default().with_exploration_constant(c);
            assert!(config.validate().is_err(), "accepted c = {c}");
        }
        // Pure exploitation is allowed
        assert!(UctConfig::default()
            .with_exploration_constant(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_zero_playout_cap_rejected() {
        let config = UctConfig::default().with_max_playout_plies(Some(0));
        assert!(config.validate().is_err());
    }
}
