//! Typed Game trait consumed by the search engine
//!
//! A game is modelled as a value type: one instance is one position. The
//! search engine copies positions freely, so implementations should be cheap
//! to clone (fixed-size arrays rather than heap structures where possible).

use std::fmt;

/// Identifier of an action within a game.
///
/// Games are free to choose their own numbering (board squares, columns,
/// sentinel values for a pass), as long as the identifiers returned by
/// [`Game::legal_actions`] are unique within a position.
pub type ActionId = u32;

/// Main trait for game implementations
///
/// The search engine only ever talks to a game through these four
/// capabilities. Everything else (rendering, parsing human input) stays in the
/// game crate.
///
/// # Example
///
/// ```rust
/// use engine_core::typed::{ActionId, Game, GameError};
///
/// /// Take one or two stones; whoever takes the last stone wins.
/// #[derive(Debug, Clone)]
/// struct Nim {
///     stones: u32,
/// }
///
/// impl Game for Nim {
///     fn legal_actions(&self) -> Vec<ActionId> {
///         (1..=self.stones.min(2)).collect()
///     }
///
///     fn step(&mut self, action: ActionId) -> Result<(), GameError> {
///         if action == 0 || action > self.stones.min(2) {
///             return Err(GameError::IllegalAction(action));
///         }
///         self.stones -= action;
///         Ok(())
///     }
///
///     fn is_terminal(&self) -> bool {
///         self.stones == 0
///     }
///
///     fn score(&self) -> f32 {
///         // The player who took the last stone made the final move.
///         1.0
///     }
/// }
///
/// let next = Nim { stones: 3 }.apply(2).unwrap();
/// assert_eq!(next.legal_actions(), vec![1]);
/// ```
pub trait Game: Clone + fmt::Debug {
    /// Legal actions in the current position.
    ///
    /// An empty vector means no move is possible. Games with forced passes
    /// must return an explicit pass action instead of an empty vector.
    fn legal_actions(&self) -> Vec<ActionId>;

    /// Apply `action` in place.
    ///
    /// Must be deterministic. Returns [`GameError::IllegalAction`] when the
    /// action is not in [`Game::legal_actions`]; the position is left
    /// unchanged in that case.
    fn step(&mut self, action: ActionId) -> Result<(), GameError>;

    /// Whether the game is over.
    fn is_terminal(&self) -> bool;

    /// Outcome of a finished game, in `[0, 1]`.
    ///
    /// The value is from the perspective of the player who made the final
    /// move: `1.0` for a win, `0.0` for a loss and `0.5` for a draw. Only
    /// meaningful when [`Game::is_terminal`] holds.
    fn score(&self) -> f32;

    /// Copy the position and apply `action` to the copy.
    fn apply(&self, action: ActionId) -> Result<Self, GameError> {
        let mut next = self.clone();
        next.step(action)?;
        Ok(next)
    }

    /// Check whether `action` is legal in the current position.
    fn is_legal(&self, action: ActionId) -> bool {
        self.legal_actions().contains(&action)
    }
}

/// Error type for game rule violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Illegal action: {0}")]
    IllegalAction(ActionId),
    #[error("Game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counting game: add 1 or 2 to a running total, first to reach 5 wins.
    #[derive(Clone, Debug, PartialEq)]
    struct RaceTo5 {
        total: u32,
    }

    impl Game for RaceTo5 {
        fn legal_actions(&self) -> Vec<ActionId> {
            if self.is_terminal() {
                return Vec::new();
            }
            (1..=2).filter(|a| self.total + a <= 5).collect()
        }

        fn step(&mut self, action: ActionId) -> Result<(), GameError> {
            if self.is_terminal() {
                return Err(GameError::GameOver);
            }
            if !self.is_legal(action) {
                return Err(GameError::IllegalAction(action));
            }
            self.total += action;
            Ok(())
        }

        fn is_terminal(&self) -> bool {
            self.total == 5
        }

        fn score(&self) -> f32 {
            1.0
        }
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let start = RaceTo5 { total: 0 };
        let next = start.apply(2).unwrap();

        assert_eq!(start.total, 0);
        assert_eq!(next.total, 2);
    }

    #[test]
    fn test_apply_illegal_action() {
        let state = RaceTo5 { total: 4 };
        assert_eq!(state.apply(2), Err(GameError::IllegalAction(2)));
        assert_eq!(state.legal_actions(), vec![1]);
    }

    #[test]
    fn test_step_after_game_over() {
        let mut state = RaceTo5 { total: 5 };
        assert!(state.is_terminal());
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.step(1), Err(GameError::GameOver));
    }

    #[test]
    fn test_is_legal() {
        let state = RaceTo5 { total: 3 };
        assert!(state.is_legal(1));
        assert!(state.is_legal(2));
        assert!(!state.is_legal(3));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(GameError::IllegalAction(7).to_string(), "Illegal action: 7");
        assert_eq!(GameError::GameOver.to_string(), "Game is already over");
    }
}
