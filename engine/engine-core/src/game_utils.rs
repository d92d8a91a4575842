//! Shared utilities for two-player game implementations
//!
//! Keeps the winner bookkeeping and score convention identical across games.

/// Winner of a two-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game still running
    Ongoing,
    /// Player 1 (1) or player 2 (2) won
    Win(u8),
    Draw,
}

impl Outcome {
    /// Whether the game has finished.
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Return the other player of a two-player game (1 <-> 2).
#[inline]
pub fn opponent(player: u8) -> u8 {
    if player == 1 {
        2
    } else {
        1
    }
}

/// Score a finished game from one player's perspective.
///
/// # Returns
/// * `1.0` if `player` won
/// * `0.0` if `player` lost
/// * `0.5` for draws and unfinished games
///
/// # Example
/// ```
/// use engine_core::game_utils::{outcome_score, Outcome};
///
/// assert_eq!(outcome_score(Outcome::Win(1), 1), 1.0);
/// assert_eq!(outcome_score(Outcome::Win(1), 2), 0.0);
/// assert_eq!(outcome_score(Outcome::Draw, 2), 0.5);
/// ```
#[inline]
pub fn outcome_score(outcome: Outcome, player: u8) -> f32 {
    match outcome {
        Outcome::Win(winner) if winner == player => 1.0,
        Outcome::Win(_) => 0.0,
        Outcome::Draw | Outcome::Ongoing => 0.5,
    }
}

/// Decide the outcome of a game by counting pieces.
///
/// `board` holds 0 for empty cells and 1/2 for the owning player.
pub fn majority_outcome(board: &[u8]) -> Outcome {
    let p1 = board.iter().filter(|&&cell| cell == 1).count();
    let p2 = board.iter().filter(|&&cell| cell == 2).count();

    match p1.cmp(&p2) {
        std::cmp::Ordering::Greater => Outcome::Win(1),
        std::cmp::Ordering::Less => Outcome::Win(2),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}
