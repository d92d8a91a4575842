//! TicTacToe game implementation for the UCT engine
//!
//! This crate provides a complete reference implementation of TicTacToe
//! demonstrating how to implement the `Game` trait for the search engine.
//!
//! Squares are numbered row by row:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Game;
//! use games_tictactoe::State;
//!
//! let state = State::new().apply(4).unwrap();
//! assert_eq!(state.legal_actions().len(), 8);
//! ```

use std::fmt;

use engine_core::game_utils::{opponent, outcome_score, Outcome};
use engine_core::typed::{ActionId, Game, GameError};

/// Number of squares (and actions).
pub const NUM_ACTIONS: usize = 9;

/// Winning positions (rows, columns, diagonals)
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// TicTacToe game state
///
/// Represents the complete state of a TicTacToe game including the board,
/// current player, and winner information. Once the game is over
/// `current_player` keeps pointing at the player who made the final move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// Board representation: 0=empty, 1=X, 2=O
    board: [u8; NUM_ACTIONS],
    /// Current player: 1=X, 2=O
    current_player: u8,
    outcome: Outcome,
}

impl State {
    /// Create a new initial game state
    pub fn new() -> Self {
        Self {
            board: [0; NUM_ACTIONS],
            current_player: 1, // X goes first
            outcome: Outcome::Ongoing,
        }
    }

    /// Play a sequence of moves from the initial position.
    pub fn from_moves(moves: &[ActionId]) -> Result<Self, GameError> {
        let mut state = Self::new();
        for &action in moves {
            state.step(action)?;
        }
        Ok(state)
    }

    /// Player to move (or the last mover once the game is over).
    pub fn current_player(&self) -> u8 {
        self.current_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Cell contents at `square`: 0=empty, 1=X, 2=O.
    pub fn cell(&self, square: usize) -> u8 {
        self.board[square]
    }

    /// Parse a human move: either a square number (`4`) or `row col` (`1 1`).
    pub fn parse_action(input: &str) -> Option<ActionId> {
        let parts: Vec<usize> = input
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;

        let square = match parts.as_slice() {
            [square] => *square,
            [row, col] if *row < 3 && *col < 3 => row * 3 + col,
            _ => return None,
        };

        (square < NUM_ACTIONS).then_some(square as ActionId)
    }

    /// Check for winner on the board
    fn check_winner(board: &[u8; NUM_ACTIONS]) -> Outcome {
        for line in &LINES {
            let [a, b, c] = *line;
            if board[a] != 0 && board[a] == board[b] && board[b] == board[c] {
                return Outcome::Win(board[a]);
            }
        }

        // Check for draw (board full but no winner)
        if board.iter().all(|&cell| cell != 0) {
            return Outcome::Draw;
        }

        Outcome::Ongoing
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for State {
    fn legal_actions(&self) -> Vec<ActionId> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..NUM_ACTIONS as ActionId)
            .filter(|&pos| self.board[pos as usize] == 0)
            .collect()
    }

    fn step(&mut self, action: ActionId) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        let square = action as usize;
        if square >= NUM_ACTIONS || self.board[square] != 0 {
            return Err(GameError::IllegalAction(action));
        }

        self.board[square] = self.current_player;
        self.outcome = Self::check_winner(&self.board);

        // Switch player if game not over
        if !self.outcome.is_over() {
            self.current_player = opponent(self.current_player);
        }

        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.outcome.is_over()
    }

    fn score(&self) -> f32 {
        outcome_score(self.outcome, self.current_player)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let square = row * 3 + col;
                    match self.board[square] {
                        1 => "X".to_string(),
                        2 => "O".to_string(),
                        _ => square.to_string(),
                    }
                })
                .collect();
            writeln!(f, " {} ", cells.join(" | "))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
