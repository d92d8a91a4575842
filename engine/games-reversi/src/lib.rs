//! Reversi (Othello) game implementation for the UCT engine
//!
//! Two players place discs on an 8x8 board. A placement must outflank at
//! least one line of opponent discs, which are then flipped. A player without
//! a legal placement has to pass.
//!
//! # Board Layout
//!
//! Squares are numbered row-major, `square = row * 8 + col`:
//! ```text
//!        0  1  2  3  4  5  6  7
//! Row 0: [ 0][ 1][ 2][ 3][ 4][ 5][ 6][ 7]
//! Row 1: [ 8][ 9][10][11][12][13][14][15]
//!  ...
//! Row 7: [56][57][58][59][60][61][62][63]
//! ```
//!
//! Action [`PASS`] (64) is the only legal action when the player to move has
//! no placement but the opponent still does.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Game;
//! use games_reversi::State;
//!
//! let state = State::new();
//! assert_eq!(state.legal_actions(), vec![19, 26, 37, 44]);
//! ```

use std::fmt;

use engine_core::game_utils::{majority_outcome, opponent, outcome_score, Outcome};
use engine_core::typed::{ActionId, Game, GameError};

/// Board dimensions
pub const SIZE: usize = 8;
pub const BOARD_SIZE: usize = SIZE * SIZE; // 64

/// Action used to skip a turn.
pub const PASS: ActionId = BOARD_SIZE as ActionId;

/// Black moves first.
pub const BLACK: u8 = 1;
pub const WHITE: u8 = 2;

/// Placements available before the board is full.
const MAX_PLACEMENTS: u32 = (BOARD_SIZE - 4) as u32;

/// The eight neighbour directions as (row, col) deltas.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reversi game state
///
/// Once the game is over `current_player` keeps pointing at the player who
/// made the final move, which is the perspective [`Game::score`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// Board representation: 0=empty, 1=black, 2=white
    board: [u8; BOARD_SIZE],
    /// Player to move: 1=black, 2=white
    current_player: u8,
    /// Discs placed since the opening position
    placements: u32,
    done: bool,
}

impl State {
    /// Create the standard opening position
    pub fn new() -> Self {
        let mut board = [0; BOARD_SIZE];
        board[27] = WHITE;
        board[36] = WHITE;
        board[28] = BLACK;
        board[35] = BLACK;

        Self {
            board,
            current_player: BLACK,
            placements: 0,
            done: false,
        }
    }

    /// Play a sequence of moves from the opening position.
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

    /// Cell contents at `square`: 0=empty, 1=black, 2=white.
    pub fn cell(&self, square: usize) -> u8 {
        self.board[square]
    }

    /// Number of discs owned by `player`.
    pub fn disc_count(&self, player: u8) -> usize {
        self.board.iter().filter(|&&cell| cell == player).count()
    }

    /// Discs placed so far (passes are not counted).
    pub fn placements(&self) -> u32 {
        self.placements
    }

    /// Winner by disc count. `Ongoing` while the game is running.
    pub fn outcome(&self) -> Outcome {
        if self.done {
            majority_outcome(&self.board)
        } else {
            Outcome::Ongoing
        }
    }

    /// Parse a human move: `row col`, a square number, or `pass`.
    pub fn parse_action(input: &str) -> Option<ActionId> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("pass") {
            return Some(PASS);
        }

        let parts: Vec<usize> = input
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;

        match parts.as_slice() {
            [square] if *square <= BOARD_SIZE => Some(*square as ActionId),
            [row, col] if *row < SIZE && *col < SIZE => Some((row * SIZE + col) as ActionId),
            _ => None,
        }
    }

    /// Squares where `player` may place a disc.
    fn placements_for(&self, player: u8) -> Vec<ActionId> {
        (0..BOARD_SIZE)
            .filter(|&square| self.board[square] == 0 && self.flip_mask(square, player) != 0)
            .map(|square| square as ActionId)
            .collect()
    }

    fn has_placement(&self, player: u8) -> bool {
        (0..BOARD_SIZE)
            .any(|square| self.board[square] == 0 && self.flip_mask(square, player) != 0)
    }

    /// Bit mask of opponent discs flipped by `player` placing at `square`.
    fn flip_mask(&self, square: usize, player: u8) -> u64 {
        let other = opponent(player);
        let row = (square / SIZE) as i32;
        let col = (square % SIZE) as i32;
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut line = 0u64;
            let (mut r, mut c) = (row + dr, col + dc);

            while Self::on_board(r, c) && self.board[Self::pos(r, c)] == other {
                line |= 1u64 << Self::pos(r, c);
                r += dr;
                c += dc;
            }

            // A run of opponent discs only counts when capped by our own disc
            if line != 0 && Self::on_board(r, c) && self.board[Self::pos(r, c)] == player {
                flips |= line;
            }
        }

        flips
    }

    #[inline]
    fn on_board(row: i32, col: i32) -> bool {
        (0..SIZE as i32).contains(&row) && (0..SIZE as i32).contains(&col)
    }

    #[inline]
    fn pos(row: i32, col: i32) -> usize {
        row as usize * SIZE + col as usize
    }

    fn place(&mut self, square: usize, flips: u64) {
        let player = self.current_player;
        let other = opponent(player);

        for target in 0..BOARD_SIZE {
            if flips & (1u64 << target) != 0 {
                self.board[target] = player;
            }
        }
        self.board[square] = player;
        self.placements += 1;

        let finished = self.placements == MAX_PLACEMENTS
            || self.disc_count(other) == 0
            || (!self.has_placement(other) && !self.has_placement(player));

        if finished {
            self.done = true;
        } else {
            self.current_player = other;
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for State {
    fn legal_actions(&self) -> Vec<ActionId> {
        if self.done {
            return Vec::new();
        }

        let placements = self.placements_for(self.current_player);
        if placements.is_empty() {
            vec![PASS]
        } else {
            placements
        }
    }

    fn step(&mut self, action: ActionId) -> Result<(), GameError> {
        if self.done {
            return Err(GameError::GameOver);
        }

        if action == PASS {
            if self.has_placement(self.current_player) {
                return Err(GameError::IllegalAction(action));
            }
            self.current_player = opponent(self.current_player);
            return Ok(());
        }

        let square = action as usize;
        if square >= BOARD_SIZE || self.board[square] != 0 {
            return Err(GameError::IllegalAction(action));
        }

        let flips = self.flip_mask(square, self.current_player);
        if flips == 0 {
            return Err(GameError::IllegalAction(action));
        }

        self.place(square, flips);
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.done
    }

    fn score(&self) -> f32 {
        outcome_score(majority_outcome(&self.board), self.current_player)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in 0..SIZE {
            write!(f, "  {row}")?;
            for col in 0..SIZE {
                let symbol = match self.board[row * SIZE + col] {
                    BLACK => 'X',
                    WHITE => 'O',
                    _ => '.',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            "X: {}  O: {}",
            self.disc_count(BLACK),
            self.disc_count(WHITE)
        )
    }
}

#[cfg(test)]
mod tests;
