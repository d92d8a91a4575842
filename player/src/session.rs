//! Game loop shared by every game and play mode.
//!
//! Players alternate strictly (forced passes are explicit actions), so the
//! side to move is derived from the number of moves played.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use engine_core::{ActionId, Game};
use mcts::{run_uct, UctConfig};
use rand::Rng;
use tracing::{debug, info};

/// Settings for one game.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub search: UctConfig,
    /// Side whose moves are read from input (`None` for self-play)
    pub human_side: Option<u8>,
    pub max_turns: Option<u32>,
    /// Shown in the prompt for human moves
    pub move_hint: &'static str,
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win(u8),
    Draw,
}

impl GameResult {
    /// Translate a last-mover score into a result.
    pub fn from_score(last_mover: u8, score: f32) -> Self {
        if score > 0.5 {
            GameResult::Win(last_mover)
        } else if score < 0.5 {
            GameResult::Win(other_side(last_mover))
        } else {
            GameResult::Draw
        }
    }
}

/// Why the game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Finished(GameResult),
    TurnLimit,
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub moves: Vec<ActionId>,
    pub stop: StopReason,
}

/// Player to move after `moves_played` moves; player 1 starts.
pub fn side_to_move(moves_played: usize) -> u8 {
    if moves_played % 2 == 0 {
        1
    } else {
        2
    }
}

fn other_side(side: u8) -> u8 {
    3 - side
}

fn symbol(side: u8) -> char {
    if side == 1 {
        'X'
    } else {
        'O'
    }
}

/// Play `state` to completion (or until the turn cap or end of input),
/// printing the board after every move.
pub fn play<G, P, R, I, O>(
    mut state: G,
    options: &PlayOptions,
    parse: P,
    rng: &mut R,
    input: &mut I,
    out: &mut O,
) -> Result<GameSummary>
where
    G: Game + Display,
    P: Fn(&str) -> Option<ActionId>,
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut moves = Vec::new();
    writeln!(out, "{state}\n")?;

    let stop = loop {
        if state.is_terminal() {
            let last_mover = side_to_move(moves.len().saturating_sub(1));
            break StopReason::Finished(GameResult::from_score(last_mover, state.score()));
        }

        if options
            .max_turns
            .is_some_and(|max| moves.len() as u32 >= max)
        {
            break StopReason::TurnLimit;
        }

        let side = side_to_move(moves.len());
        let action = if options.human_side == Some(side) {
            match read_human_move(&state, side, options.move_hint, &parse, input, out)? {
                Some(action) => action,
                None => break StopReason::InputClosed,
            }
        } else {
            let result = run_uct(state.clone(), options.search.clone(), rng)
                .with_context(|| format!("engine search failed at move {}", moves.len() + 1))?;
            info!(
                turn = moves.len() + 1,
                action = result.action,
                value = result.value,
                "Engine move"
            );
            result.action
        };

        state
            .step(action)
            .with_context(|| format!("applying move {action}"))?;
        moves.push(action);

        writeln!(out, "{} plays {action}\n{state}\n", symbol(side))?;
    };

    match stop {
        StopReason::Finished(GameResult::Win(side)) => {
            writeln!(out, "Game over: {} wins", symbol(side))?
        }
        StopReason::Finished(GameResult::Draw) => writeln!(out, "Game over: draw")?,
        StopReason::TurnLimit => writeln!(out, "Stopped after {} moves", moves.len())?,
        StopReason::InputClosed => writeln!(out, "Input closed, ending game")?,
    }
    debug!(moves = moves.len(), ?stop, "Game loop finished");

    Ok(GameSummary { moves, stop })
}

/// Prompt until a legal move is entered. Returns `None` at end of input.
fn read_human_move<G, P, I, O>(
    state: &G,
    side: u8,
    hint: &str,
    parse: &P,
    input: &mut I,
    out: &mut O,
) -> Result<Option<ActionId>>
where
    G: Game,
    P: Fn(&str) -> Option<ActionId>,
    I: BufRead,
    O: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{} to move ({hint}): ", symbol(side))?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("reading move")? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        match parse(&line) {
            None => writeln!(out, "Could not parse '{}'", line.trim())?,
            Some(action) if !state.is_legal(action) => {
                writeln!(out, "Illegal move {action}")?
            }
            Some(action) => return Ok(Some(action)),
        }
    }
}
