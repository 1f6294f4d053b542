//! Adversarial search engines for Tic-Tac-Toe
//!
//! Two interchangeable engines implement the [`Searcher`] trait:
//! - [`Minimax`] - exhaustive game-tree enumeration
//! - [`AlphaBeta`] - the same enumeration with alpha-beta pruning
//!
//! Both are pure functions of the board state. They share the score
//! convention of the game-tree literature for this game: +1 when X wins,
//! -1 when O wins, 0 for a draw; X maximizes and O minimizes. They also
//! share the move enumeration order (ascending position) and the
//! strict-improvement update rule, so for every position they return the
//! same score AND the same best move. Pruning only changes how many nodes
//! get visited, never the answer.

pub mod alphabeta;
pub mod minimax;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, Player};

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;

/// Result of searching a position
///
/// `best_move` is `None` exactly when the searched board was already
/// terminal; `score` is then the terminal score of the board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Option<usize>,
    pub score: i32,
}

/// Searcher trait - unified interface over the search engines
///
/// The trial runner and CLI hold engines as `&dyn Searcher`, so the same
/// benchmarking code drives either one. Implementations must be
/// deterministic: equally-scored moves are broken by ascending position.
pub trait Searcher: Send {
    /// Find the best move and its score for the side to move.
    ///
    /// A terminal input yields `best_move: None` with the terminal score.
    fn search(&self, state: &BoardState) -> SearchResult;

    /// Name of the engine, used for labelling timing series and reports.
    fn name(&self) -> &str;
}

/// Score of a terminal board: +1 X wins, -1 O wins, 0 draw.
///
/// A board with no legal moves and no winner counts as a draw even when
/// reached through a non-standard starting position.
pub(crate) fn terminal_score(state: &BoardState) -> i32 {
    match state.winner() {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
