//! Exhaustive minimax search

use super::{SearchResult, Searcher, terminal_score};
use crate::tictactoe::{BoardState, Player};

/// Exhaustive minimax engine
///
/// Recursively enumerates every legal move down to the terminal boards,
/// with no pruning and no memoization. This is the slow reference
/// implementation that [`super::AlphaBeta`] is benchmarked against.
pub struct Minimax;

/// Exact game value of a position under optimal play by both sides.
fn minimax_value(state: &BoardState) -> i32 {
    if state.is_terminal() {
        return terminal_score(state);
    }

    let maximizing = state.to_move == Player::X;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in state.legal_moves() {
        let next = state
            .make_move(pos)
            .expect("legal move generation should not fail");
        let value = minimax_value(&next);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

impl Searcher for Minimax {
    fn search(&self, state: &BoardState) -> SearchResult {
        if state.is_terminal() {
            return SearchResult {
                best_move: None,
                score: terminal_score(state),
            };
        }

        let maximizing = state.to_move == Player::X;
        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        // Strict-improvement updates keep the first optimal move in
        // ascending position order, the documented tie-break.
        for pos in state.legal_moves() {
            let next = state
                .make_move(pos)
                .expect("legal move generation should not fail");
            let value = minimax_value(&next);
            let improves = if maximizing {
                value > best_score
            } else {
                value < best_score
            };
            if improves {
                best_score = value;
                best_move = Some(pos);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
        }
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
