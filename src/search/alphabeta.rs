//! Alpha-beta pruned minimax search

use super::{SearchResult, Searcher, terminal_score};
use crate::tictactoe::{BoardState, Player};

/// Window bounds just outside the {-1, 0, +1} score range.
const WINDOW_MIN: i32 = -2;
const WINDOW_MAX: i32 = 2;

/// Alpha-beta pruned minimax engine
///
/// Same recursion as [`super::Minimax`], threaded with an (alpha, beta)
/// window: a node's remaining children are skipped once alpha >= beta,
/// since their values can no longer affect the decision above. Fail-soft:
/// the value returned for a pruned subtree is a bound, but the root is
/// searched with the full window, so its score and best move are exact
/// and identical to exhaustive minimax.
pub struct AlphaBeta;

fn alpha_beta_value(state: &BoardState, mut alpha: i32, mut beta: i32) -> i32 {
    if state.is_terminal() {
        return terminal_score(state);
    }

    if state.to_move == Player::X {
        let mut best = i32::MIN;
        for pos in state.legal_moves() {
            let next = state
                .make_move(pos)
                .expect("legal move generation should not fail");
            best = best.max(alpha_beta_value(&next, alpha, beta));
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in state.legal_moves() {
            let next = state
                .make_move(pos)
                .expect("legal move generation should not fail");
            best = best.min(alpha_beta_value(&next, alpha, beta));
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

impl Searcher for AlphaBeta {
    fn search(&self, state: &BoardState) -> SearchResult {
        if state.is_terminal() {
            return SearchResult {
                best_move: None,
                score: terminal_score(state),
            };
        }

        let maximizing = state.to_move == Player::X;
        let mut alpha = WINDOW_MIN;
        let mut beta = WINDOW_MAX;
        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        // Same enumeration order and strict-improvement rule as Minimax.
        // A child whose exact value beats the running best is searched with
        // that best as its window edge, so the improvement comes back exact;
        // ties and worse children come back as bounds and are ignored either
        // way. The sequence of recorded improvements is therefore identical
        // to the exhaustive engine's.
        for pos in state.legal_moves() {
            let next = state
                .make_move(pos)
                .expect("legal move generation should not fail");
            let value = alpha_beta_value(&next, alpha, beta);
            if maximizing {
                if value > best_score {
                    best_score = value;
                    best_move = Some(pos);
                }
                alpha = alpha.max(best_score);
            } else {
                if value < best_score {
                    best_score = value;
                    best_move = Some(pos);
                }
                beta = beta.min(best_score);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
        }
    }

    fn name(&self) -> &str {
        "alphabeta"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Minimax;

    #[test]
    fn empty_board_is_a_draw_under_optimal_play() {
        let result = AlphaBeta.search(&BoardState::new());
        assert_eq!(result.score, 0);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn takes_the_immediate_win() {
        let board = BoardState::from_string("XX.OO....").unwrap();
        let result = AlphaBeta.search(&board);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn terminal_board_yields_score_without_move() {
        let board = BoardState::from_string("OOOXX.X..").unwrap();
        let result = AlphaBeta.search(&board);
        assert_eq!(result, SearchResult {
            best_move: None,
            score: -1
        });
    }

    #[test]
    fn matches_minimax_on_early_positions() {
        // One game's worth of positions along the first-move frontier
        for opening in 0..9 {
            let board = BoardState::new().make_move(opening).unwrap();
            let pruned = AlphaBeta.search(&board);
            let exhaustive = Minimax.search(&board);
            assert_eq!(
                pruned, exhaustive,
                "engines disagree after opening move {opening}"
            );
        }
    }
}
