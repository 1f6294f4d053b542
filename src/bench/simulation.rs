//! Single-game self-play simulation with per-move timing

use std::time::Instant;

use crate::{
    analysis::StepTimings,
    search::Searcher,
    tictactoe::{BoardState, GameOutcome},
};

/// What happened in one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Positions played, in order
    pub moves: Vec<usize>,
    /// Terminal outcome
    pub outcome: GameOutcome,
}

/// Play one game to completion, the same engine choosing for both sides.
///
/// At each turn the wall clock brackets exactly the `search` call; the
/// elapsed time is recorded in `step_timings` under the move index within
/// this game (0-based). Board application and bookkeeping happen outside
/// the timed region.
///
/// # Errors
///
/// A searcher that returns no move for a non-terminal board, or a move the
/// board rejects, has violated its contract; the error propagates and
/// aborts the run. Neither can occur with a correct engine.
pub fn simulate_game(
    searcher: &dyn Searcher,
    step_timings: &mut StepTimings,
    starting_board: BoardState,
) -> Result<GameRecord, crate::Error> {
    let mut state = starting_board;
    let mut moves = Vec::new();

    loop {
        if let Some(outcome) = state.outcome() {
            return Ok(GameRecord { moves, outcome });
        }

        let step = moves.len();
        let started = Instant::now();
        let result = searcher.search(&state);
        let elapsed = started.elapsed();

        let pos = result
            .best_move
            .ok_or_else(|| crate::Error::SearcherStalled {
                searcher: searcher.name().to_string(),
                state: state.encode(),
            })?;
        state = state.make_move(pos)?;

        step_timings.record(step, elapsed);
        moves.push(pos);
    }
}
