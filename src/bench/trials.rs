//! Repeated-trial timing experiments

use std::time::Instant;

use crate::{
    analysis::{StepTimings, TimingSummary},
    bench::{TrialObserver, simulate_game},
    search::Searcher,
    tictactoe::BoardState,
};

/// Default number of trials per strategy
pub const DEFAULT_TRIALS: usize = 10;

/// The fixed starting boards, one game each per trial:
/// the empty board, a board with a single opening mark, and an asymmetric
/// mid-game board (O to move, X threatening the middle row).
pub const STARTING_BOARDS: [&str; 3] = [".........", ".X.......", "O...XX..."];

/// Parse and validate the fixed starting boards.
fn starting_boards() -> Result<Vec<BoardState>, crate::Error> {
    STARTING_BOARDS
        .iter()
        .map(|label| {
            let board = BoardState::from_string(label).map_err(|e| {
                crate::Error::InvalidStartingBoard {
                    label: label.to_string(),
                    reason: e.to_string(),
                }
            })?;
            if board.is_terminal() {
                return Err(crate::Error::InvalidStartingBoard {
                    label: label.to_string(),
                    reason: "board is already terminal".to_string(),
                });
            }
            Ok(board)
        })
        .collect()
}

/// Run `trials` timed self-play repetitions for one search engine.
///
/// Each trial plays one game from every starting board, timing the whole
/// game; per-move search timings accumulate in a single [`StepTimings`]
/// shared across all games of the run. The observer is ticked exactly once
/// per completed trial. The returned summary carries `3 * trials` game
/// durations.
///
/// # Errors
///
/// Any simulation failure aborts the whole run; partial aggregates are
/// never returned. An empty run (`trials == 0`) fails with
/// [`crate::Error::EmptySampleSet`].
pub fn run_trials(
    searcher: &dyn Searcher,
    trials: usize,
    observer: &mut dyn TrialObserver,
) -> Result<TimingSummary, crate::Error> {
    let boards = starting_boards()?;

    let mut results = Vec::with_capacity(trials * boards.len());
    let mut per_step = StepTimings::new();

    observer.on_trials_start(trials)?;
    for trial in 0..trials {
        for &board in &boards {
            let started = Instant::now();
            simulate_game(searcher, &mut per_step, board)?;
            results.push(started.elapsed().as_secs_f64());
        }
        observer.on_trial_end(trial)?;
    }
    observer.on_trials_end()?;

    TimingSummary::from_samples(searcher.name(), trials, results, per_step)
}
