//! Trial runner behavior: sample counts, observer protocol, and internal
//! consistency of the reported statistics.

use searchbench::{
    Result,
    bench::{NullObserver, TrialObserver, run_trials},
    search::{AlphaBeta, Minimax},
};

/// Observer that records every callback it receives.
#[derive(Default)]
struct RecordingObserver {
    started_with: Option<usize>,
    trial_ends: Vec<usize>,
    finished: bool,
}

impl TrialObserver for RecordingObserver {
    fn on_trials_start(&mut self, total_trials: usize) -> Result<()> {
        self.started_with = Some(total_trials);
        Ok(())
    }

    fn on_trial_end(&mut self, trial_num: usize) -> Result<()> {
        self.trial_ends.push(trial_num);
        Ok(())
    }

    fn on_trials_end(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

#[test]
fn produces_three_game_durations_per_trial() {
    let trials = 4;
    let summary = run_trials(&AlphaBeta, trials, &mut NullObserver).unwrap();

    assert_eq!(summary.trials, trials);
    assert_eq!(summary.games, 3 * trials);
    assert_eq!(summary.results.len(), 3 * trials);
    assert!(summary.results.iter().all(|&d| d >= 0.0));
}

#[test]
fn observer_ticks_exactly_once_per_trial() {
    let trials = 5;
    let mut observer = RecordingObserver::default();
    run_trials(&AlphaBeta, trials, &mut observer).unwrap();

    assert_eq!(observer.started_with, Some(trials));
    assert_eq!(observer.trial_ends, vec![0, 1, 2, 3, 4]);
    assert!(observer.finished);
}

#[test]
fn per_step_keys_cover_exactly_the_observed_move_indices() {
    let summary = run_trials(&AlphaBeta, 2, &mut NullObserver).unwrap();

    // The empty-board game is a nine-move draw, so every index 0..=8 shows
    // up; no game can exceed nine moves.
    assert_eq!(summary.per_step.steps(), (0..9).collect::<Vec<_>>());
}

#[test]
fn per_step_sample_counts_follow_the_fixed_game_lengths() {
    // Self-play is deterministic and all three starting boards lead to
    // draws, which fill the board: 9, 8, and 6 moves respectively.
    let trials = 3;
    let summary = run_trials(&Minimax, trials, &mut NullObserver).unwrap();

    assert_eq!(summary.per_step.total_samples(), trials * (9 + 8 + 6));
    // All three games pass through move index 0
    assert_eq!(summary.per_step.samples(0).unwrap().len(), 3 * trials);
    // Only the empty-board game reaches move index 8
    assert_eq!(summary.per_step.samples(8).unwrap().len(), trials);
}

#[test]
fn reported_statistics_match_recomputation_from_raw_results() {
    let summary = run_trials(&AlphaBeta, 3, &mut NullObserver).unwrap();
    let results = &summary.results;

    let n = results.len() as f64;
    let mean = results.iter().sum::<f64>() / n;
    let variance =
        results.iter().map(|&d| (d - mean).powi(2)).sum::<f64>() / (n - 1.0);

    assert!((summary.mean - mean).abs() < 1e-12);
    assert!((summary.std_dev - variance.sqrt()).abs() < 1e-12);

    let minimum = results.iter().copied().fold(f64::INFINITY, f64::min);
    let maximum = results.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(summary.minimum, minimum);
    assert_eq!(summary.maximum, maximum);
}

#[test]
fn summaries_are_serializable() {
    let summary = run_trials(&AlphaBeta, 1, &mut NullObserver).unwrap();
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"label\":\"alphabeta\""));
    assert!(json.contains("\"per_step\""));
}
