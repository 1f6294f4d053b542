//! Timing samples and their summary statistics

use std::{collections::HashMap, time::Duration};

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Per-step timing accumulator
///
/// Maps a move index within a game (0-based) to the durations, in seconds,
/// of every search decision made at that index. One accumulator is owned by
/// the trial runner for the duration of a run and threaded `&mut` through
/// every simulated game, so series from different games and starting boards
/// line up by move index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepTimings {
    samples: HashMap<usize, Vec<f64>>,
}

impl StepTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one search duration under the given move index.
    pub fn record(&mut self, step: usize, elapsed: Duration) {
        self.samples
            .entry(step)
            .or_default()
            .push(elapsed.as_secs_f64());
    }

    /// Move indices with at least one sample, ascending.
    pub fn steps(&self) -> Vec<usize> {
        let mut steps: Vec<usize> = self.samples.keys().copied().collect();
        steps.sort_unstable();
        steps
    }

    /// Durations recorded at a move index.
    pub fn samples(&self, step: usize) -> Option<&[f64]> {
        self.samples.get(&step).map(Vec::as_slice)
    }

    /// Total number of recorded durations across all steps.
    pub fn total_samples(&self) -> usize {
        self.samples.values().map(Vec::len).sum()
    }
}

/// Aggregate statistics over one strategy's benchmark run
///
/// Carries the raw per-game duration sequence and the per-step map next to
/// the aggregates, so reported numbers can always be recomputed from the
/// data they came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Strategy label the samples belong to
    pub label: String,
    /// Number of trials run (each trial plays one game per starting board)
    pub trials: usize,
    /// Number of games played, equal to the length of `results`
    pub games: usize,
    /// Mean whole-game duration in seconds
    pub mean: f64,
    /// Shortest whole-game duration in seconds
    pub minimum: f64,
    /// Longest whole-game duration in seconds
    pub maximum: f64,
    /// Sample standard deviation of the whole-game durations; 0.0 when
    /// fewer than two samples exist
    pub std_dev: f64,
    /// Raw whole-game durations in collection order
    pub results: Vec<f64>,
    /// Per-move-index search durations accumulated across all games
    pub per_step: StepTimings,
}

impl TimingSummary {
    /// Fold raw samples into a summary.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptySampleSet`] when `results` is empty;
    /// statistics over zero samples have no defined value and must not be
    /// reported as such.
    pub fn from_samples(
        label: &str,
        trials: usize,
        results: Vec<f64>,
        per_step: StepTimings,
    ) -> Result<Self, crate::Error> {
        if results.is_empty() {
            return Err(crate::Error::EmptySampleSet {
                label: label.to_string(),
            });
        }

        let mean = results.iter().mean();
        let minimum = results.iter().copied().fold(f64::INFINITY, f64::min);
        let maximum = results.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Sample standard deviation needs at least two samples; statrs
        // reports NaN below that, which we pin to zero per the contract.
        let std_dev = if results.len() < 2 {
            0.0
        } else {
            results.iter().std_dev()
        };

        Ok(TimingSummary {
            label: label.to_string(),
            trials,
            games: results.len(),
            mean,
            minimum,
            maximum,
            std_dev,
            results,
            per_step,
        })
    }
}
