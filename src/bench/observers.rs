//! Observer port for trial progress
//!
//! Progress display is an external collaborator of the benchmark: the
//! trial runner reports through this trait and never touches a terminal
//! itself, so timing measurements are not skewed by drawing and tests can
//! substitute a recording observer.

use indicatif::{ProgressBar, ProgressStyle};

use crate::Result;

/// Observer trait for monitoring a benchmark run
///
/// The trial runner calls the methods in this order:
/// 1. `on_trials_start(total_trials)` - once before any game is played
/// 2. `on_trial_end(trial_num)` - exactly once per completed trial,
///    regardless of strategy or starting board
/// 3. `on_trials_end()` - once after the last trial
pub trait TrialObserver: Send {
    /// Called before the first trial.
    fn on_trials_start(&mut self, _total_trials: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each completed trial (0-based index).
    fn on_trial_end(&mut self, _trial_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after the last trial.
    fn on_trials_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Observer that reports nothing; backs `--quiet` runs and tests.
pub struct NullObserver;

impl TrialObserver for NullObserver {}

/// Progress bar observer - shows benchmark progress per trial
pub struct ProgressObserver {
    label: String,
    progress_bar: Option<ProgressBar>,
}

impl ProgressObserver {
    /// Create a progress observer labelled with the strategy under test
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            progress_bar: None,
        }
    }
}

impl TrialObserver for ProgressObserver {
    fn on_trials_start(&mut self, total_trials: usize) -> Result<()> {
        let pb = ProgressBar::new(total_trials as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} trials ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        pb.set_message(self.label.clone());
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_trial_end(&mut self, trial_num: usize) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.set_position((trial_num + 1) as u64);
        }
        Ok(())
    }

    fn on_trials_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} done", self.label));
        }
        Ok(())
    }
}
