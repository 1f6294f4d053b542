//! Self-play benchmark pipeline
//!
//! Drives repeated timed self-play games for one search engine at a time:
//! [`simulation`] plays a single game and records per-move search timings,
//! [`trials`] repeats that over the fixed starting boards and folds the
//! measurements into a [`crate::analysis::TimingSummary`], and
//! [`observers`] is the port through which trial progress is reported.

pub mod observers;
pub mod simulation;
pub mod trials;

pub use observers::{NullObserver, ProgressObserver, TrialObserver};
pub use simulation::{GameRecord, simulate_game};
pub use trials::{DEFAULT_TRIALS, STARTING_BOARDS, run_trials};
