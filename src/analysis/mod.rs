//! Statistical analysis of collected timings

pub mod timing;

pub use timing::{StepTimings, TimingSummary};
