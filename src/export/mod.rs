//! Data export for external analysis and plotting

pub mod timing_csv;

pub use timing_csv::{LabelledSeries, write_step_timing_csv};
