//! CSV export of per-step timing series
//!
//! The benchmark's interchange format with plotting tooling: one row per
//! move index, one column group per strategy, rows aligned by index so
//! series can be compared directly. Plot rendering itself stays outside
//! this crate.

use std::{collections::BTreeSet, path::Path};

use statrs::statistics::Statistics;

use crate::analysis::StepTimings;

/// One strategy's per-step timings with its display label
pub struct LabelledSeries<'a> {
    pub label: &'a str,
    pub timings: &'a StepTimings,
}

impl<'a> LabelledSeries<'a> {
    pub fn new(label: &'a str, timings: &'a StepTimings) -> Self {
        Self { label, timings }
    }
}

/// Write per-step timings for any number of labelled series to one CSV.
///
/// The header is `step` followed by `<label>_samples`, `<label>_mean_s`,
/// `<label>_min_s`, `<label>_max_s` per series. Rows cover the union of
/// move indices observed across all series, ascending; a series without
/// samples at an index contributes empty fields on that row.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_step_timing_csv(
    series: &[LabelledSeries<'_>],
    path: &Path,
) -> Result<(), crate::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["step".to_string()];
    for s in series {
        header.push(format!("{}_samples", s.label));
        header.push(format!("{}_mean_s", s.label));
        header.push(format!("{}_min_s", s.label));
        header.push(format!("{}_max_s", s.label));
    }
    writer.write_record(&header)?;

    let steps: BTreeSet<usize> = series
        .iter()
        .flat_map(|s| s.timings.steps())
        .collect();

    for step in steps {
        let mut row = vec![step.to_string()];
        for s in series {
            match s.timings.samples(step) {
                Some(samples) if !samples.is_empty() => {
                    row.push(samples.len().to_string());
                    row.push(format!("{:.9}", samples.iter().mean()));
                    row.push(format!(
                        "{:.9}",
                        samples.iter().copied().fold(f64::INFINITY, f64::min)
                    ));
                    row.push(format!(
                        "{:.9}",
                        samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
                    ));
                }
                _ => {
                    row.extend(std::iter::repeat_n(String::new(), 4));
                }
            }
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
