//! End-to-end check of the CSV reporting sink on real benchmark output.

use searchbench::{
    bench::{NullObserver, run_trials},
    export::{LabelledSeries, write_step_timing_csv},
    search::{AlphaBeta, Minimax},
};

#[test]
fn benchmark_series_export_aligns_by_move_index() {
    let trials = 2;
    let alphabeta = run_trials(&AlphaBeta, trials, &mut NullObserver).unwrap();
    let minimax = run_trials(&Minimax, trials, &mut NullObserver).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simulation-data.csv");

    write_step_timing_csv(
        &[
            LabelledSeries::new(&alphabeta.label, &alphabeta.per_step),
            LabelledSeries::new(&minimax.label, &minimax.per_step),
        ],
        &path,
    )
    .unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let header = reader.headers().unwrap().clone();
    assert_eq!(
        header.iter().collect::<Vec<_>>(),
        vec![
            "step",
            "alphabeta_samples",
            "alphabeta_mean_s",
            "alphabeta_min_s",
            "alphabeta_max_s",
            "minimax_samples",
            "minimax_mean_s",
            "minimax_min_s",
            "minimax_max_s",
        ]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    // Move indices 0..=8 are observed for both strategies
    assert_eq!(rows.len(), 9);
    for (idx, row) in rows.iter().enumerate() {
        assert_eq!(row[0].parse::<usize>().unwrap(), idx);
    }

    // All three games per trial pass through move index 0; only the
    // empty-board game reaches index 8. Identical for both strategies.
    for base in [1, 5] {
        assert_eq!(rows[0][base].parse::<usize>().unwrap(), 3 * trials);
        assert_eq!(rows[8][base].parse::<usize>().unwrap(), trials);
    }

    // Mean lies within [min, max] on every populated row
    for row in &rows {
        for base in [1, 5] {
            if row[base].is_empty() {
                continue;
            }
            let mean: f64 = row[base + 1].parse().unwrap();
            let min: f64 = row[base + 2].parse().unwrap();
            let max: f64 = row[base + 3].parse().unwrap();
            assert!(min <= mean && mean <= max);
        }
    }
}
