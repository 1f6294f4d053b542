//! Bench command - time both engines over repeated self-play trials

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::TimingSummary,
    bench::{DEFAULT_TRIALS, NullObserver, ProgressObserver, run_trials},
    cli::output,
    export::{LabelledSeries, write_step_timing_csv},
    search::{AlphaBeta, Minimax, Searcher},
};

#[derive(Parser, Debug)]
#[command(about = "Benchmark alpha-beta against exhaustive minimax")]
pub struct BenchArgs {
    /// Number of trials per strategy (each trial plays one game per
    /// starting board)
    #[arg(long, short = 't', default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Per-step timing CSV written for plotting
    #[arg(long, short = 'o', default_value = "simulation-data.csv")]
    pub output: PathBuf,

    /// Also dump both summaries as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Suppress progress bars
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn execute(args: BenchArgs) -> Result<()> {
    println!("Testing alpha-beta pruning algorithm:");
    let alphabeta_summary = run_benchmark(&AlphaBeta, &args)?;

    println!("Testing minimax algorithm:");
    let minimax_summary = run_benchmark(&Minimax, &args)?;

    output::print_summary(&alphabeta_summary);
    output::print_summary(&minimax_summary);

    write_step_timing_csv(
        &[
            LabelledSeries::new(&alphabeta_summary.label, &alphabeta_summary.per_step),
            LabelledSeries::new(&minimax_summary.label, &minimax_summary.per_step),
        ],
        &args.output,
    )?;
    println!("\nPer-step timings written to: {}", args.output.display());

    if let Some(json_path) = &args.json {
        write_json_report(&[&alphabeta_summary, &minimax_summary], json_path)?;
        println!("Summary JSON written to: {}", json_path.display());
    }

    Ok(())
}

/// Run one strategy's trials with the progress display the flags ask for.
fn run_benchmark(searcher: &dyn Searcher, args: &BenchArgs) -> Result<TimingSummary> {
    let summary = if args.quiet {
        run_trials(searcher, args.trials, &mut NullObserver)?
    } else {
        let mut observer = ProgressObserver::new(searcher.name());
        run_trials(searcher, args.trials, &mut observer)?
    };
    Ok(summary)
}

fn write_json_report(summaries: &[&TimingSummary], path: &PathBuf) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, summaries)?;
    Ok(())
}
