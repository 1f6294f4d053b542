//! searchbench CLI - timing benchmark for adversarial Tic-Tac-Toe search
//!
//! This CLI provides:
//! - Timed self-play benchmark trials comparing alpha-beta to exhaustive
//!   minimax, with statistics and a per-step timing CSV
//! - A position solver for inspecting both engines on a single board

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "searchbench")]
#[command(version, about = "Tic-Tac-Toe search timing benchmark", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run timed benchmark trials for both engines
    Bench(searchbench::cli::commands::bench::BenchArgs),

    /// Solve a single position with both engines
    Solve(searchbench::cli::commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench(args) => searchbench::cli::commands::bench::execute(args),
        Commands::Solve(args) => searchbench::cli::commands::solve::execute(args),
    }
}
