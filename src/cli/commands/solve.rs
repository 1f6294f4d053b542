//! Solve command - evaluate a single position with both engines

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::output,
    search::{AlphaBeta, Minimax, Searcher},
    tictactoe::{BoardState, LineAnalyzer},
};

#[derive(Parser, Debug)]
#[command(about = "Solve a single position with both engines")]
pub struct SolveArgs {
    /// Board as 9 cell characters ('X', 'O', '.'), row-major, with an
    /// optional '_X'/'_O' suffix forcing the side to move.
    /// Example: 'O...XX..._O'
    pub board: String,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = BoardState::from_string(&args.board)?;

    output::print_section(&format!("Position {}", board.encode()));
    println!("{board}");
    println!();

    let immediate_wins = LineAnalyzer::winning_moves(&board.cells, board.to_move);
    if !immediate_wins.is_empty() {
        let mut wins: Vec<usize> = immediate_wins.into_iter().collect();
        wins.sort_unstable();
        output::print_kv("Immediate wins", &format!("{wins:?}"));
    }

    let engines: [&dyn Searcher; 2] = [&AlphaBeta, &Minimax];
    let mut results = Vec::new();
    for engine in engines {
        let result = engine.search(&board);
        let move_display = match result.best_move {
            Some(pos) => pos.to_string(),
            None => "none (terminal)".to_string(),
        };
        output::print_kv(
            engine.name(),
            &format!("move {} score {:+}", move_display, result.score),
        );
        results.push(result);
    }

    if results[0] != results[1] {
        return Err(anyhow!(
            "engines disagree on {}: alphabeta {:?} vs minimax {:?}",
            board.encode(),
            results[0],
            results[1]
        ));
    }

    Ok(())
}
