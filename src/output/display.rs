//! Display functions for command results

use super::formatters::{percent, render_board};
use crate::commands::{BenchmarkResult, GameStatus, MoveKind, PlayOutcome};
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print the result of one game
pub fn print_play_outcome(outcome: &PlayOutcome, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board: {}x{}, {} mines (seed {})",
        outcome.engine.grid().height(),
        outcome.engine.grid().width(),
        outcome.field.mine_count(),
        outcome.seed
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        for (i, record) in outcome.moves.iter().enumerate() {
            let kind = match record.kind {
                MoveKind::Deduced => "deduced".green(),
                MoveKind::Random => "random ".yellow(),
            };
            match record.clue {
                Some(clue) => println!("Move {:>3}: {} {} -> {clue}", i + 1, kind, record.cell),
                None => println!(
                    "Move {:>3}: {} {} -> {}",
                    i + 1,
                    kind,
                    record.cell,
                    "BOOM".red().bold()
                ),
            }
        }
        println!();
    }

    // The solver's view: clues where it probed, flags where it deduced.
    let clues: FxHashMap<_, _> = outcome
        .moves
        .iter()
        .filter_map(|m| m.clue.map(|clue| (m.cell, clue)))
        .collect();
    print!(
        "{}",
        render_board(
            outcome.engine.grid(),
            &clues,
            outcome.engine.knowledge().mines()
        )
    );

    println!();
    match outcome.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Won in {} moves!", outcome.moves.len())
                .green()
                .bold()
        ),
        GameStatus::Exploded(cell) => println!(
            "{}",
            format!("💥 Hit a mine at {cell} after {} moves", outcome.moves.len())
                .red()
                .bold()
        ),
        GameStatus::Stuck => println!(
            "{}",
            format!("❌ No moves left after {} probes", outcome.moves.len())
                .red()
                .bold()
        ),
    }
    println!(
        "   Deduced moves:  {}",
        outcome.deduced_moves().to_string().green()
    );
    println!(
        "   Random guesses: {}",
        outcome.random_moves().to_string().yellow()
    );
    println!(
        "   Mines flagged:  {}/{}",
        outcome.engine.knowledge().mines().len(),
        outcome.field.mine_count()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Wins:             {} ({})",
        result.wins,
        percent(result.win_rate).bright_yellow().bold()
    );
    println!("   Explosions:       {}", result.explosions);
    println!("   Stuck:            {}", result.stuck);

    println!("\n📊 {}", "Moves:".bright_cyan().bold());
    println!("   Average per game: {:.1}", result.average_moves);
    println!(
        "   Deduced share:    {}",
        percent(result.deduced_share).green()
    );

    let mut lengths: Vec<(&usize, &usize)> = result.move_distribution.iter().collect();
    lengths.sort_unstable();
    println!("\n📊 {}", "Game length distribution:".bright_cyan().bold());
    for (moves, count) in lengths {
        println!("   {moves:>3} moves: {count}");
    }

    println!("\n⏱  {}", "Throughput:".bright_cyan().bold());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
}
