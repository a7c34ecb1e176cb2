//! Minesweeper AI - CLI
//!
//! Plays Minesweeper by logical deduction: safe cells are probed when they
//! can be proven safe, and uniform random guesses fill the gaps.

use anyhow::Result;
use clap::{Parser, Subcommand};
use minesweeper_ai::{
    commands::{BenchmarkConfig, PlayConfig, play_game, run_benchmark},
    output::{print_benchmark_result, print_play_outcome},
};

#[derive(Parser)]
#[command(
    name = "minesweeper_ai",
    about = "Minesweeper player that deduces safe cells and mines from revealed clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board height in rows
    #[arg(long, global = true, default_value = "8")]
    height: usize,

    /// Board width in columns
    #[arg(long, global = true, default_value = "8")]
    width: usize,

    /// Number of mines to place
    #[arg(short, long, global = true, default_value = "8")]
    mines: usize,

    /// Seed for mine placement and random guesses (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game (default)
    Play {
        /// Show every move as it is taken
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play many games and report win rate and deduction statistics
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to a single game if no command given.
    let command = cli.command.unwrap_or(Commands::Play { verbose: false });

    match command {
        Commands::Play { verbose } => {
            let mut config = PlayConfig::new(cli.height, cli.width, cli.mines);
            config.seed = cli.seed;

            let outcome = play_game(&config)?;
            print_play_outcome(&outcome, verbose);
            Ok(())
        }
        Commands::Benchmark { games } => {
            println!(
                "Playing {games} games on a {}x{} board with {} mines...",
                cli.height, cli.width, cli.mines
            );

            let config = BenchmarkConfig {
                games,
                height: cli.height,
                width: cli.width,
                mines: cli.mines,
                seed: cli.seed.unwrap_or_else(rand::random),
            };

            let result = run_benchmark(&config)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
