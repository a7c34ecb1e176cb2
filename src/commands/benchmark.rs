//! Benchmark command
//!
//! Plays many independent games in parallel and aggregates win rate and
//! deduction statistics. Each game gets its own seed derived from the base
//! seed, so a whole run is reproducible.

use crate::commands::play::{GameStatus, PlayConfig, PlayOutcome, play_game};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub games: usize,
    pub height: usize,
    pub width: usize,
    pub mines: usize,
    pub seed: u64,
}

/// Aggregated result of a benchmark run
pub struct BenchmarkResult {
    pub games: usize,
    pub wins: usize,
    pub explosions: usize,
    pub stuck: usize,
    pub win_rate: f64,
    pub average_moves: f64,
    /// Share of all moves that were deduced rather than guessed
    pub deduced_share: f64,
    /// Game count keyed by number of moves taken
    pub move_distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run `config.games` independent games and aggregate the outcomes
///
/// Games are independent (one engine, one field, one RNG each), so they
/// run across a rayon pool; game `i` uses seed `config.seed + i`.
///
/// # Errors
///
/// Returns an error if the board parameters are invalid; individual games
/// cannot fail once the parameters are validated.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let pb = ProgressBar::new(config.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<PlayOutcome> = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let mut game = PlayConfig::new(config.height, config.width, config.mines);
            game.seed = Some(config.seed.wrapping_add(index as u64));
            let outcome = play_game(&game);
            pb.inc(1);
            outcome
        })
        .collect::<Result<_>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut wins = 0;
    let mut explosions = 0;
    let mut stuck = 0;
    let mut total_moves = 0;
    let mut deduced_moves = 0;
    let mut move_distribution: HashMap<usize, usize> = HashMap::new();

    for outcome in &outcomes {
        match outcome.status {
            GameStatus::Won => wins += 1,
            GameStatus::Exploded(_) => explosions += 1,
            GameStatus::Stuck => stuck += 1,
        }
        total_moves += outcome.moves.len();
        deduced_moves += outcome.deduced_moves();
        *move_distribution.entry(outcome.moves.len()).or_insert(0) += 1;
    }

    let games = outcomes.len();
    Ok(BenchmarkResult {
        games,
        wins,
        explosions,
        stuck,
        win_rate: wins as f64 / games as f64,
        average_moves: total_moves as f64 / games as f64,
        deduced_share: if total_moves == 0 {
            0.0
        } else {
            deduced_moves as f64 / total_moves as f64
        },
        move_distribution,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchmarkConfig {
        BenchmarkConfig {
            games: 10,
            height: 5,
            width: 5,
            mines: 3,
            seed: 1234,
        }
    }

    #[test]
    fn benchmark_runs_and_accounts_for_every_game() {
        let result = run_benchmark(&small_config()).unwrap();

        assert_eq!(result.games, 10);
        assert_eq!(result.wins + result.explosions + result.stuck, 10);
        assert!((0.0..=1.0).contains(&result.win_rate));
        assert!((0.0..=1.0).contains(&result.deduced_share));
    }

    #[test]
    fn move_distribution_sums_to_game_count() {
        let result = run_benchmark(&small_config()).unwrap();
        let total: usize = result.move_distribution.values().sum();
        assert_eq!(total, result.games);
    }

    #[test]
    fn benchmark_is_reproducible_from_its_seed() {
        let first = run_benchmark(&small_config()).unwrap();
        let second = run_benchmark(&small_config()).unwrap();

        assert_eq!(first.wins, second.wins);
        assert_eq!(first.explosions, second.explosions);
        assert_eq!(first.stuck, second.stuck);
        assert_eq!(first.move_distribution, second.move_distribution);
    }

    #[test]
    fn benchmark_rejects_invalid_boards() {
        let mut config = small_config();
        config.mines = 25;
        assert!(run_benchmark(&config).is_err());
    }
}
