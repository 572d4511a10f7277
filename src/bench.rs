//! Batch play: run many automated games and aggregate the results.
//!
//! The harness owns the turn limit and the win/time bookkeeping; the
//! rules all live in [`Board`](crate::board::Board) and the strategies.
//! Reports are serializable so an external tool can plot distributions.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::error::EngineError;
use crate::game::Game;

/// Configuration for a batch run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Number of games to play.
    pub games: usize,
    /// Turn cap per game; a game still unsolved at the cap counts as a
    /// loss.
    pub max_turns: usize,
    /// Draw count and strategy for every game.
    pub game: GameConfig,
    /// Seed for the whole batch. Equal configs reproduce equal reports
    /// (timings aside).
    pub seed: u64,
}

impl BenchConfig {
    pub fn new(game: GameConfig) -> Self {
        Self {
            games: 10_000,
            max_turns: 400,
            game,
            seed: 0,
        }
    }
}

/// Aggregated results of a batch run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BenchReport {
    /// Games played.
    pub games: usize,
    /// Games solved within the turn cap.
    pub wins: usize,
    /// Turns taken by each winning game.
    pub turn_counts: Vec<u32>,
    /// Wall-clock duration of each winning game, in microseconds.
    pub times_us: Vec<u64>,
}

impl BenchReport {
    /// Win rate in percent.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            100.0 * self.wins as f64 / self.games as f64
        }
    }

    /// Mean turns per winning game.
    #[must_use]
    pub fn average_turns(&self) -> f64 {
        if self.turn_counts.is_empty() {
            0.0
        } else {
            self.turn_counts.iter().map(|&t| t as f64).sum::<f64>()
                / self.turn_counts.len() as f64
        }
    }

    /// Mean wall-clock time per winning game, in microseconds.
    #[must_use]
    pub fn average_time_us(&self) -> f64 {
        if self.times_us.is_empty() {
            0.0
        } else {
            self.times_us.iter().map(|&t| t as f64).sum::<f64>() / self.times_us.len() as f64
        }
    }
}

/// Play the configured batch and aggregate wins, turn counts, and
/// times.
///
/// One game instance is reused across the batch: each `setup_game`
/// draws a fresh shuffle from the game's RNG stream, so the batch is
/// reproducible from the single seed.
pub fn run(config: &BenchConfig) -> Result<BenchReport, EngineError> {
    let mut game = Game::new(&config.game, config.seed)?;
    let mut report = BenchReport {
        games: config.games,
        ..BenchReport::default()
    };

    for _ in 0..config.games {
        game.setup_game();
        let start = Instant::now();

        for turn in 0..config.max_turns {
            game.run_automated_turn()?;

            if game.is_solved() {
                report.wins += 1;
                report.turn_counts.push(turn as u32 + 1);
                report.times_us.push(start.elapsed().as_micros() as u64);
                break;
            }
        }
    }

    Ok(report)
}
