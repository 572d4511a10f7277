//! Game driver: one board plus one automated player.
//!
//! Each automated turn is a strict sequence — read the board, let the
//! strategy decide, apply the move — with nothing interleaved, so a
//! single mutator owns the board for the whole game.

use crate::board::Board;
use crate::core::config::GameConfig;
use crate::core::error::EngineError;
use crate::core::rng::GameRng;
use crate::moves::Move;
use crate::strategy::{self, Strategy};

/// A running game: board state and the strategy playing it.
///
/// The game seed determines everything: the deck shuffle and the
/// strategy's dice come from independent streams of the same seed, so
/// two games built from equal `(config, seed)` play identically.
#[derive(Debug)]
pub struct Game {
    board: Board,
    strategy: Box<dyn Strategy>,
}

impl Game {
    /// Build a game from a config and seed. The board starts empty;
    /// call [`Game::setup_game`] to deal.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, EngineError> {
        let master = GameRng::new(seed);
        let strategy = strategy::create(&config.strategy, master.for_context("strategy"))?;
        let board = Board::new(config.draw_count, master.for_context("deal"));

        Ok(Self { board, strategy })
    }

    /// Reset and deal a fresh shuffled game.
    pub fn setup_game(&mut self) {
        self.board.setup_game();
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the board is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// The registry name of the strategy playing this game.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Run one decide-and-apply cycle.
    ///
    /// Returns the move made, or `None` when the strategy declined to
    /// move. An `Err` here means the strategy submitted a move the
    /// board rejected — an enumerator/applier inconsistency that must
    /// abort the run, not be swallowed.
    pub fn run_automated_turn(&mut self) -> Result<Option<Move>, EngineError> {
        let Some(mv) = self.strategy.decide(&self.board) else {
            return Ok(None);
        };

        self.board.apply_move(mv)?;
        Ok(Some(mv))
    }
}
