//! Pluggable automated players.
//!
//! A strategy is anything that can look at a read-only board and pick
//! one of the enumerated legal moves (or decline to move). Strategies
//! are trait objects created by name through [`create`], so drivers and
//! the benchmark harness can swap players without touching the board or
//! the enumerator.

mod greedy;
mod random;

pub use greedy::Greedy;
pub use random::UniformRandom;

use rustc_hash::FxHashMap;

use crate::board::Board;
use crate::core::error::EngineError;
use crate::core::rng::GameRng;
use crate::moves::Move;

/// An automated player.
///
/// `decide` takes `&mut self` only for the strategy's private RNG; the
/// board is a read-only snapshot. Implementations must return either
/// `None` or a move that [`legal_moves`](crate::moves::legal_moves)
/// produces for this exact board — anything else is a defect that
/// `apply_move` will surface loudly.
pub trait Strategy: std::fmt::Debug {
    /// The registry identifier of this strategy.
    fn name(&self) -> &'static str;

    /// Pick the next move, or `None` when nothing is legal.
    fn decide(&mut self, board: &Board) -> Option<Move>;
}

type Constructor = fn(GameRng) -> Box<dyn Strategy>;

fn registry() -> FxHashMap<&'static str, Constructor> {
    let mut table: FxHashMap<&'static str, Constructor> = FxHashMap::default();
    table.insert(Greedy::NAME, |rng| Box::new(Greedy::new(rng)));
    table.insert(UniformRandom::NAME, |rng| Box::new(UniformRandom::new(rng)));
    table
}

/// Instantiate a strategy by registry name with its own private RNG.
pub fn create(name: &str, rng: GameRng) -> Result<Box<dyn Strategy>, EngineError> {
    match registry().get(name) {
        Some(constructor) => Ok(constructor(rng)),
        None => Err(EngineError::InvalidConfiguration {
            message: format!("unknown strategy name: \"{name}\""),
        }),
    }
}

/// Whether a strategy name is registered.
#[must_use]
pub fn is_known(name: &str) -> bool {
    registry().contains_key(name)
}

/// All registered strategy names, sorted.
#[must_use]
pub fn available() -> Vec<&'static str> {
    let mut names: Vec<_> = registry().keys().copied().collect();
    names.sort_unstable();
    names
}
