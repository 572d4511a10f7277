//! Core types: cards, configuration, errors, and RNG.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{standard_deck, Card, Color, Rank, Suit, DECK_SIZE};
pub use config::{DrawCount, GameConfig};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
