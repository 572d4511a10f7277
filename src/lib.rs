//! # klondike-engine
//!
//! A Klondike solitaire rules engine with pluggable automated players.
//!
//! ## Design Principles
//!
//! 1. **One rule set**: a single legality predicate backs move
//!    application, move enumeration, and interactive move vetting.
//!    The automated and interactive paths cannot disagree.
//!
//! 2. **Validate before mutate**: `Board::apply_move` checks the whole
//!    move first, so every application is atomic and no error needs a
//!    rollback.
//!
//! 3. **Deterministic by seed**: the shuffle and every strategy's dice
//!    are independent streams of one game seed. Equal seeds replay
//!    equal games, which keeps batch results reproducible.
//!
//! ## Modules
//!
//! - `core`: cards, configuration, errors, RNG
//! - `board`: zone state, setup/deal, move application
//! - `moves`: move variants, legality, exhaustive enumeration
//! - `strategy`: the `Strategy` trait, the ranked and random players,
//!   and the name registry
//! - `game`: one board plus one player, driven turn by turn
//! - `bench`: batch play with win/turn/time aggregation

pub mod bench;
pub mod board;
pub mod core;
pub mod game;
pub mod moves;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    standard_deck, Card, Color, DrawCount, EngineError, GameConfig, GameRng, GameRngState, Rank,
    Suit, DECK_SIZE,
};

pub use crate::board::{Board, BoardSnapshot, FOUNDATION_PILES, TABLEAU_COLUMNS, TABLEAU_DEAL};

pub use crate::moves::{legal_moves, validate, CardSource, Move};

pub use crate::strategy::{Greedy, Strategy, UniformRandom};

pub use crate::game::Game;

pub use crate::bench::{BenchConfig, BenchReport};
