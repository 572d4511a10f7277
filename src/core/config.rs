//! Game configuration: draw count and strategy selection.
//!
//! Both values are fixed when a game is constructed. Anything invalid
//! is rejected up front with `InvalidConfiguration`; a constructed
//! config is always playable.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// How many cards a cycle deals from the stock to the waste.
///
/// Standard Klondike plays draw-one or draw-three; nothing else is
/// supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawCount {
    One,
    Three,
}

impl DrawCount {
    /// The number of cards dealt per cycle.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            DrawCount::One => 1,
            DrawCount::Three => 3,
        }
    }

    /// Parse a raw draw count.
    #[must_use]
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(DrawCount::One),
            3 => Some(DrawCount::Three),
            _ => None,
        }
    }
}

/// Configuration for one game: draw count plus the identifier of the
/// automated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub draw_count: DrawCount,
    pub strategy: String,
}

impl GameConfig {
    /// Create a config from already-typed parts.
    ///
    /// The strategy name is validated when the game is constructed;
    /// use [`GameConfig::from_raw`] to validate eagerly.
    pub fn new(draw_count: DrawCount, strategy: impl Into<String>) -> Self {
        Self {
            draw_count,
            strategy: strategy.into(),
        }
    }

    /// Create a config from untyped inputs, validating both.
    pub fn from_raw(draw_count: usize, strategy: &str) -> Result<Self, EngineError> {
        let draw_count =
            DrawCount::from_count(draw_count).ok_or_else(|| EngineError::InvalidConfiguration {
                message: format!("draw count must be 1 or 3, got {draw_count}"),
            })?;

        if !crate::strategy::is_known(strategy) {
            return Err(EngineError::InvalidConfiguration {
                message: format!("unknown strategy name: \"{strategy}\""),
            });
        }

        Ok(Self::new(draw_count, strategy))
    }
}
