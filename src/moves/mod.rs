//! Move representation and legality.
//!
//! A [`Move`] is a pure description of one transfer between zones; it
//! carries no state and is consumed once. [`validate`] is the single
//! legality predicate in the engine: `Board::apply_move` runs it before
//! mutating, the enumerator only emits moves that pass it, and the
//! interactive layer calls it (via `Board::is_legal`) to vet drag-drop
//! attempts. There is exactly one copy of the rules, so the automated
//! and interactive paths cannot diverge.

mod enumerate;

pub use enumerate::legal_moves;

use serde::{Deserialize, Serialize};

use crate::board::{Board, FOUNDATION_PILES, TABLEAU_COLUMNS};
use crate::core::card::Rank;
use crate::core::error::EngineError;

/// Where a move takes its card from.
///
/// The locator identifies a single card; for tableau sources the whole
/// face-up run from `row` to the column top moves together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSource {
    /// The top card of the waste pile.
    Waste,
    /// A position in a tableau column. `row` 0 is the column bottom.
    Tableau { column: usize, row: usize },
    /// The top card of a foundation pile.
    Foundation { pile: usize },
}

impl std::fmt::Display for CardSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardSource::Waste => write!(f, "waste top"),
            CardSource::Tableau { column, row } => {
                write!(f, "tableau column {column} row {row}")
            }
            CardSource::Foundation { pile } => write!(f, "foundation pile {pile}"),
        }
    }
}

/// One transfer of cards between zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move a single card or a face-up run onto a tableau column.
    ToTableau { source: CardSource, column: usize },

    /// Move exactly one card onto a foundation pile.
    ToFoundation { source: CardSource, pile: usize },

    /// Deal up to the configured draw count from the stock to the
    /// waste, or, when the stock is empty, recycle the entire waste
    /// back into the stock face-down.
    Cycle,
}

impl Move {
    /// The source position of this move, if it has one.
    #[must_use]
    pub fn source(self) -> Option<CardSource> {
        match self {
            Move::ToTableau { source, .. } | Move::ToFoundation { source, .. } => Some(source),
            Move::Cycle => None,
        }
    }
}

/// Check a move against the current board without mutating anything.
///
/// Returns `EmptyZone` when the source position holds no card and
/// `IllegalMove` when the transfer breaks a rule. `Ok(())` guarantees
/// the same move applies cleanly on the unchanged board.
pub fn validate(board: &Board, mv: Move) -> Result<(), EngineError> {
    match mv {
        Move::Cycle => {
            if board.stock().is_empty() && board.waste().is_empty() {
                Err(EngineError::IllegalMove {
                    reason: "stock and waste are both empty",
                })
            } else {
                Ok(())
            }
        }

        Move::ToTableau { source, column } => {
            if column >= TABLEAU_COLUMNS {
                return Err(EngineError::IllegalMove {
                    reason: "no such tableau column",
                });
            }
            if let CardSource::Tableau { column: src, .. } = source {
                if src == column {
                    return Err(EngineError::IllegalMove {
                        reason: "source and destination column are the same",
                    });
                }
            }
            check_source(board, source)?;

            let head = board.peek(source)?;
            match board.column(column).last() {
                None if head.rank == Rank::King => Ok(()),
                None => Err(EngineError::IllegalMove {
                    reason: "only a king may start an empty column",
                }),
                Some(top) if head.can_stack_on(*top) => Ok(()),
                Some(_) => Err(EngineError::IllegalMove {
                    reason: "card does not continue the column",
                }),
            }
        }

        Move::ToFoundation { source, pile } => {
            if pile >= FOUNDATION_PILES {
                return Err(EngineError::IllegalMove {
                    reason: "no such foundation pile",
                });
            }
            if matches!(source, CardSource::Foundation { .. }) {
                return Err(EngineError::IllegalMove {
                    reason: "cards never move between foundations",
                });
            }
            check_source(board, source)?;
            if let CardSource::Tableau { column, row } = source {
                if row + 1 != board.column(column).len() {
                    return Err(EngineError::IllegalMove {
                        reason: "only a single top card may move to a foundation",
                    });
                }
            }

            let card = board.peek(source)?;
            match board.foundation(pile).last() {
                None if card.rank == Rank::Ace => Ok(()),
                None => Err(EngineError::IllegalMove {
                    reason: "only an ace may start a foundation",
                }),
                Some(top)
                    if card.suit == top.suit && card.rank.ordinal() == top.rank.ordinal() + 1 =>
                {
                    Ok(())
                }
                Some(_) => Err(EngineError::IllegalMove {
                    reason: "card does not continue the foundation",
                }),
            }
        }
    }
}

/// Bounds and face-up checks on a source position.
fn check_source(board: &Board, source: CardSource) -> Result<(), EngineError> {
    match source {
        // Emptiness is caught by the peek that follows.
        CardSource::Waste => Ok(()),
        CardSource::Foundation { pile } => {
            if pile >= FOUNDATION_PILES {
                Err(EngineError::IllegalMove {
                    reason: "no such foundation pile",
                })
            } else {
                Ok(())
            }
        }
        CardSource::Tableau { column, row } => {
            if column >= TABLEAU_COLUMNS {
                return Err(EngineError::IllegalMove {
                    reason: "no such tableau column",
                });
            }
            let cards = board.column(column);
            if row >= cards.len() {
                return Err(EngineError::EmptyZone { source });
            }
            if !cards[row..].iter().all(|c| c.face_up) {
                return Err(EngineError::IllegalMove {
                    reason: "run is not fully face-up",
                });
            }
            Ok(())
        }
    }
}
