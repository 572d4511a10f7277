//! Board state: the seven tableau columns, four foundation piles,
//! stock, and waste, plus the rules for mutating them.
//!
//! The board is the only mutator in the engine. Every mutation goes
//! through [`Board::apply_move`], which validates the whole move before
//! touching any zone; a rejected move leaves the board byte-for-byte
//! unchanged. Reads (for rendering, input handling, and strategies) go
//! through the slice accessors, [`Board::peek`], and the solved query.

use serde::{Deserialize, Serialize};

use crate::core::card::{standard_deck, Card};
use crate::core::config::DrawCount;
use crate::core::error::EngineError;
use crate::core::rng::GameRng;
use crate::moves::{validate, CardSource, Move};

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// Cards dealt to the tableau by `setup_game`: 1 + 2 + .. + 7.
pub const TABLEAU_DEAL: usize = TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2;

/// A full Klondike board.
///
/// Within each `Vec`, index 0 is the bottom of the pile and the last
/// element is the top. Tableau columns keep any face-down cards below
/// the face-up suffix; the stock is entirely face-down and the waste
/// entirely face-up.
#[derive(Clone, Debug)]
pub struct Board {
    tableau: [Vec<Card>; TABLEAU_COLUMNS],
    foundations: [Vec<Card>; FOUNDATION_PILES],
    stock: Vec<Card>,
    waste: Vec<Card>,
    draw_count: DrawCount,
    rng: GameRng,
}

impl Board {
    /// Create an empty board whose shuffles come from the given RNG.
    #[must_use]
    pub fn new(draw_count: DrawCount, rng: GameRng) -> Self {
        Self {
            tableau: Default::default(),
            foundations: Default::default(),
            stock: Vec::new(),
            waste: Vec::new(),
            draw_count,
            rng,
        }
    }

    /// Create an empty board with a seeded shuffle RNG.
    #[must_use]
    pub fn with_seed(draw_count: DrawCount, seed: u64) -> Self {
        Self::new(draw_count, GameRng::new(seed))
    }

    /// Create a board from explicit zone contents.
    ///
    /// For drivers that reconstruct positions (and for tests). Partial
    /// boards are allowed; the 52-card invariant is a property of dealt
    /// games, not of this constructor. Callers are responsible for
    /// sensible face-up flags (stock face-down, waste face-up).
    #[must_use]
    pub fn from_zones(
        tableau: [Vec<Card>; TABLEAU_COLUMNS],
        foundations: [Vec<Card>; FOUNDATION_PILES],
        stock: Vec<Card>,
        waste: Vec<Card>,
        draw_count: DrawCount,
    ) -> Self {
        Self {
            tableau,
            foundations,
            stock,
            waste,
            draw_count,
            rng: GameRng::from_entropy(),
        }
    }

    // === Setup ===

    /// Reset all zones and deal a fresh shuffled game.
    ///
    /// Deals 28 cards row by row: pass *p* places one card on each
    /// column *p* and rightward, face-up only on column *p* itself.
    /// Column *i* ends up with *i + 1* cards, its last-dealt card on
    /// top and face-up. The remaining 24 cards stay face-down in the
    /// stock; waste and foundations start empty.
    pub fn setup_game(&mut self) {
        for column in &mut self.tableau {
            column.clear();
        }
        for pile in &mut self.foundations {
            pile.clear();
        }
        self.waste.clear();

        self.stock = standard_deck();
        self.rng.shuffle(&mut self.stock);

        for pass in 0..TABLEAU_COLUMNS {
            for column in pass..TABLEAU_COLUMNS {
                let mut card = self.stock.pop().expect("a fresh deck covers the deal");
                card.face_up = column == pass;
                self.tableau[column].push(card);
            }
        }
    }

    // === Queries ===

    /// True when no hidden work remains: stock and waste empty, every
    /// tableau card face-up.
    ///
    /// Foundations are deliberately not required to be complete; once
    /// everything is visible the rest of the game is mechanical.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.stock.is_empty()
            && self.waste.is_empty()
            && self
                .tableau
                .iter()
                .all(|column| column.iter().all(|card| card.face_up))
    }

    /// The card at a source position, without mutating anything.
    pub fn peek(&self, source: CardSource) -> Result<Card, EngineError> {
        let card = match source {
            CardSource::Waste => self.waste.last(),
            CardSource::Tableau { column, row } => {
                self.tableau.get(column).and_then(|cards| cards.get(row))
            }
            CardSource::Foundation { pile } => {
                self.foundations.get(pile).and_then(|cards| cards.last())
            }
        };
        card.copied().ok_or(EngineError::EmptyZone { source })
    }

    /// Covered height of a column: how many of its cards are not the
    /// visible top. Interactive card-picking uses this to lay out hit
    /// targets.
    #[must_use]
    pub fn stack_height(&self, column: usize) -> usize {
        self.tableau[column].len().saturating_sub(1)
    }

    /// Cards in a tableau column, bottom to top.
    #[must_use]
    pub fn column(&self, column: usize) -> &[Card] {
        &self.tableau[column]
    }

    /// Cards in a foundation pile, bottom to top.
    #[must_use]
    pub fn foundation(&self, pile: usize) -> &[Card] {
        &self.foundations[pile]
    }

    /// The face-down stock, bottom to top (the top is dealt next).
    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// The face-up waste pile, bottom to top.
    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    /// The draw count fixed at construction.
    #[must_use]
    pub fn draw_count(&self) -> DrawCount {
        self.draw_count
    }

    /// Total cards across all zones. Always 52 for a dealt game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.tableau.iter().map(Vec::len).sum::<usize>()
            + self.foundations.iter().map(Vec::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
    }

    /// Whether a move would be accepted by [`Board::apply_move`].
    ///
    /// The interactive layer vets drag-drop attempts with this and
    /// silently ignores the illegal ones.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        validate(self, mv).is_ok()
    }

    // === Mutation ===

    /// Apply a move, or fail without touching the board.
    ///
    /// Validation runs first and covers the entire move, so application
    /// is atomic: `Err` means nothing changed.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), EngineError> {
        validate(self, mv)?;

        match mv {
            Move::Cycle => self.cycle(),
            Move::ToTableau { source, column } => {
                let cards = self.take_from(source);
                self.tableau[column].extend(cards);
            }
            Move::ToFoundation { source, pile } => {
                let cards = self.take_from(source);
                debug_assert_eq!(cards.len(), 1);
                self.foundations[pile].extend(cards);
            }
        }

        Ok(())
    }

    /// Deal from the stock, or recycle the waste when the stock is out.
    ///
    /// Dealing flips up to `draw_count` cards face-up onto the waste,
    /// last-drawn on top. Recycling moves the whole waste back to the
    /// stock in reverse order, face-down, so repeated cycling is
    /// periodic rather than lossy.
    fn cycle(&mut self) {
        if self.stock.is_empty() {
            while let Some(mut card) = self.waste.pop() {
                card.face_up = false;
                self.stock.push(card);
            }
        } else {
            for _ in 0..self.draw_count.count() {
                let Some(mut card) = self.stock.pop() else {
                    break;
                };
                card.face_up = true;
                self.waste.push(card);
            }
        }
    }

    /// Remove the validated source cards, flipping the newly exposed
    /// tableau card face-up when a run leaves one behind.
    fn take_from(&mut self, source: CardSource) -> Vec<Card> {
        match source {
            CardSource::Waste => self.waste.pop().into_iter().collect(),
            CardSource::Foundation { pile } => {
                self.foundations[pile].pop().into_iter().collect()
            }
            CardSource::Tableau { column, row } => {
                let cards: Vec<Card> = self.tableau[column].drain(row..).collect();
                if let Some(top) = self.tableau[column].last_mut() {
                    top.face_up = true;
                }
                cards
            }
        }
    }
}

/// Serializable snapshot of the zone contents, for drivers that render
/// or log positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub tableau: [Vec<Card>; TABLEAU_COLUMNS],
    pub foundations: [Vec<Card>; FOUNDATION_PILES],
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub draw_count: DrawCount,
}

impl Board {
    /// Capture the current zone contents.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tableau: self.tableau.clone(),
            foundations: self.foundations.clone(),
            stock: self.stock.clone(),
            waste: self.waste.clone(),
            draw_count: self.draw_count,
        }
    }

    /// Rebuild a board from a captured snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Self {
        Self::from_zones(
            snapshot.tableau,
            snapshot.foundations,
            snapshot.stock,
            snapshot.waste,
            snapshot.draw_count,
        )
    }
}
