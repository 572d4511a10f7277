//! Card identity and the single pairwise placement rule.
//!
//! Cards are plain value types: a rank, a suit, and a face-up flag.
//! Everything else in the engine (tableau building, foundation
//! building) is derived from [`Card::can_stack_on`] plus zone-specific
//! constraints.

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card rank, Ace low through King high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// 0-based ordinal: Ace = 0, King = 12.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Short label for display ("A", "2", .., "10", "J", "Q", "K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The color this suit belongs to.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Short label for display ("H", "D", "C", "S").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Spades => "S",
        }
    }
}

/// Suit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// A single playing card.
///
/// `face_up` is positional state, not identity: two cards are the same
/// card whenever rank and suit match. The board is the only place that
/// flips cards; everything else treats `Card` as an immutable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// This card with the face-up flag set.
    #[must_use]
    pub const fn turned_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// The card's color, derived from its suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// The one adjacency rule in the game: `self` may be placed on
    /// `target` in a tableau column iff the colors differ and `self`
    /// is exactly one rank below `target`.
    #[must_use]
    pub fn can_stack_on(self, target: Card) -> bool {
        self.color() != target.color() && self.rank.ordinal() + 1 == target.rank.ordinal()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.label())
    }
}

/// Build an unshuffled standard deck: one face-down card for each of
/// the 52 (rank, suit) pairs.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}
