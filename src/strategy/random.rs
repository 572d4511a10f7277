//! A player that knows nothing but the rules: pick uniformly among the
//! legal moves. It never pulls a card back off a foundation, so its
//! games drift forward instead of oscillating.

use crate::board::Board;
use crate::core::rng::GameRng;
use crate::moves::{legal_moves, CardSource, Move};

use super::Strategy;

/// The uniform random player.
#[derive(Debug)]
pub struct UniformRandom {
    rng: GameRng,
}

impl UniformRandom {
    pub const NAME: &'static str = "random";

    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Convenience constructor with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Strategy for UniformRandom {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decide(&mut self, board: &Board) -> Option<Move> {
        let moves: Vec<Move> = legal_moves(board)
            .into_iter()
            .filter(|mv| !matches!(mv.source(), Some(CardSource::Foundation { .. })))
            .collect();

        self.rng.choose(&moves).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Card, Rank, Suit};
    use crate::core::config::DrawCount;

    #[test]
    fn test_never_sources_from_a_foundation() {
        // A board where a foundation unstack is legal and tempting.
        let (mut tableau, mut foundations): ([Vec<Card>; 7], [Vec<Card>; 4]) =
            (Default::default(), Default::default());
        foundations[0].push(Card::new(Rank::Ace, Suit::Hearts).turned_up());
        foundations[0].push(Card::new(Rank::Two, Suit::Hearts).turned_up());
        tableau[0].push(Card::new(Rank::Three, Suit::Spades).turned_up());
        let board = Board::from_zones(
            tableau,
            foundations,
            vec![Card::new(Rank::Nine, Suit::Clubs)],
            vec![],
            DrawCount::Three,
        );

        // The unstack is enumerated, so the filter is doing the work.
        assert!(legal_moves(&board)
            .iter()
            .any(|mv| matches!(mv.source(), Some(CardSource::Foundation { .. }))));

        let mut player = UniformRandom::with_seed(9);
        for _ in 0..500 {
            let mv = player.decide(&board).unwrap();
            assert!(!matches!(mv.source(), Some(CardSource::Foundation { .. })));
        }
    }

    #[test]
    fn test_returns_none_when_filtered_set_is_empty() {
        let (mut tableau, foundations): ([Vec<Card>; 7], [Vec<Card>; 4]) =
            (Default::default(), Default::default());
        tableau[0].push(Card::new(Rank::King, Suit::Spades).turned_up());
        let board = Board::from_zones(tableau, foundations, vec![], vec![], DrawCount::Three);

        let mut player = UniformRandom::with_seed(0);
        assert_eq!(player.decide(&board), None);
    }

    #[test]
    fn test_eventually_picks_every_candidate() {
        // Waste ace: four foundation destinations plus the cycle.
        let board = Board::from_zones(
            Default::default(),
            Default::default(),
            vec![Card::new(Rank::Nine, Suit::Clubs)],
            vec![Card::new(Rank::Ace, Suit::Hearts).turned_up()],
            DrawCount::Three,
        );

        let candidates = legal_moves(&board);
        assert_eq!(candidates.len(), 5);

        let mut player = UniformRandom::with_seed(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(player.decide(&board).unwrap());
        }
        assert_eq!(seen.len(), candidates.len());
    }

    #[test]
    fn test_is_deterministic_per_seed() {
        let mut board = Board::with_seed(DrawCount::Three, 17);
        board.setup_game();

        let mut a = UniformRandom::with_seed(5);
        let mut b = UniformRandom::with_seed(5);
        for _ in 0..50 {
            assert_eq!(a.decide(&board), b.decide(&board));
        }
    }
}
