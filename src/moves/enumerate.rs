//! Exhaustive enumeration of legal moves.
//!
//! Enumeration order is deterministic for a fixed board, and strategies
//! lean on it for tie-breaking:
//!
//! 1. `Cycle`, whenever the stock or waste holds cards.
//! 2. Moves whose source is the waste top.
//! 3. Moves whose source is a foundation top (piles ascending).
//! 4. Moves headed by each face-up tableau card (columns ascending,
//!    rows bottom to top).
//!
//! For each card, tableau destinations come first (columns ascending),
//! then foundation destinations (piles ascending). Every emitted move
//! passes [`validate`](super::validate); nothing the applier would
//! reject is ever produced.

use smallvec::SmallVec;

use crate::board::{Board, FOUNDATION_PILES, TABLEAU_COLUMNS};
use crate::core::card::{Card, Rank};

use super::{CardSource, Move};

/// At most 7 tableau plus 4 foundation destinations per card.
type CardMoves = SmallVec<[Move; 11]>;

/// Enumerate every legal move on the given board.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();

    if !board.stock().is_empty() || !board.waste().is_empty() {
        moves.push(Move::Cycle);
    }

    if let Some(card) = board.waste().last() {
        moves.extend(moves_for_card(board, *card, CardSource::Waste));
    }

    // A foundation top may need to come back down to unblock a column.
    for pile in 0..FOUNDATION_PILES {
        if let Some(card) = board.foundation(pile).last() {
            moves.extend(moves_for_card(board, *card, CardSource::Foundation { pile }));
        }
    }

    for column in 0..TABLEAU_COLUMNS {
        for (row, card) in board.column(column).iter().enumerate() {
            if card.face_up {
                moves.extend(moves_for_card(
                    board,
                    *card,
                    CardSource::Tableau { column, row },
                ));
            }
        }
    }

    moves
}

/// All legal destinations for the card (or run headed by the card) at
/// `source`.
fn moves_for_card(board: &Board, card: Card, source: CardSource) -> CardMoves {
    let mut out = CardMoves::new();

    // A king at the bottom of its column gains nothing by relocating:
    // the only columns that can take it are empty ones.
    let bottom_king =
        card.rank == Rank::King && matches!(source, CardSource::Tableau { row: 0, .. });

    if !bottom_king {
        for column in 0..TABLEAU_COLUMNS {
            if let CardSource::Tableau { column: src, .. } = source {
                if src == column {
                    continue;
                }
            }

            let fits = match board.column(column).last() {
                None => card.rank == Rank::King,
                Some(top) => card.can_stack_on(*top),
            };
            if fits {
                out.push(Move::ToTableau { source, column });
            }
        }
    }

    // Only single cards reach a foundation, and never from another
    // foundation.
    let single = match source {
        CardSource::Waste => true,
        CardSource::Foundation { .. } => false,
        CardSource::Tableau { column, row } => row + 1 == board.column(column).len(),
    };

    if single {
        for pile in 0..FOUNDATION_PILES {
            let fits = match board.foundation(pile).last() {
                None => card.rank == Rank::Ace,
                Some(top) => {
                    card.suit == top.suit && card.rank.ordinal() == top.rank.ordinal() + 1
                }
            };
            if fits {
                out.push(Move::ToFoundation { source, pile });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::card::{Card, Rank, Suit};
    use crate::core::config::DrawCount;

    fn empty_zones() -> ([Vec<Card>; 7], [Vec<Card>; 4]) {
        (Default::default(), Default::default())
    }

    #[test]
    fn test_cycle_enumerated_while_cards_remain() {
        let (tableau, foundations) = empty_zones();
        let board = Board::from_zones(
            tableau,
            foundations,
            vec![Card::new(Rank::Five, Suit::Clubs)],
            vec![],
            DrawCount::Three,
        );
        assert!(legal_moves(&board).contains(&Move::Cycle));
    }

    #[test]
    fn test_cycle_not_enumerated_when_stock_and_waste_empty() {
        let (mut tableau, foundations) = empty_zones();
        tableau[0].push(Card::new(Rank::King, Suit::Spades).turned_up());
        let board = Board::from_zones(tableau, foundations, vec![], vec![], DrawCount::Three);

        assert!(!legal_moves(&board).contains(&Move::Cycle));
    }

    #[test]
    fn test_waste_top_stacking_move_is_found() {
        // Completeness spot check: waste 9H stacks on tableau 10S.
        let (mut tableau, foundations) = empty_zones();
        tableau[2].push(Card::new(Rank::Ten, Suit::Spades).turned_up());
        let board = Board::from_zones(
            tableau,
            foundations,
            vec![],
            vec![Card::new(Rank::Nine, Suit::Hearts).turned_up()],
            DrawCount::Three,
        );

        let moves = legal_moves(&board);
        assert!(moves.contains(&Move::ToTableau {
            source: CardSource::Waste,
            column: 2,
        }));
    }

    #[test]
    fn test_bottom_king_does_not_relocate() {
        // A lone king never moves to another empty column.
        let (mut tableau, foundations) = empty_zones();
        tableau[0].push(Card::new(Rank::King, Suit::Spades).turned_up());
        let board = Board::from_zones(tableau, foundations, vec![], vec![], DrawCount::Three);

        let moves = legal_moves(&board);
        assert!(moves
            .iter()
            .all(|m| !matches!(m, Move::ToTableau { .. })));
    }

    #[test]
    fn test_bottom_king_with_run_does_not_relocate() {
        let (mut tableau, foundations) = empty_zones();
        tableau[3].push(Card::new(Rank::King, Suit::Spades).turned_up());
        tableau[3].push(Card::new(Rank::Queen, Suit::Hearts).turned_up());
        let board = Board::from_zones(tableau, foundations, vec![], vec![], DrawCount::Three);

        let moves = legal_moves(&board);
        assert!(!moves.iter().any(|m| matches!(
            m,
            Move::ToTableau {
                source: CardSource::Tableau { column: 3, row: 0 },
                ..
            }
        )));
    }

    #[test]
    fn test_bottom_king_still_moves_to_foundation() {
        let (mut tableau, mut foundations) = empty_zones();
        tableau[0].push(Card::new(Rank::King, Suit::Spades).turned_up());
        for rank in &Rank::ALL[..12] {
            foundations[0].push(Card::new(*rank, Suit::Spades).turned_up());
        }
        let board = Board::from_zones(tableau, foundations, vec![], vec![], DrawCount::Three);

        assert!(legal_moves(&board).contains(&Move::ToFoundation {
            source: CardSource::Tableau { column: 0, row: 0 },
            pile: 0,
        }));
    }

    #[test]
    fn test_waste_king_moves_to_empty_column() {
        let (tableau, foundations) = empty_zones();
        let board = Board::from_zones(
            tableau,
            foundations,
            vec![],
            vec![Card::new(Rank::King, Suit::Hearts).turned_up()],
            DrawCount::Three,
        );

        let moves = legal_moves(&board);
        let king_moves = moves
            .iter()
            .filter(|m| matches!(m, Move::ToTableau { source: CardSource::Waste, .. }))
            .count();
        assert_eq!(king_moves, TABLEAU_COLUMNS);
    }

    #[test]
    fn test_foundation_top_comes_back_down() {
        let (mut tableau, mut foundations) = empty_zones();
        foundations[1].push(Card::new(Rank::Ace, Suit::Hearts).turned_up());
        foundations[1].push(Card::new(Rank::Two, Suit::Hearts).turned_up());
        tableau[4].push(Card::new(Rank::Three, Suit::Spades).turned_up());
        let board = Board::from_zones(tableau, foundations, vec![], vec![], DrawCount::Three);

        assert!(legal_moves(&board).contains(&Move::ToTableau {
            source: CardSource::Foundation { pile: 1 },
            column: 4,
        }));
    }

    #[test]
    fn test_only_top_tableau_card_moves_to_foundation() {
        let (mut tableau, mut foundations) = empty_zones();
        foundations[0].push(Card::new(Rank::Ace, Suit::Spades).turned_up());
        // Two-card run: 2S is buried under a red ace, so it is not single.
        tableau[0].push(Card::new(Rank::Two, Suit::Spades).turned_up());
        tableau[0].push(Card::new(Rank::Ace, Suit::Hearts).turned_up());
        let board = Board::from_zones(tableau, foundations, vec![], vec![], DrawCount::Three);

        let moves = legal_moves(&board);
        assert!(!moves.contains(&Move::ToFoundation {
            source: CardSource::Tableau { column: 0, row: 0 },
            pile: 0,
        }));
        // The top card itself may go up, onto the first empty pile.
        assert!(moves.contains(&Move::ToFoundation {
            source: CardSource::Tableau { column: 0, row: 1 },
            pile: 1,
        }));
    }

    #[test]
    fn test_face_down_cards_generate_nothing() {
        let (mut tableau, foundations) = empty_zones();
        tableau[0].push(Card::new(Rank::Nine, Suit::Hearts)); // face-down
        tableau[1].push(Card::new(Rank::Ten, Suit::Spades).turned_up());
        let board = Board::from_zones(tableau, foundations, vec![], vec![], DrawCount::Three);

        let moves = legal_moves(&board);
        assert!(!moves.iter().any(|m| matches!(
            m.source(),
            Some(CardSource::Tableau { column: 0, .. })
        )));
    }

    #[test]
    fn test_every_enumerated_move_applies() {
        // Soundness on a freshly dealt board.
        let mut board = Board::with_seed(DrawCount::Three, 7);
        board.setup_game();

        for mv in legal_moves(&board) {
            let mut probe = board.clone();
            probe.apply_move(mv).unwrap();
        }
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let mut board = Board::with_seed(DrawCount::Three, 99);
        board.setup_game();

        assert_eq!(legal_moves(&board), legal_moves(&board));
    }
}
