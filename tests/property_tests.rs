//! Property tests: invariants that must hold on every reachable board.

use proptest::prelude::*;

use klondike_engine::{
    legal_moves, standard_deck, Board, DrawCount, GameRng, Move, DECK_SIZE,
};

fn draw_count_strategy() -> impl proptest::strategy::Strategy<Value = DrawCount> {
    prop_oneof![Just(DrawCount::One), Just(DrawCount::Three)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The adjacency rule over every card pair: opposite colors and
    /// exactly one rank apart, nothing else.
    #[test]
    fn prop_can_stack_table(a in 0usize..DECK_SIZE, b in 0usize..DECK_SIZE) {
        let deck = standard_deck();
        let candidate = deck[a];
        let target = deck[b];

        let expected = candidate.color() != target.color()
            && target.rank.ordinal() == candidate.rank.ordinal() + 1;
        prop_assert_eq!(candidate.can_stack_on(target), expected);
    }

    /// Every seed deals the same shape: 24 in stock, columns of
    /// increasing height, one face-up card per column.
    #[test]
    fn prop_deal_shape(seed in any::<u64>(), draw_count in draw_count_strategy()) {
        let mut board = Board::with_seed(draw_count, seed);
        board.setup_game();

        prop_assert_eq!(board.total_cards(), DECK_SIZE);
        prop_assert_eq!(board.stock().len(), 24);
        for column in 0..7 {
            let cards = board.column(column);
            prop_assert_eq!(cards.len(), column + 1);
            prop_assert_eq!(cards.iter().filter(|c| c.face_up).count(), 1);
        }
    }

    /// Along a random playout of enumerated moves: the card count never
    /// drifts, every enumerated move applies cleanly, and face-down
    /// cards never reappear above face-up ones in a column.
    #[test]
    fn prop_random_playout_invariants(
        seed in any::<u64>(),
        choice_seed in any::<u64>(),
        steps in 1usize..60,
        draw_count in draw_count_strategy(),
    ) {
        let mut board = Board::with_seed(draw_count, seed);
        board.setup_game();
        let mut dice = GameRng::new(choice_seed);

        for _ in 0..steps {
            let moves = legal_moves(&board);
            if moves.is_empty() {
                break;
            }

            // Soundness: everything enumerated must apply.
            for mv in &moves {
                let mut probe = board.clone();
                prop_assert!(probe.apply_move(*mv).is_ok(), "rejected {:?}", mv);
            }

            let mv = *dice.choose(&moves).expect("moves are non-empty");
            board.apply_move(mv).expect("chosen move was enumerated");

            prop_assert_eq!(board.total_cards(), DECK_SIZE);

            // Within a column, face-up cards form a suffix.
            for column in 0..7 {
                let cards = board.column(column);
                let first_up = cards.iter().position(|c| c.face_up).unwrap_or(cards.len());
                prop_assert!(cards[first_up..].iter().all(|c| c.face_up));
            }
        }
    }

    /// Cycling conserves the stock/waste pool and is periodic with
    /// period (batches + 1).
    #[test]
    fn prop_cycle_period(seed in any::<u64>(), draw_count in draw_count_strategy()) {
        let mut board = Board::with_seed(draw_count, seed);
        board.setup_game();
        let initial_stock = board.stock().to_vec();

        let batches = 24 / draw_count.count();
        for _ in 0..batches {
            prop_assert!(!board.stock().is_empty());
            board.apply_move(Move::Cycle).expect("stock is non-empty");
            prop_assert_eq!(board.stock().len() + board.waste().len(), 24);
        }

        prop_assert!(board.stock().is_empty());
        board.apply_move(Move::Cycle).expect("waste is non-empty");
        prop_assert_eq!(board.stock(), initial_stock.as_slice());
    }
}
