//! A rule-ranking player modeled on a cautious human: make the most
//! valuable move on the table, but when only low-value moves are
//! available, usually deal from the stock instead.

use crate::board::Board;
use crate::core::rng::GameRng;
use crate::moves::{legal_moves, CardSource, Move};

use super::Strategy;

// Move values, worst to best. Cycling is not ranked here: it is always
// available while cards remain, so any fixed rank would dominate
// everything below it. Instead the best ranked move decides the chance
// of cycling.
const VAL_FOUNDATION_UNSTACK: u8 = 0;
const VAL_MOVE_NOT_UNCOVERING: u8 = 1;
const VAL_FROM_WASTE: u8 = 2;
const VAL_MOVE_UNCOVERING: u8 = 3;
const VAL_TO_FOUNDATION: u8 = 4;

/// Rank a non-cycle move on the given board.
pub(crate) fn move_value(board: &Board, mv: Move) -> u8 {
    match mv {
        Move::ToFoundation { .. } => VAL_TO_FOUNDATION,
        Move::ToTableau { source, .. } => match source {
            CardSource::Foundation { .. } => VAL_FOUNDATION_UNSTACK,
            CardSource::Waste => VAL_FROM_WASTE,
            CardSource::Tableau { column, row } => {
                if row == 0 || board.column(column)[row - 1].face_up {
                    VAL_MOVE_NOT_UNCOVERING
                } else {
                    VAL_MOVE_UNCOVERING
                }
            }
        },
        Move::Cycle => unreachable!("cycle moves are filtered before ranking"),
    }
}

/// Chance (percent) of dealing from the stock instead of playing the
/// best move: high when only low-value moves are on the table, zero
/// when something worthwhile is available.
fn cycle_chance(best_value: u8) -> usize {
    match best_value {
        VAL_FOUNDATION_UNSTACK | VAL_MOVE_NOT_UNCOVERING => 90,
        _ => 0,
    }
}

/// The greedy ranked player.
///
/// Sorts the enumerated moves by value and plays the best one;
/// among equal values the move enumerated last wins. Before committing
/// to a rank-0 or rank-1 move it usually (90%) cycles the stock
/// instead, hunting for something better. When nothing but cycling is
/// legal, it cycles.
#[derive(Debug)]
pub struct Greedy {
    rng: GameRng,
}

impl Greedy {
    pub const NAME: &'static str = "greedy";

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

impl Strategy for Greedy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decide(&mut self, board: &Board) -> Option<Move> {
        let mut candidates = legal_moves(board);

        let cycle_available = candidates.contains(&Move::Cycle);
        candidates.retain(|mv| *mv != Move::Cycle);

        if candidates.is_empty() {
            return cycle_available.then_some(Move::Cycle);
        }

        // Stable sort: equal values keep enumeration order, so the
        // last-enumerated move among the best wins.
        candidates.sort_by_key(|mv| move_value(board, *mv));
        let best = *candidates.last().expect("candidates are non-empty");

        let chance = cycle_chance(move_value(board, best));
        if cycle_available && self.rng.gen_range_usize(0..100) < chance {
            return Some(Move::Cycle);
        }

        Some(best)
    }
}
