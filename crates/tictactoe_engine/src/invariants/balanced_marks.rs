//! Mark counts stay within one of each other.

use super::Invariant;
use crate::game_store::GameStore;
use crate::types::Mark;

/// Invariant: the numbers of X and O marks differ by at most one.
pub struct BalancedMarksInvariant;

impl Invariant<GameStore> for BalancedMarksInvariant {
    fn holds(store: &GameStore) -> bool {
        let board = store.board();
        board.count(Mark::X).abs_diff(board.count(Mark::O)) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
