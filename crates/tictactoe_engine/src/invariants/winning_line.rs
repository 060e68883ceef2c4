//! The recorded winning line is on the board.

use super::Invariant;
use crate::game_store::GameStore;
use crate::types::{Cell, Outcome};

/// Invariant: every cell of the winning line holds the winner's mark.
pub struct WinningLineInvariant;

impl Invariant<GameStore> for WinningLineInvariant {
    fn holds(store: &GameStore) -> bool {
        match (store.winner(), store.winning_line()) {
            (Some(Outcome::Win(mark)), Some(line)) => line
                .iter()
                .all(|&index| store.board().get(index) == Some(Cell::Marked(mark))),
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Winning cells hold the winner's mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_line_on_board() {
        let mut store = GameStore::new();
        store.update_board("...OOO.XX".parse().unwrap());
        store.set_winner(Outcome::Win(Mark::O), Some([3, 4, 5]));
        assert!(WinningLineInvariant::holds(&store));
    }

    #[test]
    fn test_line_missing_from_board() {
        let mut store = GameStore::new();
        store.set_winner(Outcome::Win(Mark::O), Some([3, 4, 5]));
        assert!(!WinningLineInvariant::holds(&store));
    }
}
