//! Status, winner and winning line agree.

use super::Invariant;
use crate::game_store::GameStore;
use crate::types::{Outcome, Status};

/// Invariant: a playing game has no winner, a won game has a winning
/// mark and line, a drawn game has the draw record and no line.
pub struct TerminalConsistencyInvariant;

impl Invariant<GameStore> for TerminalConsistencyInvariant {
    fn holds(store: &GameStore) -> bool {
        match (store.status(), store.winner(), store.winning_line()) {
            (Status::Playing, None, None) => true,
            (Status::Win, Some(Outcome::Win(_)), Some(_)) => true,
            (Status::Draw, Some(Outcome::Draw), None) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Status, winner and winning cells agree"
    }
}
