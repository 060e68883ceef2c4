//! Move resolution: the one place a game changes state.

use crate::action::{Move, MoveError, Transition};
use crate::game_store::GameStore;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::rules::{self, Verdict};
use crate::score_store::ScoreStore;
use crate::types::BOARD_SIZE;
use tracing::{debug, info, instrument, warn};

/// Applies moves to a game store and records finished games.
///
/// Borrows both stores for the duration of a call and keeps no state
/// of its own.
#[derive(Debug)]
pub struct MoveOrchestrator<'a> {
    game: &'a mut GameStore,
    scores: &'a mut ScoreStore,
}

impl<'a> MoveOrchestrator<'a> {
    /// Creates an orchestrator over the given stores.
    pub fn new(game: &'a mut GameStore, scores: &'a mut ScoreStore) -> Self {
        Self { game, scores }
    }

    /// Plays the current mark at `index`.
    ///
    /// Returns true when the move was applied, whether or not it ended
    /// the game. A refused move changes nothing.
    pub fn attempt_move(&mut self, index: usize) -> bool {
        self.try_move(index).is_ok()
    }

    /// Plays the current mark at `position`.
    pub fn attempt_position(&mut self, position: Position) -> bool {
        self.attempt_move(position.to_index())
    }

    /// Plays the current mark at `index`, reporting what happened.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not 0-8
    /// - [`MoveError::GameOver`] if the game is won or drawn
    /// - [`MoveError::SquareOccupied`] if the cell is taken
    #[instrument(skip(self), fields(game_id = %self.game.game_id(), player = %self.game.current_player()))]
    pub fn try_move(&mut self, index: usize) -> Result<Transition, MoveError> {
        if !rules::is_valid_move(self.game.board(), index, self.game.status()) {
            let error = self.rejection(index);
            warn!(%error, "Move rejected");
            return Err(error);
        }

        let mark = self.game.current_player();
        let board = rules::apply_move(self.game.board(), index, mark);
        self.game.update_board(board);
        if let Some(position) = Position::from_index(index) {
            debug!(mov = %Move::new(mark, position), "Move applied");
        }

        let transition = match rules::detect(&board) {
            Some(verdict) => {
                let outcome = verdict.outcome();
                self.game.update_status(outcome.status());
                self.game.set_winner(outcome, verdict.line());
                self.scores.record_outcome(outcome);
                info!(%outcome, cells = ?verdict.line(), "Game over");
                match verdict {
                    Verdict::Line { mark, cells } => Transition::Won { mark, cells },
                    Verdict::Draw => Transition::Drawn,
                }
            }
            None => {
                let next = rules::next_player(mark);
                self.game.update_current_player(next);
                Transition::Continued { next }
            }
        };

        if let Err(violations) = GameInvariants::check_all(&*self.game) {
            for violation in &violations {
                warn!(%violation, "Invariant violated after move");
            }
        }

        Ok(transition)
    }

    fn rejection(&self, index: usize) -> MoveError {
        if index >= BOARD_SIZE {
            MoveError::OutOfBounds(index)
        } else if !self.game.is_playing() {
            MoveError::GameOver
        } else {
            MoveError::SquareOccupied(index)
        }
    }

    /// Indices of empty cells, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        rules::available_moves(self.game.board())
    }

    /// True when no cell is empty.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(self.game.board())
    }

    /// Number of occupied cells.
    pub fn move_count(&self) -> usize {
        rules::move_count(self.game.board())
    }

    /// True before anyone has played.
    pub fn is_first_move(&self) -> bool {
        self.move_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Cell, Mark, Outcome, Status};

    fn stores(board: &str, player: Mark) -> (GameStore, ScoreStore) {
        let mut game = GameStore::new();
        game.update_board(board.parse::<Board>().unwrap());
        game.update_current_player(player);
        (game, ScoreStore::new())
    }

    #[test]
    fn test_center_opening() {
        let (mut game, mut scores) = stores(".........", Mark::X);
        let mut orchestrator = MoveOrchestrator::new(&mut game, &mut scores);

        assert!(orchestrator.is_first_move());
        assert!(orchestrator.attempt_move(4));
        assert_eq!(orchestrator.move_count(), 1);

        assert_eq!(game.board().get(4), Some(Cell::Marked(Mark::X)));
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.current_player(), Mark::O);
    }

    #[test]
    fn test_winning_move_keeps_player() {
        let (mut game, mut scores) = stores("XX.OO....", Mark::X);
        let transition = MoveOrchestrator::new(&mut game, &mut scores)
            .try_move(2)
            .unwrap();

        assert_eq!(
            transition,
            Transition::Won {
                mark: Mark::X,
                cells: [0, 1, 2]
            }
        );
        assert_eq!(game.status(), Status::Win);
        assert_eq!(game.winner(), Some(Outcome::Win(Mark::X)));
        assert_eq!(game.winning_cells(), &[0, 1, 2]);
        assert_eq!(game.current_player(), Mark::X);
        assert_eq!(*scores.tally().wins_x(), 1);
    }

    #[test]
    fn test_filling_move_draws() {
        let (mut game, mut scores) = stores("XOXOXOOX.", Mark::O);
        let transition = MoveOrchestrator::new(&mut game, &mut scores)
            .try_move(8)
            .unwrap();

        assert_eq!(transition, Transition::Drawn);
        assert_eq!(game.status(), Status::Draw);
        assert_eq!(game.winner(), Some(Outcome::Draw));
        assert!(game.winning_cells().is_empty());
        assert_eq!(*scores.tally().draws(), 1);
    }

    #[test]
    fn test_rejections_leave_state() {
        let (mut game, mut scores) = stores("X........", Mark::O);
        let before = game.clone();
        let mut orchestrator = MoveOrchestrator::new(&mut game, &mut scores);

        assert_eq!(orchestrator.try_move(0), Err(MoveError::SquareOccupied(0)));
        assert_eq!(orchestrator.try_move(9), Err(MoveError::OutOfBounds(9)));
        assert!(!orchestrator.attempt_move(0));
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let (mut game, mut scores) = stores("XX.OO....", Mark::X);
        let mut orchestrator = MoveOrchestrator::new(&mut game, &mut scores);
        assert!(orchestrator.attempt_move(2));
        assert_eq!(orchestrator.try_move(8), Err(MoveError::GameOver));
        assert_eq!(*scores.tally().wins_x(), 1);
    }
}
