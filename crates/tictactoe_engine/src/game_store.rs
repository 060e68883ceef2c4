//! Owned state of the game in progress.

use crate::rules::Line;
use crate::types::{Board, GameId, Mark, Outcome, Status};
use tracing::{debug, info, instrument};

/// Board, turn, status, winner and identity of the current game.
///
/// Setters are unchecked; legality is decided by the rules before the
/// orchestrator calls them. [`GameStore::reset`] replaces every field
/// in one assignment, so no caller can observe a half-reset game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStore {
    board: Board,
    current_player: Mark,
    status: Status,
    winner: Option<Outcome>,
    winning_line: Option<Line>,
    game_id: GameId,
}

impl GameStore {
    /// Creates a store holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::fresh(GameId::initial())
    }

    fn fresh(game_id: GameId) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: Status::Playing,
            winner: None,
            winning_line: None,
            game_id,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the winner record, `None` while playing.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Cells of the winning line; empty unless a mark has won.
    pub fn winning_cells(&self) -> &[usize] {
        match &self.winning_line {
            Some(line) => line,
            None => &[],
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Identity token of the current game.
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    /// Replaces the board.
    #[instrument(skip(self, board), fields(game_id = %self.game_id))]
    pub fn update_board(&mut self, board: Board) {
        debug!(board = %board.display(), "Board updated");
        self.board = board;
    }

    /// Sets the mark to move.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn update_current_player(&mut self, mark: Mark) {
        self.current_player = mark;
    }

    /// Sets the status.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn update_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Sets the winner and its line together.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn set_winner(&mut self, winner: Outcome, line: Option<Line>) {
        self.winner = Some(winner);
        self.winning_line = line;
    }

    /// Starts a new game under a new identity token.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn reset(&mut self) {
        let next = self.game_id.next();
        *self = Self::fresh(next);
        info!(new_game_id = %next, "Game reset");
    }

    /// True while moves are accepted.
    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    /// True once the game is won or drawn.
    pub fn is_ended(&self) -> bool {
        self.status.is_terminal()
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
