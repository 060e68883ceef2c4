//! Consumer-facing game session.

use crate::action::{MoveError, Transition};
use crate::game_store::GameStore;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::orchestrator::MoveOrchestrator;
use crate::position::Position;
use crate::rules;
use crate::score_store::{ScoreStats, ScoreStore, ScoreTally};
use crate::types::{Board, GameId, Mark, Outcome, Status};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Read-only view of a session at one point in time.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    current_player: Mark,
    status: Status,
    winner: Option<Outcome>,
    winning_cells: Vec<usize>,
    game_id: GameId,
    scores: ScoreTally,
}

/// One game session: a game store, a score store and the moves between them.
///
/// Each session owns its stores; nothing is shared between sessions.
#[derive(Debug, Clone)]
pub struct GameSession {
    name: String,
    game: GameStore,
    scores: ScoreStore,
}

impl GameSession {
    /// Creates a session labelled "local".
    pub fn new() -> Self {
        Self::named("local")
    }

    /// Creates a session whose label is attached to its log spans.
    #[instrument(skip(name), fields(session = %name.as_ref()))]
    pub fn named(name: impl AsRef<str>) -> Self {
        info!("Creating game session");
        Self {
            name: name.as_ref().to_string(),
            game: GameStore::new(),
            scores: ScoreStore::new(),
        }
    }

    /// Returns the session label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the mark to move.
    pub fn current_player(&self) -> Mark {
        self.game.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> Status {
        self.game.status()
    }

    /// Returns the winner record, `None` while playing.
    pub fn winner(&self) -> Option<Outcome> {
        self.game.winner()
    }

    /// Cells of the winning line; empty unless a mark has won.
    pub fn winning_cells(&self) -> &[usize] {
        self.game.winning_cells()
    }

    /// Identity token of the current game.
    pub fn game_id(&self) -> GameId {
        self.game.game_id()
    }

    /// Returns the score tally.
    pub fn scores(&self) -> &ScoreTally {
        self.scores.tally()
    }

    /// Aggregated score statistics.
    pub fn stats(&self) -> ScoreStats {
        self.scores.stats()
    }

    /// Share of finished games won by `mark` as a percentage.
    pub fn win_rate(&self, mark: Mark) -> f64 {
        self.scores.win_rate(mark)
    }

    /// Read access to the game store.
    pub fn game_store(&self) -> &GameStore {
        &self.game
    }

    /// Read access to the score store.
    pub fn score_store(&self) -> &ScoreStore {
        &self.scores
    }

    /// Orchestrator bound to this session's stores.
    pub fn orchestrator(&mut self) -> MoveOrchestrator<'_> {
        MoveOrchestrator::new(&mut self.game, &mut self.scores)
    }

    /// Plays the current mark at `index`; false if the move was refused.
    #[instrument(skip(self), fields(session = %self.name))]
    pub fn attempt_move(&mut self, index: usize) -> bool {
        self.orchestrator().attempt_move(index)
    }

    /// Plays the current mark at `position`; false if the move was refused.
    pub fn attempt_position(&mut self, position: Position) -> bool {
        self.attempt_move(position.to_index())
    }

    /// Plays the current mark at `index`, reporting what happened.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] describing why the move was refused.
    #[instrument(skip(self), fields(session = %self.name))]
    pub fn try_move(&mut self, index: usize) -> Result<Transition, MoveError> {
        self.orchestrator().try_move(index)
    }

    /// Starts a new game; scores are kept.
    #[instrument(skip(self), fields(session = %self.name))]
    pub fn reset_game(&mut self) {
        self.game.reset();
    }

    /// Clears the score tally; the game in progress is kept.
    #[instrument(skip(self), fields(session = %self.name))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    /// Sets the mark to move directly, bypassing turn order.
    ///
    /// Kept for callers that drive turns themselves; prefer `attempt_move`.
    #[instrument(skip(self), fields(session = %self.name))]
    pub fn set_current_player(&mut self, mark: Mark) {
        self.game.update_current_player(mark);
    }

    /// True while moves are accepted.
    pub fn is_playing(&self) -> bool {
        self.game.is_playing()
    }

    /// True once the game is won or drawn.
    pub fn is_ended(&self) -> bool {
        self.game.is_ended()
    }

    /// Indices of empty cells, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        rules::available_moves(self.game.board())
    }

    /// Empty cells as named positions.
    pub fn available_positions(&self) -> Vec<Position> {
        Position::valid_moves(self.game.board())
    }

    /// True when no cell is empty.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(self.game.board())
    }

    /// Number of occupied cells.
    pub fn move_count(&self) -> usize {
        rules::move_count(self.game.board())
    }

    /// True before anyone has played in the current game.
    pub fn is_first_move(&self) -> bool {
        self.move_count() == 0
    }

    /// Checks the game invariants against the current state.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(&self.game)
    }

    /// Captures the current state for display.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.game.board(),
            current_player: self.game.current_player(),
            status: self.game.status(),
            winner: self.game.winner(),
            winning_cells: self.game.winning_cells().to_vec(),
            game_id: self.game.game_id(),
            scores: *self.scores.tally(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
