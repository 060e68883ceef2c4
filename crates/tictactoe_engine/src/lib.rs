//! Tic-tac-toe game-state and move-resolution engine.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`]: win/draw detection,
//!   move legality, move application and turn order
//! - **Stores**: [`GameStore`] owns the game in progress, [`ScoreStore`]
//!   owns the session tally; each has its own lifecycle
//! - **Orchestrator**: [`MoveOrchestrator`] turns a requested cell into a
//!   state transition across both stores
//! - **Session**: [`GameSession`] wires it together for a presentation layer
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSession, Mark, Status};
//!
//! let mut session = GameSession::new();
//! assert!(session.attempt_move(4));
//! assert_eq!(session.current_player(), Mark::O);
//! assert!(!session.attempt_move(4));
//! assert_eq!(session.status(), Status::Playing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game_store;
mod invariants;
mod orchestrator;
mod position;
mod rules;
mod score_store;
mod session;
mod types;

pub use action::{Move, MoveError, Transition};
pub use game_store::GameStore;
pub use invariants::{
    BalancedMarksInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    TerminalConsistencyInvariant, WinningLineInvariant,
};
pub use orchestrator::MoveOrchestrator;
pub use position::Position;
pub use rules::{
    Line, Verdict, WINNING_LINES, apply_move, available_moves, detect, is_full, is_valid_move,
    move_count, next_player, next_player_tag,
};
pub use score_store::{ScoreStats, ScoreStore, ScoreTally};
pub use session::{GameSession, Snapshot};
pub use types::{BOARD_SIZE, Board, Cell, GameId, Mark, Outcome, ParseTagError, Status};
