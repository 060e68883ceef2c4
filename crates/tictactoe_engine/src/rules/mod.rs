//! Game rules for tic-tac-toe.
//!
//! Pure functions over boards. Nothing here owns state; the stores and
//! the orchestrator compose these into the game's state machine.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{available_moves, is_full, move_count};
pub use moves::{apply_move, is_valid_move, next_player, next_player_tag};
pub use win::{Line, Verdict, WINNING_LINES, detect};
