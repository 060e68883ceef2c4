//! Move legality, application and turn order.

use crate::types::{Board, Cell, Mark, Status};
use tracing::{instrument, warn};

/// Checks whether `index` may be played.
///
/// True only while the game is playing and the cell is on the board and
/// empty. Off-board indices are rejected rather than trusted.
#[instrument(skip(board))]
pub fn is_valid_move(board: &Board, index: usize, status: Status) -> bool {
    status == Status::Playing && board.is_empty(index)
}

/// Returns a new board with `mark` at `index`.
///
/// Legality is not checked here: an occupied cell is overwritten. The
/// input board is never modified. An off-board index yields an unchanged
/// copy.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Board {
    match board.with_cell(index, Cell::Marked(mark)) {
        Some(next) => next,
        None => {
            warn!(index, "Move index off the board, board unchanged");
            *board
        }
    }
}

/// Mark to move after `current`.
pub fn next_player(current: Mark) -> Mark {
    current.opponent()
}

/// Mark to move after a textual `current` tag.
///
/// Only the exact tag `"X"` yields O. Anything else, including other
/// spellings of X, yields X.
#[instrument]
pub fn next_player_tag(current: &str) -> Mark {
    if current == "X" {
        Mark::O
    } else {
        if current != "O" {
            warn!("Unrecognized current player, falling back to X");
        }
        Mark::X
    }
}
