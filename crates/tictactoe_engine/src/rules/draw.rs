//! Board fullness and occupancy queries.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// Indices of empty cells, ascending.
#[instrument(skip(board))]
pub fn available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

/// Number of occupied cells.
#[instrument(skip(board))]
pub fn move_count(board: &Board) -> usize {
    board.cells().iter().filter(|cell| !cell.is_empty()).count()
}
