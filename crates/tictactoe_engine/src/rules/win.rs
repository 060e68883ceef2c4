//! Win and draw detection.

use super::draw::is_full;
use crate::types::{Board, Cell, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices forming a line.
pub type Line = [usize; 3];

/// Every line that wins when filled by one mark, in scan order:
/// rows, then columns, then diagonals.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Verdict on a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// `mark` filled `cells`.
    Line {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        cells: Line,
    },
    /// The board is full and no line is complete.
    Draw,
}

impl Verdict {
    /// The outcome this verdict records.
    pub fn outcome(&self) -> Outcome {
        match self {
            Verdict::Line { mark, .. } => Outcome::Win(*mark),
            Verdict::Draw => Outcome::Draw,
        }
    }

    /// The winning line, or `None` for a draw.
    pub fn line(&self) -> Option<Line> {
        match self {
            Verdict::Line { cells, .. } => Some(*cells),
            Verdict::Draw => None,
        }
    }
}

/// Evaluates a board.
///
/// Returns the first completed line in [`WINNING_LINES`] order, a draw
/// when the board is full without one, or `None` while play can continue.
#[instrument(skip(board))]
pub fn detect(board: &Board) -> Option<Verdict> {
    let cells = board.cells();
    for [a, b, c] in WINNING_LINES {
        if let Cell::Marked(mark) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some(Verdict::Line {
                mark,
                cells: [a, b, c],
            });
        }
    }

    if is_full(board) {
        Some(Verdict::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(
            detect(&board("XXXOO....")),
            Some(Verdict::Line {
                mark: Mark::X,
                cells: [0, 1, 2]
            })
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(
            detect(&board("XXO.OXO..")),
            Some(Verdict::Line {
                mark: Mark::O,
                cells: [2, 4, 6]
            })
        );
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // Top row and left column are both X; the row is reported.
        let verdict = detect(&board("XXXXOOXOO")).unwrap();
        assert_eq!(verdict.line(), Some([0, 1, 2]));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let verdict = detect(&board("XOXOXOOXX")).unwrap();
        assert_eq!(verdict.outcome(), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_draw() {
        assert_eq!(detect(&board("XOXXOOOXX")), Some(Verdict::Draw));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(detect(&board("XX.......")), None);
    }
}
