//! Move requests and their results.

use crate::position::Position;
use crate::rules::Line;
use crate::types::{BOARD_SIZE, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Position {} is out of bounds (must be 0-{})", _0, BOARD_SIZE - 1)]
    OutOfBounds(#[error(not(source))] usize),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cell is taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] usize),
}

/// State change produced by an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// No line and the board has room; `next` is to move.
    Continued {
        /// The mark now to move.
        next: Mark,
    },
    /// The move completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        cells: Line,
    },
    /// The move filled the board without a line.
    Drawn,
}

impl Transition {
    /// True if this move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Transition::Continued { .. })
    }
}
