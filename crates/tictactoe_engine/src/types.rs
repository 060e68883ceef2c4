//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Error returned when a textual tag does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized {} tag: {:?}", kind, tag)]
pub struct ParseTagError {
    /// What kind of value was being parsed (outcome, board).
    pub kind: &'static str,
    /// The offending input.
    pub tag: String,
}

impl ParseTagError {
    /// Creates a new parse error for the given kind of tag.
    pub fn new(kind: &'static str, tag: impl Into<String>) -> Self {
        Self {
            kind,
            tag: tag.into(),
        }
    }
}

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
///
/// Serializes as `null`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Marked)
    }
}

impl From<Cell> for Option<Mark> {
    fn from(cell: Cell) -> Self {
        cell.mark()
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every change produces a new board and
/// leaves any copy held elsewhere untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Creates a board from explicit cells.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns a copy of this board with `cell` at `index`.
    ///
    /// Returns `None` when the index is off the board.
    pub fn with_cell(&self, index: usize, cell: Cell) -> Option<Self> {
        let mut next = *self;
        *next.cells.get_mut(index)? = cell;
        Some(next)
    }

    /// Checks if the cell at `index` is on the board and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Counts cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl FromStr for Board {
    type Err = ParseTagError;

    /// Parses nine cell characters in row-major order.
    ///
    /// `X`/`O` (either case) are marks; `.`, `-`, `_` and space are empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_SIZE {
            return Err(ParseTagError::new("board", s));
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (cell, ch) in cells.iter_mut().zip(chars) {
            *cell = match ch {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                _ => return Err(ParseTagError::new("board", s)),
            };
        }
        Ok(Self { cells })
    }
}

/// Coarse phase of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    /// Moves are accepted.
    #[default]
    Playing,
    /// Someone completed a line.
    Win,
    /// The board filled with no line.
    Draw,
}

impl Status {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Playing)
    }
}

/// Result of a finished game.
///
/// Serves both as the winner record of a game and as the key of the
/// score tally. Serializes as `"X"`, `"O"` or `"draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Outcome {
    /// The given mark completed a line.
    Win(Mark),
    /// The board filled without a line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark, if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Terminal status matching this outcome.
    pub fn status(self) -> Status {
        match self {
            Outcome::Win(_) => Status::Win,
            Outcome::Draw => Status::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{}", mark),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

impl FromStr for Outcome {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("draw") {
            return Ok(Outcome::Draw);
        }
        tag.parse::<Mark>()
            .map(Outcome::Win)
            .map_err(|_| ParseTagError::new("outcome", tag))
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.to_string()
    }
}

impl TryFrom<String> for Outcome {
    type Error = ParseTagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Opaque token identifying one game within a session.
///
/// Changes on every reset and never repeats within a store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("game-{}", _0)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    /// Token of the first game in a store.
    pub fn initial() -> Self {
        Self(0)
    }

    /// Token of the game following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw generation number.
    pub fn generation(self) -> u64 {
        self.0
    }
}
