//! The 3x3 board.

use crate::line::Line;
use crate::position::{CELLS, Position, SIDE};
use crate::rules;
use crate::types::{Mover, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Error returned when a mark cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// Row or column lies outside `0..3`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Empties every square.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; CELLS];
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks whether the square at `pos` is empty.
    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks whether the cell at (`row`, `col`) is empty.
    ///
    /// Cells off the board are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        Position::from_row_col(row, col).is_some_and(|pos| self.is_free(pos))
    }

    /// Places `mover`'s mark at (`row`, `col`).
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mover: Mover) -> Result<Position, BoardError> {
        let pos = Position::from_row_col(row, col).ok_or(BoardError::OutOfRange { row, col })?;
        self.place_at(pos, mover)?;
        Ok(pos)
    }

    /// Places `mover`'s mark at `pos`, which must be empty.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, pos: Position, mover: Mover) -> Result<(), BoardError> {
        if !self.is_free(pos) {
            return Err(BoardError::Occupied(pos));
        }
        self.squares[pos.index()] = Square::Occupied(mover);
        trace!(%pos, %mover, "Mark placed");
        Ok(())
    }

    /// Checks whether any square is still empty.
    pub fn has_free_cell(&self) -> bool {
        rules::has_free_cell(self)
    }

    /// Returns the first completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self)
    }

    /// Returns all squares, row-major.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Number of marks `mover` has on the board.
    pub fn count(&self, mover: Mover) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mover))
            .count()
    }

    /// Empty positions, row-major.
    pub fn free_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_free(*pos))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                let pos = Position::ALL[row * SIDE + col];
                let symbol = match self.get(pos) {
                    Square::Empty => char::from(b'1' + pos.index() as u8),
                    Square::Occupied(mover) => mover.symbol(),
                };
                write!(f, "{}", symbol)?;
                if col < SIDE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIDE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
