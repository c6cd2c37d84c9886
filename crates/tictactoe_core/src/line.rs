//! Line descriptors for the eight ways to win.

use crate::position::{Position, SIDE};
use serde::{Deserialize, Serialize};

/// One of the two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagonal {
    /// (0,0) (1,1) (2,2)
    Main,
    /// (0,2) (1,1) (2,0)
    Anti,
}

/// A completed line on the board.
///
/// Rows and columns carry their index in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// A horizontal line.
    Row(usize),
    /// A vertical line.
    Column(usize),
    /// One of the diagonals.
    Diagonal(Diagonal),
}

impl Line {
    /// All eight lines in detection order: rows, columns, main then anti diagonal.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Diagonal(Diagonal::Main),
        Line::Diagonal(Diagonal::Anti),
    ];

    /// The three cells covered by this line.
    pub fn positions(self) -> [Position; SIDE] {
        let cell = |row: usize, col: usize| Position::ALL[row * SIDE + col];
        match self {
            Line::Row(row) => [cell(row, 0), cell(row, 1), cell(row, 2)],
            Line::Column(col) => [cell(0, col), cell(1, col), cell(2, col)],
            Line::Diagonal(Diagonal::Main) => {
                [Position::TopLeft, Position::Center, Position::BottomRight]
            }
            Line::Diagonal(Diagonal::Anti) => {
                [Position::TopRight, Position::Center, Position::BottomLeft]
            }
        }
    }

    /// Checks whether this line passes through `pos`.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Column(col) => write!(f, "column {}", col),
            Line::Diagonal(Diagonal::Main) => write!(f, "main diagonal"),
            Line::Diagonal(Diagonal::Anti) => write!(f, "anti diagonal"),
        }
    }
}
