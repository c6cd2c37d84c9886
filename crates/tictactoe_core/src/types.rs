//! Core domain types for the tic-tac-toe screen.

use serde::{Deserialize, Serialize};

/// Who places a mark on the board.
///
/// The human always plays crosses and the automatic opponent circles.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Mover {
    /// The human clicking cells.
    Player,
    /// The automatic opponent.
    Opponent,
}

impl Mover {
    /// Returns the other mover.
    pub fn other(self) -> Self {
        match self {
            Mover::Player => Mover::Opponent,
            Mover::Opponent => Mover::Player,
        }
    }

    /// Single-character mark used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Mover::Player => 'X',
            Mover::Opponent => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Square occupied by a mover.
    Occupied(Mover),
}

impl Square {
    /// Returns the occupant, if any.
    pub fn mover(self) -> Option<Mover> {
        match self {
            Square::Empty => None,
            Square::Occupied(mover) => Some(mover),
        }
    }

    /// Checks whether the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

impl From<Option<Mover>> for Square {
    fn from(mover: Option<Mover>) -> Self {
        mover.map_or(Square::Empty, Square::Occupied)
    }
}
