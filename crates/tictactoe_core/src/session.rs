//! State owned by one screen session.

use crate::board::Board;
use crate::state::{MatchState, Scoreboard};
use crate::types::Mover;
use serde::{Deserialize, Serialize};

/// Everything the controller mutates: the board, the status of the current
/// match, the score ledger and who placed the latest mark.
///
/// The board and status reset with every match. Scores reset only when the
/// screen is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) state: MatchState,
    pub(crate) scores: Scoreboard,
    pub(crate) last_mover: Mover,
}

impl Session {
    /// Fresh session. The last mover starts as the opponent so the human
    /// opens the first match.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: MatchState::InProgress,
            scores: Scoreboard::new(),
            last_mover: Mover::Opponent,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the status of the current match.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Returns the score ledger.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Returns who placed the most recent mark.
    pub fn last_mover(&self) -> Mover {
        self.last_mover
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
