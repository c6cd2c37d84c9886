//! Match status and the score ledger.

use crate::types::Mover;
use serde::{Deserialize, Serialize};

/// Status of the current match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchState {
    /// Clicks are accepted.
    #[default]
    InProgress,
    /// A line was completed by the given mover.
    Won(Mover),
    /// The board filled up without a line.
    Drawn,
}

impl MatchState {
    /// Returns true while the match accepts moves.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, MatchState::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mover> {
        match self {
            MatchState::Won(mover) => Some(*mover),
            MatchState::InProgress | MatchState::Drawn => None,
        }
    }
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchState::InProgress => write!(f, "In progress"),
            MatchState::Won(mover) => write!(f, "{} wins", mover),
            MatchState::Drawn => write!(f, "Draw"),
        }
    }
}

/// Wins per mover across the matches of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    player: u32,
    opponent: u32,
}

impl Scoreboard {
    /// Both scores at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins by the human.
    pub fn player(&self) -> u32 {
        self.player
    }

    /// Wins by the automatic opponent.
    pub fn opponent(&self) -> u32 {
        self.opponent
    }

    /// Wins by `mover`.
    pub fn get(&self, mover: Mover) -> u32 {
        match mover {
            Mover::Player => self.player,
            Mover::Opponent => self.opponent,
        }
    }

    /// Credits one win to `mover`.
    pub fn record_win(&mut self, mover: Mover) {
        match mover {
            Mover::Player => self.player = self.player.saturating_add(1),
            Mover::Opponent => self.opponent = self.opponent.saturating_add(1),
        }
    }

    /// Zeroes both scores.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
