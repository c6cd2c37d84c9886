//! Terminal consistency: the match status agrees with the board.

use super::Invariant;
use crate::rules;
use crate::session::Session;
use crate::state::MatchState;

/// Invariant: the status is derivable from the board.
///
/// - `Won(m)` needs a completed line owned by `m`.
/// - `Drawn` needs a full board without a line.
/// - `InProgress` needs a free square and no line.
pub struct TerminalConsistentInvariant;

impl Invariant<Session> for TerminalConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        match session.state() {
            MatchState::Won(winner) => board
                .winning_line()
                .is_some_and(|line| rules::owner(board, line) == Some(winner)),
            MatchState::Drawn => rules::is_draw(board),
            MatchState::InProgress => board.has_free_cell() && board.winning_line().is_none(),
        }
    }

    fn description() -> &'static str {
        "Match status agrees with the board"
    }
}
