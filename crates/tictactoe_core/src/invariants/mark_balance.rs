//! Mark balance: the two movers' mark counts differ by at most one.

use super::Invariant;
use crate::session::Session;
use crate::types::Mover;

/// Invariant: |#Player − #Opponent| ≤ 1.
///
/// Holds whichever side opened the match, since plies alternate.
pub struct MarkBalanceInvariant;

impl Invariant<Session> for MarkBalanceInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        board.count(Mover::Player).abs_diff(board.count(Mover::Opponent)) <= 1
    }

    fn description() -> &'static str {
        "Player and opponent mark counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_balanced_board() {
        let mut session = Session::new();
        session.board.place_at(Position::Center, Mover::Player).unwrap();
        assert!(MarkBalanceInvariant::holds(&session));
        session.board.place_at(Position::TopLeft, Mover::Opponent).unwrap();
        assert!(MarkBalanceInvariant::holds(&session));
    }

    #[test]
    fn test_two_extra_marks_violate() {
        let mut session = Session::new();
        session.board.place_at(Position::Center, Mover::Opponent).unwrap();
        session.board.place_at(Position::TopLeft, Mover::Opponent).unwrap();
        assert!(!MarkBalanceInvariant::holds(&session));
    }
}
