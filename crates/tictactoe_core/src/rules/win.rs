//! Win detection.

use crate::board::Board;
use crate::line::Line;
use crate::types::{Mover, Square};
use tracing::instrument;

/// Returns the first completed line, scanning rows, then columns, then the
/// main and anti diagonals.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    Line::ALL.into_iter().find(|line| owner(board, *line).is_some())
}

/// Returns the mover holding every cell of `line`, if any.
pub fn owner(board: &Board, line: Line) -> Option<Mover> {
    let [a, b, c] = line.positions();
    match board.get(a) {
        Square::Occupied(mover) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(mover)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Diagonal;
    use crate::position::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_owner_of_top_row() {
        let mut board = Board::new();
        for pos in Line::Row(0).positions() {
            board.place_at(pos, Mover::Opponent).unwrap();
        }
        assert_eq!(owner(&board, Line::Row(0)), Some(Mover::Opponent));
        assert_eq!(owner(&board, Line::Row(1)), None);
    }

    #[test]
    fn test_mixed_line_has_no_owner() {
        let mut board = Board::new();
        board.place_at(Position::TopLeft, Mover::Player).unwrap();
        board.place_at(Position::Center, Mover::Opponent).unwrap();
        board.place_at(Position::BottomRight, Mover::Player).unwrap();
        assert_eq!(owner(&board, Line::Diagonal(Diagonal::Main)), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place_at(Position::TopLeft, Mover::Player).unwrap();
        board.place_at(Position::TopCenter, Mover::Player).unwrap();
        assert_eq!(winning_line(&board), None);
    }
}
