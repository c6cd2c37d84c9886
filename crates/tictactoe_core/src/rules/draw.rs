//! Draw detection.

use super::win::winning_line;
use crate::board::Board;
use tracing::instrument;

/// Checks whether at least one square is still empty.
#[instrument(skip(board))]
pub fn has_free_cell(board: &Board) -> bool {
    board.squares().iter().any(|s| s.is_empty())
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    !has_free_cell(board) && winning_line(board).is_none()
}
