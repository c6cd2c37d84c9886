//! Rendering seam between the controller and whatever draws the board.
//!
//! The controller never touches widgets. It emits intents through [`View`]
//! and the host adapter turns them into image and label updates.

use crate::line::Line;
use crate::position::Position;
use crate::state::Scoreboard;
use crate::types::Mover;
use serde::{Deserialize, Serialize};

/// Receiver of rendering intents.
pub trait View {
    /// Shows `marker` on the cell, or clears it when `None`.
    fn render_cell(&mut self, pos: Position, marker: Option<Mover>);

    /// Paints the three cells of `line` with the winner's crossed marker.
    fn render_winning_line(&mut self, line: Line, winner: Mover);

    /// Shows the current scores.
    fn render_scores(&mut self, scores: &Scoreboard);
}

/// A rendering intent as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderIntent {
    /// See [`View::render_cell`].
    Cell {
        /// Target cell.
        pos: Position,
        /// Marker to show, if any.
        marker: Option<Mover>,
    },
    /// See [`View::render_winning_line`].
    WinningLine {
        /// Completed line.
        line: Line,
        /// Owner of the line.
        winner: Mover,
    },
    /// See [`View::render_scores`].
    Scores {
        /// Human wins.
        player: u32,
        /// Opponent wins.
        opponent: u32,
    },
}

/// Records intents in emission order.
impl View for Vec<RenderIntent> {
    fn render_cell(&mut self, pos: Position, marker: Option<Mover>) {
        self.push(RenderIntent::Cell { pos, marker });
    }

    fn render_winning_line(&mut self, line: Line, winner: Mover) {
        self.push(RenderIntent::WinningLine { line, winner });
    }

    fn render_scores(&mut self, scores: &Scoreboard) {
        self.push(RenderIntent::Scores {
            player: scores.player(),
            opponent: scores.opponent(),
        });
    }
}

impl<V: View + ?Sized> View for &mut V {
    fn render_cell(&mut self, pos: Position, marker: Option<Mover>) {
        (**self).render_cell(pos, marker);
    }

    fn render_winning_line(&mut self, line: Line, winner: Mover) {
        (**self).render_winning_line(line, winner);
    }

    fn render_scores(&mut self, scores: &Scoreboard) {
        (**self).render_scores(scores);
    }
}
