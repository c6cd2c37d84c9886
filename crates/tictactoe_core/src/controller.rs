//! Turn-taking state machine and score ledger.

use crate::board::Board;
use crate::invariants::assert_invariants;
use crate::opponent::OpponentPolicy;
use crate::position::Position;
use crate::session::Session;
use crate::state::{MatchState, Scoreboard};
use crate::types::Mover;
use crate::view::View;
use tracing::{debug, error, info, instrument, warn};

/// Drives matches between the human and an [`OpponentPolicy`].
///
/// Every entry point takes the [`View`] that should receive the rendering
/// intents it produces. Call [`on_open`](Self::on_open) before delivering
/// clicks.
#[derive(Debug, Clone)]
pub struct MatchController<P> {
    session: Session,
    policy: P,
}

impl<P: OpponentPolicy> MatchController<P> {
    /// Creates a controller with a fresh session.
    pub fn new(policy: P) -> Self {
        Self {
            session: Session::new(),
            policy,
        }
    }

    /// Returns the session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    /// Returns the status of the current match.
    pub fn state(&self) -> MatchState {
        self.session.state()
    }

    /// Returns the score ledger.
    pub fn scores(&self) -> &Scoreboard {
        self.session.scores()
    }

    /// Returns who placed the most recent mark.
    pub fn last_mover(&self) -> Mover {
        self.session.last_mover()
    }

    /// Screen became visible: zero the scores and start a match.
    #[instrument(skip_all)]
    pub fn on_open<V: View + ?Sized>(&mut self, view: &mut V) {
        info!("Screen opened, zeroing scores");
        self.session.scores.reset();
        view.render_scores(&self.session.scores);
        self.start_match(view);
    }

    /// Clears the board for a new match, keeping the scores.
    ///
    /// If the human placed the last mark of the previous match the opponent
    /// opens this one.
    #[instrument(skip_all)]
    pub fn start_match<V: View + ?Sized>(&mut self, view: &mut V) {
        self.session.board.clear();
        self.session.state = MatchState::InProgress;
        for pos in Position::ALL {
            view.render_cell(pos, None);
        }

        let opener = self.session.last_mover.other();
        info!(%opener, "Match started");
        if opener == Mover::Opponent {
            self.opponent_ply(view);
        }
    }

    /// Handles a click on the cell at row-major `index`.
    ///
    /// Clicks off the board, on taken squares, or after the match ended are
    /// dropped.
    #[instrument(skip(self, view))]
    pub fn on_cell_clicked<V: View + ?Sized>(&mut self, index: usize, view: &mut V) {
        if !self.session.state.is_in_progress() {
            debug!(state = %self.session.state, "Click ignored, match is over");
            return;
        }
        let Some(pos) = Position::from_index(index) else {
            debug!("Click ignored, index off the board");
            return;
        };
        if !self.session.board.is_free(pos) {
            debug!(%pos, "Click ignored, square taken");
            return;
        }

        if self.place(pos, Mover::Player, view) && self.session.state.is_in_progress() {
            self.opponent_ply(view);
        }
    }

    fn opponent_ply<V: View + ?Sized>(&mut self, view: &mut V) {
        let pos = match self.policy.choose(&self.session.board) {
            Ok(pos) => pos,
            Err(e) => {
                error!(error = %e, board = %self.session.board, "Opponent has no move");
                panic!("opponent asked to move on a full board: {}", e);
            }
        };
        self.place(pos, Mover::Opponent, view);
    }

    /// Places a mark, renders it and evaluates the board.
    fn place<V: View + ?Sized>(&mut self, pos: Position, mover: Mover, view: &mut V) -> bool {
        if let Err(e) = self.session.board.place_at(pos, mover) {
            warn!(error = %e, %mover, "Illegal placement dropped");
            debug_assert!(false, "illegal placement: {}", e);
            return false;
        }
        self.session.last_mover = mover;
        view.render_cell(pos, Some(mover));
        self.evaluate(view);
        assert_invariants(&self.session);
        true
    }

    /// Moves the match to a terminal state when the board calls for it.
    fn evaluate<V: View + ?Sized>(&mut self, view: &mut V) {
        if let Some(line) = self.session.board.winning_line() {
            let winner = self.session.last_mover;
            self.session.state = MatchState::Won(winner);
            self.session.scores.record_win(winner);
            info!(
                %winner,
                %line,
                player = self.session.scores.player(),
                opponent = self.session.scores.opponent(),
                "Match won"
            );
            view.render_scores(&self.session.scores);
            view.render_winning_line(line, winner);
        } else if !self.session.board.has_free_cell() {
            self.session.state = MatchState::Drawn;
            info!("Match drawn");
        }
    }
}
