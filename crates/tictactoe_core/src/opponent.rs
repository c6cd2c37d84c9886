//! Move selection for the automatic opponent.

use crate::board::Board;
use crate::position::{Position, SIDE};
use crate::random::{RandomSource, RngSource};
use rand::rngs::ThreadRng;
use tracing::{debug, instrument};

/// Rejection rounds before falling back to picking among the free squares.
pub const MAX_REJECTIONS: usize = 64;

/// Error returned by an [`OpponentPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PolicyError {
    /// Every square is occupied.
    #[display("No empty square left for the opponent")]
    NoLegalMove,
}

impl std::error::Error for PolicyError {}

/// Chooses the opponent's next cell.
pub trait OpponentPolicy {
    /// Returns a position that is empty on `board`.
    ///
    /// Fails with [`PolicyError::NoLegalMove`] when the board is full.
    fn choose(&mut self, board: &Board) -> Result<Position, PolicyError>;
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn choose(&mut self, board: &Board) -> Result<Position, PolicyError> {
        (**self).choose(board)
    }
}

/// Uniform random choice over the empty squares.
///
/// Draws a row and a column and retries while the square is taken. After
/// [`MAX_REJECTIONS`] misses it picks directly among the free squares, which
/// keeps the choice uniform and the loop bounded.
#[derive(Debug, Clone)]
pub struct RandomOpponent<S> {
    source: S,
}

impl<S: RandomSource> RandomOpponent<S> {
    /// Creates a policy drawing from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl Default for RandomOpponent<RngSource<ThreadRng>> {
    fn default() -> Self {
        Self::new(RngSource::thread())
    }
}

impl<S: RandomSource> OpponentPolicy for RandomOpponent<S> {
    #[instrument(skip_all)]
    fn choose(&mut self, board: &Board) -> Result<Position, PolicyError> {
        let free = board.free_positions();
        if free.is_empty() {
            return Err(PolicyError::NoLegalMove);
        }

        for attempt in 0..MAX_REJECTIONS {
            let row = self.source.below(SIDE);
            let col = self.source.below(SIDE);
            if let Some(pos) = Position::from_row_col(row, col)
                && board.is_free(pos)
            {
                debug!(%pos, attempt, "Opponent chose square");
                return Ok(pos);
            }
        }

        let pos = free[self.source.below(free.len()) % free.len()];
        debug!(%pos, "Opponent fell back to free-square pick");
        Ok(pos)
    }
}
