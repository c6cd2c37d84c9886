//! Tic-tac-toe against a random opponent.
//!
//! This crate is the game half of the in-world tic-tac-toe screen. It knows
//! nothing about widgets or textures.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and its queries (free squares, completed lines)
//! - **Opponent**: move selection for the automatic opponent, uniform over
//!   the empty squares, with an injectable randomness source
//! - **Controller**: the turn-taking state machine and the score ledger
//! - **View**: the rendering seam the controller reports through
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{
//!     MatchController, MatchState, RandomOpponent, RenderIntent, SequenceSource,
//! };
//!
//! let policy = RandomOpponent::new(SequenceSource::new([0, 1]));
//! let mut controller = MatchController::new(policy);
//! let mut intents: Vec<RenderIntent> = Vec::new();
//!
//! controller.on_open(&mut intents);
//! controller.on_cell_clicked(4, &mut intents);
//!
//! assert_eq!(controller.state(), MatchState::InProgress);
//! assert_eq!(controller.board().to_string(), "1|O|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
pub mod invariants;
mod line;
mod opponent;
mod position;
mod random;
pub mod rules;
mod session;
mod state;
mod types;
mod view;

pub use board::{Board, BoardError};
pub use controller::MatchController;
pub use line::{Diagonal, Line};
pub use opponent::{MAX_REJECTIONS, OpponentPolicy, PolicyError, RandomOpponent};
pub use position::{CELLS, Position, SIDE};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use session::Session;
pub use state::{MatchState, Scoreboard};
pub use types::{Mover, Square};
pub use view::{RenderIntent, View};
