//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the controller and the invariants share one definition.

pub mod draw;
pub mod win;

pub use draw::{has_free_cell, is_draw};
pub use win::{owner, winning_line};
