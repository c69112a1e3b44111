//! Pure minesweeper board logic.
//!
//! This crate models a mine layout, derived cell state (adjacency counts,
//! flood-fill reveal, win detection), and the reconstruction of a recorded
//! game from its stored mine positions and move log. It performs no I/O —
//! the server persists sessions and the clients render them, but both build
//! board state exclusively through the types here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod field;
mod replay;
mod types;

pub use board::{BoardState, Reveal};
pub use field::{BoardError, MineField};
pub use replay::{RecordedMove, Replay};
pub use types::{MoveResult, Outcome, ParseValueError};
