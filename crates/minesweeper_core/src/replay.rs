//! Reconstruction of a recorded game from its stored moves.

use tracing::{debug, instrument};

use crate::board::BoardState;
use crate::field::MineField;

/// One entry of a session's move log, as recorded by the client.
///
/// Coordinates are kept signed because the log stores whatever the client
/// sent, including the `-1` sentinel for absent fields; replay skips
/// anything that does not land on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMove {
    /// Client-assigned sequence number.
    pub move_number: i32,
    /// Target cell x coordinate at the time of the move.
    pub x: i32,
    /// Target cell y coordinate at the time of the move.
    pub y: i32,
}

/// Cursor-driven playback of a move log against a fresh board.
///
/// The board is rebuilt purely from the session's dimensions and stored
/// mine positions; each [`step`](Replay::step) applies the next recorded
/// reveal. Pacing belongs to the caller — this type knows nothing about
/// timers or transports.
#[derive(Debug, Clone)]
pub struct Replay {
    board: BoardState,
    moves: Vec<RecordedMove>,
    cursor: usize,
}

impl Replay {
    /// Creates a playback over `moves` with an untouched board.
    pub fn new(field: MineField, moves: Vec<RecordedMove>) -> Self {
        Self {
            board: BoardState::new(field),
            moves,
            cursor: 0,
        }
    }

    /// Board state after the moves applied so far.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Recorded moves being played back.
    pub fn moves(&self) -> &[RecordedMove] {
        &self.moves
    }

    /// Number of moves applied so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Whether every recorded move has been applied. Immediately true for
    /// a session with no moves.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.moves.len()
    }

    /// Applies the next recorded move and returns it, or `None` when the
    /// log is exhausted.
    ///
    /// Out-of-board coordinates (including `-1` sentinels) advance the
    /// cursor without touching the board.
    #[instrument(skip(self))]
    pub fn step(&mut self) -> Option<RecordedMove> {
        let mv = *self.moves.get(self.cursor)?;
        self.cursor += 1;
        if mv.x >= 0 && mv.y >= 0 {
            self.board.reveal(mv.x as u32, mv.y as u32);
        }
        debug!(
            move_number = mv.move_number,
            x = mv.x,
            y = mv.y,
            "Replay move applied"
        );
        Some(mv)
    }

    /// Applies all remaining moves and returns the final board.
    pub fn run_to_end(mut self) -> BoardState {
        while self.step().is_some() {}
        self.board
    }
}
