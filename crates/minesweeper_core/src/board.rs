//! Mutable play state layered over a mine layout.

use tracing::{debug, instrument};

use crate::field::MineField;

/// Result of revealing a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// The cell held a mine; the board is now terminal.
    Exploded,
    /// The cell (and any flood-filled region) opened.
    Opened {
        /// How many cells this reveal opened, including the target.
        newly_opened: u32,
    },
    /// Nothing changed: out of bounds, already opened, or the board had
    /// already exploded.
    Ignored,
}

/// Opened-cell state for one play-through of a [`MineField`].
#[derive(Debug, Clone)]
pub struct BoardState {
    field: MineField,
    opened: Vec<bool>,
    opened_count: u32,
    exploded: Option<u32>,
}

impl BoardState {
    /// Creates a fresh board with no opened cells.
    pub fn new(field: MineField) -> Self {
        let cells = field.total_cells() as usize;
        Self {
            field,
            opened: vec![false; cells],
            opened_count: 0,
            exploded: None,
        }
    }

    /// The underlying mine layout.
    pub fn field(&self) -> &MineField {
        &self.field
    }

    /// Whether the cell at `(x, y)` has been opened.
    pub fn is_opened(&self, x: u32, y: u32) -> bool {
        self.field.contains(x, y) && self.opened[self.field.index_of(x, y) as usize]
    }

    /// Number of opened cells. Mines are never counted: an exploded mine is
    /// tracked separately and flood fill cannot reach one.
    pub fn opened_count(&self) -> u32 {
        self.opened_count
    }

    /// Flat index of the exploded mine, if the board is lost.
    pub fn exploded(&self) -> Option<u32> {
        self.exploded
    }

    /// Whether every safe cell has been opened.
    ///
    /// Holds exactly when `opened_count == width*height - mines_count`,
    /// never earlier.
    pub fn is_won(&self) -> bool {
        self.exploded.is_none() && self.opened_count == self.field.safe_cells()
    }

    /// Adjacent-mine count for an opened cell display.
    pub fn adjacency(&self, x: u32, y: u32) -> u8 {
        self.field.adjacent_mines(x, y)
    }

    /// Reveals the cell at `(x, y)`.
    ///
    /// A mine explodes and ends the board. A safe cell opens with its
    /// adjacency count; a zero-count cell spreads to its whole connected
    /// zero region plus the numbered fringe. The spread runs over an
    /// explicit worklist with the opened set as visited guard, so interior
    /// zero regions terminate without recursion and no cell opens twice.
    #[instrument(skip(self))]
    pub fn reveal(&mut self, x: u32, y: u32) -> Reveal {
        if !self.field.contains(x, y) || self.exploded.is_some() || self.is_opened(x, y) {
            return Reveal::Ignored;
        }

        if self.field.is_mine(x, y) {
            self.exploded = Some(self.field.index_of(x, y));
            debug!(x, y, "Mine revealed");
            return Reveal::Exploded;
        }

        let mut newly_opened = 0;
        let mut worklist = vec![(x, y)];
        while let Some((cx, cy)) = worklist.pop() {
            let idx = self.field.index_of(cx, cy) as usize;
            if self.opened[idx] {
                continue;
            }
            self.opened[idx] = true;
            self.opened_count += 1;
            newly_opened += 1;

            // A zero-adjacency cell has no mined neighbor, so spreading to
            // all unopened neighbors can only reach safe cells.
            if self.field.adjacent_mines(cx, cy) == 0 {
                for (nx, ny) in self.field.neighbors(cx, cy) {
                    if !self.opened[self.field.index_of(nx, ny) as usize] {
                        worklist.push((nx, ny));
                    }
                }
            }
        }

        debug!(x, y, newly_opened, total = self.opened_count, "Cells opened");
        Reveal::Opened { newly_opened }
    }
}
