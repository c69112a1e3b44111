//! Mine layout: which cells of a board hold mines.

use std::collections::BTreeSet;

use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Errors produced when constructing a mine layout.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Board dimensions must both be positive.
    #[display("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// More mines requested than the board has cells. The generator cannot
    /// terminate past this bound, so callers must respect it.
    #[display("{count} mines do not fit a {width}x{height} board")]
    TooManyMines {
        /// Requested mine count.
        count: u32,
        /// Board width.
        width: u32,
        /// Board height.
        height: u32,
    },
    /// A stored mine position falls outside the board.
    #[display("cell index {index} is outside a {width}x{height} board")]
    IndexOutOfRange {
        /// Offending cell index.
        index: u32,
        /// Board width.
        width: u32,
        /// Board height.
        height: u32,
    },
}

/// Immutable mine layout for a `width`x`height` board.
///
/// Cells are addressed either by `(x, y)` coordinates or by the flat index
/// `y * width + x` — the encoding used on the wire and in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineField {
    width: u32,
    height: u32,
    mines: BTreeSet<u32>,
}

impl MineField {
    /// Draws `count` unique mine positions uniformly without replacement
    /// from `[0, width*height)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when a dimension is zero or `count` is not
    /// strictly less than the cell count.
    #[instrument]
    pub fn generate(width: u32, height: u32, count: u32) -> Result<Self, BoardError> {
        Self::check_dimensions(width, height)?;
        let total = width * height;
        if count >= total {
            return Err(BoardError::TooManyMines {
                count,
                width,
                height,
            });
        }

        let mut rng = rand::thread_rng();
        let mines: BTreeSet<u32> = rand::seq::index::sample(&mut rng, total as usize, count as usize)
            .iter()
            .map(|i| i as u32)
            .collect();

        debug!(width, height, count, "Mine layout generated");
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    /// Rebuilds a layout from a stored position list.
    ///
    /// This is the pure re-derivation used for replay: (dimensions, mine
    /// set) fully determine the board, independent of how they were
    /// transported.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when a dimension is zero or a position lies
    /// outside the board.
    #[instrument(skip(positions))]
    pub fn from_positions(
        width: u32,
        height: u32,
        positions: impl IntoIterator<Item = u32>,
    ) -> Result<Self, BoardError> {
        Self::check_dimensions(width, height)?;
        let total = width * height;
        let mut mines = BTreeSet::new();
        for index in positions {
            if index >= total {
                return Err(BoardError::IndexOutOfRange {
                    index,
                    width,
                    height,
                });
            }
            mines.insert(index);
        }
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    fn check_dimensions(width: u32, height: u32) -> Result<(), BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard { width, height });
        }
        Ok(())
    }

    /// Board width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn total_cells(&self) -> u32 {
        self.width * self.height
    }

    /// Number of mines on the board.
    pub fn mines_count(&self) -> u32 {
        self.mines.len() as u32
    }

    /// Number of cells that hold no mine.
    pub fn safe_cells(&self) -> u32 {
        self.total_cells() - self.mines_count()
    }

    /// Mine positions as flat indices, ascending.
    pub fn positions(&self) -> Vec<u32> {
        self.mines.iter().copied().collect()
    }

    /// Flat index of the cell at `(x, y)`.
    pub fn index_of(&self, x: u32, y: u32) -> u32 {
        y * self.width + x
    }

    /// Whether `(x, y)` lies on the board.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Whether the cell at `(x, y)` holds a mine.
    pub fn is_mine(&self, x: u32, y: u32) -> bool {
        self.contains(x, y) && self.mines.contains(&self.index_of(x, y))
    }

    /// Counts mines in the 8-neighborhood of `(x, y)`, clipped to the board
    /// bounds. A corner cell therefore considers at most 3 neighbors.
    pub fn adjacent_mines(&self, x: u32, y: u32) -> u8 {
        let mut count = 0;
        for (nx, ny) in self.neighbors(x, y) {
            if self.mines.contains(&self.index_of(nx, ny)) {
                count += 1;
            }
        }
        count
    }

    /// In-bounds neighbors of `(x, y)`, excluding the cell itself.
    pub(crate) fn neighbors(&self, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (x, y) = (x as i64, y as i64);
        let (w, h) = (self.width as i64, self.height as i64);
        (-1..=1).flat_map(move |dy| {
            (-1..=1).filter_map(move |dx| {
                if dx == 0 && dy == 0 {
                    return None;
                }
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || nx >= w || ny < 0 || ny >= h {
                    return None;
                }
                Some((nx as u32, ny as u32))
            })
        })
    }
}
