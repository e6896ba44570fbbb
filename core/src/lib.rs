#![no_std]

extern crate alloc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod types;

/// Board dimensions and mine count, fixed for the lifetime of an engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub cols: Coord,
    pub rows: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(cols: Coord, rows: Coord, mines: CellCount) -> Self {
        Self { cols, rows, mines }
    }

    /// Checks that the board has at least one cell and at least one cell free of mines.
    pub fn new(cols: Coord, rows: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(cols, rows, mines).validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.cols == 0 || self.rows == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(self)
    }

    pub const fn classic() -> Self {
        Self::new_unchecked(20, 15, 30)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(30, 16, 99)
    }

    /// Grid shape as `(rows, cols)`.
    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    /// Config describing this layout, checked against the usual board limits.
    pub fn board_config(&self) -> Result<BoardConfig> {
        let (rows, cols) = self.size();
        BoardConfig::new(cols, rows, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Checks that this layout is a legal board for `config`: same shape, same mine count.
    pub fn check_fits(&self, config: &BoardConfig) -> Result<()> {
        if self.size() != config.size() {
            return Err(GameError::InvalidBoardShape);
        }
        if self.mine_count >= config.total_cells() {
            return Err(GameError::TooManyMines);
        }
        if self.mine_count != config.mines {
            return Err(GameError::MineCountMismatch);
        }
        Ok(())
    }

    /// Out-of-range coordinates hold no mine.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }
}
