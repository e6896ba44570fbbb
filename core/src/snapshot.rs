use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer needs to draw one frame, without access to hidden mines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// `(rows, cols)`
    pub size: Coord2,
    pub cells: Array2<CellView>,
    pub game_over: bool,
    pub won: bool,
}

impl BoardSnapshot {
    pub fn from_engine<G: MineGenerator>(engine: &BoardEngine<G>) -> Self {
        Self {
            size: engine.config().size(),
            cells: engine.cells().map(|cell| cell.view()),
            game_over: engine.game_over(),
            won: engine.won(),
        }
    }

    pub fn state(&self) -> GameState {
        GameState::from_flags(self.game_over, self.won)
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (usize::from(self.size.0), usize::from(self.size.1));
        if self.cells.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }
        if self.won && !self.game_over {
            return Err(GameError::InvalidState);
        }
        Ok(())
    }
}
