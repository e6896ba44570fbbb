use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    InvalidDimensions,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Mine layout does not hold the configured number of mines")]
    MineCountMismatch,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("A won game must also be over")]
    InvalidState,
}

pub type Result<T> = core::result::Result<T, GameError>;
