use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Lost
/// - Playing -> Won
/// - Lost -> Playing (reset only)
/// - Won -> Playing (reset only)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Lost,
    Won,
}

impl GameState {
    /// Folds the two status flags a presentation layer reads back into one state.
    pub const fn from_flags(game_over: bool, won: bool) -> Self {
        match (game_over, won) {
            (false, _) => Self::Playing,
            (true, false) => Self::Lost,
            (true, true) => Self::Won,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Which kind of click the presentation layer is forwarding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    /// Reveal a cell.
    Primary,
    /// Toggle a flag.
    Secondary,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of a single click forwarded through [`BoardEngine::handle_click`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    NoChange,
    Changed,
    Lost,
    Won,
    /// The game was already over, so the click started a new one.
    Restarted,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Board state machine: owns the grid and decides what each click does to it.
#[derive(Clone, Debug)]
pub struct BoardEngine<G = RandomMineGenerator> {
    config: BoardConfig,
    generator: G,
    board: Array2<Cell>,
    game_over: bool,
    won: bool,
}

impl BoardEngine<RandomMineGenerator> {
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }
}

impl BoardEngine<MineLayout> {
    /// Engine that replays the same hand-made layout on every reset.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        let config = layout.board_config()?;
        Self::with_generator(config, layout)
    }
}

impl<G: MineGenerator> BoardEngine<G> {
    /// Rejects invalid configs up front, then places mines right away.
    pub fn with_generator(config: BoardConfig, generator: G) -> Result<Self> {
        let config = config.validate()?;
        let mut engine = Self {
            config,
            generator,
            board: Array2::default(config.size().to_nd_index()),
            game_over: false,
            won: false,
        };
        engine.reset_game()?;
        Ok(engine)
    }

    /// Throws away the current board and deals a new layout.
    ///
    /// A layout that does not fit the config is refused and the current board is kept as is.
    pub fn reset_game(&mut self) -> Result<()> {
        let layout = self.generator.generate(&self.config)?;
        layout.check_fits(&self.config)?;

        self.board = build_board(self.config.size(), &layout);
        self.game_over = false;
        self.won = false;
        log::debug!(
            "new game: {}x{} with {} mines",
            self.config.rows,
            self.config.cols,
            self.config.mines
        );
        Ok(())
    }

    /// Single entry point for player clicks.
    ///
    /// A click on a finished game restarts it, whatever its coordinates and button.
    pub fn handle_click(&mut self, coords: Coord2, button: Button) -> Result<ClickOutcome> {
        if self.game_over {
            self.reset_game()?;
            return Ok(ClickOutcome::Restarted);
        }

        let changed = match button {
            Button::Primary => self.open_cell(coords)?.has_update(),
            Button::Secondary => self.toggle_flag(coords)?.has_update(),
        };
        self.check_win();

        Ok(match self.state() {
            GameState::Won => ClickOutcome::Won,
            GameState::Lost => ClickOutcome::Lost,
            GameState::Playing if changed => ClickOutcome::Changed,
            GameState::Playing => ClickOutcome::NoChange,
        })
    }

    /// Opens a cell, flooding outwards through cells with no adjacent mines.
    ///
    /// Open and flagged cells are left alone, and so is everything once the game is over.
    pub fn open_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        if self.game_over {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = &mut self.board[coords.to_nd_index()];
        if cell.is_open || cell.is_flagged {
            return Ok(RevealOutcome::NoChange);
        }
        cell.is_open = true;

        if cell.is_mine {
            log::debug!("mine hit at {:?}", coords);
            self.game_over = true;
            return Ok(RevealOutcome::HitMine);
        }

        if cell.adjacent_mines == 0 {
            let opened = self.flood_from(coords);
            log::trace!("flood from {:?} opened {} more cells", coords, opened);
        }
        Ok(RevealOutcome::Revealed)
    }

    /// Iterative flood fill over the neighbors of an already opened zero cell.
    ///
    /// `is_open` doubles as the visited marker, so each cell is pushed at most 8 times and opened at most once.
    fn flood_from(&mut self, start: Coord2) -> usize {
        let mut pending: Vec<Coord2> = self.board.iter_neighbors(start).collect();
        let mut opened = 0;

        while let Some(coords) = pending.pop() {
            let cell = &mut self.board[coords.to_nd_index()];
            if cell.is_open || cell.is_flagged {
                continue;
            }
            // zero cells never border a mine, so nothing reached here can explode
            debug_assert!(!cell.is_mine);
            cell.is_open = true;
            opened += 1;

            if cell.adjacent_mines == 0 {
                pending.extend(self.board.iter_neighbors(coords));
            }
        }

        opened
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        if self.game_over {
            return Ok(MarkOutcome::NoChange);
        }

        let cell = &mut self.board[coords.to_nd_index()];
        if cell.is_open {
            return Ok(MarkOutcome::NoChange);
        }
        cell.is_flagged = !cell.is_flagged;
        log::trace!("flag at {:?}: {}", coords, cell.is_flagged);
        Ok(MarkOutcome::Changed)
    }

    /// Full scan: won once every cell without a mine is open. A lost game stays lost.
    fn check_win(&mut self) {
        if self.game_over {
            return;
        }

        if self.board.iter().all(|cell| cell.is_mine || cell.is_open) {
            log::debug!("board cleared");
            self.won = true;
            self.game_over = true;
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.config.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn state(&self) -> GameState {
        GameState::from_flags(self.game_over, self.won)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.board[coords.to_nd_index()])
    }

    /// The whole grid, indexed `[row, col]`.
    pub fn cells(&self) -> &Array2<Cell> {
        &self.board
    }
}

/// Lays the mines out on a fresh grid, then counts them around every safe cell.
///
/// `layout` must already have passed [`MineLayout::check_fits`] for `size`.
fn build_board(size: Coord2, layout: &MineLayout) -> Array2<Cell> {
    let mut board = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| Cell {
        is_mine: layout.contains_mine((row as Coord, col as Coord)),
        ..Default::default()
    });

    let (rows, cols) = size;
    for row in 0..rows {
        for col in 0..cols {
            let coords = (row, col);
            if board[coords.to_nd_index()].is_mine {
                continue;
            }
            let adjacent_mines = board
                .iter_neighbors(coords)
                .filter(|&pos| board[pos.to_nd_index()].is_mine)
                .count() as u8;
            board[coords.to_nd_index()].adjacent_mines = adjacent_mines;
        }
    }

    board
}
