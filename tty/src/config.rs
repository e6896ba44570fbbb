use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;
use sweeper_core::{BoardConfig, CellCount, Coord};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 20x15, 30 mines
    #[default]
    Classic,
    /// 9x9, 10 mines
    Beginner,
    /// 16x16, 40 mines
    Intermediate,
    /// 30x16, 99 mines
    Expert,
}

impl Preset {
    pub const fn board_config(self) -> BoardConfig {
        match self {
            Self::Classic => BoardConfig::classic(),
            Self::Beginner => BoardConfig::beginner(),
            Self::Intermediate => BoardConfig::intermediate(),
            Self::Expert => BoardConfig::expert(),
        }
    }
}

/// Partial board settings, from a TOML file or the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardOverrides {
    pub cols: Option<Coord>,
    pub rows: Option<Coord>,
    pub mines: Option<CellCount>,
}

impl BoardOverrides {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn apply(self, base: BoardConfig) -> BoardConfig {
        BoardConfig::new_unchecked(
            self.cols.unwrap_or(base.cols),
            self.rows.unwrap_or(base.rows),
            self.mines.unwrap_or(base.mines),
        )
    }
}

/// Preset, then file, then command line; the result is validated once at the end.
pub fn resolve(
    preset: Preset,
    file: Option<BoardOverrides>,
    cli: BoardOverrides,
) -> anyhow::Result<BoardConfig> {
    let config = preset.board_config();
    let config = file.map_or(config, |file| file.apply(config));
    let config = cli.apply(config);
    config
        .validate()
        .with_context(|| format!("invalid board {config:?}"))
}
