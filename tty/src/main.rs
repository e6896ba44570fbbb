use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sweeper_core::{BoardEngine, BoardSnapshot, Button, CellCount, ClickOutcome, Coord};
use web_time::{SystemTime, UNIX_EPOCH};

use crate::command::{Command, HELP};
use crate::config::{BoardOverrides, Preset};

mod command;
mod config;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board size and mine count to start from
    #[arg(short, long, value_enum, default_value_t)]
    preset: Preset,

    /// TOML file with `cols`, `rows` and `mines` keys
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    cols: Option<Coord>,

    /// Grid height
    #[arg(long)]
    rows: Option<Coord>,

    /// Number of mines
    #[arg(long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let file = args
        .config
        .as_deref()
        .map(BoardOverrides::from_toml_file)
        .transpose()?;
    let cli = BoardOverrides {
        cols: args.cols,
        rows: args.rows,
        mines: args.mines,
    };
    let config = config::resolve(args.preset, file, cli)?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);

    let mut engine = BoardEngine::new(config, seed)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}\n")?;
    write!(stdout, "{}", render::render(&BoardSnapshot::from_engine(&engine)))?;

    for line in io::stdin().lock().lines() {
        let line = line?;

        let command = if line.trim().is_empty() && engine.state().is_finished() {
            // enter restarts a finished game like any click would
            Command::Click((0, 0), Button::Primary)
        } else {
            match line.parse::<Command>() {
                Ok(command) => command,
                Err(command::CommandError::Empty) => continue,
                Err(err) => {
                    writeln!(stdout, "{err}")?;
                    continue;
                }
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            Command::Reset => engine.reset_game()?,
            Command::Click((row, col), button) => {
                let off_board = row >= engine.rows() || col >= engine.cols();
                if off_board && !engine.state().is_finished() {
                    writeln!(
                        stdout,
                        "({row}, {col}) is off the board, which is {} rows by {} columns",
                        engine.rows(),
                        engine.cols()
                    )?;
                    continue;
                }
                let outcome = engine.handle_click((row, col), button)?;
                log::debug!("click {:?} at ({}, {}): {:?}", button, row, col, outcome);
                if outcome == ClickOutcome::NoChange {
                    continue;
                }
            }
        }

        writeln!(stdout)?;
        write!(stdout, "{}", render::render(&BoardSnapshot::from_engine(&engine)))?;
    }

    Ok(())
}
