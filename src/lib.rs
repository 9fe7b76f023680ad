use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

mod layout;
mod neighbor;
mod sim;

pub use layout::{Direction, Position, SeatLayout, TileType};
pub use neighbor::{Env8Neighbors, NeighborPolicy, NeighborTable, VisibleNeighbors};
pub use sim::{ChgForOccupiedN, RuleSet, SeatMap};

use layout::SeatLayoutBuilder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InconsistentRow(usize, usize), // (expect count of tiles from earlier rows, count of tiles in current row).
    InvalidSeatChar(char),
    OutOfBounds(Position),
    NoConvergence(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_n, this_n) => write!(
                f,
                "Expect {} tile(s) in one row as in earlier rows, given {}.",
                expect_n, this_n
            ),
            Error::InvalidSeatChar(c) => write!(f, "Invalid character({}) for seat.", c),
            Error::OutOfBounds(pos) => write!(f, "Position {} is out of the seat layout.", pos),
            Error::NoConvergence(step_n) => write!(
                f,
                "Seat layout is still changing after {} round(s).",
                step_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Give up if seats still move after this many rounds.
    #[arg(long)]
    pub max_steps: Option<usize>,
}

pub fn read_layout<P: AsRef<Path>>(path: P) -> Result<SeatLayout> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = SeatLayoutBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder
            .add_row(line.as_str())
            .with_context(|| format!("Invalid seat row at line {}.", ind + 1))?;
    }

    Ok(builder.build())
}
