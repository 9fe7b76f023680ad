use std::{fmt::Display, str::FromStr};

use once_cell::sync::Lazy;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    Floor,
    Empty,
    Occupied,
}

impl TryFrom<char> for TileType {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(TileType::Floor),
            'L' => Ok(TileType::Empty),
            '#' => Ok(TileType::Occupied),
            other => Err(Error::InvalidSeatChar(other)),
        }
    }
}

impl From<TileType> for char {
    fn from(value: TileType) -> Self {
        match value {
            TileType::Floor => '.',
            TileType::Empty => 'L',
            TileType::Occupied => '#',
        }
    }
}

impl TileType {
    pub fn is_seat(&self) -> bool {
        matches!(self, TileType::Empty | TileType::Occupied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        static ALL_DIRS: Lazy<[Direction; 8]> = Lazy::new(|| {
            [
                Direction::TopLeft,
                Direction::Top,
                Direction::TopRight,
                Direction::Left,
                Direction::Right,
                Direction::BottomLeft,
                Direction::Bottom,
                Direction::BottomRight,
            ]
        });

        ALL_DIRS.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row {}, column {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    // Only underflow is checked here, the upper bound belongs to the layout.
    pub fn along_dir(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::TopLeft if self.r > 0 && self.c > 0 => {
                Some(Position::new(self.r - 1, self.c - 1))
            }
            Direction::Top if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::TopRight if self.r > 0 => Some(Position::new(self.r - 1, self.c + 1)),
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            Direction::BottomLeft if self.c > 0 => Some(Position::new(self.r + 1, self.c - 1)),
            Direction::Bottom => Some(Position::new(self.r + 1, self.c)),
            Direction::BottomRight => Some(Position::new(self.r + 1, self.c + 1)),
            _ => None,
        }
    }
}

/// Rectangular seat layout, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLayout {
    tiles: Vec<TileType>,
    row_n: usize,
    col_n: usize,
}

impl Display for SeatLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.chunks(self.col_n.max(1)) {
            let text = row.iter().map(|tt| char::from(*tt)).collect::<String>();
            writeln!(f, "{}", text)?;
        }

        Ok(())
    }
}

impl FromStr for SeatLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = SeatLayoutBuilder::new();
        for line in s.trim_matches(|c: char| c == '\n' || c == '\r').lines() {
            builder.add_row(line)?;
        }

        Ok(builder.build())
    }
}

impl SeatLayout {
    pub fn width(&self) -> usize {
        self.col_n
    }

    pub fn height(&self) -> usize {
        self.row_n
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    pub fn tile(&self, pos: &Position) -> Result<TileType, Error> {
        self.get(pos).ok_or(Error::OutOfBounds(*pos))
    }

    pub fn get(&self, pos: &Position) -> Option<TileType> {
        self.pos_to_ind(pos).map(|ind| self.tiles[ind])
    }

    pub fn count(&self, c_tt: TileType) -> usize {
        self.tiles.iter().filter(|tt| **tt == c_tt).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.count(TileType::Occupied)
    }

    /// Every position of this layout in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let col_n = self.col_n;
        (0..self.row_n).flat_map(move |r| (0..col_n).map(move |c| Position::new(r, c)))
    }

    pub(crate) fn same_size(&self, other: &SeatLayout) -> bool {
        self.row_n == other.row_n && self.col_n == other.col_n
    }

    pub(crate) fn tile_mut(&mut self, pos: &Position) -> Option<&mut TileType> {
        self.pos_to_ind(pos).map(|ind| &mut self.tiles[ind])
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }
}

pub(crate) struct SeatLayoutBuilder {
    tiles: Vec<TileType>,
    row_n: usize,
    col_n: Option<usize>,
}

impl SeatLayoutBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let tile_n = row_text.chars().count();
        let expect_n = *self.col_n.get_or_insert(tile_n);
        if expect_n != tile_n {
            return Err(Error::InconsistentRow(expect_n, tile_n));
        }

        for c in row_text.chars() {
            self.tiles.push(TileType::try_from(c)?);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> SeatLayout {
        SeatLayout {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}
