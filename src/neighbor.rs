use crate::{
    layout::{Direction, Position, SeatLayout},
    Error,
};

/// Decides which positions count as neighbors of a seat.
pub trait NeighborPolicy {
    fn neighbors(&self, layout: &SeatLayout, pos: &Position) -> Vec<Position>;
}

/// The eight touching tiles, whatever they hold.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env8Neighbors;

impl NeighborPolicy for Env8Neighbors {
    fn neighbors(&self, layout: &SeatLayout, pos: &Position) -> Vec<Position> {
        Direction::all()
            .iter()
            .filter_map(|dir| pos.along_dir(*dir))
            .filter(|p| layout.contains(p))
            .collect()
    }
}

/// The first seat seen in each of the eight directions, looking over floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibleNeighbors;

impl VisibleNeighbors {
    fn first_seat(layout: &SeatLayout, pos: &Position, dir: Direction) -> Option<Position> {
        let mut cur_pos = pos.along_dir(dir);
        while let Some(p) = cur_pos {
            if layout.get(&p)?.is_seat() {
                return Some(p);
            }
            cur_pos = p.along_dir(dir);
        }

        None
    }
}

impl NeighborPolicy for VisibleNeighbors {
    fn neighbors(&self, layout: &SeatLayout, pos: &Position) -> Vec<Position> {
        Direction::all()
            .iter()
            .filter_map(|dir| Self::first_seat(layout, pos, *dir))
            .collect()
    }
}

/// Neighbors of every position, evaluated once for a layout.
///
/// Floor never changes and the layout never resizes, so the neighbors found
/// for the initial layout stay valid for every later round of the same
/// simulation; only occupancy has to be read again.
#[derive(Debug, Clone)]
pub struct NeighborTable {
    neighbors: Vec<Vec<Position>>,
    row_n: usize,
    col_n: usize,
}

impl NeighborTable {
    pub fn new<N: NeighborPolicy + ?Sized>(policy: &N, layout: &SeatLayout) -> Self {
        let neighbors = layout
            .positions()
            .map(|pos| policy.neighbors(layout, &pos))
            .collect();

        Self {
            neighbors,
            row_n: layout.height(),
            col_n: layout.width(),
        }
    }

    pub fn neighbors(&self, pos: &Position) -> Result<&[Position], Error> {
        if pos.r() < self.row_n && pos.c() < self.col_n {
            Ok(&self.neighbors[pos.r() * self.col_n + pos.c()])
        } else {
            Err(Error::OutOfBounds(*pos))
        }
    }
}
