//! Neighbor enumeration for a single cell.
//!
//! A direction is only generated when its offset stays inside the i64 range
//! on every axis it touches, so cells on an extreme row or column have fewer
//! than eight neighbors.

use super::cell::Cell;

/// The 8 cardinal and intercardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    North = 0, // (x, y+1)
    South = 1, // (x, y-1)
    West  = 2, // (x-1, y)
    East  = 3, // (x+1, y)
    NW    = 4, // (x-1, y+1)
    NE    = 5, // (x+1, y+1)
    SW    = 6, // (x-1, y-1)
    SE    = 7, // (x+1, y-1)
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North, Direction::South,
        Direction::West,  Direction::East,
        Direction::NW,    Direction::NE,
        Direction::SW,    Direction::SE,
    ];

    /// The coordinate offset for this direction.
    #[inline]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::West  => (-1, 0),
            Direction::East  => (1, 0),
            Direction::NW    => (-1, 1),
            Direction::NE    => (1, 1),
            Direction::SW    => (-1, -1),
            Direction::SE    => (1, -1),
        }
    }

    /// The neighbor of `cell` in this direction, or `None` at the edge of
    /// the coordinate range.
    #[inline]
    pub fn step(self, cell: Cell) -> Option<Cell> {
        let (dx, dy) = self.offset();
        let x = cell.x().checked_add(dx)?;
        let y = cell.y().checked_add(dy)?;
        Some(Cell::new(x, y))
    }
}

/// Fixed-capacity neighbor list, refilled in place for each examined cell.
#[derive(Clone, Copy, Debug)]
pub struct NeighborBuf {
    cells: [Cell; 8],
    len: usize,
}

impl NeighborBuf {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::new(0, 0); 8],
            len: 0,
        }
    }

    /// Buffer holding the in-range neighbors of `cell`.
    pub fn around(cell: Cell) -> Self {
        let mut buf = Self::new();
        buf.fill(cell);
        buf
    }

    /// Replace the contents with the in-range neighbors of `cell`.
    #[inline]
    pub fn fill(&mut self, cell: Cell) {
        self.len = 0;
        for dir in Direction::ALL {
            if let Some(n) = dir.step(cell) {
                self.cells[self.len] = n;
                self.len += 1;
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a NeighborBuf {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
