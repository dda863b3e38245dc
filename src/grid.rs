use std::fmt;

use crate::error::{MazeError, Result};

/// Smallest allowed maze side.
pub const MIN_DIMENSION: usize = 5;
/// Largest allowed maze side.
pub const MAX_DIMENSION: usize = 155;

/// A cell coordinate, origin top-left, row increasing downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }

    /// Apply a signed offset, returning None if either axis would go negative
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Point> {
        Some(Point {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// True when the two points differ by one in exactly one axis
    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Wall,
    Open,
}

/// 4-neighborhood offsets in East, South, West, North order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Square maze grid with odd side, stored row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Create a grid with every cell set to wall.
    /// Fails unless `rows == cols`, both odd and within the allowed range.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if !is_valid_dimension(rows, cols) {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![CellKind::Wall; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Side length of the (square) grid
    pub fn dimension(&self) -> usize {
        self.rows
    }

    /// Fixed entrance cell (1, 1)
    pub fn entrance(&self) -> Point {
        Point::new(1, 1)
    }

    /// Fixed exit cell (rows-2, cols-2)
    pub fn exit(&self) -> Point {
        Point::new(self.rows - 2, self.cols - 2)
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    /// Cell kind at `p`. Anything outside the grid reads as wall.
    pub fn kind(&self, p: Point) -> CellKind {
        if !self.in_bounds(p) {
            return CellKind::Wall;
        }
        self.cells[self.index(p)]
    }

    pub fn is_open(&self, p: Point) -> bool {
        self.kind(p) == CellKind::Open
    }

    pub fn set(&mut self, p: Point, kind: CellKind) -> Result<()> {
        if !self.in_bounds(p) {
            return Err(MazeError::OutOfBounds(p));
        }
        let idx = self.index(p);
        self.cells[idx] = kind;
        Ok(())
    }

    /// Reset every cell to wall
    pub fn fill_walls(&mut self) {
        self.cells.fill(CellKind::Wall);
    }

    /// Row-major cell storage
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    pub fn open_cells(&self) -> usize {
        self.cells.iter().filter(|&&k| k == CellKind::Open).count()
    }

    /// Open 4-neighbors of `p`, in East, South, West, North order
    pub fn open_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| p.offset(dr, dc))
            .filter(move |n| self.is_open(*n))
    }

    fn index(&self, p: Point) -> usize {
        p.row * self.cols + p.col
    }
}

/// Square, odd and within [MIN_DIMENSION, MAX_DIMENSION]
pub fn is_valid_dimension(rows: usize, cols: usize) -> bool {
    rows == cols && rows % 2 == 1 && (MIN_DIMENSION..=MAX_DIMENSION).contains(&rows)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = match self.kind(Point::new(row, col)) {
                    CellKind::Wall => '■',
                    CellKind::Open => '□',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
