//! Cell storage for a maze.
//!
//! The grid starts solid (every cell a wall). Passages appear only through
//! the two carving primitives, so the outer border stays intact for any
//! carver that keeps to the interior.

use super::types::{Cell, MazeError, Position};
use crate::core::constants::MIN_GRID_DIMENSION;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
}

impl MazeGrid {
    /// Creates an all-wall grid. Both dimensions must be odd and at least 5.
    pub fn initialize(rows: usize, columns: usize) -> Result<Self, MazeError> {
        let valid = |n: usize| n >= MIN_GRID_DIMENSION && n % 2 == 1;
        if !valid(rows) || !valid(columns) {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }

        Ok(Self {
            rows,
            columns,
            cells: vec![vec![Cell::Wall; columns]; rows],
        })
    }

    /// Builds a grid from an explicit cell matrix.
    ///
    /// Only the shape and the wall border are checked; parity and minimum
    /// size are not, so degenerate grids can be described.
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let rows = cells.len();
        let columns = cells.first().map(Vec::len).unwrap_or(0);
        if rows < 3 || columns < 3 {
            return Err(MazeError::MalformedGrid(format!(
                "grid must be at least 3x3, got {}x{}",
                rows, columns
            )));
        }
        if let Some(r) = cells.iter().position(|row| row.len() != columns) {
            return Err(MazeError::MalformedGrid(format!(
                "row {} has {} cells, expected {}",
                r,
                cells[r].len(),
                columns
            )));
        }

        let grid = Self {
            rows,
            columns,
            cells,
        };
        if let Some(pos) = grid.border_positions().find(|&p| grid.is_open(p)) {
            return Err(MazeError::MalformedGrid(format!(
                "border cell {} is open",
                pos
            )));
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.columns
    }

    /// Row 0, the last row, column 0 or the last column.
    pub fn is_border(&self, pos: Position) -> bool {
        pos.row == 0 || pos.col == 0 || pos.row == self.rows - 1 || pos.col == self.columns - 1
    }

    /// Inside the grid and off the border.
    pub fn is_interior(&self, pos: Position) -> bool {
        self.contains(pos) && !self.is_border(pos)
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Out-of-bounds positions count as walls.
    pub fn is_open(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(Cell::Open))
    }

    /// Carves a single cell. Returns false (and leaves the grid untouched)
    /// for positions outside the interior.
    pub fn open_cell(&mut self, pos: Position) -> bool {
        if !self.is_interior(pos) {
            return false;
        }
        self.cells[pos.row][pos.col] = Cell::Open;
        true
    }

    /// Opens the door cell midway between two lattice nodes two cells apart
    /// on the same row or column.
    pub fn open_door(&mut self, from: Position, to: Position) -> bool {
        let same_row = from.row == to.row && from.col.abs_diff(to.col) == 2;
        let same_col = from.col == to.col && from.row.abs_diff(to.row) == 2;
        if !same_row && !same_col {
            return false;
        }
        let door = Position::new((from.row + to.row) / 2, (from.col + to.col) / 2);
        self.open_cell(door)
    }

    /// Read-only row-major view, for renderers and snapshots.
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| Position::new(row, col)))
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| self.is_open(p))
    }

    pub fn open_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|c| c.is_open()).count())
            .sum()
    }

    fn border_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| self.is_border(p))
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
