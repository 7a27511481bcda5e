//! Double-resolution dungeon raster
//!
//! Odd rows and columns are "step" positions that hold room interior or
//! corridor. Even rows and columns are the walls between them, where
//! perimeter, entrance and door state lives. A grid built for `rows × cols`
//! steps has `n_rows + 1` by `n_cols + 1` cells, with `n_rows = 2·⌊rows/2⌋`.

use ndarray::Array2;

use crate::spatial::cell::{Cell, CellFlags};

/// Inclusive rectangle in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Top row
    pub north: usize,
    /// Bottom row
    pub south: usize,
    /// Left column
    pub west: usize,
    /// Right column
    pub east: usize,
}

impl BoundingBox {
    /// Check if a cell is inside the box
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.north && row <= self.south && col >= self.west && col <= self.east
    }

    /// Check whether two boxes share at least one cell
    pub const fn intersects(&self, other: &Self) -> bool {
        self.north <= other.south
            && other.north <= self.south
            && self.west <= other.east
            && other.west <= self.east
    }
}

/// Cell raster owning all mutation during generation
#[derive(Debug, Clone)]
pub struct DungeonGrid {
    cells: Array2<Cell>,
    n_i: usize,
    n_j: usize,
}

impl DungeonGrid {
    /// Create an empty grid for the given step counts
    pub fn new(row_count: usize, column_count: usize) -> Self {
        let n_i = row_count / 2;
        let n_j = column_count / 2;
        let cells = Array2::from_elem((n_i * 2 + 1, n_j * 2 + 1), Cell::NOTHING);

        Self { cells, n_i, n_j }
    }

    /// Number of step rows
    pub const fn n_i(&self) -> usize {
        self.n_i
    }

    /// Number of step columns
    pub const fn n_j(&self) -> usize {
        self.n_j
    }

    /// Highest cell row index
    pub const fn n_rows(&self) -> usize {
        self.n_i * 2
    }

    /// Highest cell column index
    pub const fn n_cols(&self) -> usize {
        self.n_j * 2
    }

    /// Cell rows in the raster
    pub const fn height(&self) -> usize {
        self.n_rows() + 1
    }

    /// Cell columns in the raster
    pub const fn width(&self) -> usize {
        self.n_cols() + 1
    }

    /// Whether signed coordinates land inside the raster
    pub const fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height() && (col as usize) < self.width()
    }

    /// Cell at signed coordinates
    pub fn get(&self, row: i32, col: i32) -> Option<&Cell> {
        if self.contains(row, col) {
            self.cells.get([row as usize, col as usize])
        } else {
            None
        }
    }

    /// Mutable cell at signed coordinates
    pub fn get_mut(&mut self, row: i32, col: i32) -> Option<&mut Cell> {
        if self.contains(row, col) {
            self.cells.get_mut([row as usize, col as usize])
        } else {
            None
        }
    }

    /// Cell at signed coordinates, `NOTHING` when outside the raster
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        self.get(row, col).copied().unwrap_or(Cell::NOTHING)
    }

    /// Flags at signed coordinates, empty when outside the raster
    pub fn flags(&self, row: i32, col: i32) -> CellFlags {
        self.cell(row, col).flags
    }

    /// Set flags on an in-bounds cell
    pub fn insert(&mut self, row: i32, col: i32, flags: CellFlags) {
        if let Some(cell) = self.get_mut(row, col) {
            cell.flags.insert(flags);
        }
    }

    /// Clear flags on an in-bounds cell
    pub fn remove(&mut self, row: i32, col: i32, flags: CellFlags) {
        if let Some(cell) = self.get_mut(row, col) {
            cell.flags.remove(flags);
        }
    }

    /// Reset an in-bounds cell to `NOTHING`
    pub fn clear(&mut self, row: i32, col: i32) {
        if let Some(cell) = self.get_mut(row, col) {
            *cell = Cell::NOTHING;
        }
    }

    /// Whether the cell is room or corridor
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        self.cell(row, col).is_open_space()
    }

    /// Iterate all cells in row-major order with their coordinates
    pub fn indexed_cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        self.cells.indexed_iter()
    }

    /// Iterate all cells mutably in row-major order
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Cell coordinates of step `(i, j)`
    pub const fn step_cell(i: usize, j: usize) -> (i32, i32) {
        ((i * 2 + 1) as i32, (j * 2 + 1) as i32)
    }
}
