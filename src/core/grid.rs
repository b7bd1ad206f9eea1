//! Terminal Grid
//!
//! A fixed-size, row-major array of cells addressed by a linear index
//! (`row * cols + col`).

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// The terminal grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
    cols: usize,
    rows: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); rows * cols],
            cols,
            rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Linear index of `(row, col)`, if it lies on the grid
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Get a reference to a cell
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index_of(row, col).map(|i| &self.cells[i])
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Cells in the linear range, clamped to the grid
    pub fn cells(&self, range: Range<usize>) -> &[Cell] {
        &self.cells[self.clamp(range)]
    }

    /// Reset every cell in the linear range (clamped) to a default blank
    pub fn reset_range(&mut self, range: Range<usize>) {
        let range = self.clamp(range);
        for cell in &mut self.cells[range] {
            cell.reset();
        }
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.cells.len());
        range.start.min(end)..end
    }
}

impl std::ops::Index<usize> for Grid {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl std::ops::IndexMut<usize> for Grid {
    fn index_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }
}
