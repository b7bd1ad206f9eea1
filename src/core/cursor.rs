//! Cursor state management
//!
//! The cursor may leave the grid while a single command executes (a
//! printed glyph in the last column, a forward move past the margin, a
//! linefeed on the last row). `normalize` brings it back before the next
//! token is processed.

use serde::{Deserialize, Serialize};

/// Cursor position (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at the home position
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move to a 1-based position. Zero floors at the first row/column.
    pub fn move_to(&mut self, row: u32, col: u32) {
        self.row = to_usize(row).saturating_sub(1);
        self.col = to_usize(col).saturating_sub(1);
    }

    pub fn move_up(&mut self, n: u32) {
        self.row = self.row.saturating_sub(to_usize(n));
    }

    pub fn move_down(&mut self, n: u32) {
        self.row = self.row.saturating_add(to_usize(n));
    }

    pub fn move_forward(&mut self, n: u32) {
        self.col = self.col.saturating_add(to_usize(n));
    }

    pub fn move_backward(&mut self, n: u32) {
        self.col = self.col.saturating_sub(to_usize(n));
    }

    /// Carriage return - move to column 0
    pub fn carriage_return(&mut self) {
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn linefeed(&mut self) {
        self.row = self.row.saturating_add(1);
    }

    /// Advance past a freshly written glyph
    pub fn advance(&mut self) {
        self.col = self.col.saturating_add(1);
    }

    /// Wrap column overflow onto following rows, then pin the row to the
    /// last line. Content is never scrolled.
    pub fn normalize(&mut self, rows: usize, cols: usize) {
        if self.col >= cols {
            self.row = self.row.saturating_add(self.col / cols);
            self.col %= cols;
        }
        if self.row >= rows {
            self.row = rows - 1;
        }
    }

    /// Check the position against grid bounds
    pub fn is_within(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Linear index into a grid with `cols` columns
    pub fn linear_index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

fn to_usize(n: u32) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}
