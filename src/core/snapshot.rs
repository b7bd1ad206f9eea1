//! Deterministic snapshot generation
//!
//! Snapshots capture the complete terminal state in a serializable format
//! for testing and debugging. Given the same character stream, the terminal
//! must produce identical snapshots.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Pen};
use super::cursor::Cursor;
use super::grid::Grid;

/// A complete snapshot of the terminal state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Screen dimensions
    pub rows: usize,
    pub cols: usize,
    /// Visible grid content (row-major)
    pub grid: Vec<Vec<CellSnapshot>>,
    pub cursor: Cursor,
    /// The pen that the next glyph will be written with
    pub pen: PenSnapshot,
}

/// Snapshot of a single cell, colors stored as their SGR codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub glyph: char,
    pub fg: u32,
    pub bg: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reverse: bool,
}

/// Snapshot of the active pen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenSnapshot {
    pub fg: u32,
    pub bg: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reverse: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        CellSnapshot {
            glyph: cell.glyph,
            fg: cell.fg.fg_code(),
            bg: cell.bg.bg_code(),
            bold: cell.bold,
            reverse: cell.reverse,
        }
    }
}

impl From<&Pen> for PenSnapshot {
    fn from(pen: &Pen) -> Self {
        PenSnapshot {
            fg: pen.fg.fg_code(),
            bg: pen.bg.bg_code(),
            bold: pen.bold,
            reverse: pen.reverse,
        }
    }
}

impl Snapshot {
    /// Capture grid, cursor and pen
    pub fn capture(grid: &Grid, cursor: Cursor, pen: &Pen) -> Self {
        let grid_rows = (0..grid.rows())
            .filter_map(|row| grid.row(row))
            .map(|cells| cells.iter().map(CellSnapshot::from).collect())
            .collect();

        Snapshot {
            rows: grid.rows(),
            cols: grid.cols(),
            grid: grid_rows,
            cursor,
            pen: PenSnapshot::from(pen),
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get a simple text representation of the screen (for debugging)
    pub fn to_text(&self) -> String {
        let mut result = String::new();

        for row in &self.grid {
            result.extend(row.iter().map(|cell| cell.glyph));
            // Trim trailing spaces and add newline
            while result.ends_with(' ') {
                result.pop();
            }
            result.push('\n');
        }

        // Remove trailing empty lines
        while result.ends_with("\n\n") {
            result.pop();
        }

        result
    }

    /// Compare dimensions and cell contents, ignoring cursor and pen
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.grid == other.grid
    }
}
