//! Terminal Core Module
//!
//! Platform-independent terminal state. This module contains:
//! - Cell representation with its pen attributes
//! - The fixed-size, linearly indexed grid
//! - Cursor state and normalization
//! - Deterministic snapshot generation
//!
//! The core is completely deterministic: given the same sequence of
//! characters, it will always produce the same state.

mod cell;
mod cursor;
mod grid;
mod snapshot;

pub use cell::{Cell, Color, Pen};
pub use cursor::Cursor;
pub use grid::Grid;
pub use snapshot::{CellSnapshot, PenSnapshot, Snapshot};
