//! Mochi Grid
//!
//! An embeddable terminal grid: feed it a character stream of text mixed
//! with ANSI control sequences and read back cells and the cursor.
//!
//! - `core`: Cells, pen, grid, cursor, snapshots
//! - `parser`: Control sequence scanner
//! - `terminal`: Applies parsed actions to the grid
//! - `app`: Configuration and logging setup for hosts
//!
//! ```
//! use mochi_grid::{Cursor, Terminal};
//!
//! let mut term = Terminal::new(3, 5);
//! term.feed("AB\x1b[1;1HX").unwrap();
//! assert_eq!(term.get_string(0, 2), "XB");
//! assert_eq!(term.cursor(), Cursor::at(0, 1));
//! ```

pub mod app;
pub mod core;
pub mod error;
pub mod parser;
pub mod terminal;

pub use crate::core::{Cell, Color, Cursor, Pen, Snapshot};
pub use crate::error::{Error, Result};
pub use crate::terminal::Terminal;
