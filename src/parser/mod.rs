//! Terminal escape sequence parser
//!
//! Converts a character stream into terminal actions: printable glyphs,
//! cursor-only control characters, and control sequences with their
//! parameters already defaulted.

mod actions;
mod sequence;

pub use actions::{default_params, Action, ControlCode, CsiAction};
pub use sequence::{parse_sequence, Parser, ESC};
