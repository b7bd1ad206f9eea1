//! Terminal Cell
//!
//! Represents a single cell in the terminal grid, containing a glyph
//! and the pen attributes it was written with.

use serde::{Deserialize, Serialize};

/// A single cell in the terminal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The glyph shown in this cell
    pub glyph: char,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    pub bold: bool,
    pub reverse: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: Color::DEFAULT_FG,
            bg: Color::DEFAULT_BG,
            bold: false,
            reverse: false,
        }
    }
}

impl Cell {
    /// Create a cell holding `glyph` drawn with `pen`
    pub fn with_pen(glyph: char, pen: Pen) -> Self {
        Self {
            glyph,
            fg: pen.fg,
            bg: pen.bg,
            bold: pen.bold,
            reverse: pen.reverse,
        }
    }

    /// Overwrite glyph and attributes in place
    pub fn set(&mut self, glyph: char, pen: Pen) {
        *self = Self::with_pen(glyph, pen);
    }

    /// Reset the cell to a default blank
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The attributes of this cell as a pen
    pub fn pen(&self) -> Pen {
        Pen {
            fg: self.fg,
            bg: self.bg,
            bold: self.bold,
            reverse: self.reverse,
        }
    }

    /// Check if this cell is indistinguishable from a freshly cleared one
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// The eight ANSI colors addressable through SGR 30-37 / 40-47
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const DEFAULT_FG: Color = Color::White;
    pub const DEFAULT_BG: Color = Color::Black;

    const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Palette index 0-7
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Color for a palette index, if it is one of the eight
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Decode an SGR foreground code (30-37)
    pub fn from_fg_code(code: u32) -> Option<Self> {
        code.checked_sub(30)
            .and_then(|i| u8::try_from(i).ok())
            .and_then(Self::from_index)
    }

    /// Decode an SGR background code (40-47)
    pub fn from_bg_code(code: u32) -> Option<Self> {
        code.checked_sub(40)
            .and_then(|i| u8::try_from(i).ok())
            .and_then(Self::from_index)
    }

    /// SGR code selecting this color as foreground
    pub fn fg_code(self) -> u32 {
        30 + u32::from(self.index())
    }

    /// SGR code selecting this color as background
    pub fn bg_code(self) -> u32 {
        40 + u32::from(self.index())
    }
}

/// The active graphic rendition applied to newly written cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pen {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub reverse: bool,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            fg: Color::DEFAULT_FG,
            bg: Color::DEFAULT_BG,
            bold: false,
            reverse: false,
        }
    }
}

impl Pen {
    /// SGR 0
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
