//! Terminal Executor
//!
//! Ties together the parser and the screen model: `feed` scans the input,
//! applies each action to the grid, cursor and pen, and keeps the cursor
//! on the grid between tokens.

use std::ops::Range;

use tracing::{debug, trace, warn};

use crate::app::TerminalConfig;
use crate::core::{Cell, Color, Cursor, Grid, Pen, Snapshot};
use crate::error::{Error, Result};
use crate::parser::{Action, ControlCode, CsiAction, Parser};

/// A rows×cols character grid driven by an ANSI character stream
#[derive(Debug, Clone)]
pub struct Terminal {
    grid: Grid,
    cursor: Cursor,
    pen: Pen,
}

impl Terminal {
    /// Create a terminal of `rows`×`cols` blank cells with the cursor at the
    /// origin. Zero dimensions are raised to 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows.max(1), cols.max(1)),
            cursor: Cursor::new(),
            pen: Pen::default(),
        }
    }

    pub fn from_config(config: &TerminalConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at a 0-based position
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.cell(row, col)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The pen the next glyph will be written with
    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Glyphs of the cells at linear indices `[from, to)`
    pub fn get_string(&self, from: usize, to: usize) -> String {
        self.grid.cells(from..to).iter().map(|cell| cell.glyph).collect()
    }

    /// Copies of the cells at linear indices `[from, to)`
    pub fn get_tiles(&self, from: usize, to: usize) -> Vec<Cell> {
        self.grid.cells(from..to).to_vec()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.grid, self.cursor, &self.pen)
    }

    /// Process a chunk of terminal output.
    ///
    /// # Errors
    ///
    /// Returns the first parse or dispatch error. Processing stops there;
    /// tokens before the failing one have already been applied and the
    /// cursor is left on the grid.
    pub fn feed(&mut self, input: &str) -> Result<()> {
        let result = self.run(input);
        self.normalize_cursor();
        if let Err(e) = &result {
            warn!(error = %e, "aborting feed");
        }
        result
    }

    /// Process raw bytes, replacing invalid UTF-8 with U+FFFD.
    ///
    /// # Errors
    ///
    /// Same as [`Terminal::feed`].
    pub fn feed_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.feed(&String::from_utf8_lossy(data))
    }

    fn run(&mut self, input: &str) -> Result<()> {
        for action in Parser::new(input) {
            self.normalize_cursor();
            self.apply_action(action?)?;
        }
        Ok(())
    }

    fn normalize_cursor(&mut self) {
        self.cursor.normalize(self.grid.rows(), self.grid.cols());
    }

    /// Apply a single parsed action. The cursor must be on the grid.
    fn apply_action(&mut self, action: Action) -> Result<()> {
        debug_assert!(self.cursor.is_within(self.grid.rows(), self.grid.cols()));
        match action {
            Action::Print(c) => {
                self.print_char(c);
                Ok(())
            }
            Action::Control(code) => {
                self.execute_control(code);
                Ok(())
            }
            Action::Csi(csi) => self.execute_csi(&csi),
        }
    }

    fn print_char(&mut self, c: char) {
        let index = self.cursor.linear_index(self.grid.cols());
        self.grid[index].set(c, self.pen);
        self.cursor.advance();
    }

    fn execute_control(&mut self, code: ControlCode) {
        match code {
            ControlCode::CarriageReturn => self.cursor.carriage_return(),
            ControlCode::Backspace => self.cursor.backspace(),
            ControlCode::LineFeed => self.cursor.linefeed(),
            ControlCode::Null | ControlCode::ShiftIn => {}
        }
    }

    /// Execute a control sequence
    fn execute_csi(&mut self, csi: &CsiAction) -> Result<()> {
        trace!(command = %csi.final_char, params = ?csi.params, "execute");

        match csi.command() {
            'h' => {
                // CUP - Cursor Position
                expect_params(csi, 2)?;
                self.cursor.move_to(csi.param(0, 1), csi.param(1, 1));
            }
            'm' => self.execute_sgr(&csi.params)?,
            'j' => {
                // ED - Erase in Display
                let range = self.erase_display_range(csi)?;
                self.grid.reset_range(range);
            }
            'k' => {
                // EL - Erase in Line
                let range = self.erase_line_range(csi)?;
                self.grid.reset_range(range);
            }
            'a' => self.cursor.move_up(single_param(csi)?),
            'b' => self.cursor.move_down(single_param(csi)?),
            'c' => self.cursor.move_forward(single_param(csi)?),
            'd' => self.cursor.move_backward(single_param(csi)?),
            'r' | 'l' => {
                // Scroll region and mode resets are accepted but not modelled
                debug!(command = %csi.final_char, params = ?csi.params, "ignored");
            }
            _ => return Err(unknown(csi)),
        }
        Ok(())
    }

    /// Execute SGR (Select Graphic Rendition)
    fn execute_sgr(&mut self, params: &[u32]) -> Result<()> {
        for &param in params {
            match param {
                0 => self.pen.reset(),
                1 => self.pen.bold = true,
                7 => self.pen.reverse = true,
                30..=37 => self.pen.fg = color(Color::from_fg_code(param), param)?,
                40..=47 => self.pen.bg = color(Color::from_bg_code(param), param)?,
                _ => return Err(Error::UnknownSgrParameter(param)),
            }
        }
        Ok(())
    }

    fn erase_display_range(&self, csi: &CsiAction) -> Result<Range<usize>> {
        let here = self.cursor.linear_index(self.grid.cols());
        let end = self.grid.len();
        match single_param(csi)? {
            0 => Ok(here..end),
            1 => Ok(0..here + 1),
            2 => Ok(0..end),
            _ => Err(unknown(csi)),
        }
    }

    fn erase_line_range(&self, csi: &CsiAction) -> Result<Range<usize>> {
        let cols = self.grid.cols();
        let here = self.cursor.linear_index(cols);
        let line_start = self.cursor.row * cols;
        let line_end = line_start + cols;
        match single_param(csi)? {
            0 => Ok(here..line_end),
            1 => Ok(line_start..here + 1),
            2 => Ok(line_start..line_end),
            _ => Err(unknown(csi)),
        }
    }
}

/// Too few parameters is an arity error; surplus parameters make an
/// unsupported combination.
fn expect_params(csi: &CsiAction, expected: usize) -> Result<()> {
    match csi.params.len() {
        n if n < expected => Err(Error::InvalidParameterCount {
            command: csi.final_char,
            expected,
            actual: n,
        }),
        n if n > expected => Err(unknown(csi)),
        _ => Ok(()),
    }
}

fn single_param(csi: &CsiAction) -> Result<u32> {
    expect_params(csi, 1)?;
    Ok(csi.param(0, 0))
}

fn color(color: Option<Color>, param: u32) -> Result<Color> {
    color.ok_or(Error::UnknownSgrParameter(param))
}

fn unknown(csi: &CsiAction) -> Error {
    Error::UnknownCommand {
        command: csi.final_char,
        params: csi.params.clone(),
    }
}
