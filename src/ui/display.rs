use std::time::Duration;

use crossterm::style::Color;

use crate::errors::AppResult;

/// One positioned run of text on the timer screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub row: u16,
    pub col: u16,
    pub text: String,
}

/// A full countdown screen, drawn in the accent colour on a cleared screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<FrameLine>,
}

impl Frame {
    pub fn push(&mut self, row: u16, col: u16, text: impl Into<String>) {
        self.lines.push(FrameLine {
            row,
            col,
            text: text.into(),
        });
    }

    /// Text found at the given row, concatenated in column order.
    pub fn row_text(&self, row: u16) -> String {
        let mut parts: Vec<&FrameLine> = self.lines.iter().filter(|l| l.row == row).collect();
        parts.sort_by_key(|l| l.col);
        parts.iter().map(|l| l.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    /// Ctrl+C while the terminal is in raw mode.
    Interrupt,
}

/// The screen a countdown draws on.
pub trait TimerDisplay {
    /// `(columns, rows)`
    fn size(&self) -> (u16, u16);

    fn draw(&mut self, frame: &Frame) -> AppResult<()>;

    /// Wait at most `timeout` for a key press.
    fn poll_key(&mut self, timeout: Duration) -> AppResult<Option<KeyInput>>;

    /// Clear the whole screen to a solid background colour.
    fn fill(&mut self, background: Color) -> AppResult<()>;
}

/// Opens a display for the duration of one countdown. Dropping the returned
/// display must hand the terminal back in the state it was found.
pub trait DisplayFactory {
    fn open(&mut self) -> AppResult<Box<dyn TimerDisplay + '_>>;
}
