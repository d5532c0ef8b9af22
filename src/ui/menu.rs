//! Text rendering of the main menu.

use std::io::Write;

use ansi_term::Colour;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use super::font::HEADER;
use super::messages::{error_line, warning_line};
use crate::core::progress::progress_bar;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_goal};
use crate::utils::time::format_minutes;

pub const PROMPT: &str = ">>> ";

/// A message shown once, below the options, on the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Error(String),
}

pub struct MenuView<'a> {
    pub options: &'a [String],
    pub progress: usize,
    pub completed_minutes: u32,
    pub goal_minutes: u32,
    pub notice: Option<&'a Notice>,
}

/// `\t[i] label` per option.
pub fn format_options(options: &[String]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, label)| format!("\t[{i}] {label}\n"))
        .collect()
}

pub fn render_menu<W: Write>(out: &mut W, view: &MenuView<'_>) -> AppResult<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    writeln!(out, "{}", Colour::Green.bold().paint(HEADER))?;
    writeln!(out, "{}", progress_bar(view.progress))?;
    writeln!(
        out,
        "{}Today {} of {}{}",
        color_for_goal(view.completed_minutes, view.goal_minutes),
        format_minutes(view.completed_minutes),
        format_minutes(view.goal_minutes),
        RESET
    )?;
    writeln!(out)?;
    write!(out, "{}", format_options(view.options))?;

    match view.notice {
        Some(Notice::Warning(msg)) => writeln!(out, "\n{}", warning_line(msg))?,
        Some(Notice::Error(msg)) => writeln!(out, "\n{}", error_line(msg))?,
        None => {}
    }

    write!(out, "{PROMPT}")?;
    out.flush()?;
    Ok(())
}
