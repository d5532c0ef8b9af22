//! Crossterm-backed timer screen with guaranteed terminal restoration.

use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::display::{DisplayFactory, Frame, KeyInput, TimerDisplay};
use crate::errors::{AppError, AppResult};

static RAW_MODE_ENABLED: AtomicBool = AtomicBool::new(false);
static ALT_SCREEN_ENABLED: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

const FALLBACK_SIZE: (u16, u16) = (80, 24);

fn term_err(e: io::Error) -> AppError {
    AppError::Terminal(e.to_string())
}

/// RAII guard: raw mode, alternate screen and hidden cursor for as long as
/// it lives. Dropping it (or panicking while it lives) restores the terminal.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn acquire(stdout: &mut impl Write) -> AppResult<Self> {
        install_terminal_panic_hook();
        let guard = TerminalGuard;

        terminal::enable_raw_mode().map_err(term_err)?;
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);

        execute!(stdout, EnterAlternateScreen, Hide).map_err(term_err)?;
        ALT_SCREEN_ENABLED.store(true, Ordering::SeqCst);

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

pub fn restore_terminal() {
    if RAW_MODE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = terminal::disable_raw_mode();
    }
    let mut stdout = io::stdout();
    if ALT_SCREEN_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = execute!(stdout, ResetColor, LeaveAlternateScreen);
    }
    let _ = execute!(stdout, Show);
    let _ = stdout.flush();
}

fn install_terminal_panic_hook() {
    PANIC_HOOK_INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            tracing::error!("panic: {info}");
            previous(info);
        }));
    });
}

pub struct CrosstermDisplay {
    stdout: Stdout,
    accent: Color,
    // Last field: dropped after everything else is released.
    _guard: TerminalGuard,
}

impl CrosstermDisplay {
    pub fn open(accent: Color) -> AppResult<Self> {
        let mut stdout = io::stdout();
        let guard = TerminalGuard::acquire(&mut stdout)?;
        Ok(Self {
            stdout,
            accent,
            _guard: guard,
        })
    }
}

impl TimerDisplay for CrosstermDisplay {
    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or(FALLBACK_SIZE)
    }

    fn draw(&mut self, frame: &Frame) -> AppResult<()> {
        let (cols, rows) = self.size();

        queue!(
            self.stdout,
            SetBackgroundColor(Color::Reset),
            Clear(ClearType::All),
            SetForegroundColor(self.accent)
        )
        .map_err(term_err)?;

        for line in frame.lines.iter().filter(|l| l.row < rows && l.col < cols) {
            let room = usize::from(cols - line.col);
            let text: String = line.text.chars().take(room).collect();
            queue!(self.stdout, MoveTo(line.col, line.row), Print(text)).map_err(term_err)?;
        }

        queue!(self.stdout, ResetColor).map_err(term_err)?;
        self.stdout.flush().map_err(term_err)
    }

    fn poll_key(&mut self, timeout: Duration) -> AppResult<Option<KeyInput>> {
        if !event::poll(timeout).map_err(term_err)? {
            return Ok(None);
        }

        match event::read().map_err(term_err)? {
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Ok(Some(KeyInput::Interrupt))
                }
                KeyCode::Char(c) => Ok(Some(KeyInput::Char(c))),
                _ => Ok(None),
            },
            _ => Ok(None),
        }
    }

    fn fill(&mut self, background: Color) -> AppResult<()> {
        execute!(
            self.stdout,
            SetBackgroundColor(background),
            Clear(ClearType::All)
        )
        .map_err(term_err)
    }
}

/// Opens a fresh [`CrosstermDisplay`] per countdown so the menu prompt runs
/// in the normal (cooked) terminal mode between timers.
pub struct CrosstermDisplayFactory {
    pub accent: Color,
}

impl Default for CrosstermDisplayFactory {
    fn default() -> Self {
        Self {
            accent: Color::Green,
        }
    }
}

impl DisplayFactory for CrosstermDisplayFactory {
    fn open(&mut self) -> AppResult<Box<dyn TimerDisplay + '_>> {
        Ok(Box::new(CrosstermDisplay::open(self.accent)?))
    }
}
