//! CountdownRenderer: the real-time timer screen.
//!
//! Remaining time is always recomputed as `end_time - now` from the clock,
//! never by counting ticks. Above one minute the two big digits show
//! minutes, below it they switch to seconds.

use std::time::Duration;

use chrono::TimeDelta;
use tracing::info;

use super::progress::progress_bar;
use super::tracker::DailyTotalTracker;
use crate::errors::{AppError, AppResult};
use crate::ui::display::{Frame, KeyInput, TimerDisplay};
use crate::ui::font::{BlockFont, HEADER};
use crate::ui::notify::EndOfTimerNotifier;
use crate::utils::clock::Clock;
use crate::utils::time::{remaining_seconds, rounded_minutes};

pub const DEFAULT_TICK: Duration = Duration::from_millis(100);
pub const DEFAULT_QUIT_KEY: char = 'q';

/// Row of the progress bar, just below the banner.
const PROGRESS_ROW: u16 = 7;
/// Gap between the two glyphs.
const GLYPH_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub duration_minutes: u32,
    /// Progress bar length to draw.
    pub progress: usize,
    pub counts_toward_daily_total: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerOutcome {
    /// `duration - round(remaining / 60)`
    pub elapsed_minutes: u32,
    /// `round(remaining / 60)`; non-zero means the timer can be resumed.
    pub remaining_minutes: u32,
    pub quit: bool,
    /// Remaining time rounded to zero minutes; the end signal was shown.
    pub finished: bool,
}

/// The two big digits for a remaining time: `MM` at 60 s and above
/// (clamped to 99), `SS` below.
pub fn display_digits(remaining_seconds: u64) -> (u8, u8) {
    let value = if remaining_seconds >= 60 {
        (remaining_seconds / 60).min(99)
    } else {
        remaining_seconds
    };
    ((value / 10) as u8, (value % 10) as u8)
}

pub struct CountdownRenderer<'a> {
    font: &'a BlockFont,
    tick: Duration,
    quit_key: char,
    clock: &'a dyn Clock,
    tracker: DailyTotalTracker<'a>,
    notifier: EndOfTimerNotifier<'a>,
}

impl<'a> CountdownRenderer<'a> {
    pub fn new(
        font: &'a BlockFont,
        clock: &'a dyn Clock,
        tracker: DailyTotalTracker<'a>,
        notifier: EndOfTimerNotifier<'a>,
    ) -> Self {
        Self {
            font,
            tick: DEFAULT_TICK,
            quit_key: DEFAULT_QUIT_KEY,
            clock,
            tracker,
            notifier,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_quit_key(mut self, key: char) -> Self {
        self.quit_key = key;
        self
    }

    /// Run one countdown to expiry or until the quit key is pressed.
    pub fn run(&self, display: &mut dyn TimerDisplay, req: TimerRequest) -> AppResult<TimerOutcome> {
        if req.duration_minutes == 0 {
            return Err(AppError::InvalidDuration(req.duration_minutes));
        }

        let end_time = self.clock.now() + TimeDelta::minutes(i64::from(req.duration_minutes));
        info!(
            minutes = req.duration_minutes,
            counted = req.counts_toward_daily_total,
            "timer started"
        );

        let mut quit = false;
        loop {
            let now = self.clock.now();
            if now >= end_time {
                break;
            }

            let (d1, d2) = display_digits(remaining_seconds(end_time, now));
            let (cols, rows) = display.size();
            display.draw(&self.compose(cols, rows, req.progress, d1, d2))?;

            if let Some(key) = display.poll_key(self.tick)?
                && self.is_quit(key)
            {
                quit = true;
                break;
            }

            self.clock.sleep(self.tick);
        }

        let remaining = remaining_seconds(end_time, self.clock.now());
        let remaining_minutes = rounded_minutes(remaining);
        let elapsed_minutes = req.duration_minutes.saturating_sub(remaining_minutes);

        info!(elapsed_minutes, remaining_seconds = remaining, quit, "timer stopped");

        if req.counts_toward_daily_total {
            self.tracker.add_completed(elapsed_minutes)?;
        }

        let finished = remaining_minutes == 0;
        if finished {
            self.notifier.notify(display)?;
        }

        Ok(TimerOutcome {
            elapsed_minutes,
            remaining_minutes,
            quit,
            finished,
        })
    }

    fn is_quit(&self, key: KeyInput) -> bool {
        match key {
            KeyInput::Interrupt => true,
            KeyInput::Char(c) => c == self.quit_key,
        }
    }

    /// Lay out one screen: banner at the top, progress bar on row 7, the two
    /// glyphs around the centre.
    pub fn compose(&self, cols: u16, rows: u16, progress: usize, d1: u8, d2: u8) -> Frame {
        let mut frame = Frame::default();

        for (i, line) in HEADER.lines().enumerate() {
            if !line.is_empty() {
                frame.push(i as u16, 0, line);
            }
        }
        frame.push(PROGRESS_ROW, 0, progress_bar(progress));

        let top = (rows / 2).saturating_sub(3);
        let left = (cols / 2).saturating_sub(8);
        let second = left.saturating_add((self.font.width() + GLYPH_GAP.len()) as u16);

        let first_glyph = self.font.glyph(d1);
        let second_glyph = self.font.glyph(d2);
        for i in 0..self.font.height() {
            let row = top.saturating_add(i as u16);
            frame.push(row, left, format!("{}{GLYPH_GAP}", first_glyph[i]));
            frame.push(row, second, format!("{}{GLYPH_GAP}", second_glyph[i]));
        }

        frame
    }
}
