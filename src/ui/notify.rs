use std::time::Duration;

use crossterm::style::Color;
use tracing::{debug, warn};

use super::display::TimerDisplay;
use crate::errors::AppResult;
use crate::utils::clock::Clock;
use crate::window::WindowFocus;

pub const DEFAULT_FLASHES: u32 = 5;
pub const DEFAULT_FLASH_DELAY: Duration = Duration::from_millis(200);

/// Attention signal at the end of a finished timer: raise the terminal
/// window, then flash the background green/black.
pub struct EndOfTimerNotifier<'a> {
    focus: &'a dyn WindowFocus,
    clock: &'a dyn Clock,
    flashes: u32,
    delay: Duration,
}

impl<'a> EndOfTimerNotifier<'a> {
    pub fn new(focus: &'a dyn WindowFocus, clock: &'a dyn Clock) -> Self {
        Self {
            focus,
            clock,
            flashes: DEFAULT_FLASHES,
            delay: DEFAULT_FLASH_DELAY,
        }
    }

    pub fn with_flashes(mut self, flashes: u32, delay: Duration) -> Self {
        self.flashes = flashes;
        self.delay = delay;
        self
    }

    pub fn notify(&self, display: &mut dyn TimerDisplay) -> AppResult<()> {
        if let Err(e) = self.focus.focus() {
            warn!("could not focus terminal window: {e}");
        }

        debug!(flashes = self.flashes, "flashing screen");
        for _ in 0..self.flashes {
            display.fill(Color::Green)?;
            self.clock.sleep(self.delay);
            display.fill(Color::Black)?;
            self.clock.sleep(self.delay);
        }
        Ok(())
    }
}
