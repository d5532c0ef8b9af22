//! MenuLoop: the interactive top level.
//!
//! Each iteration rolls the daily total over if a new day has started,
//! re-reads the record, renders the menu and dispatches one line of input.

use std::io::{BufRead, Write};

use tracing::debug;

use super::countdown::{CountdownRenderer, TimerRequest};
use super::progress::{DEFAULT_PROGRESS_SEGMENTS, progress_length};
use super::tracker::DailyTotalTracker;
use crate::errors::AppResult;
use crate::models::DailySettings;
use crate::store::SettingsStore;
use crate::ui::display::DisplayFactory;
use crate::ui::menu::{MenuView, Notice, render_menu};

pub const SETTINGS_PLACEHOLDER: &str = "Settings not implemented yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Work,
    Break,
    Settings,
    Continue,
}

impl MenuChoice {
    /// `Continue` is only a valid choice while an interrupted timer exists.
    pub fn parse(input: &str, can_continue: bool) -> Option<Self> {
        match input.trim() {
            "0" => Some(MenuChoice::Exit),
            "1" => Some(MenuChoice::Work),
            "2" => Some(MenuChoice::Break),
            "3" => Some(MenuChoice::Settings),
            "4" if can_continue => Some(MenuChoice::Continue),
            _ => None,
        }
    }
}

/// A timer that was quit early, kept so it can be resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptedTimer {
    pub minutes: u32,
    pub counts_toward_daily_total: bool,
}

/// State carried between menu iterations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub interrupted: Option<InterruptedTimer>,
    pub notice: Option<Notice>,
}

pub fn menu_options(settings: &DailySettings, session: &SessionState) -> Vec<String> {
    let mut options = vec![
        "Exit".to_string(),
        format!("Start {} min work timer", settings.work_minutes),
        format!("Start {} min break timer", settings.break_minutes),
        "Settings".to_string(),
    ];
    if let Some(t) = &session.interrupted {
        options.push(format!("Continue {} min timer", t.minutes));
    }
    options
}

pub struct MenuLoop<'a> {
    store: &'a SettingsStore,
    tracker: DailyTotalTracker<'a>,
    countdown: CountdownRenderer<'a>,
    progress_segments: u32,
    session: SessionState,
}

impl<'a> MenuLoop<'a> {
    pub fn new(
        store: &'a SettingsStore,
        tracker: DailyTotalTracker<'a>,
        countdown: CountdownRenderer<'a>,
    ) -> Self {
        Self {
            store,
            tracker,
            countdown,
            progress_segments: DEFAULT_PROGRESS_SEGMENTS,
            session: SessionState::default(),
        }
    }

    pub fn with_progress_segments(mut self, segments: u32) -> Self {
        self.progress_segments = segments;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Loop until the user picks `0` or input ends.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
        displays: &mut dyn DisplayFactory,
    ) -> AppResult<()> {
        while self.step(&mut input, output, displays)? {}
        Ok(())
    }

    /// One menu iteration. Returns `false` when the loop should end.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
        displays: &mut dyn DisplayFactory,
    ) -> AppResult<bool> {
        self.tracker.check_and_reset_if_new_day()?;
        let settings = self.store.read()?;
        let progress = progress_length(&settings, self.progress_segments)?;

        let options = menu_options(&settings, &self.session);
        let notice = self.session.notice.take();
        render_menu(
            output,
            &MenuView {
                options: &options,
                progress,
                completed_minutes: settings.daily_completed_minutes,
                goal_minutes: settings.daily_goal_minutes,
                notice: notice.as_ref(),
            },
        )?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed, leaving menu");
            return Ok(false);
        }

        let choice = MenuChoice::parse(&line, self.session.interrupted.is_some());
        debug!(input = line.trim(), ?choice, "menu selection");

        match choice {
            Some(MenuChoice::Exit) => return Ok(false),
            Some(MenuChoice::Work) => {
                self.start_timer(displays, settings.work_minutes, progress, true)?;
            }
            Some(MenuChoice::Break) => {
                self.start_timer(displays, settings.break_minutes, progress, false)?;
            }
            Some(MenuChoice::Settings) => {
                self.session.notice = Some(Notice::Warning(SETTINGS_PLACEHOLDER.to_string()));
            }
            Some(MenuChoice::Continue) => {
                if let Some(t) = self.session.interrupted {
                    self.start_timer(displays, t.minutes, progress, t.counts_toward_daily_total)?;
                }
            }
            None => {
                self.session.notice = Some(Notice::Error(format!(
                    "Invalid option '{}'. Choose 0-{}.",
                    line.trim(),
                    options.len() - 1
                )));
            }
        }

        Ok(true)
    }

    fn start_timer(
        &mut self,
        displays: &mut dyn DisplayFactory,
        minutes: u32,
        progress: usize,
        counts_toward_daily_total: bool,
    ) -> AppResult<()> {
        if minutes == 0 {
            self.session.notice = Some(Notice::Error(format!(
                "Cannot start a 0 min timer. Set a length above 0 in {}.",
                self.store.path().display()
            )));
            return Ok(());
        }

        let request = TimerRequest {
            duration_minutes: minutes,
            progress,
            counts_toward_daily_total,
        };

        // The display is dropped (terminal restored) before the menu is
        // printed again.
        let outcome = {
            let mut display = displays.open()?;
            self.countdown.run(display.as_mut(), request)?
        };

        self.session.interrupted = (outcome.remaining_minutes > 0).then_some(InterruptedTimer {
            minutes: outcome.remaining_minutes,
            counts_toward_daily_total,
        });
        Ok(())
    }
}
