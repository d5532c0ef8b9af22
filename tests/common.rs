#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use crossterm::style::Color;
use rpomodoro::errors::{AppError, AppResult};
use rpomodoro::models::DailySettings;
use rpomodoro::store::SettingsStore;
use rpomodoro::ui::display::{DisplayFactory, Frame, KeyInput, TimerDisplay};
use rpomodoro::window::WindowFocus;
use std::cell::Cell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

/// Binary under test, with HOME pointed at `home` so config and logs stay
/// inside the temp dir.
pub fn rpo(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rpomodoro");
    cmd.env("HOME", home).env_remove("RUST_LOG").env_remove("WINDOWID");
    cmd
}

pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .expect("valid test timestamp")
}

/// Temp dir + store pointing at `<tmp>/data.csv` (file not created yet).
pub fn temp_store() -> (TempDir, SettingsStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SettingsStore::new(dir.path().join("data.csv"));
    (dir, store)
}

/// Temp store pre-populated with `settings`.
pub fn store_with(settings: &DailySettings) -> (TempDir, SettingsStore) {
    let (dir, store) = temp_store();
    store.write(settings).expect("seed settings");
    (dir, store)
}

pub fn write_raw(store: &SettingsStore, content: &str) {
    fs::write(store.path(), content).expect("write raw record");
}

pub fn settings(work: u32, brk: u32, goal: u32, done: u32, last_reset: Option<NaiveDateTime>) -> DailySettings {
    DailySettings {
        work_minutes: work,
        break_minutes: brk,
        daily_goal_minutes: goal,
        daily_completed_minutes: done,
        last_reset,
    }
}

/// In-memory timer screen. Keys are handed out one per poll from `keys`;
/// once empty every poll times out.
pub struct ScriptedDisplay {
    pub size: (u16, u16),
    pub keys: VecDeque<Option<KeyInput>>,
    pub frames: Vec<Frame>,
    pub fills: Vec<Color>,
    pub polls: usize,
}

impl Default for ScriptedDisplay {
    fn default() -> Self {
        Self {
            size: (80, 24),
            keys: VecDeque::new(),
            frames: Vec::new(),
            fills: Vec::new(),
            polls: 0,
        }
    }
}

impl ScriptedDisplay {
    /// Press `key` on poll number `poll` (0-based), nothing before.
    pub fn key_on_poll(poll: usize, key: KeyInput) -> Self {
        let mut keys: VecDeque<Option<KeyInput>> = std::iter::repeat_n(None, poll).collect();
        keys.push_back(Some(key));
        Self {
            keys,
            ..Self::default()
        }
    }
}

impl TimerDisplay for ScriptedDisplay {
    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn draw(&mut self, frame: &Frame) -> AppResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn poll_key(&mut self, _timeout: Duration) -> AppResult<Option<KeyInput>> {
        self.polls += 1;
        Ok(self.keys.pop_front().flatten())
    }

    fn fill(&mut self, background: Color) -> AppResult<()> {
        self.fills.push(background);
        Ok(())
    }
}

impl TimerDisplay for &mut ScriptedDisplay {
    fn size(&self) -> (u16, u16) {
        (**self).size()
    }

    fn draw(&mut self, frame: &Frame) -> AppResult<()> {
        (**self).draw(frame)
    }

    fn poll_key(&mut self, timeout: Duration) -> AppResult<Option<KeyInput>> {
        (**self).poll_key(timeout)
    }

    fn fill(&mut self, background: Color) -> AppResult<()> {
        (**self).fill(background)
    }
}

/// Hands out queued displays, one per countdown.
#[derive(Default)]
pub struct ScriptedFactory {
    pub queued: VecDeque<ScriptedDisplay>,
    pub used: Vec<ScriptedDisplay>,
}

impl ScriptedFactory {
    pub fn with(displays: Vec<ScriptedDisplay>) -> Self {
        Self {
            queued: displays.into(),
            used: Vec::new(),
        }
    }

    pub fn opened(&self) -> usize {
        self.used.len()
    }
}

impl DisplayFactory for ScriptedFactory {
    fn open(&mut self) -> AppResult<Box<dyn TimerDisplay + '_>> {
        let display = self.queued.pop_front().unwrap_or_default();
        self.used.push(display);
        let last = self.used.last_mut().expect("just pushed");
        Ok(Box::new(last))
    }
}

/// Counts focus requests and optionally fails them.
#[derive(Default)]
pub struct RecordingFocus {
    pub calls: Cell<usize>,
    pub fail: bool,
}

impl RecordingFocus {
    pub fn failing() -> Self {
        Self {
            calls: Cell::new(0),
            fail: true,
        }
    }
}

impl WindowFocus for RecordingFocus {
    fn focus(&self) -> AppResult<()> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            Err(AppError::Focus("no window manager".into()))
        } else {
            Ok(())
        }
    }
}
