use chrono::Timelike;
use tracing::info;

use crate::errors::AppResult;
use crate::models::DailySettings;
use crate::store::SettingsStore;
use crate::utils::clock::Clock;
use crate::utils::date::midnight_of;

/// Keeps the running "minutes completed today" total on top of the
/// settings file, zeroing it once per calendar day.
#[derive(Clone, Copy)]
pub struct DailyTotalTracker<'a> {
    store: &'a SettingsStore,
    clock: &'a dyn Clock,
}

impl<'a> DailyTotalTracker<'a> {
    pub fn new(store: &'a SettingsStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Read-modify-write: add `minutes` to today's total and persist.
    /// `0` still rewrites the record unchanged.
    pub fn add_completed(&self, minutes: u32) -> AppResult<DailySettings> {
        let mut settings = self.store.read()?;
        settings.daily_completed_minutes = settings.daily_completed_minutes.saturating_add(minutes);
        self.store.write(&settings)?;

        info!(
            added = minutes,
            total = settings.daily_completed_minutes,
            "daily total updated"
        );
        Ok(settings)
    }

    /// Zero today's total and stamp `last_reset` with the current time.
    /// Timer lengths and the goal are carried through.
    pub fn reset(&self) -> AppResult<DailySettings> {
        let now = self.clock.now();
        let mut settings = self.store.read()?;
        settings.daily_completed_minutes = 0;
        settings.last_reset = Some(now.with_nanosecond(0).unwrap_or(now));
        self.store.write(&settings)?;

        info!(at = %settings.last_reset_str(), "daily total reset");
        Ok(settings)
    }

    /// Reset when the record was last reset before today's local midnight
    /// (or never). Returns whether a reset happened.
    pub fn check_and_reset_if_new_day(&self) -> AppResult<bool> {
        let settings = self.store.read()?;
        let midnight = midnight_of(self.clock.now());

        let stale = match settings.last_reset {
            Some(ts) => ts < midnight,
            None => true,
        };

        if stale {
            self.reset()?;
        }
        Ok(stale)
    }
}
