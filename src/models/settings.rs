use chrono::NaiveDateTime;

/// Format used to persist `last_reset` (ISO 8601 local time, second precision).
pub const RESET_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_DAILY_GOAL_MINUTES: u32 = 360;

/// The single persisted record: timer lengths, the daily goal and the
/// running total of minutes completed today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySettings {
    pub work_minutes: u32,
    pub break_minutes: u32,
    pub daily_goal_minutes: u32,
    pub daily_completed_minutes: u32,
    /// `None` means "never reset" (absent or unparseable on disk).
    pub last_reset: Option<NaiveDateTime>,
}

impl Default for DailySettings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            daily_goal_minutes: DEFAULT_DAILY_GOAL_MINUTES,
            daily_completed_minutes: 0,
            last_reset: None,
        }
    }
}

impl DailySettings {
    /// Render `last_reset` the way it is stored: ISO timestamp or empty.
    pub fn last_reset_str(&self) -> String {
        self.last_reset
            .map(|ts| ts.format(RESET_TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default()
    }
}
