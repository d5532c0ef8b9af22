use crate::errors::{AppError, AppResult};
use crate::models::DailySettings;
use crate::utils::time::div_round_half_even;

/// Bar length when the daily goal is exactly met.
pub const DEFAULT_PROGRESS_SEGMENTS: u32 = 48;

/// Longest bar ever drawn; no terminal is wider than this.
pub const MAX_PROGRESS_LENGTH: usize = u16::MAX as usize;

/// `round(completed * segments / goal)`, ties to even. Going past the goal
/// draws more than `segments` blocks, up to [`MAX_PROGRESS_LENGTH`].
pub fn progress_length(settings: &DailySettings, segments: u32) -> AppResult<usize> {
    if settings.daily_goal_minutes == 0 {
        return Err(AppError::ZeroDailyGoal);
    }

    let scaled = u64::from(settings.daily_completed_minutes) * u64::from(segments);
    let len = div_round_half_even(scaled, u64::from(settings.daily_goal_minutes));
    Ok(usize::try_from(len).map_or(MAX_PROGRESS_LENGTH, |l| l.min(MAX_PROGRESS_LENGTH)))
}

pub fn progress_bar(length: usize) -> String {
    "█".repeat(length.min(MAX_PROGRESS_LENGTH))
}
