use csv::StringRecord;

use crate::errors::{AppError, AppResult};
use crate::models::DailySettings;
use crate::utils::date::parse_reset_timestamp;

const INTEGER_FIELDS: [&str; 4] = [
    "work_minutes",
    "break_minutes",
    "daily_goal_minutes",
    "daily_completed_minutes",
];

/// Decode one CSV row. The fifth column is optional; an empty or
/// unparseable timestamp is read as "never reset".
pub fn parse_row(row: &StringRecord) -> AppResult<DailySettings> {
    if row.len() < INTEGER_FIELDS.len() {
        return Err(AppError::MalformedRecord(format!(
            "expected at least {} fields, found {}",
            INTEGER_FIELDS.len(),
            row.len()
        )));
    }

    let mut values = [0u32; 4];
    for (i, name) in INTEGER_FIELDS.iter().enumerate() {
        let raw = row.get(i).unwrap_or_default().trim();
        values[i] = raw.parse::<u32>().map_err(|_| {
            AppError::MalformedRecord(format!(
                "{name} must be a non-negative integer, found '{raw}'"
            ))
        })?;
    }

    let [work_minutes, break_minutes, daily_goal_minutes, daily_completed_minutes] = values;

    Ok(DailySettings {
        work_minutes,
        break_minutes,
        daily_goal_minutes,
        daily_completed_minutes,
        last_reset: row.get(4).and_then(parse_reset_timestamp),
    })
}

pub fn to_row(settings: &DailySettings) -> [String; 5] {
    [
        settings.work_minutes.to_string(),
        settings.break_minutes.to_string(),
        settings.daily_goal_minutes.to_string(),
        settings.daily_completed_minutes.to_string(),
        settings.last_reset_str(),
    ]
}
