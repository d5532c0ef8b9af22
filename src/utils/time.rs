//! Time utilities: whole-second remainders and half-to-even minute rounding.

use chrono::NaiveDateTime;

/// `num / den` rounded to the nearest integer, ties to even
/// (`round(2.5) == 2`, `round(3.5) == 4`). `den` must be non-zero.
pub fn div_round_half_even(num: u64, den: u64) -> u64 {
    let q = num / den;
    let r = num % den;
    match (2 * r).cmp(&den) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => q + (q % 2),
    }
}

/// Whole seconds left until `end`, truncated, never negative.
pub fn remaining_seconds(end: NaiveDateTime, now: NaiveDateTime) -> u64 {
    (end - now).num_seconds().max(0) as u64
}

/// Seconds converted to minutes with `round(seconds / 60)` semantics.
pub fn rounded_minutes(seconds: u64) -> u32 {
    div_round_half_even(seconds, 60).min(u64::from(u32::MAX)) as u32
}

pub fn format_minutes(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}
