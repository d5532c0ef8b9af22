use std::fmt;

use crate::utils::colors::{BOLD, FG_RED, FG_YELLOW, RESET};

/// Icons
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Warning text as a single coloured line, for writers other than stdout.
pub fn warning_line<T: fmt::Display>(msg: T) -> String {
    format!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, msg, RESET)
}

pub fn error_line<T: fmt::Display>(msg: T) -> String {
    format!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, msg, RESET)
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", warning_line(msg));
}
