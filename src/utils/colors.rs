/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const FG_RED: &str = "\x1b[31m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const GREY: &str = "\x1b[90m";

/// Goal line colour: grey before any work, yellow while below the goal,
/// reset once it is met.
pub fn color_for_goal(completed: u32, goal: u32) -> &'static str {
    if completed == 0 {
        GREY
    } else if completed < goal {
        FG_YELLOW
    } else {
        RESET
    }
}
