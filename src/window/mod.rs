//! Bringing the terminal that runs the timer back to the foreground.
//! [WindowFocus] is the capability; [default_focus] picks the best
//! implementation for the current desktop and falls back to [NoopFocus].

#[cfg(windows)]
pub mod win;

use std::env;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Contract for raising the host terminal window. Implementations may fail
/// freely; callers treat focus as best effort.
pub trait WindowFocus {
    fn focus(&self) -> AppResult<()>;
}

/// Does nothing. Used headless and in tests.
pub struct NoopFocus;

impl WindowFocus for NoopFocus {
    fn focus(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Raises the window by shelling out to the desktop's own tooling:
/// `xdotool windowactivate $WINDOWID` on X11, `osascript` on macOS.
/// Windows uses `win::ConsoleWindowFocus` instead.
pub struct CommandFocus {
    program: String,
    args: Vec<String>,
}

impl CommandFocus {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build the platform command from environment hints, if any apply.
    pub fn detect() -> Option<Self> {
        if cfg!(target_os = "macos") {
            let app = match env::var("TERM_PROGRAM").ok()?.as_str() {
                "Apple_Terminal" => "Terminal".to_string(),
                "iTerm.app" => "iTerm".to_string(),
                other => other.to_string(),
            };
            return Some(Self::new(
                "osascript",
                vec![
                    "-e".into(),
                    format!("tell application \"{app}\" to activate"),
                ],
            ));
        }

        if cfg!(unix) {
            let window_id = env::var("WINDOWID").ok().filter(|id| !id.trim().is_empty())?;
            return Some(Self::new(
                "xdotool",
                vec!["windowactivate".into(), window_id.trim().to_string()],
            ));
        }

        None
    }
}

impl WindowFocus for CommandFocus {
    fn focus(&self) -> AppResult<()> {
        debug!(program = %self.program, args = ?self.args, "focusing terminal window");

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| AppError::Focus(format!("{}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Focus(format!("{} exited with {}", self.program, status)))
        }
    }
}

/// Best available focus implementation for this process.
pub fn default_focus() -> Box<dyn WindowFocus> {
    cfg_if::cfg_if! {
        if #[cfg(windows)] {
            Box::new(win::ConsoleWindowFocus)
        } else {
            match CommandFocus::detect() {
                Some(cmd) => Box::new(cmd),
                None => {
                    debug!("no window focus support detected");
                    Box::new(NoopFocus)
                }
            }
        }
    }
}
