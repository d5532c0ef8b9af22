use windows::Win32::System::Console::GetConsoleWindow;
use windows::Win32::UI::WindowsAndMessaging::{IsIconic, SW_RESTORE, SetForegroundWindow, ShowWindow};

use super::WindowFocus;
use crate::errors::{AppError, AppResult};

/// Raises the console window hosting this process, restoring it first if
/// it is minimized.
pub struct ConsoleWindowFocus;

impl WindowFocus for ConsoleWindowFocus {
    fn focus(&self) -> AppResult<()> {
        let window = unsafe { GetConsoleWindow() };
        if window.0.is_null() {
            return Err(AppError::Focus("process has no console window".into()));
        }

        if unsafe { IsIconic(window) }.as_bool() {
            // Return value is the previous visibility, not an error code.
            let _ = unsafe { ShowWindow(window, SW_RESTORE) };
        }

        if !unsafe { SetForegroundWindow(window) }.as_bool() {
            return Err(AppError::Focus("SetForegroundWindow was refused".into()));
        }
        Ok(())
    }
}
