//! SettingsStore: the one-row CSV file holding [`DailySettings`].
//!
//! Row layout (no header):
//! `work_minutes,break_minutes,daily_goal_minutes,daily_completed_minutes,last_reset`

pub mod record;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::models::DailySettings;

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file with default settings when it does not exist.
    /// Returns `true` if a new file was written. An existing file is never
    /// touched, even if it is malformed.
    pub fn init_if_missing(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        self.write(&DailySettings::default())?;
        info!(path = %self.path.display(), "created settings file with defaults");
        Ok(true)
    }

    /// Load the persisted record.
    ///
    /// Only the first row is meaningful; anything after it is ignored.
    pub fn read(&self) -> AppResult<DailySettings> {
        let bytes = fs::read(&self.path)?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let row = match rdr.records().next() {
            Some(row) => row?,
            None => {
                return Err(AppError::MalformedRecord(format!(
                    "{} contains no settings row",
                    self.path.display()
                )));
            }
        };

        let settings = record::parse_row(&row)?;
        debug!(?settings, path = %self.path.display(), "settings read");
        Ok(settings)
    }

    /// Overwrite the record. The new row goes to a sibling temp file which
    /// is then renamed over the data file, so readers see either the old
    /// row or the new one.
    pub fn write(&self, settings: &DailySettings) -> AppResult<()> {
        let tmp = self.temp_path();

        let written = Self::write_row(&tmp, settings).and_then(|()| {
            fs::rename(&tmp, &self.path)?;
            Ok(())
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        debug!(?settings, path = %self.path.display(), "settings written");
        Ok(())
    }

    fn write_row(path: &Path, settings: &DailySettings) -> AppResult<()> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
        wtr.write_record(record::to_row(settings))?;
        wtr.flush()?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
