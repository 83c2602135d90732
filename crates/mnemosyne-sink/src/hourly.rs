//! Hourly time-based rotating sink backing the audit categories.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Local, Timelike};
use parking_lot::Mutex;

use crate::error::SinkError;
use crate::rotation::{self, SuffixGranularity};
use crate::sink::Sink;

/// Appends lines to one file and rotates it whenever an append crosses a
/// wall-clock hour boundary, regardless of volume.
///
/// The rotated file carries the suffix of the hour that just closed. A file
/// inherited from an earlier process run is rotated at the first boundary
/// after open, not retroactively.
#[derive(Debug)]
pub struct HourlyRotatingSink {
    path: PathBuf,
    backup_count: usize,
    granularity: SuffixGranularity,
    state: Mutex<OpenPeriod>,
}

#[derive(Debug)]
struct OpenPeriod {
    file: File,
    period_start: DateTime<Local>,
}

fn same_hour(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal() && a.hour() == b.hour()
}

fn open_append(path: &Path, now: DateTime<Local>) -> Result<OpenPeriod, SinkError> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(OpenPeriod {
        file,
        period_start: now,
    })
}

impl HourlyRotatingSink {
    /// Opens an hourly-rotated sink at `path` with the standard
    /// hour-granularity suffix.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Open`] if the directory or file cannot be
    /// created.
    pub fn open(path: impl Into<PathBuf>, backup_count: usize) -> Result<Self, SinkError> {
        Self::open_with_granularity(path, backup_count, SuffixGranularity::Hour)
    }

    /// Opens an hourly-rotated sink with an explicit suffix granularity.
    ///
    /// Rotation still happens on the hour boundary; [`SuffixGranularity::Second`]
    /// only changes how the rotated file is named.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Open`] if the directory or file cannot be
    /// created.
    pub fn open_with_granularity(
        path: impl Into<PathBuf>,
        backup_count: usize,
        granularity: SuffixGranularity,
    ) -> Result<Self, SinkError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SinkError::Open {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let state = open_append(&path, Local::now())?;
        Ok(Self {
            path,
            backup_count,
            granularity,
            state: Mutex::new(state),
        })
    }

    fn rotate(&self, state: &mut OpenPeriod, now: DateTime<Local>) -> Result<(), SinkError> {
        // The rotated file is named for the period that just closed.
        let suffix = rotation::suffix_at(self.granularity, state.period_start);
        let target = rotation::rotation_target(&self.path, &suffix);
        std::fs::rename(&self.path, &target).map_err(|source| SinkError::Rotation {
            path: self.path.clone(),
            source,
        })?;
        *state = open_append(&self.path, now)?;

        if let Err(error) = rotation::prune_rotated(&self.path, self.backup_count) {
            tracing::debug!(path = %self.path.display(), %error, "failed to prune rotated files");
        }
        Ok(())
    }

    fn append_line_at(&self, now: DateTime<Local>, line: &str) -> Result<(), SinkError> {
        let mut state = self.state.lock();
        if !same_hour(state.period_start, now) {
            self.rotate(&mut state, now)?;
        }

        let mut data = String::with_capacity(line.len() + 1);
        data.push_str(line);
        data.push('\n');
        state
            .file
            .write_all(data.as_bytes())
            .map_err(|source| SinkError::Append {
                path: self.path.clone(),
                source,
            })
    }
}

impl Sink for HourlyRotatingSink {
    fn append_line(&self, line: &str) -> Result<(), SinkError> {
        self.append_line_at(Local::now(), line)
    }

    fn flush(&self) -> Result<(), SinkError> {
        self.state
            .lock()
            .file
            .flush()
            .map_err(|source| SinkError::Append {
                path: self.path.clone(),
                source,
            })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 6, hour, minute, 0).unwrap()
    }

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_no_rotation_within_the_hour() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.customer.log");
        let sink = HourlyRotatingSink::open(&path, 0).unwrap();

        {
            let mut state = sink.state.lock();
            state.period_start = at(9, 0);
        }
        sink.append_line_at(at(9, 10), "one").unwrap();
        sink.append_line_at(at(9, 59), "two").unwrap();

        assert_eq!(read_lines(&path), vec!["one", "two"]);
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_rotates_on_hour_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.customer.log");
        let sink = HourlyRotatingSink::open(&path, 0).unwrap();

        {
            let mut state = sink.state.lock();
            state.period_start = at(9, 0);
        }
        sink.append_line_at(at(9, 10), "before").unwrap();
        sink.append_line_at(at(10, 1), "after").unwrap();

        assert_eq!(read_lines(&path), vec!["after"]);
        let rotated = dir.path().join("app.customer.log.2026080609");
        assert_eq!(read_lines(&rotated), vec!["before"]);
    }

    #[test]
    fn test_second_granularity_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.admin.log");
        let sink =
            HourlyRotatingSink::open_with_granularity(&path, 0, SuffixGranularity::Second)
                .unwrap();

        {
            let mut state = sink.state.lock();
            state.period_start = Local.with_ymd_and_hms(2026, 8, 6, 9, 30, 15).unwrap();
        }
        sink.append_line_at(at(10, 0), "entry").unwrap();

        let rotated = dir.path().join("app.admin.log.20260806093015");
        assert!(rotated.exists());
    }

    #[test]
    fn test_day_change_same_hour_value_rotates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.customer.log");
        let sink = HourlyRotatingSink::open(&path, 0).unwrap();

        {
            let mut state = sink.state.lock();
            state.period_start = Local.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap();
        }
        // Same clock hour on the next day must still rotate.
        sink.append_line_at(Local.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap(), "next")
            .unwrap();

        assert!(dir.path().join("app.customer.log.2026080609").exists());
    }
}
