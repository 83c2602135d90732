//! Size-based rotating sink backing the leveled categories.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use crate::error::SinkError;
use crate::rotation::{self, SuffixGranularity};
use crate::sink::Sink;

/// Appends lines to one file and rotates it when the next line would push
/// the file past the configured size limit.
///
/// The rotated file is named `<active>.<YYYYMMDDHH>`, with a numeric
/// sequence appended when the same hour rotates more than once. At most
/// `backup_count` rotated files are kept (`0` keeps all of them).
#[derive(Debug)]
pub struct SizeRotatingSink {
    path: PathBuf,
    max_file_size_bytes: u64,
    backup_count: usize,
    state: Mutex<OpenFile>,
}

#[derive(Debug)]
struct OpenFile {
    file: File,
    written: u64,
}

fn open_append(path: &Path) -> Result<OpenFile, SinkError> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let written = file
        .metadata()
        .map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    Ok(OpenFile { file, written })
}

impl SizeRotatingSink {
    /// Opens (creating directories and the file as needed) a size-rotated
    /// sink at `path`.
    ///
    /// An existing file's current size counts toward the limit, so a
    /// process restart does not reset the rotation budget.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Open`] if the directory or file cannot be
    /// created.
    pub fn open(
        path: impl Into<PathBuf>,
        max_file_size_bytes: u64,
        backup_count: usize,
    ) -> Result<Self, SinkError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SinkError::Open {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let state = open_append(&path)?;
        Ok(Self {
            path,
            max_file_size_bytes,
            backup_count,
            state: Mutex::new(state),
        })
    }

    fn rotate(&self, state: &mut OpenFile) -> Result<(), SinkError> {
        let suffix = rotation::suffix_at(SuffixGranularity::Hour, Local::now());
        let target = rotation::rotation_target(&self.path, &suffix);
        std::fs::rename(&self.path, &target).map_err(|source| SinkError::Rotation {
            path: self.path.clone(),
            source,
        })?;
        *state = open_append(&self.path)?;

        if let Err(error) = rotation::prune_rotated(&self.path, self.backup_count) {
            // Retention is best-effort; the new file is already in place.
            tracing::debug!(path = %self.path.display(), %error, "failed to prune rotated files");
        }
        Ok(())
    }
}

impl Sink for SizeRotatingSink {
    fn append_line(&self, line: &str) -> Result<(), SinkError> {
        let mut state = self.state.lock();
        let len = line.len() as u64 + 1;
        if state.written > 0 && state.written + len > self.max_file_size_bytes {
            self.rotate(&mut state)?;
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
            })?;
        state.written += len;
        Ok(())
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
