//! Rotation naming and retention shared by both sink kinds.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Timestamp granularity used in rotated-file suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixGranularity {
    /// `%Y%m%d%H` - the standard suffix.
    Hour,
    /// `%Y%m%d%H%M%S` - alternate variant retained for compatibility with
    /// deployments that post-process rotated names at second granularity.
    Second,
}

impl SuffixGranularity {
    /// The strftime pattern for this granularity.
    #[must_use]
    pub const fn strftime(self) -> &'static str {
        match self {
            Self::Hour => "%Y%m%d%H",
            Self::Second => "%Y%m%d%H%M%S",
        }
    }
}

/// Formats the rotation suffix for the period starting at `at`.
pub(crate) fn suffix_at(granularity: SuffixGranularity, at: DateTime<Local>) -> String {
    at.format(granularity.strftime()).to_string()
}

/// Picks the rename target `<active>.<suffix>`, appending a numeric
/// sequence (`.1`, `.2`, ...) when a file of that name already exists.
///
/// The hour-granular suffix makes two rotations within the same hour
/// collide by name; the sequence number keeps them distinct.
pub(crate) fn rotation_target(active: &Path, suffix: &str) -> PathBuf {
    let name = active
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());

    let candidate = active.with_file_name(format!("{name}.{suffix}"));
    if !candidate.exists() {
        return candidate;
    }

    let mut seq: u32 = 1;
    loop {
        let candidate = active.with_file_name(format!("{name}.{suffix}.{seq}"));
        if !candidate.exists() {
            return candidate;
        }
        seq += 1;
    }
}

/// Deletes the oldest rotated siblings of `active` beyond `backup_count`.
///
/// Rotated names order chronologically under a plain string sort (fixed
/// width timestamp, sequence numbers after their base name), so the sort
/// order is the age order. A `backup_count` of zero retains everything.
pub(crate) fn prune_rotated(active: &Path, backup_count: usize) -> std::io::Result<()> {
    if backup_count == 0 {
        return Ok(());
    }

    let Some(dir) = active.parent() else {
        return Ok(());
    };
    let Some(name) = active.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Ok(());
    };
    let prefix = format!("{name}.");

    let mut rotated: Vec<(String, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with(&prefix) {
            rotated.push((file_name, entry.path()));
        }
    }

    if rotated.len() <= backup_count {
        return Ok(());
    }

    rotated.sort();
    let excess = rotated.len() - backup_count;
    for (_, path) in rotated.into_iter().take(excess) {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
