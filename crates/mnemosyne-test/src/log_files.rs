//! Helpers for reading log files back in tests.

use std::path::{Path, PathBuf};

use mnemosyne_core::Category;

/// Reads a file into lines; a missing file reads as no lines.
#[must_use]
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(ToString::to_string)
        .collect()
}

/// Reads the active log file of one category.
#[must_use]
pub fn category_lines(base_directory: &Path, name: &str, category: Category) -> Vec<String> {
    read_lines(&category.log_path(base_directory, name))
}

/// Byte size of one category's active log file (0 when absent).
#[must_use]
pub fn category_size(base_directory: &Path, name: &str, category: Category) -> u64 {
    std::fs::metadata(category.log_path(base_directory, name)).map_or(0, |meta| meta.len())
}

/// Rotated siblings of an active log file, sorted by name (which is age
/// order for the timestamp suffixes).
#[must_use]
pub fn rotated_siblings(active: &Path) -> Vec<PathBuf> {
    let Some(dir) = active.parent() else {
        return Vec::new();
    };
    let Some(name) = active.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Vec::new();
    };
    let prefix = format!("{name}.");

    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut rotated: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(&prefix))
        .map(|entry| entry.path())
        .collect();
    rotated.sort();
    rotated
}
