//! Note file naming and persistence

use std::fs;
use std::path::{Path, PathBuf};

use bibnote_core::NoteError;

/// Characters rejected in file names on at least one common filesystem
const ILLEGAL_FILENAME_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Strip illegal characters, keep at most `max_chars` characters, trim.
pub fn sanitize_filename(name: &str, max_chars: usize) -> String {
    let kept: String = name
        .chars()
        .filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c))
        .take(max_chars)
        .collect();
    kept.trim().to_string()
}

/// `"<sanitized title> (<key>).md"`
///
/// The key is stripped of illegal characters too (never truncated), so a
/// key like `doi:10.1/x` cannot point outside the output directory.
pub fn note_filename(title: &str, key: &str, max_title_chars: usize) -> String {
    format!(
        "{} ({}).md",
        sanitize_filename(title, max_title_chars),
        sanitize_filename(key, usize::MAX)
    )
}

/// Write `content` to `dir/filename` as UTF-8, replacing any existing file.
pub fn write_note(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, NoteError> {
    let path = dir.join(filename);
    fs::write(&path, content).map_err(|e| NoteError::io(&path, e))?;
    Ok(path)
}

/// Write one note and report the outcome on the log.
///
/// Failures are logged with path and cause and never propagated:
/// returns the written path, or `None` on failure.
pub fn persist_note(
    dir: &Path,
    title: &str,
    key: &str,
    content: &str,
    max_title_chars: usize,
) -> Option<PathBuf> {
    let filename = note_filename(title, key, max_title_chars);
    match write_note(dir, &filename, content) {
        Ok(path) => {
            log::info!("Literature note '{}' created", path.display());
            Some(path)
        }
        Err(e) => {
            log::error!("{e}");
            None
        }
    }
}
