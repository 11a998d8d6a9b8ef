//! Append-only line writer with size-based rotation.
//!
//! When the file grows past its limit it is renamed to `<stem>.json.<unix secs>`
//! and a fresh file is started. Only the newest few backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file exceeds 10 MB.
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

const MAX_BACKUP_FILES: usize = 3;

pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened lazily on the first write.
    file: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes, rotating first when needed.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be rotated, opened or written, or when the lock is
    /// poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *guard = Some(file);
        }
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().timestamp();
        let backup = self.file_path.with_extension(format!("json.{timestamp}"));
        if self.file_path.exists() {
            fs::rename(&self.file_path, backup)?;
        }
        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;
        let stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_backup_of(path, stem))
            .collect();

        // newest first
        backups.sort_by_key(|path| std::cmp::Reverse(fs::metadata(path).and_then(|m| m.modified()).ok()));

        for old in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

fn is_backup_of(path: &Path, stem: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_prefix(stem))
        .is_some_and(|rest| rest.starts_with(".json."))
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_one_line_per_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swipecart-otlp.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line(r#"{"a":1}"#).unwrap();
        writer.write_line(r#"{"b":2}"#).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn oversized_file_is_rotated_into_a_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swipecart-otlp.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("first line, long enough").unwrap();
        writer.write_line("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        let backups: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| is_backup_of(&e.path(), "swipecart-otlp"))
            .collect();
        assert_eq!(backups.len(), 1);
    }

    #[test]
    fn backup_matching_requires_the_json_suffix() {
        assert!(is_backup_of(Path::new("/d/swipecart-otlp.json.1700000000"), "swipecart-otlp"));
        assert!(!is_backup_of(Path::new("/d/swipecart-otlp.json"), "swipecart-otlp"));
        assert!(!is_backup_of(Path::new("/d/other.json.1"), "swipecart-otlp"));
    }
}
