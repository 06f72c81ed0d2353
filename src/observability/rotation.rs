//! Size-rotated, append-only line writer.
//!
//! When the next line would push the file past its size limit, the file is
//! shifted into numbered backups: `spans.jsonl` becomes `spans.jsonl.1`,
//! `.1` becomes `.2` and so on, and the oldest beyond the retention count is
//! dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating writer; the file is opened on first write.
pub struct RotatingWriter {
    file_path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    /// Writer with a 10 MB limit and three backups.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    /// Path of the `n`th backup, 1 being the newest.
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends `line` and a newline, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if rotating, opening or writing the file fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        let current = fs::metadata(&self.file_path).map_or(0, |m| m.len());
        let incoming = line.len() as u64 + 1;
        if current > 0 && current + incoming > self.max_bytes {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(open_append(&self.file_path)?);
        }
        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.file_path, self.backup_path(1))
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_lines_until_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingWriter::with_limits(dir.path().join("spans.jsonl"), 64, 2);
        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();
        assert_eq!(read(&dir.path().join("spans.jsonl")), "one\ntwo\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn rotation_shifts_backups_and_drops_the_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        // each line is 6 bytes with its newline; two fit in 12
        let writer = RotatingWriter::with_limits(path.clone(), 12, 2);
        for line in ["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee", "fffff", "ggggg"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&path), "ggggg\n");
        assert_eq!(read(&writer.backup_path(1)), "eeeee\nfffff\n");
        assert_eq!(read(&writer.backup_path(2)), "ccccc\nddddd\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn oversized_line_is_still_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = RotatingWriter::with_limits(path.clone(), 4, 1);
        writer.write_line("a long line").unwrap();
        assert_eq!(read(&path), "a long line\n");
    }
}
