//! Timestamped plain-text log file
//!
//! The file is named after the local time it was opened at
//! (`log_YYYYMMDD_HHMMSS.txt`) and receives one uncolored line per log call.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::error::{SinkError, SinkResult};

/// Log file name for the given local time
pub fn log_file_name(now: &DateTime<Local>) -> String {
    now.format("log_%Y%m%d_%H%M%S.txt").to_string()
}

/// An open log file
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Create `log_<timestamp>.txt` in `dir` using the current local time
    pub fn create_in(dir: impl AsRef<Path>) -> SinkResult<Self> {
        Self::create(dir.as_ref().join(log_file_name(&Local::now())))
    }

    /// Create (or truncate) the log file at `path`
    pub fn create(path: impl Into<PathBuf>) -> SinkResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| SinkError::open(&path, e))?;
        Ok(Self { file, path })
    }

    /// Path of the open file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line and flush; write errors are dropped
    pub fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.file, "{}", line);
        let _ = self.file.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_log_file_name() {
        let now = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(log_file_name(&now), "log_20240307_090502.txt");
    }

    #[test]
    fn test_create_in_and_write() {
        let dir = tempdir().unwrap();
        let mut sink = FileSink::create_in(dir.path()).unwrap();

        let name = sink.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(name.len(), "log_YYYYMMDD_HHMMSS.txt".len());

        sink.write_line("one");
        sink.write_line("two");
        let content = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_create_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no").join("such").join("dir");
        let err = FileSink::create_in(&missing).unwrap_err();
        match err {
            SinkError::Open { path, .. } => assert!(path.starts_with(&missing)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
