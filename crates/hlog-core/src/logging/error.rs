//! Log sink error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening the log file
#[derive(Error, Debug)]
pub enum SinkError {
    /// The log file could not be created
    #[error("Failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File logging is turned off in the configuration
    #[error("File logging is disabled")]
    Disabled,

    /// A log file is already open, so a new configuration can't apply
    #[error("Log file already open at {}", path.display())]
    AlreadyOpen { path: PathBuf },
}

impl SinkError {
    /// Create an open error
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

pub type SinkResult<T> = Result<T, SinkError>;
